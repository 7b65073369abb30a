//! Service status codes reported in the `code` field of every response.
//!
//! The set is closed: an unrecognised tag is a parse failure rather than a
//! silent default.
//!
//! # Examples
//! ```
//! use osrm_core::ServiceStatus;
//!
//! assert_eq!("NoSegment".parse::<ServiceStatus>()?, ServiceStatus::NoSegment);
//! assert!("Okay".parse::<ServiceStatus>().is_err());
//! # Ok::<(), osrm_core::ModelError>(())
//! ```

use crate::error::ModelError;

/// Result status of an OSRM service call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceStatus {
    /// Request could be processed as expected.
    Ok,
    /// URL string is invalid.
    InvalidUrl,
    /// Service name is invalid.
    InvalidService,
    /// Version is not found.
    InvalidVersion,
    /// Options are invalid.
    InvalidOptions,
    /// The query string is syntactically malformed.
    InvalidQuery,
    /// The successfully parsed query parameters are invalid.
    InvalidValue,
    /// One of the input coordinates could not snap to a street segment.
    NoSegment,
    /// Request size violates one of the service size restrictions.
    TooBig,
    /// No route was found between the coordinates.
    NoRoute,
    /// No table could be computed.
    NoTable,
    /// No trace could be matched.
    NoMatch,
    /// No trip could be computed.
    NoTrips,
    /// The requested feature is not supported by the server.
    NotImplemented,
}

impl ServiceStatus {
    /// Return the wire tag for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "Ok",
            Self::InvalidUrl => "InvalidUrl",
            Self::InvalidService => "InvalidService",
            Self::InvalidVersion => "InvalidVersion",
            Self::InvalidOptions => "InvalidOptions",
            Self::InvalidQuery => "InvalidQuery",
            Self::InvalidValue => "InvalidValue",
            Self::NoSegment => "NoSegment",
            Self::TooBig => "TooBig",
            Self::NoRoute => "NoRoute",
            Self::NoTable => "NoTable",
            Self::NoMatch => "NoMatch",
            Self::NoTrips => "NoTrips",
            Self::NotImplemented => "NotImplemented",
        }
    }

    /// Whether the request was processed successfully.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ServiceStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ok" => Ok(Self::Ok),
            "InvalidUrl" => Ok(Self::InvalidUrl),
            "InvalidService" => Ok(Self::InvalidService),
            "InvalidVersion" => Ok(Self::InvalidVersion),
            "InvalidOptions" => Ok(Self::InvalidOptions),
            "InvalidQuery" => Ok(Self::InvalidQuery),
            "InvalidValue" => Ok(Self::InvalidValue),
            "NoSegment" => Ok(Self::NoSegment),
            "TooBig" => Ok(Self::TooBig),
            "NoRoute" => Ok(Self::NoRoute),
            "NoTable" => Ok(Self::NoTable),
            "NoMatch" => Ok(Self::NoMatch),
            "NoTrips" => Ok(Self::NoTrips),
            "NotImplemented" => Ok(Self::NotImplemented),
            _ => Err(ModelError::UnknownStatus {
                value: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case(ServiceStatus::Ok)]
    #[case(ServiceStatus::InvalidUrl)]
    #[case(ServiceStatus::InvalidService)]
    #[case(ServiceStatus::InvalidVersion)]
    #[case(ServiceStatus::InvalidOptions)]
    #[case(ServiceStatus::InvalidQuery)]
    #[case(ServiceStatus::InvalidValue)]
    #[case(ServiceStatus::NoSegment)]
    #[case(ServiceStatus::TooBig)]
    fn parses_its_own_tag(#[case] status: ServiceStatus) {
        assert_eq!(ServiceStatus::from_str(status.as_str()), Ok(status));
    }

    #[rstest]
    #[case("ok")]
    #[case("OK")]
    #[case("")]
    #[case("Unknown")]
    fn rejects_unknown_tags(#[case] raw: &str) {
        let err = ServiceStatus::from_str(raw).expect_err("tag should be rejected");
        assert_eq!(
            err,
            ModelError::UnknownStatus {
                value: raw.to_owned()
            }
        );
    }

    #[rstest]
    fn only_ok_is_ok() {
        assert!(ServiceStatus::Ok.is_ok());
        assert!(!ServiceStatus::NoSegment.is_ok());
    }
}
