//! Typed field extraction over untyped JSON objects.
//!
//! Each entity constructor wraps its own JSON level in a [`Fields`] reader
//! that knows the entity name, so failures identify both the entity and the
//! offending key. Keys the entity does not ask for are ignored.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ModelError;

/// Construct an entity from its untyped JSON representation.
///
/// # Examples
/// ```
/// use osrm_core::{FromJson, Lane};
///
/// let value = serde_json::json!({ "indications": ["left"], "valid": true });
/// let lane = Lane::from_json(&value)?;
/// assert_eq!(lane.indications, vec!["left".to_owned()]);
/// # Ok::<(), osrm_core::ModelError>(())
/// ```
pub trait FromJson: Sized {
    /// Entity name used in error reports.
    const ENTITY: &'static str;

    /// Build the entity, recursively constructing nested entities.
    fn from_json(value: &Value) -> Result<Self, ModelError>;
}

/// Read-only view over one JSON object level.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a> {
    entity: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Wrap `value`, which must be an object, on behalf of entity `T`.
    pub(crate) fn of<T: FromJson>(value: &'a Value) -> Result<Self, ModelError> {
        value
            .as_object()
            .map(|map| Self {
                entity: T::ENTITY,
                map,
            })
            .ok_or(ModelError::NotAnObject { entity: T::ENTITY })
    }

    /// Decode a required scalar or leaf value.
    pub(crate) fn required<T: DeserializeOwned>(&self, field: &'static str) -> Result<T, ModelError> {
        let value = self.present(field).ok_or_else(|| self.missing(field))?;
        self.decode(field, value)
    }

    /// Decode an optional scalar or leaf value; absent and `null` map to `None`.
    pub(crate) fn optional<T: DeserializeOwned>(
        &self,
        field: &'static str,
    ) -> Result<Option<T>, ModelError> {
        self.present(field)
            .map(|value| self.decode(field, value))
            .transpose()
    }

    /// Recursively construct a required nested entity.
    pub(crate) fn nested<T: FromJson>(&self, field: &'static str) -> Result<T, ModelError> {
        let value = self.present(field).ok_or_else(|| self.missing(field))?;
        T::from_json(value)
    }

    /// Recursively construct an optional nested entity.
    pub(crate) fn optional_nested<T: FromJson>(
        &self,
        field: &'static str,
    ) -> Result<Option<T>, ModelError> {
        self.present(field).map(T::from_json).transpose()
    }

    /// Recursively construct a required list of nested entities.
    pub(crate) fn nested_list<T: FromJson>(&self, field: &'static str) -> Result<Vec<T>, ModelError> {
        let value = self.present(field).ok_or_else(|| self.missing(field))?;
        self.array(field, value)?.iter().map(T::from_json).collect()
    }

    /// Like [`Self::nested_list`], but an absent key yields an empty list.
    pub(crate) fn nested_list_or_empty<T: FromJson>(
        &self,
        field: &'static str,
    ) -> Result<Vec<T>, ModelError> {
        match self.present(field) {
            Some(value) => self.array(field, value)?.iter().map(T::from_json).collect(),
            None => Ok(Vec::new()),
        }
    }

    /// Required list whose items may individually be `null`.
    pub(crate) fn nullable_list<T: FromJson>(
        &self,
        field: &'static str,
    ) -> Result<Vec<Option<T>>, ModelError> {
        let value = self.present(field).ok_or_else(|| self.missing(field))?;
        self.array(field, value)?
            .iter()
            .map(|item| {
                if item.is_null() {
                    Ok(None)
                } else {
                    T::from_json(item).map(Some)
                }
            })
            .collect()
    }

    fn present(&self, field: &str) -> Option<&'a Value> {
        self.map.get(field).filter(|value| !value.is_null())
    }

    fn array(&self, field: &'static str, value: &'a Value) -> Result<&'a Vec<Value>, ModelError> {
        value.as_array().ok_or_else(|| ModelError::InvalidField {
            entity: self.entity,
            field,
            message: "expected an array".to_owned(),
        })
    }

    fn decode<T: DeserializeOwned>(&self, field: &'static str, value: &Value) -> Result<T, ModelError> {
        T::deserialize(value).map_err(|err| ModelError::InvalidField {
            entity: self.entity,
            field,
            message: err.to_string(),
        })
    }

    const fn missing(&self, field: &'static str) -> ModelError {
        ModelError::MissingField {
            entity: self.entity,
            field,
        }
    }
}
