//! Untyped records recovered from Substreams CLI output
//!
//! The output parser has no knowledge of domain semantics; it produces
//! ordered key/value records whose values are either scalar strings or
//! flat lists of strings. Typing happens later in the normalizer.

/// A single value recovered from the output text
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// A scalar value, surrounding quotes already stripped
    Scalar(String),
    /// A flat array of scalar tokens (nested structures are not supported)
    List(Vec<String>),
}

impl RawValue {
    /// Scalar contents, if this value is a scalar
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            RawValue::Scalar(s) => Some(s),
            RawValue::List(_) => None,
        }
    }

    /// List contents, if this value is a list
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            RawValue::Scalar(_) => None,
            RawValue::List(items) => Some(items),
        }
    }
}

/// An untyped key/value record in encounter order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRecord {
    fields: Vec<(String, RawValue)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, keeping encounter order. A repeated key overwrites
    /// the earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: RawValue) {
        let key = key.into();
        if let Some(existing) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            existing.1 = value;
        } else {
            self.fields.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, RawValue)> {
        self.fields.iter()
    }
}
