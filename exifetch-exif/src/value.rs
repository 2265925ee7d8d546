//! Decoded values and the map that collects them

use std::collections::BTreeMap;
use std::fmt;

use exifetch_common::exif::Field;

/// Decoded tag value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Integer(i64),
    Float(f64),
    String(String),
    Integers(Vec<i64>),
    Floats(Vec<f64>),
}

impl Value {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(x) => Some(*x),
            _ => None,
        }
    }

    /// Scalar as float, integers are converted
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(x) => Some(*x),
            Self::Integer(x) => Some(*x as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(x) => Some(x),
            _ => None,
        }
    }

    pub fn as_integers(&self) -> Option<&[i64]> {
        match self {
            Self::Integers(x) => Some(x),
            _ => None,
        }
    }

    pub fn as_floats(&self) -> Option<&[f64]> {
        match self {
            Self::Floats(x) => Some(x),
            _ => None,
        }
    }

    /// Number of values if this is a sequence
    pub fn sequence_len(&self) -> Option<usize> {
        match self {
            Self::Integers(x) => Some(x.len()),
            Self::Floats(x) => Some(x.len()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join<T: fmt::Display>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
            for (i, v) in values.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{v}")?;
            }
            Ok(())
        }

        match self {
            Self::Integer(x) => write!(f, "{x}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(x) => f.write_str(x),
            Self::Integers(x) => join(f, x),
            Self::Floats(x) => join(f, x),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// Decoded tags of all directories, keyed by tag name
///
/// Iteration follows the order of the tag tables.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TagMap(BTreeMap<Field, Value>);

impl TagMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&Value> {
        self.0.get(&field)
    }

    /// Lookup by tag name like `"DateTimeOriginal"`
    pub fn get_by_name(&self, name: &str) -> Option<&Value> {
        self.get(Field::from_name(name)?)
    }

    /// Inserts a value, replacing an existing value of the same name
    pub fn insert(&mut self, field: Field, value: Value) -> Option<Value> {
        self.0.insert(field, value)
    }

    pub fn remove(&mut self, field: Field) -> Option<Value> {
        self.0.remove(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &Value)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    /// Tag listing with one `name : value` line per tag
    ///
    /// Sequences are not printed but summarized as `[N values]`.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TagMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, value) in self.iter() {
            match value.sequence_len() {
                Some(n) => writeln!(f, "{field} : [{n} values]")?,
                None => writeln!(f, "{field} : {value}")?,
            }
        }
        Ok(())
    }
}

impl FromIterator<(Field, Value)> for TagMap {
    fn from_iter<T: IntoIterator<Item = (Field, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for TagMap {
    type Item = (Field, Value);
    type IntoIter = std::collections::btree_map::IntoIter<Field, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
