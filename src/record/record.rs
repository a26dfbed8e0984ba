//! The ordered [`Record`] field map.

use super::Value;

/// An ordered mapping from field name to [`Value`].
///
/// Fields iterate in insertion order. Updates follow the persistent
/// idiom: [`with`](Self::with) and [`without`](Self::without) consume the
/// record and return a new one, so a record handed to a library operation
/// is never mutated behind the caller's back.
///
/// # Examples
///
/// ```rust
/// use recollect::record::{Record, Value};
///
/// let item = Record::new()
///     .with("name", "Laptop")
///     .with("price", 1200.0);
///
/// assert_eq!(item.get("name").and_then(Value::as_str), Some("Laptop"));
/// assert_eq!(item.get("price").and_then(Value::as_f64), Some(1200.0));
/// assert_eq!(item.len(), 2);
///
/// // Re-assigning a field keeps its original position.
/// let discounted = item.with("price", 1080.0);
/// assert_eq!(discounted.keys().collect::<Vec<_>>(), vec!["name", "price"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Creates an empty record.
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Returns a new record with `name` set to `value`.
    ///
    /// An existing field of the same name is replaced in place, keeping
    /// its position; a new field is appended.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self
            .fields
            .iter_mut()
            .find(|(existing, _)| *existing == name)
        {
            slot.1 = value;
        } else {
            self.fields.push((name, value));
        }
        self
    }

    /// Returns a new record without the named field.
    ///
    /// Removing an absent field is a no-op.
    pub fn without(mut self, name: &str) -> Self {
        self.fields.retain(|(existing, _)| existing != name);
        self
    }

    /// Returns the value of the named field, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Returns `true` if the named field is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Iterates over field values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.iter().map(|(_, value)| value)
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iterator: I) -> Self {
        iterator
            .into_iter()
            .fold(Self::new(), |record, (name, value)| record.with(name, value))
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Builds a [`Record`] literal.
///
/// # Examples
///
/// ```rust
/// use recollect::record;
/// use recollect::record::Value;
///
/// let person = record! {
///     "name" => "John",
///     "age" => 30.0,
/// };
/// assert_eq!(person.get("age").and_then(Value::as_f64), Some(30.0));
/// ```
#[macro_export]
macro_rules! record {
    ($($name:expr => $value:expr),* $(,)?) => {
        $crate::record::Record::new()$(.with($name, $value))*
    };
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct RecordVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a map of field names to values")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut record = Record::new();
        while let Some((name, value)) = access.next_entry::<String, Value>()? {
            record = record.with(name, value);
        }
        Ok(record)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_replaces_in_place() {
        let record = Record::new().with("a", 1.0).with("b", 2.0).with("a", 3.0);
        assert_eq!(record.len(), 2);
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(record.get("a").and_then(Value::as_f64), Some(3.0));
    }

    #[test]
    fn test_without_absent_field_is_noop() {
        let record = Record::new().with("a", 1.0);
        let unchanged = record.clone().without("missing");
        assert_eq!(record, unchanged);
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let record = record! { "z" => 1.0, "a" => 2.0, "m" => 3.0 };
        let names: Vec<&str> = record.keys().collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_from_iterator_deduplicates_names() {
        let record: Record = vec![
            ("x".to_string(), Value::from(1.0)),
            ("x".to_string(), Value::from(2.0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("x").and_then(Value::as_f64), Some(2.0));
    }
}
