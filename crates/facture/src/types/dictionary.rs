use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;

use super::Value;

/// Compare two symbol names the way the dictionary does: ASCII case-insensitive.
pub fn names_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// An insertion-ordered symbol table mapping case-insensitive names to values.
///
/// Names are unique under [`names_match`]. Setting a name that already exists
/// replaces its value in place; the entry keeps its position and the spelling
/// it was first inserted with. Entries are never removed individually.
///
/// Lookups are a linear scan: dictionaries hold the handful of fields of one
/// document, so a hash index would cost more than it saves.
///
/// # Example
///
/// ```
/// use facture::{Dictionary, Value};
///
/// let mut dict = Dictionary::new();
/// dict.set_text("name", "Doe");
/// dict.set_number("total", 12.5);
///
/// assert_eq!(dict.get("NAME"), Some(&Value::from("Doe")));
/// assert_eq!(dict.render("%Name%: %total%").unwrap(), "Doe: 12.50");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: Vec<(String, Value)>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define or replace an entry as text.
    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        self.set(name, Value::Text(value.into()));
    }

    /// Define or replace an entry as a number.
    pub fn set_number(&mut self, name: &str, value: f64) {
        self.set(name, Value::Number(value));
    }

    /// Define or replace an entry with any value.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        let value = value.into();
        match self.position(name) {
            Some(index) => self.entries[index].1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    /// Look up an entry by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.position(name).map(|index| &self.entries[index].1)
    }

    /// Check whether an entry with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterate over entry names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| names_match(n, name))
    }
}

impl<K: AsRef<str>, V: Into<Value>> Extend<(K, V)> for Dictionary {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name.as_ref(), value);
        }
    }
}

impl<K: AsRef<str>, V: Into<Value>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        dict.extend(iter);
        dict
    }
}

impl Serialize for Dictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Dictionary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DictionaryVisitor)
    }
}

/// Builds a dictionary from a map, routing every key through upsert so that
/// keys differing only in case collapse into one entry (last one wins).
struct DictionaryVisitor;

impl<'de> Visitor<'de> for DictionaryVisitor {
    type Value = Dictionary;

    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("a map of names to text or number values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Dictionary, A::Error> {
        let mut dict = Dictionary::new();
        while let Some((name, value)) = access.next_entry::<String, Value>()? {
            dict.set(&name, value);
        }
        Ok(dict)
    }
}
