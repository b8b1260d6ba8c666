//! The POM `<properties>` section

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered `key -> value` map; insertion order is kept so rewritten POMs
/// diff cleanly
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PomProperties(IndexMap<String, String>);

impl PomProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Value of `key` if present and not blank
    pub fn get_non_blank(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.trim().is_empty())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Unconditional write; prefer [`super::upsert_property`] when the
    /// caller tracks a dirty flag
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PomProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_kept() {
        let mut props = PomProperties::new();
        props.insert("z", "1");
        props.insert("a", "2");
        props.insert("z", "3");
        let pairs: Vec<_> = props.iter().collect();
        assert_eq!(pairs, vec![("z", "3"), ("a", "2")]);
    }

    #[test]
    fn test_get_non_blank() {
        let props: PomProperties = [("blank", "  "), ("set", "x")].into_iter().collect();
        assert_eq!(props.get_non_blank("blank"), None);
        assert_eq!(props.get_non_blank("set"), Some("x"));
        assert_eq!(props.get_non_blank("missing"), None);
    }
}
