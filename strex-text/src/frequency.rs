//! Ordered occurrence counts

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Ordering of a [`FrequencyMap`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// First-occurrence order of the keys
    #[default]
    Unsorted,
    /// Most frequent first
    Descending,
    /// Least frequent first
    Ascending,
}

/// Mapping from a key to its occurrence count
///
/// Keys are unique. Entries keep the order they were built in, so an
/// unsorted map lists keys by first occurrence and a sorted map keeps that
/// order among equal counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "FrequencyEntries")]
pub struct FrequencyMap {
    entries: Vec<(String, usize)>,
    // Position of each key in `entries`
    #[serde(skip)]
    index: HashMap<String, usize>,
}

#[derive(Deserialize)]
struct FrequencyEntries {
    entries: Vec<(String, usize)>,
}

impl From<FrequencyEntries> for FrequencyMap {
    fn from(raw: FrequencyEntries) -> Self {
        let mut map = Self::new();
        for (key, count) in raw.entries {
            map.add(key, count);
        }
        map
    }
}

impl PartialEq for FrequencyMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for FrequencyMap {}

impl FrequencyMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every key of `keys`, grouping equal keys
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String> + AsRef<str>,
    {
        let mut map = Self::new();
        for key in keys {
            map.increment(key);
        }
        map
    }

    /// Add one occurrence of `key`
    pub fn increment<K>(&mut self, key: K)
    where
        K: Into<String> + AsRef<str>,
    {
        self.add(key, 1);
    }

    fn add<K>(&mut self, key: K, occurrences: usize)
    where
        K: Into<String> + AsRef<str>,
    {
        if let Some(&position) = self.index.get(key.as_ref()) {
            self.entries[position].1 += occurrences;
            return;
        }
        let key: String = key.into();
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, occurrences));
    }

    /// Occurrence count for `key`, if present
    pub fn get(&self, key: &str) -> Option<usize> {
        self.index.get(key).map(|&position| self.entries[position].1)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, count)` pairs in map order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries
            .iter()
            .map(|(key, count)| (key.as_str(), *count))
    }

    /// Keys in map order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Reorder the entries; sorting is stable
    pub fn sorted(mut self, order: SortOrder) -> Self {
        match order {
            SortOrder::Unsorted => {}
            SortOrder::Descending => self.entries.sort_by(|a, b| b.1.cmp(&a.1)),
            SortOrder::Ascending => self.entries.sort_by(|a, b| a.1.cmp(&b.1)),
        }
        for (position, (key, _)) in self.entries.iter().enumerate() {
            if let Some(slot) = self.index.get_mut(key) {
                *slot = position;
            }
        }
        self
    }

    /// Consume the map into its entries
    pub fn into_vec(self) -> Vec<(String, usize)> {
        self.entries
    }
}

impl<K> FromIterator<K> for FrequencyMap
where
    K: Into<String> + AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

impl IntoIterator for FrequencyMap {
    type Item = (String, usize);
    type IntoIter = std::vec::IntoIter<(String, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_order() {
        let map = FrequencyMap::from_keys(["b", "a", "b", "c", "a", "b"]);
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, ["b", "a", "c"]);
        assert_eq!(map.get("b"), Some(3));
        assert_eq!(map.get("z"), None);
    }

    #[test]
    fn test_sorted_is_stable() {
        let map: FrequencyMap = ["x", "y", "z", "y"].into_iter().collect();

        let desc: Vec<_> = map.clone().sorted(SortOrder::Descending).into_vec();
        assert_eq!(desc[0], ("y".to_string(), 2));
        assert_eq!(desc[1].0, "x");
        assert_eq!(desc[2].0, "z");

        let asc = map.sorted(SortOrder::Ascending);
        let keys: Vec<&str> = asc.keys().collect();
        assert_eq!(keys, ["x", "z", "y"]);
    }

    #[test]
    fn test_many_distinct_keys() {
        let keys: Vec<String> = (0..50_000).map(|i| format!("w{i}")).collect();
        let mut map = FrequencyMap::from_keys(keys.iter().map(String::as_str));
        map.increment("w49999");
        map.increment("w0");

        assert_eq!(map.len(), 50_000);
        assert_eq!(map.keys().next(), Some("w0"));
        assert_eq!(map.get("w0"), Some(2));
        assert_eq!(map.get("w25000"), Some(1));
        assert_eq!(map.get("w49999"), Some(2));
    }

    #[test]
    fn test_lookup_after_sorting() {
        let map = FrequencyMap::from_keys(["a", "b", "b", "c", "c", "c"])
            .sorted(SortOrder::Descending);
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, ["c", "b", "a"]);
        assert_eq!(map.get("a"), Some(1));
        assert_eq!(map.get("c"), Some(3));

        let mut map = map;
        map.increment("a");
        assert_eq!(map.get("a"), Some(2));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_deserialized_map_supports_lookup() {
        let map: FrequencyMap =
            serde_json::from_str(r#"{"entries":[["x",2],["y",1]]}"#).unwrap();
        assert_eq!(map.get("y"), Some(1));
        assert_eq!(map, FrequencyMap::from_keys(["x", "y", "x"]));
    }

    #[test]
    fn test_serializes_as_entries() {
        let map = FrequencyMap::from_keys(["a", "a"]);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"entries":[["a",2]]}"#);
    }
}
