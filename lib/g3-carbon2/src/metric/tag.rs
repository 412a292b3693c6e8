/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::collections::BTreeMap;
use std::collections::btree_map;

/// Tags of a metric, always iterated in lexicographic key order.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MetricTagMap {
    inner: BTreeMap<String, String>,
}

impl MetricTagMap {
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<String>
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.inner.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.inner.iter()
    }
}

impl<'a> IntoIterator for &'a MetricTagMap {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for MetricTagMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = MetricTagMap::default();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for MetricTagMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted() {
        let map: MetricTagMap = [("zone", "b"), ("host", "a"), ("cpu", "cpu0")]
            .into_iter()
            .collect();
        let keys: Vec<&str> = map.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["cpu", "host", "zone"]);
    }

    #[test]
    fn replace() {
        let mut map = MetricTagMap::default();
        assert!(map.is_empty());
        assert_eq!(map.insert("cpu", "cpu0"), None);
        assert_eq!(map.insert("cpu", "cpu1"), Some("cpu0".to_string()));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("cpu"), Some("cpu1"));
    }
}
