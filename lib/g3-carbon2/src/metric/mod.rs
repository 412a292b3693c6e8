/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

mod tag;
pub use tag::MetricTagMap;

mod value;
pub use value::{DisplayCarbon2Value, FieldValue};

/// A single metric observation, with fields kept in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
    name: String,
    tags: MetricTagMap,
    fields: IndexMap<String, FieldValue>,
    time: DateTime<Utc>,
}

impl Metric {
    pub fn new<T: Into<String>>(name: T, time: DateTime<Utc>) -> Self {
        Metric {
            name: name.into(),
            tags: MetricTagMap::default(),
            fields: IndexMap::new(),
            time,
        }
    }

    pub fn with_tag<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.add_tag(key, value);
        self
    }

    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.add_field(key, value);
        self
    }

    pub fn add_tag<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.tags.insert(key, value);
    }

    /// Add a field, an existing one with the same key keeps its position.
    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn tags(&self) -> &MetricTagMap {
        &self.tags
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }
}
