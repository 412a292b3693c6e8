/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use crate::{Carbon2Error, Carbon2Format, Carbon2Serializer};

#[cfg(feature = "yaml")]
mod yaml;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Carbon2SerializerConfig {
    format: Carbon2Format,
    sanitize_replace_char: Option<char>,
}

impl Carbon2SerializerConfig {
    pub fn new(format: Carbon2Format) -> Self {
        Carbon2SerializerConfig {
            format,
            sanitize_replace_char: None,
        }
    }

    #[inline]
    pub fn format(&self) -> Carbon2Format {
        self.format
    }

    pub fn set_format(&mut self, format: &str) -> Result<(), Carbon2Error> {
        self.format = Carbon2Format::from_str(format)?;
        Ok(())
    }

    pub fn set_sanitize_replace_char(&mut self, c: char) {
        self.sanitize_replace_char = Some(c);
    }

    pub fn build(&self) -> Carbon2Serializer {
        let serializer = Carbon2Serializer::with_format(self.format);
        match self.sanitize_replace_char {
            Some(c) => serializer.with_sanitize_replace_char(c),
            None => serializer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default() {
        let config = Carbon2SerializerConfig::default();
        assert_eq!(config.format(), Carbon2Format::FieldSeparate);

        let serializer = config.build();
        assert_eq!(serializer.format(), Carbon2Format::FieldSeparate);
        assert_eq!(serializer.sanitize_replace_char(), None);
    }

    #[test]
    fn set() {
        let mut config = Carbon2SerializerConfig::new(Carbon2Format::FieldSeparate);
        config.set_format("metric-includes-field").unwrap();
        config.set_sanitize_replace_char(':');

        let serializer = config.build();
        assert_eq!(serializer.format(), Carbon2Format::MetricIncludesField);
        assert_eq!(serializer.sanitize_replace_char(), Some(':'));

        assert!(config.set_format("json").is_err());
        assert_eq!(config.format(), Carbon2Format::MetricIncludesField);
    }
}
