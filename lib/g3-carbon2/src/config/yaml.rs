/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use anyhow::{Context, anyhow};
use yaml_rust::Yaml;

use super::Carbon2SerializerConfig;

fn as_char(v: &Yaml) -> anyhow::Result<char> {
    if let Yaml::String(s) = v {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(anyhow!("a single char is required, got {s:?}")),
        }
    } else {
        Err(anyhow!("yaml value type for 'char' should be 'string'"))
    }
}

impl Carbon2SerializerConfig {
    /// Parse from a format string, or a map with `format` and
    /// `sanitize_replace_char` keys.
    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Self> {
        match v {
            Yaml::Hash(map) => {
                let mut config = Carbon2SerializerConfig::default();
                for (k, v) in map.iter() {
                    let Yaml::String(k) = k else {
                        return Err(anyhow!(
                            "carbon2 serializer config key should be string"
                        ));
                    };
                    config
                        .set_by_yaml_kv(k, v)
                        .context(format!("failed to parse value of key {k}"))?;
                }
                Ok(config)
            }
            Yaml::String(s) => {
                let mut config = Carbon2SerializerConfig::default();
                config.set_format(s)?;
                Ok(config)
            }
            _ => Err(anyhow!(
                "yaml value type for 'carbon2 serializer config' should be 'map' or 'string'"
            )),
        }
    }

    fn set_by_yaml_kv(&mut self, k: &str, v: &Yaml) -> anyhow::Result<()> {
        match k {
            "format" | "carbon2_format" | "carbon2-format" => {
                if let Yaml::String(s) = v {
                    self.set_format(s)
                        .context(format!("invalid carbon2 format value for key {k}"))
                } else {
                    Err(anyhow!("yaml value type for key {k} should be 'string'"))
                }
            }
            "sanitize_replace_char" | "sanitize-replace-char" => {
                let c = as_char(v).context(format!("invalid char value for key {k}"))?;
                self.set_sanitize_replace_char(c);
                Ok(())
            }
            _ => Err(anyhow!("invalid key {k}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Carbon2Error, Carbon2Format};
    use yaml_rust::YamlLoader;

    macro_rules! yaml_doc {
        ($s:expr) => {
            YamlLoader::load_from_str($s).unwrap().remove(0)
        };
    }

    #[test]
    fn parse_string() {
        let yaml = yaml_doc!("metric-includes-field");
        let config = Carbon2SerializerConfig::parse_yaml(&yaml).unwrap();
        assert_eq!(config.format(), Carbon2Format::MetricIncludesField);
        assert_eq!(config.build().sanitize_replace_char(), None);
    }

    #[test]
    fn parse_map() {
        let yaml = yaml_doc!(
            r#"
                format: field_separate
                sanitize-replace-char: ":"
            "#
        );
        let config = Carbon2SerializerConfig::parse_yaml(&yaml).unwrap();
        assert_eq!(config.format(), Carbon2Format::FieldSeparate);
        assert_eq!(config.build().sanitize_replace_char(), Some(':'));

        let yaml = yaml_doc!("carbon2_format: metric-includes-field");
        let config = Carbon2SerializerConfig::parse_yaml(&yaml).unwrap();
        assert_eq!(config.format(), Carbon2Format::MetricIncludesField);

        let yaml = yaml_doc!("carbon2-format: metric_includes_field");
        let config = Carbon2SerializerConfig::parse_yaml(&yaml).unwrap();
        assert_eq!(config.format(), Carbon2Format::MetricIncludesField);

        let yaml = yaml_doc!("sanitize_replace_char: '-'");
        let config = Carbon2SerializerConfig::parse_yaml(&yaml).unwrap();
        assert_eq!(config.format(), Carbon2Format::FieldSeparate);
    }

    #[test]
    fn parse_err() {
        let yaml = yaml_doc!("carbon3");
        let e = Carbon2SerializerConfig::parse_yaml(&yaml).unwrap_err();
        assert_eq!(
            e.downcast_ref::<Carbon2Error>(),
            Some(&Carbon2Error::UnsupportedFormat("carbon3".to_string()))
        );

        let yaml = yaml_doc!("format: Field-Separate");
        assert!(Carbon2SerializerConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc!("Format: field-separate");
        assert!(Carbon2SerializerConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc!("format: graphite");
        assert!(Carbon2SerializerConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc!("format: 1");
        assert!(Carbon2SerializerConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc!("invalid_key: value");
        assert!(Carbon2SerializerConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc!("sanitize_replace_char: ab");
        assert!(Carbon2SerializerConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc!("sanitize_replace_char: ''");
        assert!(Carbon2SerializerConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc!("123: field-separate");
        assert!(Carbon2SerializerConfig::parse_yaml(&yaml).is_err());

        let yaml = yaml_doc!("- field-separate");
        assert!(Carbon2SerializerConfig::parse_yaml(&yaml).is_err());
    }
}
