/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::str::FromStr;

use crate::Carbon2Error;

/// Placement of the field name in the intrinsic tags of a carbon2 line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Carbon2Format {
    /// `metric=<name> field=<field>`
    #[default]
    FieldSeparate,
    /// `metric=<name>_<field>`
    MetricIncludesField,
}

impl Carbon2Format {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Carbon2Format::FieldSeparate => "field-separate",
            Carbon2Format::MetricIncludesField => "metric-includes-field",
        }
    }
}

impl FromStr for Carbon2Format {
    type Err = Carbon2Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "field-separate" | "field_separate" => Ok(Carbon2Format::FieldSeparate),
            "metric-includes-field" | "metric_includes_field" => {
                Ok(Carbon2Format::MetricIncludesField)
            }
            _ => Err(Carbon2Error::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Carbon2Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
