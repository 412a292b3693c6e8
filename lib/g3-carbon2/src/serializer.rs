/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io::Write;
use std::str::FromStr;

use log::trace;

use crate::{Carbon2Error, Carbon2Format, Metric, sanitize};

/// Serializer for the carbon2 plaintext line format.
///
/// Each numeric field of a metric is written as one line:
///
/// ```text
/// metric=<name> field=<field> <tag>=<value> ...  <value> <unix seconds>
/// ```
///
/// or with the field name appended to the metric name, depending on the
/// [`Carbon2Format`]. Fields with non-numeric values are skipped.
#[derive(Clone, Debug)]
pub struct Carbon2Serializer {
    format: Carbon2Format,
    sanitize_replace_char: Option<char>,
}

impl Carbon2Serializer {
    pub fn new(format: &str) -> Result<Self, Carbon2Error> {
        let format = Carbon2Format::from_str(format)?;
        Ok(Carbon2Serializer::with_format(format))
    }

    pub fn with_format(format: Carbon2Format) -> Self {
        Carbon2Serializer {
            format,
            sanitize_replace_char: None,
        }
    }

    /// Replace `=` in metric and field names with `c`.
    pub fn with_sanitize_replace_char(mut self, c: char) -> Self {
        self.sanitize_replace_char = Some(c);
        self
    }

    #[inline]
    pub fn format(&self) -> Carbon2Format {
        self.format
    }

    #[inline]
    pub fn sanitize_replace_char(&self) -> Option<char> {
        self.sanitize_replace_char
    }

    pub fn serialize(&self, metric: &Metric) -> Vec<u8> {
        let mut buf = Vec::new();
        self.serialize_to(metric, &mut buf);
        buf
    }

    pub fn serialize_batch<'a, I>(&self, metrics: I) -> Vec<u8>
    where
        I: IntoIterator<Item = &'a Metric>,
    {
        let mut buf = Vec::new();
        for metric in metrics {
            self.serialize_to(metric, &mut buf);
        }
        buf
    }

    /// Append the lines of `metric` to `buf`.
    pub fn serialize_to(&self, metric: &Metric, buf: &mut Vec<u8>) {
        let timestamp = metric.time().timestamp();

        for (field, value) in metric.fields() {
            let Some(value) = value.display_carbon2() else {
                trace!(
                    "skip non-numeric field {field} of metric {}",
                    metric.name()
                );
                continue;
            };

            buf.extend_from_slice(b"metric=");
            sanitize::push_name(buf, metric.name(), self.sanitize_replace_char);
            match self.format {
                Carbon2Format::FieldSeparate => buf.extend_from_slice(b" field="),
                Carbon2Format::MetricIncludesField => buf.push(b'_'),
            }
            sanitize::push_name(buf, field, self.sanitize_replace_char);
            buf.push(b' ');

            for (k, v) in metric.tags() {
                sanitize::push_tag_key(buf, k);
                buf.push(b'=');
                sanitize::push_tag_value(buf, v);
                buf.push(b' ');
            }

            // the meta tags part is always empty
            let _ = writeln!(buf, " {value} {timestamp}");
        }
    }
}
