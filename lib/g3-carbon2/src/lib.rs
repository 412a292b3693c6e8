/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod error;
pub use error::Carbon2Error;

mod format;
pub use format::Carbon2Format;

mod metric;
pub use metric::{DisplayCarbon2Value, FieldValue, Metric, MetricTagMap};

mod sanitize;

mod serializer;
pub use serializer::Carbon2Serializer;

mod config;
pub use config::Carbon2SerializerConfig;
