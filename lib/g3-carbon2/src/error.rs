/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Carbon2Error {
    #[error("unsupported carbon2 format: {0:?}")]
    UnsupportedFormat(String),
}
