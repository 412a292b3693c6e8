/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt::{self, Write};

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Signed(i64),
    Unsigned(u64),
    Double(f64),
    Bool(bool),
    Text(String),
}

impl FieldValue {
    /// Integers, floats and booleans, which are written as `1` / `0`.
    pub fn is_carbon2_value(&self) -> bool {
        !matches!(self, FieldValue::Text(_))
    }

    /// Get the carbon2 rendering of this value, or `None` if it can not be
    /// represented in a carbon2 line.
    pub fn display_carbon2(&self) -> Option<DisplayCarbon2Value<'_>> {
        if self.is_carbon2_value() {
            Some(DisplayCarbon2Value(self))
        } else {
            None
        }
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),+) => {
        $(
            impl From<$t> for FieldValue {
                fn from(v: $t) -> Self {
                    FieldValue::Signed(i64::from(v))
                }
            }
        )+
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),+) => {
        $(
            impl From<$t> for FieldValue {
                fn from(v: $t) -> Self {
                    FieldValue::Unsigned(u64::from(v))
                }
            }
        )+
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        FieldValue::Double(f64::from(v))
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Double(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

pub struct DisplayCarbon2Value<'a>(&'a FieldValue);

impl fmt::Display for DisplayCarbon2Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            FieldValue::Signed(i) => f.write_str(itoa::Buffer::new().format(*i)),
            FieldValue::Unsigned(u) => f.write_str(itoa::Buffer::new().format(*u)),
            FieldValue::Double(v) => fmt_double(*v, f),
            FieldValue::Bool(true) => f.write_char('1'),
            FieldValue::Bool(false) => f.write_char('0'),
            FieldValue::Text(_) => Ok(()),
        }
    }
}

/// Write the shortest round-trip representation of `v` in positional notation.
fn fmt_double(v: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("NaN");
    }
    if v.is_infinite() {
        return f.write_str(if v.is_sign_positive() { "+Inf" } else { "-Inf" });
    }

    let mut buffer = ryu::Buffer::new();
    let s = buffer.format_finite(v);
    let s = match s.strip_prefix('-') {
        Some(left) => {
            f.write_char('-')?;
            left
        }
        None => s,
    };

    let Some((mantissa, exp)) = s.split_once('e') else {
        return f.write_str(s.strip_suffix(".0").unwrap_or(s));
    };
    let exp: i32 = exp.parse().map_err(|_| fmt::Error)?;
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let digits_len = (int_part.len() + frac_part.len()) as i32;
    let point = int_part.len() as i32 + exp;
    if point <= 0 {
        f.write_str("0.")?;
        write_zeros(f, -point)?;
        f.write_str(int_part)?;
        f.write_str(frac_part)
    } else if point >= digits_len {
        f.write_str(int_part)?;
        f.write_str(frac_part)?;
        write_zeros(f, point - digits_len)
    } else {
        let point = point as usize;
        if point <= int_part.len() {
            let (l, r) = int_part.split_at(point);
            f.write_str(l)?;
            f.write_char('.')?;
            f.write_str(r)?;
            f.write_str(frac_part)
        } else {
            let (l, r) = frac_part.split_at(point - int_part.len());
            f.write_str(int_part)?;
            f.write_str(l)?;
            f.write_char('.')?;
            f.write_str(r)
        }
    }
}

fn write_zeros(f: &mut fmt::Formatter<'_>, n: i32) -> fmt::Result {
    for _ in 0..n {
        f.write_char('0')?;
    }
    Ok(())
}
