/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

const TAG_VALUE_NULL: &[u8] = b"null";

/// Append a metric name or field name, replacing spaces with `_`, and `=`
/// with `replace_equal` if set.
pub(crate) fn push_name(buf: &mut Vec<u8>, name: &str, replace_equal: Option<char>) {
    match replace_equal {
        Some(c) => {
            let mut tmp = [0u8; 4];
            let c = c.encode_utf8(&mut tmp).as_bytes();
            push_replaced(buf, name, memchr::memchr2_iter(b' ', b'=', name.as_bytes()), c);
        }
        None => push_tag_key(buf, name),
    }
}

/// Append a tag key, replacing spaces with `_`.
pub(crate) fn push_tag_key(buf: &mut Vec<u8>, key: &str) {
    push_replaced(buf, key, memchr::memchr_iter(b' ', key.as_bytes()), b"");
}

/// Append a tag value, replacing spaces with `_`, and the empty value with `null`.
pub(crate) fn push_tag_value(buf: &mut Vec<u8>, value: &str) {
    if value.is_empty() {
        buf.extend_from_slice(TAG_VALUE_NULL);
    } else {
        push_tag_key(buf, value);
    }
}

// spaces always become `_`, any other matched byte becomes `other`
fn push_replaced<I>(buf: &mut Vec<u8>, s: &str, positions: I, other: &[u8])
where
    I: Iterator<Item = usize>,
{
    let data = s.as_bytes();
    let mut offset = 0;
    for p in positions {
        buf.extend_from_slice(&data[offset..p]);
        if data[p] == b' ' {
            buf.push(b'_');
        } else {
            buf.extend_from_slice(other);
        }
        offset = p + 1;
    }
    buf.extend_from_slice(&data[offset..]);
}
