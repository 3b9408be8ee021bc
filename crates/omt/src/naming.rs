// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Conversion between OMT names and host identifiers.
//!
//! OMT names may contain `-`, which host identifiers cannot. Hyphens are
//! escaped into underscore runs whose parity tells them apart from escaped
//! underscores:
//!
//! | OMT          | host                 |
//! |--------------|----------------------|
//! | n x `_`      | 2n x `_`             |
//! | n x `-`      | 2n+1 x `_`           |
//! | `Class`      | `Class_`             |
//!
//! [`to_omt_name`] inverts [`to_host_name`] for every name in which a run of
//! `-` never directly touches a run of `_` (`a-_b` and `a--b` share an
//! encoding). [`is_round_trip_safe`] tells the two cases apart.

/// Host reserved word that cannot be used as an identifier as-is.
const RESERVED: &str = "Class";
const RESERVED_ESCAPED: &str = "Class_";

/// Converts an OMT name to a host identifier.
pub fn to_host_name(omt_name: &str) -> String {
    if omt_name == RESERVED {
        return RESERVED_ESCAPED.to_string();
    }

    let mut out = String::with_capacity(omt_name.len() * 2);
    let mut chars = omt_name.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '-' => {
                out.push('_');
                out.push_str("__");
                while chars.next_if_eq(&'-').is_some() {
                    out.push_str("__");
                }
            }
            '_' => {
                out.push_str("__");
                while chars.next_if_eq(&'_').is_some() {
                    out.push_str("__");
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Converts a host identifier back to its OMT name.
pub fn to_omt_name(host_name: &str) -> String {
    if host_name == RESERVED_ESCAPED {
        return RESERVED.to_string();
    }

    let mut out = String::with_capacity(host_name.len());
    let mut chars = host_name.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '_' {
            out.push(c);
            continue;
        }

        let mut count = 1usize;
        while chars.next_if_eq(&'_').is_some() {
            count += 1;
        }

        let unescaped = if count % 2 == 0 { '_' } else { '-' };
        out.extend(std::iter::repeat(unescaped).take(count / 2));
    }
    out
}

/// True when `to_omt_name(&to_host_name(omt_name)) == omt_name`.
pub fn is_round_trip_safe(omt_name: &str) -> bool {
    let bytes = omt_name.as_bytes();
    !bytes
        .windows(2)
        .any(|w| matches!(w, [b'-', b'_'] | [b'_', b'-']))
}

/// Accessor name for reading a host field: `speed` -> `getSpeed`.
pub fn getter_name(field_name: &str) -> String {
    accessor_name("get", field_name)
}

/// Accessor name for writing a host field: `speed` -> `setSpeed`.
pub fn setter_name(field_name: &str) -> String {
    accessor_name("set", field_name)
}

fn accessor_name(prefix: &str, field_name: &str) -> String {
    let mut chars = field_name.chars();
    let mut out = String::with_capacity(prefix.len() + field_name.len());
    out.push_str(prefix);
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
    out
}
