// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Array cardinality expressions.
//!
//! Syntax: `'[' <min> '..' <max> ']' | <value> | 'Dynamic'`

use crate::error::{Error, Result};
use crate::mim::DYNAMIC;

/// Inclusive element count range of an array datatype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cardinality {
    pub min: u32,
    pub max: u32,
}

impl Cardinality {
    /// Upper bound reported for `Dynamic` arrays.
    pub const UNBOUNDED: u32 = i32::MAX as u32;

    pub const fn exact(count: u32) -> Self {
        Self {
            min: count,
            max: count,
        }
    }

    pub const fn dynamic() -> Self {
        Self {
            min: 0,
            max: Self::UNBOUNDED,
        }
    }

    /// Exactly one element count is allowed.
    pub const fn is_fixed(&self) -> bool {
        self.min == self.max
    }
}

/// Parse a cardinality expression.
///
/// Bounds are non-negative integers; a range whose lower bound exceeds its
/// upper bound is rejected.
pub fn parse(expr: &str) -> Result<Cardinality> {
    if expr == DYNAMIC {
        return Ok(Cardinality::dynamic());
    }

    let malformed = || Error::MalformedCardinality(expr.to_string());

    let range = match (expr.strip_prefix('['), expr.ends_with(']')) {
        (None, false) => {
            if expr.contains(['[', ']']) {
                return Err(malformed());
            }
            let value = parse_bound(expr).ok_or_else(malformed)?;
            return Ok(Cardinality::exact(value));
        }
        (Some(rest), true) => &rest[..rest.len() - 1],
        _ => return Err(malformed()),
    };

    let mut parts = range.split("..");
    let (Some(min), Some(max), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };

    let min = parse_bound(min).ok_or_else(malformed)?;
    let max = parse_bound(max).ok_or_else(malformed)?;
    if min > max {
        return Err(malformed());
    }

    Ok(Cardinality { min, max })
}

/// Non-negative integer within the `i32` range.
fn parse_bound(text: &str) -> Option<u32> {
    text.parse::<i32>()
        .ok()
        .and_then(|v| u32::try_from(v).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic() {
        let c = parse("Dynamic").unwrap();
        assert_eq!(c, Cardinality { min: 0, max: Cardinality::UNBOUNDED });
        assert_eq!(Cardinality::UNBOUNDED, 2_147_483_647);
        assert!(!c.is_fixed());
    }

    #[test]
    fn test_range() {
        assert_eq!(parse("[1..5]").unwrap(), Cardinality { min: 1, max: 5 });
        assert_eq!(parse("[0..0]").unwrap(), Cardinality::exact(0));
    }

    #[test]
    fn test_single_value() {
        let c = parse("3").unwrap();
        assert_eq!(c, Cardinality::exact(3));
        assert!(c.is_fixed());
    }

    #[test]
    fn test_rejects_negative() {
        assert!(matches!(parse("-1"), Err(Error::MalformedCardinality(s)) if s == "-1"));
        assert!(parse("[-1..5]").is_err());
    }

    #[test]
    fn test_rejects_malformed_ranges() {
        for expr in [
            "[1..]", "[..5]", "[1..5", "1..5]", "[1..2..3]", "[15]", "[]", "", "dynamic",
            "[a..b]", "x", "2147483648", "[5..1]", " 3", "]1..5[",
        ] {
            assert!(parse(expr).is_err(), "{expr:?} should be rejected");
        }
    }
}
