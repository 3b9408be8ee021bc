// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use omt::cardinality;

fuzz_target!(|data: &[u8]| {
    if let Ok(expr) = std::str::from_utf8(data) {
        if let Ok(range) = cardinality::parse(expr) {
            assert!(range.min <= range.max);
            assert!(range.max <= omt::Cardinality::UNBOUNDED);
        }
    }
});
