// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use omt::naming::{is_round_trip_safe, to_host_name, to_omt_name};

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        let host = to_host_name(name);
        assert!(!host.contains('-'));
        if is_round_trip_safe(name) {
            assert_eq!(to_omt_name(&host), name);
        }
    }
});
