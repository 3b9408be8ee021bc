// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use libfuzzer_sys::fuzz_target;
use omt::{DocumentBinding, XmlBinding};

fuzz_target!(|data: &[u8]| {
    let binding = XmlBinding::new();
    if let Ok(module) = binding.parse(data) {
        let xml = binding.to_xml(&module, false);
        // Prefixes declared below the root are not carried over, so only
        // compare when our output parses at all.
        if let Ok(reparsed) = binding.parse(xml.as_bytes()) {
            assert_eq!(reparsed, module);
        }
    }
});
