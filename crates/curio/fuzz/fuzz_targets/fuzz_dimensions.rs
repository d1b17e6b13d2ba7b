//! Fuzz target for dimension string parsing.
//!
//! This fuzzer tests that the dimension parser:
//! 1. Never panics on any input string
//! 2. Classifies every parsed value into a size category

#![no_main]

use curio::Dimensions;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs
    if data.len() > 10_000 {
        return;
    }

    if let Ok(raw) = std::str::from_utf8(data) {
        if let Some(dimensions) = Dimensions::parse(raw) {
            let _ = dimensions.area();
            let _ = dimensions.size_category();
        }
    }
});
