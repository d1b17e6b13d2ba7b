//! Fuzz target for price bucket label matching.
//!
//! Bucket labels arrive from external market data and may be arbitrary
//! strings; matching must never panic.

#![no_main]

use curio::facet::{price_bucket, price_in_bucket};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (f64, &str)| {
    let (price, label) = input;
    if !price.is_finite() {
        return;
    }

    let _ = price_in_bucket(price, label);
    let _ = price_bucket(price);
});
