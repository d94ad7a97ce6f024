#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must come back as a typed error, never a panic.
    if let Ok(decoded) = kith_codec::decode(data) {
        // A blob that parsed holds its own root, so re-encoding from it
        // must succeed.
        let _ = kith_codec::encode(&decoded.graph, decoded.root);
    }
});
