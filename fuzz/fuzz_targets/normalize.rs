#![no_main]

use enumgen::{GenerationRequest, normalize, normalize_constants, render_class};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let identifiers = normalize(s, false);
        assert!(identifiers
            .iter()
            .all(|id| id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')));
        assert_eq!(normalize(&identifiers.join(","), false), identifiers);

        if let Ok(request) = GenerationRequest::new("fuzz", "x").validate() {
            let _ = render_class(&request, &normalize_constants(s, true));
        }
    }
});
