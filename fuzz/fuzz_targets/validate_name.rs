#![no_main]

use libfuzzer_sys::fuzz_target;
use skill_init::validate_name;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        if validate_name(name).is_ok() {
            assert!(!name.contains(['/', '\\', '.', ' ']));
            assert_eq!(name, name.to_lowercase());
        }
    }
});
