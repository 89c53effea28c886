#![no_main]

use libfuzzer_sys::fuzz_target;
use skill_init::{render_skill_md, title_case, validate_name};

fuzz_target!(|data: &[u8]| {
    let Ok(name) = std::str::from_utf8(data) else {
        return;
    };
    if validate_name(name).is_err() {
        return;
    }

    let rendered = render_skill_md(name);
    assert!(rendered.starts_with(&format!("---\nname: {name}\n")));
    assert!(rendered.contains(&format!("\n# {}\n", title_case(name))));
});
