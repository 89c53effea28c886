//! SKILL.md template rendering.

/// Turn a skill name into a heading: hyphens become spaces and each run of
/// cased letters starts with an uppercase letter followed by lowercase ones.
///
/// Digits do not count as cased, so the letter after a digit is uppercased
/// (`2fa-tool` becomes `2Fa Tool`).
pub fn title_case(name: &str) -> String {
    let mut title = String::with_capacity(name.len());
    let mut previous_cased = false;

    for c in name.chars() {
        let c = if c == '-' { ' ' } else { c };
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && !previous_cased {
            title.extend(c.to_uppercase());
        } else if cased {
            title.extend(c.to_lowercase());
        } else {
            title.push(c);
        }
        previous_cased = cased;
    }

    title
}

/// Render the SKILL.md descriptor for a freshly created skill.
pub fn render_skill_md(name: &str) -> String {
    let title = title_case(name);
    format!(
        "---
name: {name}
description: [TODO: Add a concise description of what this skill does and when to use it]
---

# {title}

## Overview
[TODO: Describe the skill's purpose]

## Usage
[TODO: Describe how to use the skill]

## Resources
* Scripts are in `scripts/`
* References are in `references/`
* Assets are in `assets/`
"
    )
}
