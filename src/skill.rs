//! Core skill types and constants.

/// File name of the skill descriptor.
pub const SKILL_FILE_NAME: &str = "SKILL.md";

/// Resource directories created inside every new skill, in creation order.
pub const RESOURCE_DIRS: [&str; 3] = ["scripts", "references", "assets"];

/// Path components below the working directory for project-local skills.
pub const LOCAL_SKILL_ROOT: [&str; 2] = [".opencode", "skill"];

/// Path components below the home directory for global skills.
pub const GLOBAL_SKILL_ROOT: [&str; 3] = [".config", "opencode", "skill"];

/// Where a skill is installed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    /// `./.opencode/skill`, relative to the working directory.
    #[default]
    Local,
    /// `~/.config/opencode/skill`.
    Global,
}

impl Scope {
    /// Select the scope from the `--global` flag.
    pub const fn from_global_flag(global: bool) -> Self {
        if global {
            Self::Global
        } else {
            Self::Local
        }
    }
}

/// A skill about to be created: its name and the scope it lands in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDescriptor {
    pub name: String,
    pub scope: Scope,
}

impl SkillDescriptor {
    pub fn new(name: impl Into<String>, scope: Scope) -> Self {
        Self {
            name: name.into(),
            scope,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_defaults_to_local() {
        assert_eq!(Scope::default(), Scope::Local);
        assert_eq!(Scope::from_global_flag(false), Scope::Local);
        assert_eq!(Scope::from_global_flag(true), Scope::Global);
    }
}
