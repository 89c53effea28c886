//! Base path resolution for local and global skills.

use std::path::{Path, PathBuf};

use crate::error::InitError;
use crate::skill::{Scope, GLOBAL_SKILL_ROOT, LOCAL_SKILL_ROOT};

/// The directories a skill path can be anchored to, captured once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roots {
    /// Working directory local skills are created under.
    pub cwd: PathBuf,
    /// User home directory, if one could be determined.
    pub home: Option<PathBuf>,
}

impl Roots {
    pub fn new(cwd: impl Into<PathBuf>, home: Option<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            home,
        }
    }

    /// Read the working directory and home directory of the current process.
    pub fn from_env() -> Result<Self, InitError> {
        let cwd = std::env::current_dir().map_err(InitError::CurrentDirUnavailable)?;
        Ok(Self::new(cwd, dirs::home_dir()))
    }
}

/// Resolve the directory skills of the given scope live in.
///
/// Local skills always go under `<cwd>/.opencode/skill`; no search for a
/// project root is done.
pub fn resolve_base_path(scope: Scope, roots: &Roots) -> Result<PathBuf, InitError> {
    match scope {
        Scope::Local => Ok(join_all(&roots.cwd, &LOCAL_SKILL_ROOT)),
        Scope::Global => roots
            .home
            .as_deref()
            .map(|home| join_all(home, &GLOBAL_SKILL_ROOT))
            .ok_or(InitError::HomeDirUnavailable),
    }
}

fn join_all(root: &Path, components: &[&str]) -> PathBuf {
    components
        .iter()
        .fold(root.to_path_buf(), |path, component| path.join(component))
}
