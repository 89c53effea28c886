//! Skill creation: collision check, directory layout, and SKILL.md write.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::InitError;
use crate::paths::{resolve_base_path, Roots};
use crate::skill::{SkillDescriptor, RESOURCE_DIRS, SKILL_FILE_NAME};
use crate::template::render_skill_md;
use crate::validation::validate_name;

/// Where a newly created skill ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedSkill {
    /// The skill directory, `<base>/<name>`.
    pub path: PathBuf,
    /// The descriptor file inside it.
    pub skill_md: PathBuf,
}

/// Validate the name, resolve the scope's base path against `roots`, and
/// create the skill there.
pub fn create_skill(descriptor: &SkillDescriptor, roots: &Roots) -> Result<CreatedSkill, InitError> {
    validate_name(&descriptor.name)?;
    let base_path = resolve_base_path(descriptor.scope, roots)?;
    debug!(scope = ?descriptor.scope, base = %base_path.display(), "resolved base path");
    create_skill_at(&descriptor.name, &base_path)
}

/// Create the skill `name` under `base_path`.
///
/// Fails with [`InitError::AlreadyExists`] if anything is already at
/// `<base_path>/<name>`, without touching the file system. Directories
/// created before a later failure are left in place.
pub fn create_skill_at(name: &str, base_path: &Path) -> Result<CreatedSkill, InitError> {
    validate_name(name)?;

    let skill_path = base_path.join(name);
    if fs::symlink_metadata(&skill_path).is_ok() {
        return Err(InitError::AlreadyExists(skill_path));
    }

    create_dir_all(base_path)?;

    // Non-recursive so a skill directory created concurrently is reported
    // instead of silently shared.
    match fs::create_dir(&skill_path) {
        Ok(()) => debug!(path = %skill_path.display(), "created skill directory"),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            return Err(InitError::AlreadyExists(skill_path));
        }
        Err(source) => {
            return Err(InitError::CreateDirFailed {
                path: skill_path,
                source,
            });
        }
    }

    for dir in RESOURCE_DIRS {
        create_dir_all(&skill_path.join(dir))?;
    }

    let skill_md = skill_path.join(SKILL_FILE_NAME);
    write_new_file(&skill_md, &render_skill_md(name))?;
    info!(skill = name, path = %skill_path.display(), "skill created");

    Ok(CreatedSkill {
        path: skill_path,
        skill_md,
    })
}

fn create_dir_all(path: &Path) -> Result<(), InitError> {
    debug!(path = %path.display(), "creating directory");
    fs::create_dir_all(path).map_err(|source| InitError::CreateDirFailed {
        path: path.to_path_buf(),
        source,
    })
}

fn write_new_file(path: &Path, content: &str) -> Result<(), InitError> {
    debug!(path = %path.display(), "writing file");
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .and_then(|mut file| file.write_all(content.as_bytes()))
        .map_err(|source| InitError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })
}
