//! Scaffolding for opencode skills.
//!
//! A skill is a directory holding a `SKILL.md` descriptor plus `scripts/`,
//! `references/` and `assets/` subdirectories. Skills live either in the
//! current project (`./.opencode/skill/<name>`) or globally
//! (`~/.config/opencode/skill/<name>`).
//!
//! ```no_run
//! use skill_init::{create_skill, Roots, Scope, SkillDescriptor};
//!
//! let roots = Roots::from_env()?;
//! let created = create_skill(&SkillDescriptor::new("pdf-export", Scope::Local), &roots)?;
//! println!("{}", created.skill_md.display());
//! # Ok::<(), skill_init::InitError>(())
//! ```

pub mod error;
pub mod init;
pub mod paths;
pub mod skill;
pub mod template;
pub mod validation;

pub use error::InitError;
pub use init::{create_skill, create_skill_at, CreatedSkill};
pub use paths::{resolve_base_path, Roots};
pub use skill::{Scope, SkillDescriptor, RESOURCE_DIRS, SKILL_FILE_NAME};
pub use template::{render_skill_md, title_case};
pub use validation::validate_name;
