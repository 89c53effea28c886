use clap::Parser;
use tracing_subscriber::EnvFilter;

use skill_init::{create_skill, InitError, Roots, Scope, SkillDescriptor};

#[derive(Parser)]
#[command(name = "skill-init", version, about = "Initialize a new opencode skill")]
struct Cli {
    /// Name of the skill (lowercase, hyphens)
    name: String,
    /// Install skill globally (~/.config/opencode/skill)
    #[arg(long)]
    global: bool,
    /// Log each file-system step to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let descriptor = SkillDescriptor::new(cli.name, Scope::from_global_flag(cli.global));
    let exit_code = match run(&descriptor) {
        Ok(()) => 0,
        Err(err) => {
            tracing::debug!(error = ?err, "skill creation failed");
            println!("Error: {err}");
            1
        }
    };

    std::process::exit(exit_code);
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(descriptor: &SkillDescriptor) -> Result<(), InitError> {
    let roots = Roots::from_env()?;
    let created = create_skill(descriptor, &roots)?;

    println!(
        "Skill '{}' created successfully at {}",
        descriptor.name,
        created.path.display()
    );
    println!("Next steps:");
    println!("1. Edit {}", created.skill_md.display());
    println!("2. Add scripts or references as needed.");
    Ok(())
}
