//! Command dispatch: maps parsed arguments onto services.

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::services::render_seo;
use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::domain::{
    generate_seo_config, generate_theme_variables, Aesthetic, ProjectConfig, Theme,
};
use crate::infrastructure::{InfraError, ServiceContainer};

const INIT_USAGE: &str = "project name required\n\nUsage: moltron init <name> [--aesthetic=<id>] [--dark]";

/// Run the parsed command. Relative paths are resolved against `work_dir`.
pub fn execute_command(cli: &Cli, container: &ServiceContainer, work_dir: &Path) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Init {
            name,
            aesthetic,
            dark,
        }) => cmd_init(
            container,
            work_dir,
            name.as_deref(),
            aesthetic.as_deref(),
            *dark,
        ),
        Some(Commands::Component { name }) => cmd_placeholder("Component", name.as_deref()),
        Some(Commands::Page { name }) => cmd_placeholder("Page", name.as_deref()),
        Some(Commands::Theme {
            aesthetic,
            dark,
            output,
        }) => cmd_theme(
            container,
            work_dir,
            aesthetic.as_deref(),
            *dark,
            output.as_deref(),
        ),
        Some(Commands::Seo {
            name,
            description,
            output,
        }) => cmd_seo(
            container,
            work_dir,
            name,
            description.as_deref(),
            output.as_deref(),
        ),
        Some(Commands::Config) => cmd_config(container),
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
        None => Cli::command()
            .print_help()
            .map_err(|e| InfraError::io("print help", e).into()),
    }
}

#[instrument(skip(container, work_dir))]
fn cmd_init(
    container: &ServiceContainer,
    work_dir: &Path,
    name: Option<&str>,
    aesthetic: Option<&str>,
    dark: bool,
) -> CliResult<()> {
    let name = name.ok_or_else(|| CliError::Usage(INIT_USAGE.to_string()))?;

    let settings = &container.settings;
    let aesthetic = Aesthetic::resolve(aesthetic.unwrap_or(settings.default_aesthetic.as_str()));
    let config = ProjectConfig::new(name, aesthetic, Theme::from_dark_flag(dark))?;
    debug!("cmd_init: {:?}", config);

    output::header(&format!(
        "Creating {} with {} aesthetic ({})...",
        config.name, config.aesthetic, config.theme
    ));

    container
        .scaffold_service()
        .init_project_with(&config, work_dir, |step| output::step(&step.label))?;

    output::success("Project initialized successfully!");
    println!();
    output::info("Next steps:\n");
    output::detail(&format!("cd {}/{}", config.name, settings.app_name));
    output::detail(&format!("{} run dev", settings.package_manager));
    output::detail(&format!(
        "moltron theme --aesthetic={}{} --output app/globals.css",
        config.aesthetic,
        if dark { " --dark" } else { "" }
    ));
    Ok(())
}

fn cmd_placeholder(kind: &str, name: Option<&str>) -> CliResult<()> {
    debug!("cmd_placeholder: {} {:?}", kind, name);
    output::info(&format!("{} generation coming soon...\n", kind));
    Ok(())
}

#[instrument(skip(container, work_dir))]
fn cmd_theme(
    container: &ServiceContainer,
    work_dir: &Path,
    aesthetic: Option<&str>,
    dark: bool,
    target: Option<&Path>,
) -> CliResult<()> {
    let id = aesthetic.unwrap_or(container.settings.default_aesthetic.as_str());
    let block = generate_theme_variables(id, Theme::from_dark_flag(dark));

    match target {
        Some(target) => {
            let target = resolve(work_dir, target);
            if container.fs.is_dir(&target) {
                return Err(CliError::InvalidArgs(format!(
                    "--output must be a file, not a directory: {}",
                    target.display()
                )));
            }
            container.artifact_service().inject_theme(&target, block)?;
            output::success(&format!("Theme written to {}", target.display()));
        }
        None => output::info(&block.to_css()),
    }
    Ok(())
}

#[instrument(skip(container, work_dir))]
fn cmd_seo(
    container: &ServiceContainer,
    work_dir: &Path,
    name: &str,
    description: Option<&str>,
    target: Option<&Path>,
) -> CliResult<()> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidArgs("name must not be empty".into()));
    }
    let seo = generate_seo_config(name, description);

    match target {
        Some(target) => {
            let target = resolve(work_dir, target);
            container.artifact_service().write_seo(&target, &seo)?;
            output::success(&format!("Metadata written to {}", target.display()));
        }
        None => output::info(&render_seo(&seo)?),
    }
    Ok(())
}

fn cmd_config(container: &ServiceContainer) -> CliResult<()> {
    output::info(&container.settings.to_toml()?);
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

fn resolve(work_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        work_dir.join(path)
    }
}
