//! Project scaffolding service
//!
//! Runs the fixed sequence of external generator and installer commands
//! that turns an empty directory into a Next.js + shadcn/ui project.
//! Every step is awaited to completion; the first failure aborts the run
//! and leaves whatever the tools already wrote in place.

use std::path::{Path, PathBuf};
use std::process::Output;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{scaffold_plan, ProjectConfig, RuntimeVersion, ScaffoldStep};
use crate::infrastructure::traits::{CommandRunner, FileSystem};

/// Project scaffolding service.
pub struct ScaffoldService {
    fs: Arc<dyn FileSystem>,
    cmd: Arc<dyn CommandRunner>,
    settings: Arc<Settings>,
}

impl ScaffoldService {
    /// Create a new scaffolding service.
    pub fn new(
        fs: Arc<dyn FileSystem>,
        cmd: Arc<dyn CommandRunner>,
        settings: Arc<Settings>,
    ) -> Self {
        Self { fs, cmd, settings }
    }

    /// Scaffold `config` below `base_dir`.
    pub fn init_project(&self, config: &ProjectConfig, base_dir: &Path) -> ApplicationResult<()> {
        self.init_project_with(config, base_dir, |_| {})
    }

    /// Scaffold `config` below `base_dir`, calling `on_step` before each external step.
    ///
    /// # Steps
    /// 1. Ensure `<base_dir>/<name>` exists
    /// 2. Check the runtime version (no scaffolding runs if incompatible)
    /// 3. Run the generator, UI init, component installs and dependency install in order
    #[instrument(skip(self, on_step), fields(project = %config.name))]
    pub fn init_project_with<F>(
        &self,
        config: &ProjectConfig,
        base_dir: &Path,
        mut on_step: F,
    ) -> ApplicationResult<()>
    where
        F: FnMut(&ScaffoldStep),
    {
        let project_dir = self.ensure_project_dir(config, base_dir)?;

        let version = self.check_runtime()?;
        info!("runtime {} ok", version);

        let toolchain = self.settings.toolchain();
        let steps = scaffold_plan(config, &toolchain);
        debug!("init_project: {} steps", steps.len());

        for step in &steps {
            on_step(step);
            let dir = step.resolve_dir(&project_dir, &toolchain);
            self.run_step(step, &dir)?;
        }

        info!("project {} scaffolded", config.name);
        Ok(())
    }

    /// Create the project directory if absent.
    pub fn ensure_project_dir(
        &self,
        config: &ProjectConfig,
        base_dir: &Path,
    ) -> ApplicationResult<PathBuf> {
        let dir = config.project_dir(base_dir);
        if !self.fs.is_dir(&dir) {
            debug!("ensure_project_dir: creating {}", dir.display());
            self.fs
                .create_dir_all(&dir)
                .with_path_context("create project directory", &dir)?;
        }
        Ok(dir)
    }

    /// Query the installed runtime and verify it meets the minimum version.
    pub fn check_runtime(&self) -> ApplicationResult<RuntimeVersion> {
        let runtime = &self.settings.runtime;
        let step = format!("{} --version", runtime);
        let output = self
            .cmd
            .run(runtime, &["--version"], None)
            .map_err(|e| ApplicationError::StepFailed {
                step: step.clone(),
                message: e.to_string(),
                exit_code: None,
            })?;
        check_status(&step, &output)?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!("check_runtime: {:?}", stdout.trim());
        let version = RuntimeVersion::parse(&stdout)?;
        version.ensure_compatible()?;
        Ok(version)
    }

    fn run_step(&self, step: &ScaffoldStep, dir: &Path) -> ApplicationResult<()> {
        info!("{}", step.label);
        debug!("run_step: {} (cwd={})", step, dir.display());

        let output = self
            .cmd
            .run(&step.program, &step.args(), Some(dir))
            .map_err(|e| ApplicationError::StepFailed {
                step: step.label.clone(),
                message: format!("{}: {}", step.program, e),
                exit_code: None,
            })?;
        check_status(&step.label, &output)
    }
}

/// Map a non-zero exit status to [`ApplicationError::StepFailed`].
fn check_status(step: &str, output: &Output) -> ApplicationResult<()> {
    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let message = if !stderr.trim().is_empty() {
        stderr.trim().to_string()
    } else if !stdout.trim().is_empty() {
        stdout.trim().to_string()
    } else {
        format!("exited with {}", output.status)
    };

    Err(ApplicationError::StepFailed {
        step: step.to_string(),
        message,
        exit_code: output.status.code(),
    })
}
