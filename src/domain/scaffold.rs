//! Scaffolding plan: the fixed, ordered list of external invocations

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{ProjectConfig, Toolchain};

/// shadcn/ui components installed into every new project, in install order.
pub const COMPONENTS: [&str; 8] = [
    "button",
    "card",
    "input",
    "badge",
    "separator",
    "scroll-area",
    "tooltip",
    "dialog",
];

/// Runtime dependencies installed in one batch after the components.
pub const DEPENDENCIES: [&str; 5] = [
    "framer-motion@latest",
    "next-seo@latest",
    "lucide-react@latest",
    "clsx@latest",
    "tailwind-merge@latest",
];

const GENERATOR: &str = "create-next-app@latest";
const UI_LIBRARY: &str = "shadcn@latest";

/// Directory a step runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkDir {
    /// `<cwd>/<project name>`
    Project,
    /// `<cwd>/<project name>/<app name>`, created by the generator step
    App,
}

/// One external invocation; an atomic pass/fail gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldStep {
    pub label: String,
    pub program: String,
    pub args: Vec<String>,
    pub dir: WorkDir,
}

impl ScaffoldStep {
    fn new(label: impl Into<String>, program: &str, args: Vec<String>, dir: WorkDir) -> Self {
        Self {
            label: label.into(),
            program: program.to_string(),
            args,
            dir,
        }
    }

    pub fn args(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }

    pub fn resolve_dir(&self, project_dir: &Path, toolchain: &Toolchain) -> PathBuf {
        match self.dir {
            WorkDir::Project => project_dir.to_path_buf(),
            WorkDir::App => project_dir.join(&toolchain.app_name),
        }
    }
}

impl fmt::Display for ScaffoldStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.program, self.args.join(" "))
    }
}

/// Build the ordered step list for a project.
pub fn scaffold_plan(config: &ProjectConfig, toolchain: &Toolchain) -> Vec<ScaffoldStep> {
    let to_args = |args: &[&str]| args.iter().map(|a| a.to_string()).collect::<Vec<_>>();
    let mut steps = Vec::with_capacity(3 + COMPONENTS.len());

    steps.push(ScaffoldStep::new(
        "create Next.js project",
        &toolchain.runner,
        vec![
            GENERATOR.to_string(),
            toolchain.app_name.clone(),
            "--typescript".into(),
            "--tailwind".into(),
            "--eslint".into(),
            "--app".into(),
            "--no-src-dir".into(),
            "--import-alias=@/*".into(),
            format!("--use-{}", toolchain.package_manager),
            "--no-turbopack".into(),
        ],
        WorkDir::Project,
    ));

    steps.push(ScaffoldStep::new(
        "initialize shadcn/ui",
        &toolchain.runner,
        to_args(&[
            UI_LIBRARY,
            "init",
            "--yes",
            "--base-color",
            config.theme.base_color(),
        ]),
        WorkDir::App,
    ));

    for component in COMPONENTS {
        steps.push(ScaffoldStep::new(
            format!("install {}", component),
            &toolchain.runner,
            to_args(&[UI_LIBRARY, "add", component, "-y"]),
            WorkDir::App,
        ));
    }

    let mut install = vec!["install".to_string()];
    install.extend(DEPENDENCIES.iter().map(|d| d.to_string()));
    steps.push(ScaffoldStep::new(
        "install dependencies",
        &toolchain.package_manager,
        install,
        WorkDir::App,
    ));

    steps
}
