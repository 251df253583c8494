//! Tests for ScaffoldService

use std::io;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};
use std::sync::{Arc, Mutex};

use rstest::rstest;
use tempfile::TempDir;

use moltron::application::services::ScaffoldService;
use moltron::application::ApplicationError;
use moltron::config::Settings;
use moltron::domain::{Aesthetic, DomainError, ProjectConfig, Theme, COMPONENTS};
use moltron::infrastructure::traits::{CommandRunner, RealFileSystem};
use moltron::util::testing;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Call {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

/// Mock runner that records every invocation.
///
/// The first call answers the version query; `fail_at` makes the call with
/// that (zero-based) index exit non-zero.
struct MockCommandRunner {
    version: String,
    fail_at: Option<usize>,
    spawn_error: bool,
    calls: Mutex<Vec<Call>>,
}

impl MockCommandRunner {
    fn new(version: &str) -> Self {
        Self {
            version: version.to_string(),
            fail_at: None,
            spawn_error: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing_at(version: &str, index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::new(version)
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(unix)]
fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, cmd: &str, args: &[&str], cwd: Option<&Path>) -> io::Result<Output> {
        let mut calls = self.calls.lock().unwrap();
        let index = calls.len();
        calls.push(Call {
            program: cmd.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.map(Path::to_path_buf),
        });

        if self.spawn_error {
            return Err(io::Error::new(io::ErrorKind::NotFound, "No such file or directory"));
        }
        if self.fail_at == Some(index) {
            return Ok(Output {
                status: exit_status(1),
                stdout: Vec::new(),
                stderr: b"npm ERR! network timeout\n".to_vec(),
            });
        }
        let stdout = if index == 0 {
            format!("v{}\n", self.version).into_bytes()
        } else {
            Vec::new()
        };
        Ok(Output {
            status: exit_status(0),
            stdout,
            stderr: Vec::new(),
        })
    }
}

fn service(cmd: Arc<MockCommandRunner>) -> ScaffoldService {
    testing::init_test_setup();
    ScaffoldService::new(
        Arc::new(RealFileSystem),
        cmd,
        Arc::new(Settings::default()),
    )
}

fn project(theme: Theme) -> ProjectConfig {
    ProjectConfig::new("acme", Aesthetic::Brutalist, theme).unwrap()
}

#[test]
fn given_old_runtime_when_init_then_fails_without_scaffolding() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let cmd = Arc::new(MockCommandRunner::new("16.0.0"));
    let service = service(Arc::clone(&cmd));

    // Act
    let result = service.init_project(&project(Theme::Dark), temp.path());

    // Assert
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::IncompatibleRuntime { .. })
    ));
    assert!(err.to_string().contains("18.17"), "got: {}", err);
    let calls = cmd.calls();
    assert_eq!(calls.len(), 1, "only the version query may run");
    assert_eq!(calls[0].program, "node");
    assert_eq!(calls[0].args, vec!["--version"]);
}

#[rstest]
#[case("18.16.1", false)]
#[case("18.17.0", true)]
#[case("20.1.0", true)]
#[case("17.99.0", false)]
fn given_runtime_version_when_init_then_gate_matches_minimum(
    #[case] version: &str,
    #[case] expected_ok: bool,
) {
    let temp = TempDir::new().unwrap();
    let cmd = Arc::new(MockCommandRunner::new(version));
    let service = service(Arc::clone(&cmd));

    let result = service.init_project(&project(Theme::Light), temp.path());

    assert_eq!(result.is_ok(), expected_ok, "version {}", version);
}

#[test]
fn given_all_steps_succeed_when_init_then_runs_full_sequence_in_order() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let cmd = Arc::new(MockCommandRunner::new("20.1.0"));
    let service = service(Arc::clone(&cmd));

    // Act
    service
        .init_project(&project(Theme::Dark), temp.path())
        .unwrap();

    // Assert
    let calls = cmd.calls();
    assert_eq!(calls.len(), 1 + 1 + 1 + COMPONENTS.len() + 1);

    let project_dir = temp.path().join("acme");
    let app_dir = project_dir.join("my-app");
    assert!(project_dir.is_dir(), "project directory is created");

    assert_eq!(calls[1].program, "npx");
    assert_eq!(calls[1].args[0], "create-next-app@latest");
    assert_eq!(calls[1].cwd.as_deref(), Some(project_dir.as_path()));

    assert_eq!(
        calls[2].args,
        vec!["shadcn@latest", "init", "--yes", "--base-color", "neutral"]
    );
    assert_eq!(calls[2].cwd.as_deref(), Some(app_dir.as_path()));

    let installed: Vec<_> = calls[3..11].iter().map(|c| c.args[2].clone()).collect();
    assert_eq!(installed, COMPONENTS);

    let last = calls.last().unwrap();
    assert_eq!(last.program, "npm");
    assert_eq!(last.args[0], "install");
    assert!(last.args.contains(&"framer-motion@latest".to_string()));
}

#[test]
fn given_light_theme_when_init_then_uses_stone_base_color() {
    let temp = TempDir::new().unwrap();
    let cmd = Arc::new(MockCommandRunner::new("22.3.0"));
    let service = service(Arc::clone(&cmd));

    service
        .init_project(&project(Theme::Light), temp.path())
        .unwrap();

    assert!(cmd.calls()[2].args.contains(&"stone".to_string()));
}

#[test]
fn given_fifth_component_fails_when_init_then_later_steps_never_run() {
    // Arrange: calls are version, generator, ui init, then components
    let temp = TempDir::new().unwrap();
    let fifth_component = 3 + 4;
    let cmd = Arc::new(MockCommandRunner::failing_at("20.1.0", fifth_component));
    let service = service(Arc::clone(&cmd));

    // Act
    let result = service.init_project(&project(Theme::Dark), temp.path());

    // Assert
    match result {
        Err(ApplicationError::StepFailed {
            step,
            message,
            exit_code,
        }) => {
            assert_eq!(step, "install separator");
            assert_eq!(message, "npm ERR! network timeout");
            assert_eq!(exit_code, Some(1));
        }
        other => panic!("expected StepFailed, got {:?}", other),
    }

    let calls = cmd.calls();
    assert_eq!(calls.len(), fifth_component + 1);
    let attempted: Vec<_> = calls.iter().flat_map(|c| c.args.clone()).collect();
    for never in ["scroll-area", "tooltip", "dialog", "install"] {
        assert!(
            !attempted.contains(&never.to_string()),
            "{} must not be attempted",
            never
        );
    }
}

#[test]
fn given_runtime_missing_when_init_then_reports_spawn_error() {
    let temp = TempDir::new().unwrap();
    let cmd = Arc::new(MockCommandRunner {
        spawn_error: true,
        ..MockCommandRunner::new("20.1.0")
    });
    let service = service(Arc::clone(&cmd));

    let err = service
        .init_project(&project(Theme::Dark), temp.path())
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::StepFailed {
            exit_code: None,
            ..
        }
    ));
    assert_eq!(cmd.calls().len(), 1);
}

#[test]
fn given_unparseable_version_when_init_then_fails() {
    let temp = TempDir::new().unwrap();
    let cmd = Arc::new(MockCommandRunner::new("lts-hydrogen"));
    let service = service(Arc::clone(&cmd));

    let err = service
        .init_project(&project(Theme::Dark), temp.path())
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::InvalidVersion(_))
    ));
}

#[test]
fn given_observer_when_init_then_notified_before_each_step() {
    let temp = TempDir::new().unwrap();
    let cmd = Arc::new(MockCommandRunner::new("20.1.0"));
    let service = service(Arc::clone(&cmd));
    let mut labels = Vec::new();

    service
        .init_project_with(&project(Theme::Dark), temp.path(), |step| {
            labels.push(step.label.clone())
        })
        .unwrap();

    assert_eq!(labels.len(), 11);
    assert_eq!(labels[0], "create Next.js project");
    assert_eq!(labels[10], "install dependencies");
}

#[test]
fn given_existing_project_dir_when_init_then_reuses_it() {
    let temp = TempDir::new().unwrap();
    let project_dir = temp.path().join("acme");
    std::fs::create_dir_all(&project_dir).unwrap();
    std::fs::write(project_dir.join("keep.txt"), "x").unwrap();
    let cmd = Arc::new(MockCommandRunner::new("20.1.0"));
    let service = service(Arc::clone(&cmd));

    service
        .init_project(&project(Theme::Dark), temp.path())
        .unwrap();

    assert!(project_dir.join("keep.txt").exists());
}
