use execute::Execute;
use miette::Diagnostic;
use std::{io, path::Path, process::Command};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum InitializerError {
    #[error("unable to launch '{program}' in '{dir}'")]
    #[diagnostic(
        code(goforge::initializer::launch),
        help("Make sure the Go toolchain is installed and on your PATH.")
    )]
    Launch {
        program: String,
        dir: std::path::PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' exited with {status} while initializing module '{module}': {stderr}")]
    #[diagnostic(code(goforge::initializer::exit_status))]
    Failed {
        program: String,
        module: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Runs ecosystem-specific module setup inside a freshly scaffolded
/// directory. Implementations must treat a zero exit as the only success.
pub trait ModuleInitializer {
    fn init(&self, dir: &Path, module: &str) -> Result<(), InitializerError>;
}

/// Invokes `go mod init <module>` with the project directory as the working
/// directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoModInitializer;

const GO: &str = "go";

impl ModuleInitializer for GoModInitializer {
    fn init(&self, dir: &Path, module: &str) -> Result<(), InitializerError> {
        let mut command = Command::new(GO);
        command.arg("mod").arg("init").arg(module).current_dir(dir);

        log::debug!("running `go mod init {}` in {}", module, dir.display());

        let output = command
            .execute_output()
            .map_err(|error| InitializerError::Launch {
                program: GO.to_string(),
                dir: dir.to_path_buf(),
                source: error,
            })?;

        log::debug!("go mod init stdout: {}", String::from_utf8_lossy(&output.stdout));
        log::debug!("go mod init stderr: {}", String::from_utf8_lossy(&output.stderr));

        if output.status.success() {
            Ok(())
        } else {
            Err(InitializerError::Failed {
                program: GO.to_string(),
                module: module.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}
