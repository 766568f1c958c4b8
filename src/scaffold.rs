use crate::{
    errors::{FileOperation, IoError},
    manifest::{FileSpec, Manifest},
    utils::module_name,
};
use colored::Colorize;
use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    #[error("project path must not be empty")]
    #[diagnostic(
        code(goforge::scaffold::empty_project_path),
        help("Pass the destination directory with --project or -p.")
    )]
    EmptyProjectPath,

    #[error("could not derive a module name from '{path}'")]
    #[diagnostic(
        code(goforge::scaffold::module_name),
        help("The last segment of the project path becomes the module name; point at a named directory.")
    )]
    ModuleName { path: PathBuf },

    #[error("I/O error within scaffold domain")]
    #[diagnostic(code(goforge::scaffold::io))]
    Io(#[from] IoError),
}

/// Materializes `manifest` under `project_path` and returns the derived
/// module name.
///
/// Directories come first (creation is idempotent), then files in manifest
/// order; a pre-existing file is silently truncated and replaced. Nothing is
/// rolled back on failure, so a mid-sequence error leaves partial output on
/// disk.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if:
///
/// - `project_path` is empty, or no module name can be derived from it.
///   Both are reported before any filesystem side effect.
/// - A directory cannot be created, a file cannot be written, or permission
///   bits cannot be applied.
pub fn materialize(project_path: &str, manifest: &Manifest) -> Result<String, ScaffoldError> {
    if project_path.is_empty() {
        return Err(ScaffoldError::EmptyProjectPath);
    }

    let module = module_name(project_path).ok_or_else(|| ScaffoldError::ModuleName {
        path: PathBuf::from(project_path),
    })?;

    log::debug!(
        "scaffolding '{}' with module name '{}'",
        project_path,
        module
    );

    let root = Path::new(project_path);

    for dir in &manifest.directories {
        create_directory(&root.join(dir.path), dir.mode)?;
    }

    for file in &manifest.files {
        write_file(root, file, &module)?;
    }

    Ok(module)
}

fn create_directory(path: &Path, mode: u32) -> Result<(), ScaffoldError> {
    std::fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.to_path_buf(), error))?;

    set_mode(path, mode)?;

    Ok(())
}

/// Writes one [`FileSpec`] under `root`, creating its parent directory if a
/// manifest entry did not already, and prints a `create` line.
fn write_file(root: &Path, spec: &FileSpec, module: &str) -> Result<(), ScaffoldError> {
    let path = root.join(spec.path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|error| IoError::new(FileOperation::Mkdir, parent.to_path_buf(), error))?;
    }

    let contents = (spec.content)(module);

    std::fs::write(&path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.clone(), error))?;

    set_mode(&path, spec.mode)?;

    let msg = format!("{} {}", "create".green(), path.display());

    println!("{}", &msg);

    Ok(())
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<(), ScaffoldError> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
        .map_err(|error| IoError::new(FileOperation::Chmod, path.to_path_buf(), error))?;

    Ok(())
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> Result<(), ScaffoldError> {
    Ok(())
}
