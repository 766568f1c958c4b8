use crate::{
    initializer::{self, GoModInitializer, ModuleInitializer},
    manifest::Manifest,
    scaffold,
};
use std::path::Path;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum GoforgeError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Scaffold(#[from] scaffold::ScaffoldError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Initializer(#[from] initializer::InitializerError),
}

/// Scaffolds the default (full) manifest under `project_path` and runs
/// `go mod init` in the new directory.
///
/// # Errors
///
/// Returns a [`GoforgeError`] if:
///
/// - The project path is empty or yields no module name.
/// - A directory or file cannot be created or written to.
/// - The module initializer cannot be launched or exits non-zero. Files
///   already written stay on disk in that case.
pub fn create_project(project_path: &str) -> Result<(), GoforgeError> {
    create_project_with(project_path, &Manifest::full(), &GoModInitializer)
}

/// Like [`create_project`], with the manifest and the module initializer as
/// substitution points.
///
/// # Errors
///
/// Same contract as [`create_project`].
pub fn create_project_with(
    project_path: &str,
    manifest: &Manifest,
    initializer: &impl ModuleInitializer,
) -> Result<(), GoforgeError> {
    let module = scaffold::materialize(project_path, manifest)?;

    log::debug!("handing '{}' to the module initializer", module);

    initializer.init(Path::new(project_path), &module)?;

    Ok(())
}
