use std::path::PathBuf;
use thiserror::Error;

/// Failures the comparison engine distinguishes from plain I/O errors.
///
/// Everything else flows through `anyhow` with context attached at the call site.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("path {} does not exist", .0.display())]
    MissingRoot(PathBuf),
    #[error("cannot decode {} as {encoding}", .path.display())]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },
    #[error("comparison interrupted")]
    Interrupted,
    #[error("report {} has already been finalized", .0.display())]
    AlreadyFinalized(PathBuf),
}
