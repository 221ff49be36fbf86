//! Persistence of generated artifacts.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::GenError;
use crate::problem::Problem;

/// Save generated code under `out_dir`, creating the directory if absent.
///
/// The filename is `{model}_{title}.go` with the model lowercased, so an
/// artifact is traceable to the model that produced it. The output
/// directory is an explicit parameter of the contract, never ambient
/// process state.
pub fn save_generated_code(
    code: &str,
    problem: &Problem,
    model: &str,
    out_dir: &Path,
) -> Result<PathBuf, GenError> {
    std::fs::create_dir_all(out_dir)?;

    let filename = format!("{}_{}.go", model.to_lowercase(), problem.title);
    let path = out_dir.join(filename);
    std::fs::write(&path, code)?;

    info!(artifact = %path.display(), "saved generated code");
    Ok(path)
}
