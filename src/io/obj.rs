use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::model::Model;
use crate::{export, import};

#[remain::sorted]
#[derive(Error, Debug)]
pub enum Err {
    #[error("Export Error: {0}")]
    Export(#[from] export::Err),
    #[error("Import Error: {0}")]
    Import(#[from] import::Err),
    #[error("IO Error on {path:?}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
}


/// Reads the obj file and imports it into a model.
pub fn load_obj<P: AsRef<Path> + Debug>(path: P, cfg: &import::Config) -> Result<Model, Err> {
    let obj = fs::read_to_string(&path)
        .map_err(|source| Err::Io { path: path.as_ref().to_path_buf(), source })?;
    let model = import::import(&obj, cfg)?;
    log::debug!("Imported {:?}.", path);
    Ok(model)
}

/// Exports the model and writes the obj text to the file in one go.
pub fn save_obj<P: AsRef<Path> + Debug>(model: &Model, path: P, cfg: &export::Config) -> Result<(), Err> {
    let obj = export::to_obj_string(model, cfg)?;
    fs::write(&path, obj)
        .map_err(|source| Err::Io { path: path.as_ref().to_path_buf(), source })
}
