use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::model::Model;

#[remain::sorted]
#[derive(Error, Debug)]
pub enum Err {
    #[error("IO Error on {path:?}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("Json Error: {0}")]
    Json(#[from] serde_json::Error),
}


pub fn from_str(json: &str) -> Result<Model, Err> {
    Ok(serde_json::from_str(json)?)
}

/// Serializes the model, either compact or indented.
pub fn to_string(model: &Model, pretty: bool) -> Result<String, Err> {
    let out = if pretty {
        serde_json::to_string_pretty(model)?
    } else {
        serde_json::to_string(model)?
    };
    Ok(out)
}

pub fn load_model<P: AsRef<Path> + Debug>(path: P) -> Result<Model, Err> {
    let json = fs::read_to_string(&path)
        .map_err(|source| Err::Io { path: path.as_ref().to_path_buf(), source })?;
    let model = from_str(&json)?;
    log::debug!("Loaded {:?} with {} geometries.", path, model.geometries.len());
    Ok(model)
}

pub fn save_model<P: AsRef<Path> + Debug>(model: &Model, path: P, pretty: bool) -> Result<(), Err> {
    let json = to_string(model, pretty)?;
    fs::write(&path, json)
        .map_err(|source| Err::Io { path: path.as_ref().to_path_buf(), source })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Geometry, Mesh};

    fn model() -> Model {
        let mut geometry = Geometry::new("geometry.json_test");
        geometry.meshes.push(Mesh {
            meta_material: "mat".to_owned(),
            positions: vec![[0.5, 1.0, -2.0]],
            uv_sets: vec![vec![[0.25, 0.75]]],
            normal_sets: vec![vec![[0.0, 1.0, 0.0, 1.0]]],
            triangles: vec![],
            weights: vec![vec![1]],
        });
        Model::new("1.14.0", vec![geometry])
    }

    #[test]
    fn compact_and_pretty_agree() {
        let compact = to_string(&model(), false).unwrap();
        let pretty = to_string(&model(), true).unwrap();
        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
        assert_eq!(from_str(&compact).unwrap(), model());
        assert_eq!(from_str(&pretty).unwrap(), model());
    }

    #[test]
    fn field_names() {
        let compact = to_string(&model(), false).unwrap();
        assert!(compact.starts_with(r#"{"format_version":"1.14.0","minecraft:geometry":[{"bones":[],"meshes":[{"meta_material":"mat","#));
        assert!(compact.contains(r#""description":{"identifier":"geometry.json_test"}"#));
    }

    #[test]
    fn invalid_documents() {
        assert!(matches!(from_str("{"), Err(Err::Json(_))));
        // positions must have exactly three components
        assert!(matches!(
            from_str(r#"{ "minecraft:geometry": [{ "meshes": [{ "positions": [[1, 2]] }] }] }"#),
            Err(Err::Json(_))
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(load_model("tests/data/does_not_exist.json"), Err(Err::Io { .. })));
    }
}
