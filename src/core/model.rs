use serde::{Deserialize, Serialize};

use super::shared::{BoneWeights, Normal, Position, TexCoord};

/// Top level of a model document.
/// It carries the format version and a list of geometries ([Geometry]). Only the first
/// geometry takes part in a conversion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Model {
    pub format_version: String,
    #[serde(rename = "minecraft:geometry")]
    pub geometries: Vec<Geometry>,
}

impl Model {
    pub fn new(format_version: &str, geometries: Vec<Geometry>) -> Self {
        Self {
            format_version: format_version.to_owned(),
            geometries,
        }
    }

    pub fn first_geometry(&self) -> Option<&Geometry> {
        self.geometries.first()
    }
}


/// A named node owning a skeleton and the meshes skinned to it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    pub bones: Vec<Bone>,
    pub meshes: Vec<Mesh>,
    pub description: Description,
}

impl Geometry {
    pub fn new(identifier: &str) -> Self {
        Self {
            bones: Vec::new(),
            meshes: Vec::new(),
            description: Description {
                identifier: identifier.to_owned(),
            },
        }
    }

    pub fn get_identifier(&self) -> &str {
        &self.description.identifier
    }
}


#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Description {
    pub identifier: String,
}


#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bone {
    pub name: String,
    pub parent: String,
    pub pivot: [i32; 3],
    pub scale: [i32; 3],
}


/// One drawable unit.
///
/// `positions` is addressed by the entries of `triangles`. The attribute channels in `uv_sets`
/// and `normal_sets` hold one value per vertex instance, so for meshes produced by the importer
/// every channel has exactly as many entries as `positions`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mesh {
    pub meta_material: String,
    pub normal_sets: Vec<Vec<Normal>>,
    pub positions: Vec<Position>,
    pub triangles: Vec<usize>,
    pub uv_sets: Vec<Vec<TexCoord>>,
    pub weights: Vec<BoneWeights>,
}

impl Mesh {
    /// Returns the first uv channel, the only one the converters read.
    pub fn uv_channel(&self) -> Option<&[TexCoord]> {
        self.uv_sets.first().map(Vec::as_slice)
    }

    /// Returns the first normal channel, the only one the converters read.
    pub fn normal_channel(&self) -> Option<&[Normal]> {
        self.normal_sets.first().map(Vec::as_slice)
    }

    pub fn num_faces(&self) -> usize {
        self.triangles.len() / 3
    }

    pub fn get_faces(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.triangles.chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
    }
}
