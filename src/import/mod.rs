pub(crate) mod record;

use thiserror::Error;

use crate::core::model::{Geometry, Mesh, Model};
use crate::core::shared::{ConfigType, Normal, Position, TexCoord};
use crate::shared::record::flip_v;
use record::{Corner, Record};

pub use crate::shared::record::RecordKind;

#[derive(Debug, Clone)]
pub struct Config {
    pub format_version: String,
    /// Identifier of the geometry wrapping the imported mesh.
    pub identifier: String,
    /// Material assigned to the imported mesh. Obj material groups are not carried over.
    pub meta_material: String,
}

impl ConfigType for Config {
    fn default() -> Self {
        Self {
            format_version: "1.14.0".to_owned(),
            identifier: "geometry.bmesh_obj_import".to_owned(),
            meta_material: "mat_debug_shadercubes".to_owned(),
        }
    }
}

#[remain::sorted]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Err {
    #[error("Line {line}: a face must have exactly 3 corners, found {found}.")]
    FaceArity { line: usize, found: usize },
    #[error("Line {line}: face references {pool} {index}, but only {len} were collected.")]
    IndexOutOfRange { line: usize, pool: RecordKind, index: usize, len: usize },
    #[error("Line {line}: '{field}' is not a valid number.")]
    MalformedNumber { line: usize, field: String },
    #[error("Obj incorrectly converted: mismatched array lengths (uvs: {uvs}, normals: {normals}, weights: {weights}, positions: {positions}).")]
    MismatchedLengths { positions: usize, uvs: usize, normals: usize, weights: usize },
    #[error("Line {line}: {record} record needs {expected} fields, found {found}.")]
    MissingField { line: usize, record: RecordKind, expected: usize, found: usize },
    #[error("The input does not contain any face.")]
    NoFaces,
}


/// Values collected from the vertex records, in the order they appear in the text.
/// Face corners address them with 1-based indices.
#[derive(Debug, Default)]
struct RawPools {
    positions: Vec<Position>,
    tex_coords: Vec<TexCoord>,
    normals: Vec<Normal>,
}

impl RawPools {
    fn resolve<T: Copy>(pool: &[T], kind: RecordKind, index: usize, line: usize) -> Result<T, Err> {
        index.checked_sub(1)
            .and_then(|i| pool.get(i))
            .copied()
            .ok_or(Err::IndexOutOfRange { line, pool: kind, index, len: pool.len() })
    }
}


/// Imports obj text into a model with a single geometry holding a single mesh.
///
/// Every face corner becomes its own vertex instance: its position, uv and normal are copied out
/// of the raw pools, and `triangles` simply counts up from zero. Shared positions are therefore
/// duplicated rather than deduplicated, which keeps all channels co-indexed.
pub fn import(obj: &str, cfg: &Config) -> Result<Model, Err> {
    let obj = obj.replace('\r', "");

    // First pass: collect the raw pools and the faces referencing them.
    let mut pools = RawPools::default();
    let mut faces = Vec::new();
    for (idx, line) in obj.split('\n').enumerate() {
        let line_no = idx + 1;
        match record::parse_line(line, line_no)? {
            Some(Record::Position(p)) => pools.positions.push(p),
            Some(Record::TexCoord([u, v])) => pools.tex_coords.push([u, flip_v(v)]),
            Some(Record::Normal([x, y, z])) => pools.normals.push([x, y, z, 1.0]),
            Some(Record::Face(corners)) => faces.push((line_no, corners)),
            None => {}
        }
    }
    if faces.is_empty() {
        return Err(Err::NoFaces);
    }

    // Second pass: expand every face corner into a vertex instance.
    let mesh = expand(&pools, &faces, cfg)?;
    validate(&mesh)?;

    let mut geometry = Geometry::new(&cfg.identifier);
    geometry.meshes.push(mesh);
    Ok(Model::new(&cfg.format_version, vec![geometry]))
}


fn expand(pools: &RawPools, faces: &[(usize, [Corner; 3])], cfg: &Config) -> Result<Mesh, Err> {
    let num_vertices = faces.len() * 3;
    let mut positions = Vec::with_capacity(num_vertices);
    let mut tex_coords = Vec::with_capacity(num_vertices);
    let mut normals = Vec::with_capacity(num_vertices);
    let mut triangles = Vec::with_capacity(num_vertices);

    for &(line, corners) in faces {
        for corner in corners {
            positions.push(RawPools::resolve(&pools.positions, RecordKind::Position, corner.position, line)?);
            normals.push(RawPools::resolve(&pools.normals, RecordKind::Normal, corner.normal, line)?);
            tex_coords.push(RawPools::resolve(&pools.tex_coords, RecordKind::TexCoord, corner.tex_coord, line)?);
            triangles.push(triangles.len());
        }
    }

    Ok(Mesh {
        meta_material: cfg.meta_material.clone(),
        weights: vec![vec![1]; positions.len()],
        normal_sets: vec![normals],
        positions,
        triangles,
        uv_sets: vec![tex_coords],
    })
}


/// Every vertex instance must own exactly one uv, one normal and one weight list.
fn validate(mesh: &Mesh) -> Result<(), Err> {
    let positions = mesh.positions.len();
    let uvs = mesh.uv_channel().map_or(0, <[_]>::len);
    let normals = mesh.normal_channel().map_or(0, <[_]>::len);
    let weights = mesh.weights.len();
    log::debug!("u: {} n: {} w: {} p: {}", uvs, normals, weights, positions);

    if uvs != positions || normals != positions || weights != positions {
        return Err(Err::MismatchedLengths { positions, uvs, normals, weights });
    }
    Ok(())
}
