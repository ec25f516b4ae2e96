use std::fmt::{self, Write};

use thiserror::Error;

use crate::core::model::{Mesh, Model};
use crate::core::shared::{ConfigType, Normal, TexCoord};
use crate::shared::record::{self, flip_v};

#[derive(Debug, Clone)]
pub struct Config {
    /// Name written to the group header at the top of the output.
    pub group_name: String,
}

impl ConfigType for Config {
    fn default() -> Self {
        Self {
            group_name: "mcl_model".to_owned(),
        }
    }
}

#[remain::sorted]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Err {
    #[error("Triangle list of mesh {mesh} has {len} indices, which is not a multiple of 3.")]
    IncompleteTriangle { mesh: usize, len: usize },
    #[error("Mesh {mesh} references vertex {index}, but it only has {len} vertices.")]
    IndexOutOfRange { mesh: usize, index: usize, len: usize },
    #[error("Mesh {mesh} has {positions} positions, {uvs} uvs and {normals} normals; the channels must be co-indexed with the positions.")]
    MismatchedChannels { mesh: usize, positions: usize, uvs: usize, normals: usize },
    #[error("The model does not contain any geometry.")]
    MissingGeometry,
    #[error("Geometry '{0}' does not contain any mesh.")]
    MissingMesh(String),
    #[error("Mesh {mesh} does not have a normal channel.")]
    MissingNormalChannel { mesh: usize },
    #[error("Mesh {mesh} does not have any positions.")]
    MissingPositions { mesh: usize },
    #[error("Mesh {mesh} does not have a uv channel.")]
    MissingUvChannel { mesh: usize },
    #[error("Failed to write the output: {0}")]
    Write(#[from] fmt::Error),
}


/// Exports the meshes of the first geometry of the model as obj text into the provided writer.
///
/// Every mesh contributes its positions, uvs and normals followed by its faces. Face indices are
/// 1-based and shifted by the number of vertices written by the preceding meshes, so that they stay
/// valid in the concatenated document. Only the first uv and normal channels are exported.
///
/// All meshes are checked before anything is written, so an invalid mesh leaves the writer untouched.
pub fn export<W>(model: &Model, writer: &mut W, cfg: &Config) -> Result<(), Err>
    where W: Write
{
    let geometry = model.first_geometry().ok_or(Err::MissingGeometry)?;
    if model.geometries.len() > 1 {
        log::warn!(
            "Model has {} geometries; only '{}' is exported.",
            model.geometries.len(),
            geometry.get_identifier()
        );
    }
    if geometry.meshes.is_empty() {
        return Err(Err::MissingMesh(geometry.get_identifier().to_owned()));
    }

    let checked = geometry.meshes.iter()
        .enumerate()
        .map(|(idx, mesh)| check_mesh(mesh, idx).map(|(uvs, normals)| (mesh, uvs, normals)))
        .collect::<Result<Vec<_>, _>>()?;

    writeln!(writer, "{} {}", record::GROUP, cfg.group_name)?;

    let mut mesh_index_offset = 0;
    for (idx, (mesh, uvs, normals)) in checked.into_iter().enumerate() {
        write_mesh(mesh, idx, uvs, normals, mesh_index_offset, writer)?;
        mesh_index_offset += mesh.positions.len();
    }

    log::debug!(
        "Exported {} meshes with {} vertices in total.",
        geometry.meshes.len(),
        mesh_index_offset
    );
    Ok(())
}


/// Exports the model into a newly allocated string. See [export].
pub fn to_obj_string(model: &Model, cfg: &Config) -> Result<String, Err> {
    let mut out = String::new();
    export(model, &mut out, cfg)?;
    Ok(out)
}


fn write_mesh<W>(
    mesh: &Mesh,
    idx: usize,
    uvs: &[TexCoord],
    normals: &[Normal],
    mesh_index_offset: usize,
    writer: &mut W
) -> Result<(), Err>
    where W: Write
{
    if mesh.uv_sets.len() > 1 || mesh.normal_sets.len() > 1 {
        log::debug!(
            "Mesh {} has {} uv and {} normal channels; only the first of each is exported.",
            idx, mesh.uv_sets.len(), mesh.normal_sets.len()
        );
    }

    for p in &mesh.positions {
        writeln!(writer, "{} {} {} {}", record::POSITION, p[0], p[1], p[2])?;
    }
    for uv in uvs {
        writeln!(writer, "{} {} {}", record::TEX_COORD, uv[0], flip_v(uv[1]))?;
    }
    for n in normals {
        writeln!(writer, "{} {} {} {}", record::NORMAL, n[0], n[1], n[2])?;
    }
    for face in mesh.get_faces() {
        write!(writer, "{}", record::FACE)?;
        for v in face {
            let i = v + 1 + mesh_index_offset;
            write!(writer, " {i}/{i}/{i}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}


/// Checks that every face corner can be resolved in all three channels, and returns the channels.
fn check_mesh(mesh: &Mesh, idx: usize) -> Result<(&[TexCoord], &[Normal]), Err> {
    let uvs = mesh.uv_channel().ok_or(Err::MissingUvChannel { mesh: idx })?;
    let normals = mesh.normal_channel().ok_or(Err::MissingNormalChannel { mesh: idx })?;
    let len = mesh.positions.len();
    if len == 0 {
        return Err(Err::MissingPositions { mesh: idx });
    }
    if uvs.len() != len || normals.len() != len {
        return Err(Err::MismatchedChannels {
            mesh: idx,
            positions: len,
            uvs: uvs.len(),
            normals: normals.len(),
        });
    }
    if mesh.triangles.len() % 3 != 0 {
        return Err(Err::IncompleteTriangle { mesh: idx, len: mesh.triangles.len() });
    }
    if let Some(&index) = mesh.triangles.iter().find(|&&i| i >= len) {
        return Err(Err::IndexOutOfRange { mesh: idx, index, len });
    }
    Ok((uvs, normals))
}
