/// A point in model space.
pub type Position = [f64; 3];

/// A texture coordinate in the model's convention, i.e. with the origin at the top-left corner.
pub type TexCoord = [f64; 2];

/// A homogeneous normal vector. The fourth component is `1` for normals produced by the importer.
pub type Normal = [f64; 4];

/// Weight lists attached to every vertex instance.
pub type BoneWeights = Vec<i32>;

pub trait ConfigType {
    fn default() -> Self;
}
