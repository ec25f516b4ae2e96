// lib.rs

/// Contains the in-memory model tree and the types shared across it.
pub mod core;

/// Contains the record conventions shared by the exporter and the importer.
pub(crate) mod shared;

/// Defines the exporter (model to OBJ text).
pub mod export;

/// Defines the importer (OBJ text to model).
pub mod import;

/// Contains the interface between `Model` objects and files on disk,
/// i.e. model json documents and obj files.
pub mod io;


/// Contains the most commonly used traits, types, and objects.
pub mod prelude {
    pub use crate::core::model::{Bone, Description, Geometry, Mesh, Model};
    pub use crate::core::shared::{ConfigType, Normal, Position, TexCoord};
    pub use crate::export::{self, export, to_obj_string};
    pub use crate::import::{self, import};
}
