pub mod model;
pub mod shared;
