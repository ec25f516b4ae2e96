/// Reads and writes model json documents.
pub mod json;

/// Reads and writes obj files through the importer and the exporter.
pub mod obj;
