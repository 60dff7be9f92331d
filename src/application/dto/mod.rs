//! Data Transfer Objects - For interchange boundaries

pub mod export;

pub use export::{parse_import, ExportDocument, ImportError, EXPORT_VERSION};
