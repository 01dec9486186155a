// ==========================================
// Inventory Console - import layer
// ==========================================
// CSV bulk import pipeline:
//   parse -> normalize headers -> clean rows -> validate -> store write
// The operator sees the valid/invalid counts between validation and the
// write, and confirms before anything touches the store.
// ==========================================

pub mod error;
pub mod file_reader;
pub mod header_normalizer;
pub mod product_importer;
pub mod row_cleaner;
pub mod validator;

pub use error::{ImportError, ImportResult};
pub use file_reader::CsvReader;
pub use header_normalizer::HeaderNormalizer;
pub use product_importer::ProductImporter;
pub use row_cleaner::RowCleaner;
pub use validator::{RowValidator, ValidationOutcome};
