// ==========================================
// Inventory Console - domain layer
// ==========================================
// Entities and import report types. No data access, no IO.
// ==========================================

pub mod product;

pub use product::{ImportBatch, ImportSummary, InvalidRow, Product, RawProductRecord, WriteMode};
