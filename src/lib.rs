// ==========================================
// Inventory Console - core library
// ==========================================
// Stack: Rust + SQLite
// Single-operator inventory / price checker with CSV bulk import
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and report types
pub mod domain;

// Repository layer - data access
pub mod repository;

// Importer layer - CSV bulk import pipeline
pub mod importer;

// Exporter - canonical CSV output
pub mod exporter;

// Configuration
pub mod config;

// Database infrastructure (connection init / uniform PRAGMAs)
pub mod db;

// Logging
pub mod logging;

// Application layer - prompt loop and session state
pub mod app;

// ==========================================
// Re-exports
// ==========================================

pub use domain::product::{
    ImportBatch, ImportSummary, InvalidRow, Product, RawProductRecord, WriteMode,
};

pub use repository::{ProductRepository, RepositoryError, RepositoryResult};

pub use importer::{
    HeaderNormalizer, ImportError, ImportResult, ProductImporter, RowCleaner, RowValidator,
};

pub use config::AppConfig;

pub use exporter::CsvExporter;

// ==========================================
// Constants
// ==========================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application display name
pub const APP_NAME: &str = "Inventory Console";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
