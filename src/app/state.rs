// ==========================================
// Inventory Console - application state
// ==========================================
// Shared state for one operator session: configuration, the product
// repository, the importer and the exporter. One connection for the
// whole session, opened once and released on every exit path.
// ==========================================

use crate::config::AppConfig;
use crate::exporter::CsvExporter;
use crate::importer::ProductImporter;
use crate::repository::{ProductRepository, RepositoryResult};

pub struct AppState {
    pub config: AppConfig,
    pub repo: ProductRepository,
    pub importer: ProductImporter,
    pub exporter: CsvExporter,
}

impl AppState {
    pub fn new(config: AppConfig) -> RepositoryResult<Self> {
        let repo = ProductRepository::new(&config.db_path)?;
        let importer = ProductImporter::new(repo.clone());

        Ok(Self {
            config,
            repo,
            importer,
            exporter: CsvExporter,
        })
    }
}
