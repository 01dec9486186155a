// ==========================================
// Inventory Console - CSV export
// ==========================================
// Canonical four-column output, one row per record, numeric fields
// unformatted. Suitable for round-trip re-import: exporting the store
// and re-importing via upsert leaves the store unchanged.
// ==========================================

use crate::domain::product::Product;
use crate::importer::error::ImportResult;
use crate::repository::ProductRepository;
use std::path::Path;
use tracing::info;

/// Header row of every export, matching the canonical field set.
pub const EXPORT_HEADERS: [&str; 4] = ["id", "name", "price", "stock"];

pub struct CsvExporter;

impl CsvExporter {
    /// Write records to a writer in canonical form.
    pub fn write<W: std::io::Write>(&self, products: &[Product], out: W) -> ImportResult<()> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(EXPORT_HEADERS)?;

        for product in products {
            let price = product.price.to_string();
            let stock = product.stock.to_string();
            writer.write_record([
                product.id.as_str(),
                product.name.as_str(),
                price.as_str(),
                stock.as_str(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Export the whole store to a file.
    pub fn export_store<P: AsRef<Path>>(
        &self,
        repo: &ProductRepository,
        path: P,
    ) -> ImportResult<usize> {
        let products = repo.fetch_all()?;
        let file = std::fs::File::create(path.as_ref())?;
        self.write(&products, file)?;

        info!(
            file = %path.as_ref().display(),
            records = products.len(),
            "store exported"
        );
        Ok(products.len())
    }

    /// An import template: the header row and nothing else.
    pub fn write_template<W: std::io::Write>(&self, out: W) -> ImportResult<()> {
        self.write(&[], out)
    }

    /// Write an import template to a file.
    pub fn export_template<P: AsRef<Path>>(&self, path: P) -> ImportResult<()> {
        let file = std::fs::File::create(path.as_ref())?;
        self.write_template(file)?;
        info!(file = %path.as_ref().display(), "import template written");
        Ok(())
    }
}
