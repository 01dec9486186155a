// ==========================================
// Test helpers
// ==========================================
// Temp database and temp CSV creation shared by the integration suites.
// ==========================================

use inventory_console::repository::ProductRepository;
use inventory_console::Product;
use std::error::Error;
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

/// Create a temp database and a repository over it.
///
/// The NamedTempFile must stay alive for the duration of the test.
pub fn create_test_repo() -> Result<(NamedTempFile, ProductRepository), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file
        .path()
        .to_str()
        .ok_or("temp path is not valid UTF-8")?
        .to_string();
    let repo = ProductRepository::new(&db_path)?;
    Ok((temp_file, repo))
}

/// Write CSV content to a temp file with a .csv suffix.
#[allow(dead_code)]
pub fn write_csv_file(content: &str) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut file = Builder::new().suffix(".csv").tempfile()?;
    write!(file, "{}", content)?;
    file.flush()?;
    Ok(file)
}

#[allow(dead_code)]
pub fn product(id: &str, name: &str, price: f64, stock: i64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        stock,
    }
}
