// ==========================================
// Inventory Console - repository layer
// ==========================================
// Data access only, no business logic.
// All queries are parameterized.
// ==========================================

pub mod error;
pub mod product_repo;

pub use error::{RepositoryError, RepositoryResult};
pub use product_repo::ProductRepository;
