use crate::db::{init_schema, open_connection};
use crate::domain::product::Product;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};

// ==========================================
// ProductRepository - products table access
// ==========================================
/// Product record store, keyed by id.
///
/// Exposes exactly the store contract: fetch-all, fetch-by-id, insert,
/// update, delete, search, upsert batch, clear-and-bulk-insert.
/// No business logic lives here.
#[derive(Clone)]
pub struct ProductRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ProductRepository {
    /// Open the store at `db_path`, creating the schema if needed.
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Build a repository around an existing connection.
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            init_schema(&guard)?;
        }
        Ok(Self { conn })
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// All records, ordered by id for stable listings and exports.
    pub fn fetch_all(&self) -> RepositoryResult<Vec<Product>> {
        let conn = self.get_conn()?;
        let mut stmt =
            conn.prepare("SELECT id, name, price, stock FROM products ORDER BY id")?;
        let rows = stmt.query_map([], Self::map_row)?;

        let mut products = Vec::new();
        for row in rows {
            products.push(row?);
        }
        Ok(products)
    }

    /// Fetch one record by id.
    pub fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Product>> {
        let conn = self.get_conn()?;
        let result = conn
            .query_row(
                "SELECT id, name, price, stock FROM products WHERE id = ?1",
                params![id],
                Self::map_row,
            )
            .optional()?;
        Ok(result)
    }

    /// Substring search over id and name.
    pub fn search(&self, keyword: &str) -> RepositoryResult<Vec<Product>> {
        let conn = self.get_conn()?;
        let pattern = format!("%{}%", keyword);
        let mut stmt = conn.prepare(
            "SELECT id, name, price, stock FROM products
             WHERE id LIKE ?1 OR name LIKE ?1
             ORDER BY id",
        )?;
        let rows = stmt.query_map(params![pattern], Self::map_row)?;

        let mut products = Vec::new();
        for row in rows {
            products.push(row?);
        }
        Ok(products)
    }

    /// Insert a new record. An existing id is a conflict, not an overwrite.
    pub fn insert(&self, product: &Product) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO products (id, name, price, stock) VALUES (?1, ?2, ?3, ?4)",
            params![product.id, product.name, product.price, product.stock],
        )?;
        Ok(())
    }

    /// Update an existing record in place.
    pub fn update(&self, product: &Product) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let changed = conn.execute(
            "UPDATE products SET name = ?2, price = ?3, stock = ?4 WHERE id = ?1",
            params![product.id, product.name, product.price, product.stock],
        )?;
        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Product".to_string(),
                id: product.id.clone(),
            });
        }
        Ok(())
    }

    /// Delete by id.
    pub fn delete(&self, id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let changed = conn.execute("DELETE FROM products WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Product".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// Upsert a batch in one transaction.
    ///
    /// Each record replaces any existing record with the same id; all
    /// other records are untouched. Atomic per batch: either every row
    /// is persisted or none is.
    pub fn upsert_batch(&self, products: &[Product]) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let count = {
            let mut stmt = tx.prepare(
                r#"
                INSERT INTO products (id, name, price, stock)
                VALUES (?1, ?2, ?3, ?4)
                ON CONFLICT(id) DO UPDATE SET
                    name = excluded.name,
                    price = excluded.price,
                    stock = excluded.stock
                "#,
            )?;

            let mut count = 0;
            for product in products {
                stmt.execute(params![
                    product.id,
                    product.name,
                    product.price,
                    product.stock
                ])?;
                count += 1;
            }
            count
        };

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(count)
    }

    /// Clear the table and insert the batch, in one transaction.
    ///
    /// Destructive: the prior record set is gone after commit. On any
    /// failure the transaction rolls back and the prior state is intact.
    pub fn replace_all(&self, products: &[Product]) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let count = {
            tx.execute("DELETE FROM products", [])?;

            let mut stmt = tx.prepare(
                "INSERT INTO products (id, name, price, stock) VALUES (?1, ?2, ?3, ?4)",
            )?;

            let mut count = 0;
            for product in products {
                stmt.execute(params![
                    product.id,
                    product.name,
                    product.price,
                    product.stock
                ])?;
                count += 1;
            }
            count
        };

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(count)
    }

    /// Record count.
    pub fn count(&self) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Product> {
        Ok(Product {
            id: row.get(0)?,
            name: row.get(1)?,
            price: row.get(2)?,
            stock: row.get(3)?,
        })
    }
}
