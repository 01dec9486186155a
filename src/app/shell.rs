// ==========================================
// Inventory Console - prompt loop
// ==========================================
// Line-oriented UI: one menu choice triggers one pipeline or
// repository call to completion before the next input is accepted.
// Mutating actions are gated behind the admin session state.
// ==========================================

use crate::app::session::SessionState;
use crate::app::state::AppState;
use crate::domain::product::{ImportBatch, Product, WriteMode};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::warn;

pub struct Shell<'a, R: BufRead, W: Write> {
    app: &'a AppState,
    input: R,
    output: W,
    session: SessionState,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(app: &'a AppState, input: R, output: W) -> Self {
        Self {
            app,
            input,
            output,
            session: SessionState::LoggedOut,
        }
    }

    /// Run the menu loop until the operator exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let choice = match self.prompt("Enter your choice: ")? {
                Some(line) => line,
                None => break, // input closed
            };

            match choice.as_str() {
                "1" => self.list_products()?,
                "2" => self.search_products()?,
                "3" => self.add_product()?,
                "4" => self.update_product()?,
                "5" => self.delete_product()?,
                "6" => self.import_file(WriteMode::Upsert)?,
                "7" => self.import_file(WriteMode::ReplaceAll)?,
                "8" => self.export_store()?,
                "9" => self.download_template()?,
                "l" | "L" => self.toggle_login()?,
                "0" => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                other => {
                    writeln!(self.output, "Invalid choice: {}", other)?;
                }
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        let role = if self.session.is_admin() {
            "admin"
        } else {
            "viewer"
        };
        writeln!(self.output)?;
        writeln!(self.output, "====== Inventory Console ({}) ======", role)?;
        writeln!(self.output, "1. List products")?;
        writeln!(self.output, "2. Search products")?;
        writeln!(self.output, "3. Add product")?;
        writeln!(self.output, "4. Update product")?;
        writeln!(self.output, "5. Delete product")?;
        writeln!(self.output, "6. Import CSV (upsert)")?;
        writeln!(self.output, "7. Import CSV (replace all)")?;
        writeln!(self.output, "8. Export CSV")?;
        writeln!(self.output, "9. Download import template")?;
        if self.session.is_admin() {
            writeln!(self.output, "l. Log out")?;
        } else {
            writeln!(self.output, "l. Admin login")?;
        }
        writeln!(self.output, "0. Exit")?;
        Ok(())
    }

    /// Print a prompt and read one trimmed line. None on closed input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn require_admin(&mut self) -> Result<bool> {
        if self.session.is_admin() {
            return Ok(true);
        }
        writeln!(self.output, "Admin login required (menu option l).")?;
        Ok(false)
    }

    // ===== read-only actions =====

    fn list_products(&mut self) -> Result<()> {
        let products = self.app.repo.fetch_all()?;
        if products.is_empty() {
            writeln!(self.output, "No products in store.")?;
            return Ok(());
        }
        for product in &products {
            self.print_product(product)?;
        }
        writeln!(self.output, "{} product(s).", products.len())?;
        Ok(())
    }

    fn search_products(&mut self) -> Result<()> {
        let keyword = match self.prompt("Enter product name or id to search: ")? {
            Some(k) if !k.is_empty() => k,
            _ => return Ok(()),
        };
        let products = self.app.repo.search(&keyword)?;
        if products.is_empty() {
            writeln!(self.output, "No product found.")?;
            return Ok(());
        }
        for product in &products {
            self.print_product(product)?;
        }
        Ok(())
    }

    fn print_product(&mut self, product: &Product) -> Result<()> {
        writeln!(
            self.output,
            "{:<12} {:<24} price={:<10} stock={}",
            product.id, product.name, product.price, product.stock
        )?;
        Ok(())
    }

    // ===== mutating actions =====

    fn add_product(&mut self) -> Result<()> {
        if !self.require_admin()? {
            return Ok(());
        }

        let id = match self.prompt("Product id: ")? {
            Some(v) if !v.is_empty() => v,
            _ => {
                writeln!(self.output, "Id must not be empty.")?;
                return Ok(());
            }
        };
        let name = match self.prompt("Product name: ")? {
            Some(v) if !v.is_empty() => v,
            _ => {
                writeln!(self.output, "Name must not be empty.")?;
                return Ok(());
            }
        };
        let price = match self.prompt_price(None)? {
            Some(v) => v,
            None => return Ok(()),
        };
        let stock = match self.prompt_stock(None)? {
            Some(v) => v,
            None => return Ok(()),
        };

        let product = Product {
            id,
            name,
            price,
            stock,
        };
        match self.app.repo.insert(&product) {
            Ok(()) => writeln!(self.output, "Product added.")?,
            Err(crate::repository::RepositoryError::UniqueConstraintViolation(_)) => {
                writeln!(self.output, "Product id already exists: {}", product.id)?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn update_product(&mut self) -> Result<()> {
        if !self.require_admin()? {
            return Ok(());
        }

        let id = match self.prompt("Product id to update: ")? {
            Some(v) if !v.is_empty() => v,
            _ => return Ok(()),
        };
        let existing = match self.app.repo.find_by_id(&id)? {
            Some(p) => p,
            None => {
                writeln!(self.output, "Product not found: {}", id)?;
                return Ok(());
            }
        };

        // blank input keeps the old value
        let name = match self.prompt(&format!("New name ({}): ", existing.name))? {
            Some(v) if !v.is_empty() => v,
            _ => existing.name.clone(),
        };
        let price = match self.prompt_price(Some(existing.price))? {
            Some(v) => v,
            None => return Ok(()),
        };
        let stock = match self.prompt_stock(Some(existing.stock))? {
            Some(v) => v,
            None => return Ok(()),
        };

        self.app.repo.update(&Product {
            id,
            name,
            price,
            stock,
        })?;
        writeln!(self.output, "Product updated.")?;
        Ok(())
    }

    fn delete_product(&mut self) -> Result<()> {
        if !self.require_admin()? {
            return Ok(());
        }

        let id = match self.prompt("Product id to delete: ")? {
            Some(v) if !v.is_empty() => v,
            _ => return Ok(()),
        };
        match self.app.repo.delete(&id) {
            Ok(()) => writeln!(self.output, "Product deleted.")?,
            Err(crate::repository::RepositoryError::NotFound { .. }) => {
                writeln!(self.output, "Product not found: {}", id)?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn prompt_price(&mut self, current: Option<f64>) -> Result<Option<f64>> {
        let message = match current {
            Some(p) => format!("New price ({}): ", p),
            None => "Price: ".to_string(),
        };
        let line = match self.prompt(&message)? {
            Some(v) => v,
            None => return Ok(None),
        };
        if line.is_empty() {
            if let Some(p) = current {
                return Ok(Some(p));
            }
        }
        match line.parse::<f64>() {
            Ok(p) if p >= 0.0 => Ok(Some(p)),
            _ => {
                writeln!(self.output, "Price must be a non-negative number.")?;
                Ok(None)
            }
        }
    }

    fn prompt_stock(&mut self, current: Option<i64>) -> Result<Option<i64>> {
        let message = match current {
            Some(s) => format!("New stock ({}): ", s),
            None => "Stock: ".to_string(),
        };
        let line = match self.prompt(&message)? {
            Some(v) => v,
            None => return Ok(None),
        };
        if line.is_empty() {
            if let Some(s) = current {
                return Ok(Some(s));
            }
        }
        match line.parse::<i64>() {
            Ok(s) if s >= 0 => Ok(Some(s)),
            _ => {
                writeln!(self.output, "Stock must be a non-negative integer.")?;
                Ok(None)
            }
        }
    }

    // ===== import / export =====

    fn import_file(&mut self, mode: WriteMode) -> Result<()> {
        if !self.require_admin()? {
            return Ok(());
        }

        let path = match self.prompt("CSV file path: ")? {
            Some(p) if !p.is_empty() => p,
            _ => return Ok(()),
        };

        let batch = match self.app.importer.prepare(&path) {
            Ok(batch) => batch,
            Err(e) => {
                warn!(error = %e, "import validation failed");
                writeln!(self.output, "Import aborted: {}", e)?;
                return Ok(());
            }
        };

        self.print_batch_summary(&batch)?;

        if batch.is_empty() && mode == WriteMode::Upsert {
            writeln!(self.output, "Nothing to write.")?;
            return Ok(());
        }

        if !self.confirm("Write valid rows to the store? [y/N]: ")? {
            writeln!(self.output, "Import cancelled, store untouched.")?;
            return Ok(());
        }

        // replace-all is destructive: a second, explicit confirmation
        if mode == WriteMode::ReplaceAll {
            let existing = self.app.repo.count()?;
            let message = format!(
                "This REPLACES all {} existing record(s). Continue? [y/N]: ",
                existing
            );
            if !self.confirm(&message)? {
                writeln!(self.output, "Import cancelled, store untouched.")?;
                return Ok(());
            }
        }

        match self.app.importer.commit(&batch, mode) {
            Ok(written) => writeln!(self.output, "{} record(s) written.", written)?,
            Err(e) => {
                warn!(error = %e, "import commit failed");
                writeln!(self.output, "Write failed, store unchanged: {}", e)?;
            }
        }
        Ok(())
    }

    fn print_batch_summary(&mut self, batch: &ImportBatch) -> Result<()> {
        writeln!(
            self.output,
            "Validated {}: {} row(s) total, {} valid, {} invalid, {} duplicate id(s) resolved.",
            batch.file_name.as_deref().unwrap_or("file"),
            batch.summary.total_rows,
            batch.summary.valid,
            batch.summary.invalid,
            batch.summary.duplicates_resolved,
        )?;

        for row in &batch.invalid {
            writeln!(
                self.output,
                "  row {}: id={:?} name={:?} price={:?} stock={:?} -> {}",
                row.record.row_number,
                row.record.id,
                row.record.name,
                row.record.price,
                row.record.stock,
                row.reasons.join("; "),
            )?;
        }
        Ok(())
    }

    fn download_template(&mut self) -> Result<()> {
        let path = match self.prompt("Template file path: ")? {
            Some(p) if !p.is_empty() => p,
            _ => return Ok(()),
        };
        match self.app.exporter.export_template(&path) {
            Ok(()) => writeln!(self.output, "Template written to {}.", path)?,
            Err(e) => writeln!(self.output, "Template write failed: {}", e)?,
        }
        Ok(())
    }

    fn export_store(&mut self) -> Result<()> {
        let path = match self.prompt("Export file path: ")? {
            Some(p) if !p.is_empty() => p,
            _ => return Ok(()),
        };
        match self.app.exporter.export_store(&self.app.repo, &path) {
            Ok(count) => writeln!(self.output, "{} record(s) exported to {}.", count, path)?,
            Err(e) => writeln!(self.output, "Export failed: {}", e)?,
        }
        Ok(())
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        let answer = self.prompt(message)?.unwrap_or_default();
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }

    // ===== session =====

    fn toggle_login(&mut self) -> Result<()> {
        if self.session.is_admin() {
            self.session = self.session.logout();
            writeln!(self.output, "Logged out.")?;
            return Ok(());
        }

        self.session = self.session.begin_login();
        let password = self.prompt("Password: ")?.unwrap_or_default();
        let accepted = self.app.config.verify_admin_password(&password);
        self.session = self.session.submit_password(accepted);

        if self.session.is_admin() {
            writeln!(self.output, "Logged in as admin.")?;
        } else {
            warn!("admin login rejected");
            writeln!(self.output, "Wrong password.")?;
        }
        Ok(())
    }
}
