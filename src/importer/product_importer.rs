// ==========================================
// Inventory Console - product importer
// ==========================================
// Pipeline orchestrator, file to store:
//   parse -> normalize headers -> clean rows -> validate -> write
// Split into prepare() and commit() so the UI layer can show the
// operator the counts (and every invalid row) before anything is
// written. import_file() runs both for non-interactive use.
// ==========================================

use crate::domain::product::{ImportBatch, ImportSummary, WriteMode};
use crate::importer::error::ImportResult;
use crate::importer::file_reader::CsvReader;
use crate::importer::header_normalizer::HeaderNormalizer;
use crate::importer::row_cleaner::RowCleaner;
use crate::importer::validator::RowValidator;
use crate::repository::ProductRepository;
use chrono::Utc;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, instrument};
use uuid::Uuid;

pub struct ProductImporter {
    repo: ProductRepository,
    reader: CsvReader,
    normalizer: HeaderNormalizer,
    cleaner: RowCleaner,
    validator: RowValidator,
}

impl ProductImporter {
    pub fn new(repo: ProductRepository) -> Self {
        Self {
            repo,
            reader: CsvReader,
            normalizer: HeaderNormalizer,
            cleaner: RowCleaner,
            validator: RowValidator,
        }
    }

    /// Run the pipeline up to (not including) the store write.
    ///
    /// Fails fast with MissingColumns before any row is inspected when
    /// a canonical column cannot be resolved; the store is untouched.
    #[instrument(skip(self, file_path), fields(batch_id))]
    pub fn prepare<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<ImportBatch> {
        let path = file_path.as_ref();
        let batch_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("batch_id", batch_id.as_str());

        info!(file = %path.display(), "starting import validation");

        // === step 1: parse file ===
        debug!("step 1: parse file");
        let table = self.reader.read(path)?;
        let total_rows = table.rows.len();
        info!(total_rows, "file parsed");

        // === step 2: normalize headers, fail on missing columns ===
        debug!("step 2: normalize headers");
        let normalized = self.normalizer.normalize_headers(&table.headers);
        self.normalizer.check_required(&normalized)?;

        // re-key rows by normalized label, keeping the reader's row numbers
        let rows: Vec<(usize, HashMap<String, String>)> = table
            .rows
            .into_iter()
            .map(|row| {
                let values = row
                    .values
                    .into_iter()
                    .map(|(label, value)| (self.normalizer.normalize_label(&label), value))
                    .collect();
                (row.row_number, values)
            })
            .collect();

        // === step 3: clean rows ===
        debug!("step 3: clean rows");
        let records = rows
            .iter()
            .map(|(row_number, row)| self.cleaner.clean(row, *row_number))
            .collect();

        // === step 4: validate & partition ===
        debug!("step 4: validate");
        let outcome = self.validator.validate(records);
        info!(
            valid = outcome.valid.len(),
            invalid = outcome.invalid.len(),
            duplicates = outcome.duplicates_resolved,
            "validation complete"
        );

        // keep a structured snapshot of every rejected row in the log
        if !outcome.invalid.is_empty() {
            if let Ok(snapshot) = serde_json::to_string(&outcome.invalid) {
                debug!(invalid_rows = %snapshot, "invalid row snapshot");
            }
        }

        Ok(ImportBatch {
            batch_id,
            file_name: path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.to_string()),
            summary: ImportSummary {
                total_rows,
                valid: outcome.valid.len(),
                invalid: outcome.invalid.len(),
                duplicates_resolved: outcome.duplicates_resolved,
            },
            valid: outcome.valid,
            invalid: outcome.invalid,
            validated_at: Utc::now(),
        })
    }

    /// Write a validated batch to the store.
    ///
    /// Atomic per batch: one transaction, either every valid row is
    /// persisted or none is. Returns the written count.
    pub fn commit(&self, batch: &ImportBatch, mode: WriteMode) -> ImportResult<usize> {
        let written = match mode {
            WriteMode::Upsert => self.repo.upsert_batch(&batch.valid)?,
            WriteMode::ReplaceAll => self.repo.replace_all(&batch.valid)?,
        };

        info!(
            batch_id = %batch.batch_id,
            mode = ?mode,
            written,
            "import batch committed"
        );
        Ok(written)
    }

    /// Validate and commit in one step.
    pub fn import_file<P: AsRef<Path>>(
        &self,
        file_path: P,
        mode: WriteMode,
    ) -> ImportResult<ImportBatch> {
        let batch = self.prepare(file_path)?;
        self.commit(&batch, mode)?;
        Ok(batch)
    }
}
