// ==========================================
// Inventory Console - product domain model
// ==========================================
// products table: id / name / price / stock
// Invariant for every persisted record:
//   price >= 0 AND stock >= 0 AND id != '' AND name != ''
// The import pipeline is the only component allowed to reject a
// candidate row before it reaches the store.
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Product - persisted record
// ==========================================
// Identity key: id (uniqueness enforced by the store)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

// ==========================================
// RawProductRecord - import pipeline intermediate
// ==========================================
// Produced by the row cleaner, consumed by the validator.
// Lifecycle: import pipeline only, never persisted as-is.
// price/stock are Option: a value that failed to parse is a missing
// value, not a hard error (the validator decides the row's fate).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawProductRecord {
    /// 1-based data row number in the source file (header excluded)
    pub row_number: usize,
    pub id: String,
    pub name: String,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

// ==========================================
// InvalidRow - rejected row with reasons
// ==========================================
// Keeps all cleaned column values so the operator can inspect exactly
// what was rejected and why. No row is silently dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvalidRow {
    pub record: RawProductRecord,
    pub reasons: Vec<String>,
}

// ==========================================
// WriteMode - store writer mode
// ==========================================
/// How validated rows are written to the store.
///
/// ReplaceAll is destructive and is a separate, explicit entry point in
/// the UI layer, never a flag toggled during a normal import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WriteMode {
    /// Insert-or-replace per record; other existing records untouched.
    Upsert,
    /// Clear the table, then insert every valid record.
    ReplaceAll,
}

// ==========================================
// ImportSummary - operator-facing counts
// ==========================================
// Shown before committing: total / valid / invalid / duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSummary {
    pub total_rows: usize,
    pub valid: usize,
    pub invalid: usize,
    /// Duplicate ids resolved last-wins (informational, not errors)
    pub duplicates_resolved: usize,
}

// ==========================================
// ImportBatch - one validated import run
// ==========================================
// Holds the valid/invalid partition between the validation phase and
// the (operator-confirmed) write phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportBatch {
    pub batch_id: String,
    pub file_name: Option<String>,
    pub summary: ImportSummary,
    pub valid: Vec<Product>,
    pub invalid: Vec<InvalidRow>,
    pub validated_at: DateTime<Utc>,
}

impl ImportBatch {
    /// True when there is nothing to write.
    pub fn is_empty(&self) -> bool {
        self.valid.is_empty()
    }
}
