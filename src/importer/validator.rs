// ==========================================
// Inventory Console - row validator
// ==========================================
// Partitions cleaned rows into valid / invalid:
// (a) duplicate ids resolved last-wins in file order (later rows are
//     corrections); informational and logged, never an error
// (b) a row is invalid when id is empty, name is empty, price is
//     missing or negative, or stock is missing or negative
// (c) every surviving row lands in exactly one partition, and invalid
//     rows keep their cleaned values plus the failed constraints
// ==========================================

use crate::domain::product::{InvalidRow, Product, RawProductRecord};
use std::collections::HashMap;
use tracing::info;

/// Validator output: the two-way partition plus the duplicate count.
#[derive(Debug)]
pub struct ValidationOutcome {
    pub valid: Vec<Product>,
    pub invalid: Vec<InvalidRow>,
    pub duplicates_resolved: usize,
}

pub struct RowValidator;

impl RowValidator {
    pub fn validate(&self, records: Vec<RawProductRecord>) -> ValidationOutcome {
        let deduped = self.resolve_duplicates(records);
        let duplicates_resolved = deduped.duplicates_resolved;

        let mut valid = Vec::new();
        let mut invalid = Vec::new();

        for record in deduped.records {
            let reasons = self.check(&record);
            if reasons.is_empty() {
                valid.push(Product {
                    id: record.id,
                    name: record.name,
                    // check() guarantees presence
                    price: record.price.unwrap_or_default(),
                    stock: record.stock.unwrap_or_default(),
                });
            } else {
                invalid.push(InvalidRow { record, reasons });
            }
        }

        ValidationOutcome {
            valid,
            invalid,
            duplicates_resolved,
        }
    }

    /// Per-field constraints. Empty result means the row is valid.
    fn check(&self, record: &RawProductRecord) -> Vec<String> {
        let mut reasons = Vec::new();

        if record.id.is_empty() {
            reasons.push("empty id".to_string());
        }
        if record.name.is_empty() {
            reasons.push("empty name".to_string());
        }
        match record.price {
            None => reasons.push("price missing or not numeric".to_string()),
            Some(p) if p < 0.0 => reasons.push(format!("negative price: {}", p)),
            _ => {}
        }
        match record.stock {
            None => reasons.push("stock not numeric".to_string()),
            Some(s) if s < 0 => reasons.push(format!("negative stock: {}", s)),
            _ => {}
        }

        reasons
    }

    /// Last-wins dedup by id, preserving file order of the survivors.
    /// Rows with an empty id cannot collide and are kept as-is (the
    /// constraint check rejects them individually).
    fn resolve_duplicates(&self, records: Vec<RawProductRecord>) -> DedupResult {
        let mut last_occurrence: HashMap<String, usize> = HashMap::new();
        for record in &records {
            if !record.id.is_empty() {
                last_occurrence.insert(record.id.clone(), record.row_number);
            }
        }

        let mut kept = Vec::new();
        let mut duplicates_resolved = 0;
        for record in records {
            if !record.id.is_empty() && last_occurrence[&record.id] != record.row_number {
                info!(
                    id = %record.id,
                    dropped_row = record.row_number,
                    kept_row = last_occurrence[&record.id],
                    "duplicate id resolved, last occurrence wins"
                );
                duplicates_resolved += 1;
                continue;
            }
            kept.push(record);
        }

        DedupResult {
            records: kept,
            duplicates_resolved,
        }
    }
}

struct DedupResult {
    records: Vec<RawProductRecord>,
    duplicates_resolved: usize,
}
