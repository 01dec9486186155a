// ==========================================
// Inventory Console - header normalizer
// ==========================================
// Maps arbitrary incoming column labels to the canonical field set
// {id, name, price, stock}. Lookup is case / whitespace / underscore
// insensitive and synonym-aware; unrecognized labels pass through
// unchanged. A canonical field absent after normalization aborts the
// whole import before any row is inspected.
// ==========================================

use crate::importer::error::{ImportError, ImportResult};

/// The four canonical fields every import must resolve to.
pub const CANONICAL_FIELDS: [&str; 4] = ["id", "name", "price", "stock"];

pub struct HeaderNormalizer;

impl HeaderNormalizer {
    /// Normalize one label: canonical name if recognized, otherwise the
    /// original label unchanged.
    pub fn normalize_label(&self, label: &str) -> String {
        let folded = Self::fold(label);
        for (canonical, synonyms) in Self::synonym_table() {
            if synonyms.contains(&folded.as_str()) {
                return canonical.to_string();
            }
        }
        label.to_string()
    }

    /// Normalize a full header row.
    pub fn normalize_headers(&self, headers: &[String]) -> Vec<String> {
        headers.iter().map(|h| self.normalize_label(h)).collect()
    }

    /// Fail with MissingColumns listing every canonical field absent
    /// from the normalized set. The only pre-row fatal validation.
    pub fn check_required(&self, normalized: &[String]) -> ImportResult<()> {
        let missing: Vec<String> = CANONICAL_FIELDS
            .iter()
            .filter(|f| !normalized.iter().any(|h| h == *f))
            .map(|f| f.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ImportError::MissingColumns(missing))
        }
    }

    /// Lower-case and strip whitespace / underscore / hyphen runs.
    fn fold(label: &str) -> String {
        label
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect()
    }

    /// Static synonym table, keyed by canonical field. Entries are
    /// already folded (lower-case, no separators).
    fn synonym_table() -> [(&'static str, &'static [&'static str]); 4] {
        [
            (
                "id",
                &[
                    "id",
                    "productid",
                    "prodid",
                    "itemid",
                    "productcode",
                    "itemcode",
                    "code",
                    "sku",
                ][..],
            ),
            (
                "name",
                &[
                    "name",
                    "productname",
                    "itemname",
                    "product",
                    "item",
                    "title",
                ][..],
            ),
            (
                "price",
                &[
                    "price",
                    "mrp",
                    "sellingprice",
                    "saleprice",
                    "unitprice",
                    "rate",
                    "cost",
                    "amount",
                ][..],
            ),
            (
                "stock",
                &[
                    "stock",
                    "qty",
                    "quantity",
                    "available",
                    "availableqty",
                    "stockqty",
                    "units",
                    "onhand",
                ][..],
            ),
        ]
    }
}
