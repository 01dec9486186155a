// ==========================================
// Inventory Console - row cleaner
// ==========================================
// Turns a normalized row map into a RawProductRecord:
// - id / name: trimmed strings
// - price / stock: currency markers and thousands separators stripped,
//   then parsed; a parse failure is a missing value, not a hard error
// - stock: empty/absent defaults to 0; price never defaults (a zero
//   default would silently misprice a product)
// ==========================================

use crate::domain::product::RawProductRecord;
use std::collections::HashMap;

/// Currency words stripped case-insensitively from numeric fields.
const CURRENCY_WORDS: [&str; 3] = ["inr", "rs.", "rs"];

pub struct RowCleaner;

impl RowCleaner {
    /// Clean one row. `row_number` is the 1-based data row position,
    /// carried through to the invalid-row report.
    pub fn clean(&self, row: &HashMap<String, String>, row_number: usize) -> RawProductRecord {
        let id = self.clean_text(row.get("id"));
        let name = self.clean_text(row.get("name"));
        let price = self.parse_price(row.get("price"));
        let stock = self.parse_stock(row.get("stock"));

        RawProductRecord {
            row_number,
            id,
            name,
            price,
            stock,
        }
    }

    /// Trim; absent cell becomes the empty string (validator rejects it).
    pub fn clean_text(&self, value: Option<&String>) -> String {
        value.map(|v| v.trim().to_string()).unwrap_or_default()
    }

    /// Price: strip decoration, parse as decimal. Missing or
    /// unparseable stays missing for the validator to reject.
    /// Non-finite parses ("nan", "inf") count as unparseable: NaN
    /// compares false against every range bound, and neither value is
    /// a price the store may hold.
    pub fn parse_price(&self, value: Option<&String>) -> Option<f64> {
        let stripped = self.strip_decoration(value?);
        if stripped.is_empty() {
            return None;
        }
        stripped.parse::<f64>().ok().filter(|p| p.is_finite())
    }

    /// Stock: strip decoration, parse as integer. An absent or empty
    /// cell defaults to 0 (no stock on hand); a non-empty value that
    /// fails to parse stays missing; the zero default covers absence,
    /// not garbage.
    pub fn parse_stock(&self, value: Option<&String>) -> Option<i64> {
        let raw = match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => return Some(0),
        };
        let stripped = self.strip_decoration(raw);
        if stripped.is_empty() {
            return None;
        }
        stripped.parse::<i64>().ok()
    }

    /// Strip thousands separators, currency symbols and currency words
    /// ("INR" / "Rs" / "Rs.", case-insensitive) from a numeric field.
    fn strip_decoration(&self, value: &str) -> String {
        let mut s = value.trim().to_string();

        // currency words first, so "Rs" inside "Rs." is not left dangling
        loop {
            let lower = s.to_lowercase();
            let mut matched = false;
            for word in CURRENCY_WORDS {
                if lower.starts_with(word) {
                    s = s[word.len()..].trim_start().to_string();
                    matched = true;
                    break;
                }
                if lower.ends_with(word) {
                    s = s[..s.len() - word.len()].trim_end().to_string();
                    matched = true;
                    break;
                }
            }
            if !matched {
                break;
            }
        }

        // symbols and separators
        s.chars()
            .filter(|c| !matches!(c, '₹' | '$' | ',') && !c.is_whitespace())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_price(value: &str) -> Option<f64> {
        RowCleaner.parse_price(Some(&value.to_string()))
    }

    fn clean_stock(value: &str) -> Option<i64> {
        RowCleaner.parse_stock(Some(&value.to_string()))
    }

    #[test]
    fn test_price_currency_symbol() {
        assert_eq!(clean_price("₹10.00"), Some(10.0));
        assert_eq!(clean_price("$12.50"), Some(12.5));
    }

    #[test]
    fn test_price_currency_words() {
        assert_eq!(clean_price("Rs. 1,250"), Some(1250.0));
        assert_eq!(clean_price("rs 99"), Some(99.0));
        assert_eq!(clean_price("INR 45.50"), Some(45.5));
        assert_eq!(clean_price("120 INR"), Some(120.0));
    }

    #[test]
    fn test_price_thousands_separators() {
        assert_eq!(clean_price("1,23,450"), Some(123450.0));
        assert_eq!(clean_price("2,500.75"), Some(2500.75));
    }

    #[test]
    fn test_price_unparseable_is_missing() {
        assert_eq!(clean_price("free"), None);
        assert_eq!(clean_price(""), None);
        assert_eq!(RowCleaner.parse_price(None), None);
    }

    #[test]
    fn test_price_non_finite_is_missing() {
        assert_eq!(clean_price("nan"), None);
        assert_eq!(clean_price("NaN"), None);
        assert_eq!(clean_price("inf"), None);
        assert_eq!(clean_price("-inf"), None);
        assert_eq!(clean_price("infinity"), None);
    }

    #[test]
    fn test_stock_defaults_to_zero_when_absent() {
        assert_eq!(clean_stock(""), Some(0));
        assert_eq!(clean_stock("   "), Some(0));
        assert_eq!(RowCleaner.parse_stock(None), Some(0));
    }

    #[test]
    fn test_stock_garbage_is_missing_not_zero() {
        assert_eq!(clean_stock("abc"), None);
    }

    #[test]
    fn test_stock_with_separators() {
        assert_eq!(clean_stock("1,000"), Some(1000));
        assert_eq!(clean_stock("90"), Some(90));
    }

    #[test]
    fn test_clean_full_row() {
        let mut row = HashMap::new();
        row.insert("id".to_string(), "  B101 ".to_string());
        row.insert("name".to_string(), "Pen".to_string());
        row.insert("price".to_string(), "₹10.00".to_string());
        row.insert("stock".to_string(), "100".to_string());

        let record = RowCleaner.clean(&row, 1);

        assert_eq!(record.id, "B101");
        assert_eq!(record.name, "Pen");
        assert_eq!(record.price, Some(10.0));
        assert_eq!(record.stock, Some(100));
        assert_eq!(record.row_number, 1);
    }
}
