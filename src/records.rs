// 📄 Flat Record Format - one record per line, comma-delimited
//
// Line layout shared by the houses and tenants files:
// - no header, no quoting, no escaping of embedded commas
// - one record per line, terminated by '\n'
// - prices rendered the way the legacy data files render a double

use anyhow::{Context, Result};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::path::Path;
use tracing::debug;

// ============================================================================
// RECORD TRAIT
// ============================================================================

/// A value that maps to exactly one line of a flat data file
pub trait FlatRecord: Sized {
    /// Number of fields a well-formed line carries
    const FIELD_COUNT: usize;

    /// Short name used in log output ("house", "tenant")
    const KIND: &'static str;

    /// Fields in on-disk order
    fn to_fields(&self) -> Vec<String>;

    /// Rebuild from split fields. Returns None when the field count is
    /// wrong or a field fails to parse.
    fn from_fields(fields: &[&str]) -> Option<Self>;
}

/// Result of reading one flat file
#[derive(Debug)]
pub struct ReadOutcome<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

// ============================================================================
// READ / WRITE
// ============================================================================

/// Read every well-formed record from `path`, in file order.
///
/// Lines with the wrong field count or unparseable fields are skipped.
/// Only file-level failures (missing, unreadable) are returned as errors.
pub fn read_records<T: FlatRecord>(path: &Path) -> Result<ReadOutcome<T>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_path(path)
        .with_context(|| format!("Failed to open {} file: {}", T::KIND, path.display()))?;

    let mut records = Vec::new();
    let mut skipped = 0;

    for result in rdr.records() {
        let raw = match result {
            Ok(raw) => raw,
            Err(err) if err.is_io_error() => {
                return Err(err).with_context(|| {
                    format!("Failed to read {} file: {}", T::KIND, path.display())
                });
            }
            Err(err) => {
                // Invalid UTF-8 and the like: drop the line, keep going
                debug!(kind = T::KIND, error = %err, "Skipping unreadable line");
                skipped += 1;
                continue;
            }
        };

        let fields = split_fields(&raw);
        let parsed = if fields.len() == T::FIELD_COUNT {
            T::from_fields(&fields)
        } else {
            None
        };

        match parsed {
            Some(record) => records.push(record),
            None => {
                debug!(
                    kind = T::KIND,
                    line = raw.position().map(|p| p.line()),
                    fields = fields.len(),
                    "Skipping malformed line"
                );
                skipped += 1;
            }
        }
    }

    Ok(ReadOutcome { records, skipped })
}

/// Overwrite `path` with one line per record
pub fn write_records<T: FlatRecord>(path: &Path, records: &[T]) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)
        .with_context(|| format!("Failed to create {} file: {}", T::KIND, path.display()))?;

    for record in records {
        wtr.write_record(record.to_fields())
            .with_context(|| format!("Failed to write {} file: {}", T::KIND, path.display()))?;
    }

    wtr.flush()
        .with_context(|| format!("Failed to flush {} file: {}", T::KIND, path.display()))?;

    Ok(())
}

/// Split a raw line into fields, dropping trailing empty fields.
///
/// Legacy files were read with a plain string split, which discards
/// trailing empties: "H1,Pune,10.0,1,OWNER," still counts as 5 fields.
fn split_fields(raw: &StringRecord) -> Vec<&str> {
    let mut fields: Vec<&str> = raw.iter().collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}

// ============================================================================
// NUMERIC FIELDS
// ============================================================================

/// Render a price the way the existing data files do.
///
/// Plain decimal with at least one fractional digit inside [1e-3, 1e7),
/// scientific notation with an upper-case `E` outside it.
pub fn format_price(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let magnitude = value.abs();
    if (1e-3..1e7).contains(&magnitude) {
        // Debug keeps the trailing ".0" on integral values
        return format!("{:?}", value);
    }

    let sci = format!("{:e}", value);
    match sci.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => sci,
    }
}

/// Parse a price field. Accepts both plain and scientific forms.
pub fn parse_price(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok()
}

/// Parse a bedroom count field
pub fn parse_bedrooms(field: &str) -> Option<i32> {
    field.parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[derive(Debug, PartialEq)]
    struct Pair {
        left: String,
        right: String,
    }

    impl FlatRecord for Pair {
        const FIELD_COUNT: usize = 2;
        const KIND: &'static str = "pair";

        fn to_fields(&self) -> Vec<String> {
            vec![self.left.clone(), self.right.clone()]
        }

        fn from_fields(fields: &[&str]) -> Option<Self> {
            Some(Pair {
                left: fields[0].to_string(),
                right: fields[1].to_string(),
            })
        }
    }

    #[test]
    fn test_format_price_plain_range() {
        assert_eq!(format_price(40000.0), "40000.0");
        assert_eq!(format_price(12.5), "12.5");
        assert_eq!(format_price(0.001), "0.001");
        assert_eq!(format_price(9_999_999.0), "9999999.0");
        assert_eq!(format_price(0.0), "0.0");
        assert_eq!(format_price(-350.75), "-350.75");
    }

    #[test]
    fn test_format_price_scientific_range() {
        assert_eq!(format_price(1e7), "1.0E7");
        assert_eq!(format_price(12_345_000.0), "1.2345E7");
        assert_eq!(format_price(0.00025), "2.5E-4");
    }

    #[test]
    fn test_parse_price_accepts_both_forms() {
        assert_eq!(parse_price("40000.0"), Some(40000.0));
        assert_eq!(parse_price("1.0E7"), Some(1e7));
        assert_eq!(parse_price("2.5E-4"), Some(0.00025));
        assert_eq!(parse_price("cheap"), None);
    }

    #[test]
    fn test_parse_bedrooms() {
        assert_eq!(parse_bedrooms("3"), Some(3));
        assert_eq!(parse_bedrooms("3.5"), None);
        assert_eq!(parse_bedrooms(""), None);
    }

    #[test]
    fn test_write_then_read_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.txt");

        let pairs = vec![
            Pair { left: "a".into(), right: "b".into() },
            Pair { left: "c".into(), right: "d".into() },
        ];
        write_records(&path, &pairs).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\nc,d\n");

        let outcome: ReadOutcome<Pair> = read_records(&path).unwrap();
        assert_eq!(outcome.records, pairs);
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn test_read_skips_wrong_field_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.txt");
        fs::write(&path, "a,b\nonly-one\nx,y,z\n\nc,d\n").unwrap();

        let outcome: ReadOutcome<Pair> = read_records(&path).unwrap();

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[1].left, "c");
        assert_eq!(outcome.skipped, 2);
    }

    #[test]
    fn test_read_drops_trailing_empty_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.txt");
        fs::write(&path, "a,b,,\n,b\n").unwrap();

        let outcome: ReadOutcome<Pair> = read_records(&path).unwrap();

        // "a,b,," splits to 2 fields; ",b" keeps its leading empty field
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[0], Pair { left: "a".into(), right: "b".into() });
        assert_eq!(outcome.records[1].left, "");
    }

    #[test]
    fn test_quotes_are_plain_characters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.txt");
        fs::write(&path, "\"a,b\"\n").unwrap();

        let outcome: ReadOutcome<Pair> = read_records(&path).unwrap();

        assert_eq!(outcome.records[0].left, "\"a");
        assert_eq!(outcome.records[0].right, "b\"");
    }

    #[test]
    fn test_read_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<ReadOutcome<Pair>> = read_records(&dir.path().join("nope.txt"));
        assert!(result.is_err());
    }
}
