//! Flat-text report codec
//!
//! One record per line, four delimiter-separated fields:
//! `name`, `action`, `text`, `value`. Rendered lines are sorted so that the
//! output does not depend on aggregation order. Field values containing the
//! delimiter are not escaped.

use graphstats_types::StatsItem;

/// Delimiter used by reports unless configured otherwise
pub const DEFAULT_DELIMITER: u8 = b',';

/// Number of fields in a report line
pub const FIELD_COUNT: usize = 4;

/// Codec errors
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Writing a record failed
    #[error("CSV write failed: {0}")]
    Write(#[from] csv::Error),
    /// The writer could not be flushed into its buffer
    #[error("CSV buffer error: {0}")]
    Buffer(String),
    /// Rendered output was not valid UTF-8
    #[error("CSV output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Render records as canonical, sorted report lines
///
/// Each record renders to exactly one entry, even when a field holds a line
/// break.
pub fn to_csv(items: &[StatsItem], delimiter: u8) -> Result<Vec<String>, CodecError> {
    let mut lines = items
        .iter()
        .map(|item| render_line(item, delimiter))
        .collect::<Result<Vec<_>, _>>()?;
    lines.sort();
    Ok(lines)
}

fn render_line(item: &StatsItem, delimiter: u8) -> Result<String, CodecError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record([
        item.name.as_str(),
        item.action.as_str(),
        item.text.as_str(),
        item.value.to_string().as_str(),
    ])?;

    let buffer = writer
        .into_inner()
        .map_err(|e| CodecError::Buffer(e.error().to_string()))?;
    let mut line = String::from_utf8(buffer)?;
    if line.ends_with('\n') {
        line.pop();
    }
    Ok(line)
}

/// Parse report lines back into records
///
/// Lines that do not split into exactly four fields are skipped. A value that
/// is not a number becomes NaN and is left for the validator to reject.
pub fn from_csv<S: AsRef<str>>(lines: &[S], delimiter: u8) -> Vec<StatsItem> {
    let mut items = Vec::with_capacity(lines.len());
    let mut skipped = 0usize;

    for line in lines {
        match parse_line(line.as_ref(), delimiter) {
            Some(item) => items.push(item),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        log::warn!("skipped {skipped} malformed report lines");
    }
    items
}

fn parse_line(line: &str, delimiter: u8) -> Option<StatsItem> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_reader(line.as_bytes());

    let record = reader.records().next()?.ok()?;
    if record.len() != FIELD_COUNT {
        return None;
    }

    Some(StatsItem {
        name: record[0].to_string(),
        action: record[1].to_string(),
        text: record[2].to_string(),
        value: parse_value(&record[3]),
    })
}

/// Parse a value field; anything non-numeric is NaN
///
/// Empty text is NaN rather than zero, and hexadecimal is not a number.
/// `inf` parses but never validates.
pub fn parse_value(field: &str) -> f64 {
    field.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sorted(mut items: Vec<StatsItem>) -> Vec<StatsItem> {
        items.sort_by(|a, b| a.key().cmp(&b.key()).then(a.value.total_cmp(&b.value)));
        items
    }

    #[test]
    fn test_to_csv_sorts_lines() {
        let items = vec![
            StatsItem::new("nodeList", "count", "", 4.0),
            StatsItem::new("edgeList attributeList", "count median", "", 1.5),
            StatsItem::new("attributeMetadataList tagSet", "count", "alpha", 3.0),
        ];
        let lines = to_csv(&items, b',').unwrap();
        assert_eq!(
            lines,
            vec![
                "attributeMetadataList tagSet,count,alpha,3",
                "edgeList attributeList,count median,,1.5",
                "nodeList,count,,4",
            ]
        );
    }

    #[test]
    fn test_from_csv_skips_malformed_lines() {
        let lines = [
            "nodeList,count,,4",
            "",
            "too,few,fields",
            "one,too,many,fields,here",
            "edgeList,count,,3",
        ];
        let items = from_csv(&lines, b',');
        assert_eq!(items.len(), 2);
        assert_eq!(items[1], StatsItem::new("edgeList", "count", "", 3.0));
    }

    #[test]
    fn test_from_csv_keeps_non_numeric_values() {
        let items = from_csv(&["nodeList,count,,many", "nodeList,count min,,"], b',');
        assert_eq!(items.len(), 2);
        assert!(items[0].value.is_nan());
        assert!(items[1].value.is_nan());
    }

    #[test]
    fn test_round_trip_with_other_delimiter() {
        let items = vec![
            StatsItem::new("nodeList attributeList", "count", "frequency 5+", 0.0),
            StatsItem::new("attributeMetadataList name", "count quartile first", "chars", 4.75),
            StatsItem::new("nodeList, quoted \"name\"", "count", "", 1.0),
        ];
        let lines = to_csv(&items, b';').unwrap();
        assert_eq!(sorted(from_csv(&lines, b';')), sorted(items));
    }

    #[test]
    fn test_carriage_return_is_field_content() {
        let items = from_csv(&["nodeList,count,,4\rjunk", "nodeList\r,count,,4"], b',');
        assert_eq!(items.len(), 2);
        assert!(items[0].value.is_nan());
        assert_eq!(items[1].name, "nodeList\r");
        assert_eq!(items[1].value, 4.0);
    }

    #[test]
    fn test_empty_and_non_decimal_values_are_nan() {
        let items = from_csv(&["nodeList,count,,", "nodeList,count,, ", "nodeList,count,,0x10"], b',');
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|i| i.value.is_nan()));

        let infinite = from_csv(&["nodeList,count,,Infinity"], b',');
        assert!(infinite[0].value.is_infinite());
    }

    #[test]
    fn test_one_line_per_record_with_embedded_newline() {
        let items = vec![
            StatsItem::new("nodeList tagSet", "count", "a\nb", 1.0),
            StatsItem::new("nodeList", "count", "", 2.0),
        ];
        let lines = to_csv(&items, b',').unwrap();
        assert_eq!(lines, vec!["nodeList tagSet,count,a\nb,1", "nodeList,count,,2"]);
    }

    fn field() -> impl Strategy<Value = String> {
        "[A-Za-z0-9 +.\"]{0,12}"
    }

    proptest! {
        #[test]
        fn prop_round_trip_preserves_records(
            records in prop::collection::vec((field(), field(), field(), -1.0e6f64..1.0e6f64), 0..40)
        ) {
            let items: Vec<StatsItem> = records
                .into_iter()
                .map(|(name, action, text, value)| StatsItem::new(name, action, text, value))
                .collect();

            let lines = to_csv(&items, b',').unwrap();
            prop_assert_eq!(lines.len(), items.len());
            prop_assert_eq!(sorted(from_csv(&lines, b',')), sorted(items));
        }
    }
}
