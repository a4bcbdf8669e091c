//! Delimited Text Parser
//!
//! Header-row CSV with a configurable delimiter. Values stay strings.

use std::collections::BTreeMap;

/// One data line keyed by header name
pub type Row = BTreeMap<String, String>;

const BOM: char = '\u{feff}';

/// Parse `raw` into rows keyed by the header line.
///
/// Blank lines are skipped. Short rows are padded with empty strings and
/// surplus fields are dropped. A field opening with `"` may contain the
/// delimiter; `""` inside it is a literal quote. Quoted fields do not span
/// lines.
pub fn parse_delimited(raw: &str, delimiter: char) -> Vec<Row> {
    let mut lines = raw.lines().filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers = split_fields(header_line.trim_start_matches(BOM), delimiter);

    lines
        .map(|line| {
            let mut values = split_fields(line, delimiter).into_iter();
            headers
                .iter()
                .map(|name| (name.clone(), values.next().unwrap_or_default()))
                .collect()
        })
        .collect()
}

fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;
    let mut at_field_start = true;

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else if c == delimiter {
            fields.push(std::mem::take(&mut field));
            at_field_start = true;
            continue;
        } else if c == '"' && at_field_start {
            in_quotes = true;
        } else {
            field.push(c);
        }
        at_field_start = false;
    }

    fields.push(field);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_parse_with_header() {
        let rows = parse_delimited("Title,Company\nEngineer,Acme\nLead,Initech\n", ',');
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], row(&[("Title", "Engineer"), ("Company", "Acme")]));
        assert_eq!(rows[1], row(&[("Title", "Lead"), ("Company", "Initech")]));
    }

    #[test]
    fn test_short_row_padded_with_empty() {
        let rows = parse_delimited("Title,Company,From,To\nEngineer,Acme\n", ',');
        assert_eq!(rows[0]["From"], "");
        assert_eq!(rows[0]["To"], "");
        assert_eq!(rows[0]["Company"], "Acme");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let rows = parse_delimited("A,B\n1,2,3,4\n", ',');
        assert_eq!(rows[0], row(&[("A", "1"), ("B", "2")]));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let rows = parse_delimited("\nA;B\n\n1;2\n   \n3;4\n\n", ';');
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["A"], "3");
    }

    #[test]
    fn test_values_not_trimmed_or_coerced() {
        let rows = parse_delimited("Skills;Description\n  Rust ; 007 \n", ';');
        assert_eq!(rows[0]["Skills"], "  Rust ");
        assert_eq!(rows[0]["Description"], " 007 ");
    }

    #[test]
    fn test_crlf_and_bom() {
        let rows = parse_delimited("\u{feff}Title,Company\r\nEngineer,Acme\r\n", ',');
        assert_eq!(rows[0]["Title"], "Engineer");
        assert_eq!(rows[0]["Company"], "Acme");
    }

    #[test]
    fn test_quoted_fields() {
        let rows = parse_delimited(
            "Title,Description\nEngineer,\"Built tools, services\"\nLead,\"Said \"\"hi\"\"\"\n",
            ',',
        );
        assert_eq!(rows[0]["Description"], "Built tools, services");
        assert_eq!(rows[1]["Description"], "Said \"hi\"");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_delimited("", ',').is_empty());
        assert!(parse_delimited("\n\n", ',').is_empty());
        assert!(parse_delimited("A,B\n", ',').is_empty());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "Skills;Description\nRust;Systems\n;orphan\nGo\n";
        assert_eq!(parse_delimited(text, ';'), parse_delimited(text, ';'));
    }
}
