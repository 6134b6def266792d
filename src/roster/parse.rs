//! Roster file parsing.
//!
//! This is the only place in the crate that reads the data source; the
//! normalizer and the graph engine never see a file path.

use crate::roster::row::RawRecord;
use anyhow::{Context, bail};
use regex::Regex;
use std::fs;

/// Parse a roster file into raw records.
///
/// Expected lines (comma-separated); the lot list may be double-quoted so
/// that it can itself contain commas:
///
/// permit,lots
/// Gold,"Lot A, Lot B"
/// Silver,Lot B
///
/// A first line naming both columns is treated as a header and skipped, as
/// are blank lines.
pub fn parse_roster_file(path: &str) -> anyhow::Result<Vec<RawRecord>> {
    let text = fs::read_to_string(path).with_context(|| format!("read roster file {}", path))?;
    parse_roster_text(path, &text)
}

fn parse_roster_text(path: &str, text: &str) -> anyhow::Result<Vec<RawRecord>> {
    // Capture:
    // 1) permit: everything up to the first comma
    // 2) lot list, quoted form
    // 3) lot list, bare form
    let re = Regex::new(r#"^\s*([^,]*?)\s*,\s*(?:"([^"]*)"|(.*?))\s*$"#)?;

    let mut out = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;
        let line = line.trim_end();

        if line.trim().is_empty() {
            continue;
        }

        if lno == 1 {
            let lower = line.to_lowercase();
            if lower.contains("permit") && lower.contains("lot") {
                continue;
            }
        }

        let caps = match re.captures(line) {
            Some(c) => c,
            None => {
                bail!(
                    "roster parse error at {}:{}: cannot parse line: {:?}",
                    path,
                    lno,
                    line
                );
            }
        };

        let permit = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let lots = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map(|m| m.as_str())
            .unwrap_or_default();

        out.push(RawRecord {
            permit: permit.to_string(),
            lots: lots.to_string(),
        });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_and_bare_lot_lists() {
        let text = "permit,lots\nGold,\"Lot A, Lot B\"\nSilver,Lot B\n";
        let records = parse_roster_text("roster.csv", text).unwrap();

        assert_eq!(
            records,
            [
                RawRecord {
                    permit: "Gold".into(),
                    lots: "Lot A, Lot B".into()
                },
                RawRecord {
                    permit: "Silver".into(),
                    lots: "Lot B".into()
                },
            ]
        );
    }

    #[test]
    fn skips_blank_lines_and_keeps_empty_lot_cells() {
        let text = "Gold,Lot A\n\nVisitor,\n";
        let records = parse_roster_text("roster.csv", text).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].permit, "Visitor");
        assert_eq!(records[1].lots, "");
    }

    #[test]
    fn line_without_separator_is_an_error() {
        let text = "Gold,Lot A\njust-a-permit\n";
        let err = parse_roster_text("roster.csv", text).unwrap_err();
        assert!(err.to_string().contains("roster.csv:2"));
    }
}
