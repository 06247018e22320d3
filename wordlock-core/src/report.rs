//! Output formatting - plaintext and JSON.

use std::io::{self, Write};

use tracing::warn;

use crate::scan::ScanReport;

/// Writes the matching words, one per line, then the alignment total.
///
/// With `show_offsets`, each word is followed by its alignment count and the
/// leftmost wheel (1-based) of every alignment.
pub fn write_plain<W: Write>(
    out: &mut W,
    report: &ScanReport,
    show_offsets: bool,
) -> io::Result<()> {
    for m in &report.words {
        if show_offsets {
            let wheels: Vec<String> = m.offsets.iter().map(|o| (o + 1).to_string()).collect();
            writeln!(
                out,
                "{} ({} at wheel {})",
                m.word,
                m.alignments,
                wheels.join(", ")
            )?;
        } else {
            writeln!(out, "{}", m.word)?;
        }
    }
    writeln!(out, "Found {} words.", report.total)
}

/// Writes the report as pretty-printed JSON.
///
/// Falls back to a bare `{"total": N}` object if serialization fails.
pub fn write_json<W: Write>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    match serde_json::to_string_pretty(report) {
        Ok(json) => writeln!(out, "{}", json),
        Err(e) => {
            warn!(error = %e, "JSON serialization failed");
            writeln!(out, "{{\"total\": {}}}", report.total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lock::Lock;
    use crate::scan::scan_words;

    fn render(report: &ScanReport, show_offsets: bool) -> String {
        let mut buf = Vec::new();
        write_plain(&mut buf, report, show_offsets).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_output() {
        let lock = Lock::from_letter_rows(["ab", "ab", "ab"]).unwrap();
        let report = scan_words(&lock, ["ab", "abc", "ba"]);
        assert_eq!(render(&report, false), "ab\nba\nFound 4 words.\n");
    }

    #[test]
    fn test_plain_output_with_offsets() {
        let lock = Lock::from_letter_rows(["ab", "ab", "ab"]).unwrap();
        let report = scan_words(&lock, ["ab"]);
        assert_eq!(
            render(&report, true),
            "ab (2 at wheel 1, 2)\nFound 2 words.\n"
        );
    }

    #[test]
    fn test_plain_output_no_matches() {
        let lock = Lock::from_letter_rows(["x"]).unwrap();
        let report = scan_words(&lock, ["a"]);
        assert_eq!(render(&report, false), "Found 0 words.\n");
    }

    #[test]
    fn test_json_output() {
        let lock = Lock::from_letter_rows(["ab", "ab", "ab"]).unwrap();
        let report = scan_words(&lock, ["ba", "c"]);
        let mut buf = Vec::new();
        write_json(&mut buf, &report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["words"][0]["word"], "ba");
        assert_eq!(value["words"][0]["offsets"], serde_json::json!([0, 1]));
    }
}
