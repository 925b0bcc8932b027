//! Golden tests for gemscan
//!
//! These tests run the binary against the files in `tests/fixtures` and pin
//! down the shape of each output format:
//! - Catalog ordering and custom separators in method files
//! - Bonus counts on method values
//! - CSV layout for right-to-left content

use assert_cmd::Command;
use serde_json::Value;
use std::path::PathBuf;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Create a command for running the gemscan binary
fn gemscan_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("gemscan"))
}

/// Parse JSONL output into a vector of JSON values
fn parse_jsonl(output: &str) -> Vec<Value> {
    output
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| serde_json::from_str::<Value>(l).ok())
        .collect()
}

/// Method name to value pairs of one phrase, in output order
fn values(phrase: &Value) -> Vec<(String, u64)> {
    phrase["values"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| {
            (
                v["method"].as_str().unwrap().to_string(),
                v["value"].as_u64().unwrap(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Methods Tests ====================

    #[test]
    fn golden_methods_file_ordering() {
        let output = gemscan_cmd()
            .arg("--methods-file")
            .arg(fixture("methods.json"))
            .arg("methods")
            .output()
            .expect("failed to execute");
        assert!(output.status.success());

        let items = parse_jsonl(&String::from_utf8_lossy(&output.stdout));
        let names: Vec<&str> = items.iter().filter_map(|v| v["name"].as_str()).collect();
        assert_eq!(names, vec!["Simple", "Tens", "Counted"]);

        // Custom separators survive the round trip through the catalog
        assert_eq!(items[0]["cipher"], "A:1;B:2;C:3");
        assert_eq!(items[0]["value_separator"], ":");
        assert_eq!(items[0]["pair_separator"], ";");
    }

    #[test]
    fn golden_methods_markdown() {
        let output = gemscan_cmd()
            .arg("--methods-file")
            .arg(fixture("methods.json"))
            .args(["--format", "md", "methods"])
            .output()
            .expect("failed to execute");
        let stdout = String::from_utf8_lossy(&output.stdout);

        let expected = "\
| Id | Name | Bonuses | Pairs |
|---:|---|---|---:|
| 11 | Simple |  | 3 |
| 10 | Tens |  | 3 |
| 12 | Counted | characters, words | 3 |
";
        assert_eq!(stdout, expected);
    }

    #[test]
    fn golden_builtin_catalog() {
        let output = gemscan_cmd()
            .arg("methods")
            .output()
            .expect("failed to execute");
        let items = parse_jsonl(&String::from_utf8_lossy(&output.stdout));

        let names: Vec<&str> = items.iter().filter_map(|v| v["name"].as_str()).collect();
        assert_eq!(
            names,
            vec![
                "English Ordinal",
                "Full Reduction",
                "Reverse Ordinal",
                "Sumerian",
                "English Extended",
                "Hebrew Standard",
                "Greek Isopsephy",
                "Arabic Abjad",
            ]
        );
    }

    // ==================== Value Tests ====================

    #[test]
    fn golden_value_with_bonuses() {
        let output = gemscan_cmd()
            .arg("--methods-file")
            .arg(fixture("methods.json"))
            .args(["value", "c  a b"])
            .output()
            .expect("failed to execute");
        let items = parse_jsonl(&String::from_utf8_lossy(&output.stdout));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["content"], "C A B");

        // Counted adds 3 letters and 3 words on top of the cipher sum
        assert_eq!(
            values(&items[0]),
            vec![
                ("Simple".to_string(), 6),
                ("Tens".to_string(), 60),
                ("Counted".to_string(), 12),
            ]
        );
    }

    #[test]
    fn golden_value_json_array() {
        let output = gemscan_cmd()
            .args(["--format", "json", "value", "ΛΟΓΟΣ", "محمد", "--method", "7", "--method", "8"])
            .output()
            .expect("failed to execute");
        let parsed: Value = serde_json::from_slice(&output.stdout).expect("valid json");
        let items = parsed.as_array().unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["alphabet"], "greek");
        assert_eq!(
            values(&items[0]),
            vec![("Greek Isopsephy".to_string(), 373), ("Arabic Abjad".to_string(), 0)]
        );
        assert_eq!(items[1]["alphabet"], "arabic");
        assert_eq!(
            values(&items[1]),
            vec![("Greek Isopsephy".to_string(), 0), ("Arabic Abjad".to_string(), 92)]
        );
    }

    // ==================== Scan Tests ====================

    #[test]
    fn golden_scan_target_value() {
        let output = gemscan_cmd()
            .arg("scan")
            .arg(fixture("caesar.txt"))
            .args(["--values", "888", "--method", "sumerian", "--max-words", "5"])
            .output()
            .expect("failed to execute");
        assert!(output.status.success());

        let items = parse_jsonl(&String::from_utf8_lossy(&output.stdout));
        let contents: Vec<&str> = items.iter().filter_map(|v| v["content"].as_str()).collect();
        assert!(contents.contains(&"THE DIE HAS BEEN CAST"));

        for item in &items {
            let sumerian = values(item)
                .into_iter()
                .find(|(name, _)| name == "Sumerian")
                .map(|(_, value)| value);
            assert_eq!(sumerian, Some(888), "unexpected match: {}", item["content"]);
        }
    }

    #[test]
    fn golden_scan_whole_lines() {
        let output = gemscan_cmd()
            .arg("scan")
            .arg(fixture("caesar.txt"))
            .args(["--separators", "newline", "--max-words", "5"])
            .output()
            .expect("failed to execute");
        let items = parse_jsonl(&String::from_utf8_lossy(&output.stdout));

        // Without space, each line is one candidate; punctuation stays in place
        let contents: Vec<&str> = items.iter().filter_map(|v| v["content"].as_str()).collect();
        assert_eq!(
            contents,
            vec!["ALEA IACTA EST.", "THE DIE HAS BEEN CAST.", "VENI, VIDI, VICI."]
        );
    }

    #[test]
    fn golden_scan_hebrew_csv() {
        let output = gemscan_cmd()
            .arg("scan")
            .arg(fixture("hebrew.txt"))
            .args(["--format", "csv"])
            .output()
            .expect("failed to execute");
        let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
        let lines: Vec<&str> = stdout.lines().collect();

        assert_eq!(lines.len(), 3, "header plus two distinct words");
        assert_eq!(
            lines[0],
            "Phrase,English Ordinal,Full Reduction,Reverse Ordinal,Sumerian,\
English Extended,Hebrew Standard,Greek Isopsephy,Arabic Abjad"
        );
        assert_eq!(lines[1], "\"שלום\u{200E}\",0,0,0,0,0,376,0,0");
        assert_eq!(lines[2], "\"עולם\u{200E}\",0,0,0,0,0,146,0,0");
    }

    #[test]
    fn golden_scan_markdown() {
        let output = gemscan_cmd()
            .args(["--format", "md", "--methods-file"])
            .arg(fixture("methods.json"))
            .args(["scan", "--text", "cab, abc"])
            .output()
            .expect("failed to execute");
        let stdout = String::from_utf8_lossy(&output.stdout);

        let expected = "\
| Phrase | Alphabet | Simple | Tens | Counted |
|---|---|---:|---:|---:|
| CAB | english | 6 | 60 | 10 |
| ABC | english | 6 | 60 | 10 |
";
        assert_eq!(stdout, expected);
    }
}
