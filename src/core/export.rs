//! CSV export of phrase values
//!
//! Format:
//! ```text
//! Phrase,<Method1>,<Method2>,...
//! "<content>",<v1>,<v2>,...
//! ```

use crate::core::alphabet::classify_char;
use crate::core::phrase::Phrase;

pub const DEFAULT_DELIMITER: char = ',';

/// LEFT-TO-RIGHT MARK, keeps RTL content from swallowing the closing quote
pub const LTR_MARK: char = '\u{200E}';

/// Union of method names across `phrases`, in first-appearance order
pub fn method_columns(phrases: &[Phrase]) -> Vec<&str> {
    let mut columns: Vec<&str> = Vec::new();
    for value in phrases.iter().flat_map(|p| p.values()) {
        if !columns.contains(&value.method.as_str()) {
            columns.push(&value.method);
        }
    }
    columns
}

/// Format phrases as delimited text with one column per method
pub fn format_csv(phrases: &[Phrase], delimiter: char) -> String {
    let columns = method_columns(phrases);
    let delimiter = delimiter.to_string();

    let mut output = String::from("Phrase");
    for column in &columns {
        output.push_str(&delimiter);
        output.push_str(column);
    }
    output.push('\n');

    for phrase in phrases {
        output.push_str(&quote_content(phrase.content()));
        for column in &columns {
            output.push_str(&delimiter);
            output.push_str(&phrase.value_by_name(column).unwrap_or(0).to_string());
        }
        output.push('\n');
    }

    output
}

fn quote_content(content: &str) -> String {
    let mut quoted = String::with_capacity(content.len() + 5);
    quoted.push('"');
    quoted.push_str(&content.replace('"', "'"));
    if content
        .chars()
        .last()
        .is_some_and(|c| classify_char(c).needs_ltr_mark())
    {
        quoted.push(LTR_MARK);
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cipher::Cipher;
    use crate::core::method::GematriaMethod;

    fn method(id: i64, name: &str, body: &str) -> GematriaMethod {
        GematriaMethod::new(id, name, Cipher::new(body)).unwrap()
    }

    #[test]
    fn test_header_and_rows() {
        let methods = vec![method(1, "Simple", "A=1,B=2"), method(2, "Tens", "A=10,B=20")];
        let phrases = vec![Phrase::new("ab", &methods), Phrase::new("b a b", &methods)];

        let csv = format_csv(&phrases, ',');
        assert_eq!(csv, "Phrase,Simple,Tens\n\"AB\",3,30\n\"B A B\",5,50\n");
    }

    #[test]
    fn test_columns_are_union_with_zero_fill() {
        let first = vec![method(1, "Simple", "A=1")];
        let second = vec![method(2, "Tens", "A=10")];
        let phrases = vec![Phrase::new("a", &first), Phrase::new("aa", &second)];

        let csv = format_csv(&phrases, ';');
        assert_eq!(csv, "Phrase;Simple;Tens\n\"A\";1;0\n\"AA\";0;20\n");
    }

    #[test]
    fn test_quotes_replaced() {
        let methods = vec![method(1, "Simple", "A=1")];
        let phrases = vec![Phrase::new("say \"a\"", &methods)];
        let csv = format_csv(&phrases, ',');
        assert!(csv.contains("\"SAY 'A'\",2\n"));
    }

    #[test]
    fn test_ltr_mark_after_hebrew() {
        let methods = vec![method(1, "Hebrew", "א=1,ב=2")];
        let phrases = vec![Phrase::new("אב", &methods)];
        let csv = format_csv(&phrases, ',');
        assert_eq!(csv, "Phrase,Hebrew\n\"אב\u{200E}\",3\n");
    }

    #[test]
    fn test_ltr_mark_after_unknown_only() {
        let methods = vec![method(1, "Simple", "A=1")];
        let phrases = vec![
            Phrase::new("a 中", &methods),
            Phrase::new("שלום a", &methods),
            Phrase::new("a!", &methods),
        ];
        let csv = format_csv(&phrases, ',');
        let rows: Vec<_> = csv.lines().skip(1).collect();
        assert_eq!(rows[0], "\"A 中\u{200E}\",1");
        assert_eq!(rows[1], "\"שלום A\",1");
        assert_eq!(rows[2], "\"A!\",1");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format_csv(&[], ','), "Phrase\n");
    }
}
