//! Renderer module
//!
//! Renders phrase lists to different output formats: jsonl, json, md, csv

use std::io::Write;

use crate::core::export::{format_csv, method_columns, DEFAULT_DELIMITER};
use crate::core::phrase::Phrase;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
    /// Column delimiter for csv output
    pub delimiter: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}

impl RenderConfig {
    /// Create a new render config with default options
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
            delimiter: DEFAULT_DELIMITER,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Renderer for phrase lists
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render phrases to a string
    pub fn render(&self, phrases: &[Phrase]) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(phrases),
            OutputFormat::Json => self.render_json(phrases),
            OutputFormat::Markdown => self.render_markdown(phrases),
            OutputFormat::Csv => format_csv(phrases, self.config.delimiter),
        }
    }

    /// Render to a writer
    pub fn render_to<W: Write>(&self, phrases: &[Phrase], mut writer: W) -> std::io::Result<()> {
        let output = self.render(phrases);
        writer.write_all(output.as_bytes())?;
        if !output.is_empty() && !output.ends_with('\n') {
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, phrases: &[Phrase]) -> String {
        phrases
            .iter()
            .filter_map(|phrase| {
                if self.config.pretty {
                    serde_json::to_string_pretty(phrase).ok()
                } else {
                    serde_json::to_string(phrase).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, phrases: &[Phrase]) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(phrases).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(phrases).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as a Markdown table
    fn render_markdown(&self, phrases: &[Phrase]) -> String {
        if phrases.is_empty() {
            return "_No phrases._\n".to_string();
        }

        let columns = method_columns(phrases);
        let mut output = String::from("| Phrase | Alphabet |");
        for column in &columns {
            output.push_str(&format!(" {} |", column));
        }
        output.push_str("\n|---|---|");
        output.push_str(&"---:|".repeat(columns.len()));
        output.push('\n');

        for phrase in phrases {
            output.push_str(&format!(
                "| {} | {} |",
                phrase.content().replace('|', "\\|"),
                phrase.alphabet()
            ));
            for column in &columns {
                let value = phrase.value_by_name(column).unwrap_or(0);
                output.push_str(&format!(" {} |", value));
            }
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cipher::Cipher;
    use crate::core::method::GematriaMethod;

    fn phrases() -> Vec<Phrase> {
        let methods = vec![GematriaMethod::new(1, "Simple", Cipher::new("A=1,B=2")).unwrap()];
        vec![Phrase::new("ab", &methods), Phrase::new("ba a", &methods)]
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("jsonl".parse::<OutputFormat>(), Ok(OutputFormat::Jsonl));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("markdown".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
        assert_eq!("csv".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert!("raw".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_jsonl() {
        let output = Renderer::new(OutputFormat::Jsonl).render(&phrases());
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["content"], "AB");
        assert_eq!(first["values"][0]["value"], 3);
    }

    #[test]
    fn test_render_json_array() {
        let output = Renderer::new(OutputFormat::Json).render(&phrases());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(Renderer::new(OutputFormat::Json).render(&[]), "[]");
    }

    #[test]
    fn test_render_markdown() {
        let output = Renderer::new(OutputFormat::Markdown).render(&phrases());
        assert!(output.starts_with("| Phrase | Alphabet | Simple |\n"));
        assert!(output.contains("| BA A | english | 4 |"));
    }

    #[test]
    fn test_render_csv_with_delimiter() {
        let config = RenderConfig::new(OutputFormat::Csv).with_delimiter('\t');
        let output = Renderer::with_config(config).render(&phrases());
        assert_eq!(output, "Phrase\tSimple\n\"AB\"\t3\n\"BA A\"\t4\n");
    }

    #[test]
    fn test_render_to_appends_newline() {
        let mut buf = Vec::new();
        Renderer::new(OutputFormat::Json)
            .render_to(&phrases()[..1], &mut buf)
            .unwrap();
        assert!(String::from_utf8(buf).unwrap().ends_with("}]\n"));
    }
}
