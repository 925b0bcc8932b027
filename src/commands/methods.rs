//! Methods command - list the catalog

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::catalog::MethodCatalog;
use crate::core::method::MethodDefinition;
use crate::core::render::{OutputFormat, RenderConfig};

/// Render the catalog's definitions in the configured format
pub fn render_methods(catalog: &MethodCatalog, config: &RenderConfig) -> Result<String> {
    let definitions: Vec<MethodDefinition> =
        catalog.methods().iter().map(MethodDefinition::from).collect();

    let output = match config.format {
        OutputFormat::Jsonl => definitions
            .iter()
            .map(|def| {
                if config.pretty {
                    serde_json::to_string_pretty(def)
                } else {
                    serde_json::to_string(def)
                }
            })
            .collect::<Result<Vec<_>, _>>()?
            .join("\n"),
        OutputFormat::Json if config.pretty => serde_json::to_string_pretty(&definitions)?,
        OutputFormat::Json => serde_json::to_string(&definitions)?,
        OutputFormat::Markdown => {
            let mut output = String::from("| Id | Name | Bonuses | Pairs |\n|---:|---|---|---:|\n");
            for method in catalog.methods() {
                let mut bonuses = Vec::new();
                if method.adds_character_count() {
                    bonuses.push("characters");
                }
                if method.adds_word_count() {
                    bonuses.push("words");
                }
                output.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    method.id(),
                    method.name(),
                    bonuses.join(", "),
                    method.value_mapper().len()
                ));
            }
            output
        }
        OutputFormat::Csv => {
            let d = config.delimiter;
            let mut output = format!("Id{d}Name{d}SortOrder{d}Cipher\n");
            for def in &definitions {
                output.push_str(&format!(
                    "{}{d}\"{}\"{d}{}{d}\"{}\"\n",
                    def.id,
                    def.name.replace('"', "'"),
                    def.sort_order,
                    def.cipher
                ));
            }
            output
        }
    };
    Ok(output)
}

/// Run the methods command
pub fn run_methods(methods_file: Option<&Path>, config: RenderConfig) -> Result<()> {
    let catalog = MethodCatalog::load_or_builtin(methods_file)?;
    let output = render_methods(&catalog, &config)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}
