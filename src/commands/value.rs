//! Value command - score texts under the catalog's methods

use anyhow::Result;
use std::path::Path;

use crate::catalog::MethodCatalog;
use crate::core::method::GematriaMethod;
use crate::core::phrase::Phrase;
use crate::core::render::{RenderConfig, Renderer};

/// Build one phrase per text, scored on the selected methods (all if none)
pub fn evaluate(catalog: &MethodCatalog, texts: &[String], method_keys: &[String]) -> Result<Vec<Phrase>> {
    let ids = catalog.select(method_keys)?;
    let methods: Vec<GematriaMethod> = ids
        .iter()
        .filter_map(|id| catalog.methods().iter().find(|m| m.id() == *id))
        .cloned()
        .collect();

    Ok(texts.iter().map(|text| Phrase::new(text, &methods)).collect())
}

/// Run the value command
pub fn run_value(
    methods_file: Option<&Path>,
    texts: &[String],
    method_keys: &[String],
    config: RenderConfig,
) -> Result<()> {
    let catalog = MethodCatalog::load_or_builtin(methods_file)?;
    let phrases = evaluate(&catalog, texts, method_keys)?;

    Renderer::with_config(config).render_to(&phrases, std::io::stdout().lock())?;
    Ok(())
}
