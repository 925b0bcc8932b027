//! Scan command - phrase extraction over files, text or stdin

use anyhow::{bail, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::catalog::MethodCatalog;
use crate::core::cancel::CancellationToken;
use crate::core::file_reader::{read_stdin, read_text_file, EncodingStrategy, InputText};
use crate::core::phrase::Phrase;
use crate::core::render::{RenderConfig, Renderer};
use crate::scan::{default_separators, scan_texts, separator_strings, ScanOptions, TextSeparator};

/// Arguments of the scan command
#[derive(Debug, Clone, Default)]
pub struct ScanArgs {
    pub files: Vec<PathBuf>,
    pub text: Option<String>,
    pub values: Vec<u64>,
    pub methods: Vec<String>,
    pub min_chars: usize,
    pub min_words: usize,
    pub max_words: usize,
    pub separators: Vec<TextSeparator>,
    pub strict_utf8: bool,
    pub timeout: Option<u64>,
    pub stats: bool,
}

impl ScanArgs {
    /// Scanner options; no separators means all of them, no values means
    /// unconstrained extraction
    pub fn options(&self) -> ScanOptions {
        let separators = if self.separators.is_empty() {
            default_separators()
        } else {
            separator_strings(&self.separators)
        };
        let values_to_look_for = if self.values.is_empty() {
            None
        } else {
            Some(self.values.iter().copied().collect())
        };

        ScanOptions {
            minimum_characters_per_phrase: self.min_chars,
            minimum_words_per_phrase: self.min_words,
            maximum_words_per_phrase: self.max_words,
            separators,
            values_to_look_for,
        }
    }
}

/// Scan statistics
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    pub inputs: usize,
    pub bytes: usize,
    pub methods: usize,
    pub selected: usize,
    pub matches: usize,
    pub elapsed: Duration,
}

fn load_inputs(args: &ScanArgs) -> Result<Vec<InputText>> {
    let strategy = if args.strict_utf8 {
        EncodingStrategy::Strict
    } else {
        EncodingStrategy::Lossy
    };

    if let Some(text) = &args.text {
        return Ok(vec![InputText {
            source: "<text>".to_string(),
            content: text.clone(),
            warnings: Vec::new(),
        }]);
    }
    if args.files.is_empty() {
        return Ok(vec![read_stdin(strategy)?]);
    }
    args.files
        .iter()
        .map(|path| read_text_file(path, strategy))
        .collect()
}

/// Scan inputs with the given catalog and token
pub fn scan_inputs(
    catalog: &MethodCatalog,
    inputs: &[InputText],
    args: &ScanArgs,
    cancel: &CancellationToken,
) -> Result<(Vec<Phrase>, ScanStats)> {
    let started = Instant::now();
    let selected = catalog.select(&args.methods)?;
    let options = args.options();
    let texts: Vec<&str> = inputs.iter().map(|i| i.content.as_str()).collect();

    tracing::info!(
        inputs = inputs.len(),
        methods = catalog.len(),
        selected = selected.len(),
        "scanning"
    );

    let phrases = scan_texts(catalog.methods(), &selected, cancel, &options, &texts)?;
    if cancel.is_cancelled() {
        bail!("Scan cancelled; partial results were discarded");
    }

    let stats = ScanStats {
        inputs: inputs.len(),
        bytes: texts.iter().map(|t| t.len()).sum(),
        methods: catalog.len(),
        selected: selected.len(),
        matches: phrases.len(),
        elapsed: started.elapsed(),
    };
    Ok((phrases, stats))
}

fn print_stats(stats: &ScanStats) {
    eprintln!("{}", "Scan Statistics:".bold());
    eprintln!("   Inputs: {} ({} bytes)", stats.inputs, stats.bytes);
    eprintln!("   Methods: {} ({} selected)", stats.methods, stats.selected);
    eprintln!(
        "   Phrases: {}",
        stats.matches.to_string().green().bold()
    );
    eprintln!("   Elapsed: {} ms", stats.elapsed.as_millis());
    eprintln!();
}

/// Run the scan command
pub fn run_scan(methods_file: Option<&Path>, args: ScanArgs, config: RenderConfig) -> Result<()> {
    let catalog = MethodCatalog::load_or_builtin(methods_file)?;
    let inputs = load_inputs(&args)?;

    let cancel = CancellationToken::new();
    if let Some(secs) = args.timeout {
        cancel.cancel_after(Duration::from_secs(secs));
    }

    let (phrases, stats) = scan_inputs(&catalog, &inputs, &args, &cancel)?;
    if args.stats {
        print_stats(&stats);
    }

    Renderer::with_config(config).render_to(&phrases, std::io::stdout().lock())?;
    Ok(())
}
