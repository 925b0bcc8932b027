//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::render::{OutputFormat, RenderConfig};
use crate::scan::TextSeparator;

/// gemscan - compute gematria values and scan text for matching phrases.
#[derive(Parser, Debug)]
#[command(name = "gemscan")]
#[command(
    author,
    version,
    about,
    long_about = r#"gemscan scores text with gematria ciphers and finds phrases whose values
match a set of targets.

Every command prints phrases in the selected format (default: jsonl).

Output formats:
- jsonl: one JSON object per line (best for piping into tools)
- json: a single JSON array
- md: a Markdown table
- csv: "Phrase" followed by one column per method

Examples:
    gemscan value "The die has been cast"
    gemscan scan book.txt --values 888 --method sumerian --max-words 5
    gemscan scan --text "NEW YORK NEW YORK" --max-words 2 --format csv
    gemscan validate "A=1,B=2,C=3"
    gemscan methods --format md
"#
)]
pub struct Cli {
    /// Output format (jsonl/json/md/csv).
    #[arg(
        long,
        global = true,
        default_value = "jsonl",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- jsonl (default)\n\
- json\n\
- md (markdown)\n\
- csv\n\n\
Tip: Prefer csv when the result is headed for a spreadsheet."
    )]
    pub format: String,

    /// Column delimiter for csv output.
    #[arg(long, global = true, default_value = ",", value_name = "CHAR")]
    pub delimiter: char,

    /// JSON file with method definitions (defaults to the built-in ciphers).
    #[arg(
        long,
        global = true,
        env = "GEMSCAN_METHODS",
        value_name = "FILE",
        long_help = "Load gematria methods from a JSON file instead of the built-in catalog.\n\n\
The file holds an array of definitions:\n\
  [{\"id\": 1, \"name\": \"Simple\", \"cipher\": \"A=1,B=2,C=3\"}]\n\n\
Optional fields: sort_order, value_separator, pair_separator,\n\
adds_character_count, adds_word_count."
    )]
    pub methods_file: Option<PathBuf>,

    /// Disable colored output (when applicable).
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging on stderr).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable debug logging on stderr. GEMSCAN_LOG overrides the level\n\
with a tracing filter, e.g. GEMSCAN_LOG=gemscan=trace."
    )]
    pub verbose: bool,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the value of one or more texts under every method.
    #[command(long_about = "Normalize each TEXT and emit one phrase with its value under every\n\
method in the catalog (or only the methods given with --method).\n\n\
Examples:\n\
  gemscan value \"The die has been cast\"\n\
  gemscan value שלום ΛΟΓΟΣ --method hebrew-standard --method 7\n")]
    Value {
        /// Texts to evaluate.
        #[arg(value_name = "TEXT", required = true, num_args = 1..)]
        texts: Vec<String>,

        /// Limit output to these methods (name or id, repeatable).
        #[arg(long = "method", value_name = "METHOD")]
        methods: Vec<String>,
    },

    /// Scan text for phrases, optionally matching target values.
    #[command(
        long_about = r#"Split the input into segments on the configured separators, grow word
windows over them and emit every distinct phrase that satisfies the length
constraints. With --values, only phrases whose value under a selected method is
one of the targets are emitted.

Input is read from FILES, from --text, or from stdin when neither is given.

Examples:
    gemscan scan book.txt --values 888 --method sumerian --max-words 5
    gemscan scan --text "one, two, three" --separators comma
    cat notes.txt | gemscan scan --max-words 3 --format csv
"#
    )]
    Scan {
        /// Input files (UTF-8).
        #[arg(value_name = "FILE", num_args = 0..)]
        files: Vec<PathBuf>,

        /// Scan this text instead of files or stdin.
        #[arg(long, value_name = "TEXT", conflicts_with = "files")]
        text: Option<String>,

        /// Target values (comma-separated).
        #[arg(long, value_name = "N,..", value_delimiter = ',')]
        values: Vec<u64>,

        /// Methods used for value matching (name or id, repeatable).
        #[arg(
            long = "method",
            value_name = "METHOD",
            long_help = "Methods used for value matching (name or id, repeatable).\n\n\
Every emitted phrase is still scored on every method in the catalog; this only\n\
decides which values are compared against --values. Defaults to all methods."
        )]
        methods: Vec<String>,

        /// Minimum characters per phrase.
        #[arg(long, default_value = "3", value_name = "N")]
        min_chars: usize,

        /// Minimum words per phrase.
        #[arg(long, default_value = "1", value_name = "N")]
        min_words: usize,

        /// Maximum words per phrase.
        #[arg(long, default_value = "1", value_name = "N")]
        max_words: usize,

        /// Separators to split on (comma-separated names).
        #[arg(
            long,
            value_name = "NAMES",
            value_delimiter = ',',
            long_help = "Separators to split on (comma-separated names).\n\n\
Available: newline, comma, semicolon, greek-semicolon, tab, colon, full-stop,\n\
pipe, space. Defaults to all of them.\n\n\
Without space, each segment is taken whole as one candidate phrase."
        )]
        separators: Vec<TextSeparator>,

        /// Reject input files that are not valid UTF-8.
        #[arg(long)]
        strict_utf8: bool,

        /// Cancel the scan after this many seconds.
        #[arg(
            long,
            value_name = "SECS",
            long_help = "Cancel the scan after this many seconds. A cancelled scan discards\n\
all partial results and exits with an error."
        )]
        timeout: Option<u64>,

        /// Show scan statistics on stderr.
        #[arg(long)]
        stats: bool,
    },

    /// List the methods in the catalog.
    Methods,

    /// Check whether a cipher body is valid.
    #[command(long_about = "Validate a cipher body such as \"A=1,B=2,C=3\".\n\n\
Exits with a non-zero status when the cipher is invalid.\n\n\
Examples:\n\
  gemscan validate \"A=1,B=2\"\n\
  gemscan validate \"A:1;B:2\" --value-separator : --pair-separator ';'\n")]
    Validate {
        /// Cipher body.
        #[arg(value_name = "BODY")]
        body: String,

        /// Separator between a character and its value.
        #[arg(long, default_value = "=", value_name = "CHAR")]
        value_separator: char,

        /// Separator between pairs.
        #[arg(long, default_value = ",", value_name = "CHAR")]
        pair_separator: char,
    },

    /// Show the normalized form and alphabet of a text.
    Normalize {
        /// Text to normalize.
        #[arg(value_name = "TEXT")]
        text: String,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Parse output format
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::new(format)
        .with_pretty(cli.pretty)
        .with_delimiter(cli.delimiter);
    let methods_file = cli.methods_file.as_deref();

    match cli.command {
        Commands::Value { texts, methods } => {
            crate::commands::value::run_value(methods_file, &texts, &methods, render_config)
        }

        Commands::Scan {
            files,
            text,
            values,
            methods,
            min_chars,
            min_words,
            max_words,
            separators,
            strict_utf8,
            timeout,
            stats,
        } => {
            let args = crate::commands::scan::ScanArgs {
                files,
                text,
                values,
                methods,
                min_chars,
                min_words,
                max_words,
                separators,
                strict_utf8,
                timeout,
                stats,
            };
            crate::commands::scan::run_scan(methods_file, args, render_config)
        }

        Commands::Methods => crate::commands::methods::run_methods(methods_file, render_config),

        Commands::Validate {
            body,
            value_separator,
            pair_separator,
        } => crate::commands::validate::run_validate(
            &body,
            value_separator,
            pair_separator,
            render_config,
        ),

        Commands::Normalize { text } => {
            crate::commands::validate::run_normalize(&text, render_config)
        }
    }
}
