//! The `zero` command-line front end: thin glue over [`zero_driver`] that
//! parses arguments, reads files, and writes whatever each subcommand
//! produces. All real work — lexing, preprocessing, parsing, formatting —
//! happens in the library crates; this binary only does I/O and argument
//! plumbing.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use zero_driver::{Config, IndentStyle, PipelineOutcome, Session};

/// The `zero` compiler front end: tokenize, parse, and format Zero source
/// files.
#[derive(Parser, Debug)]
#[command(name = "zero")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize, parse, and format Zero source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Locale used to render diagnostic messages (e.g. en_US, zh_CN, ne_KO).
    #[arg(long, global = true, default_value = "en_US")]
    locale: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize each file and write a `<file>.tokens` listing.
    Tokenize {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Parse each file and report diagnostics on stderr; writes no output.
    Parse {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Format each file, writing `<file>.formatted` unless `--in-place`.
    Fmt {
        /// Rewrite the input file instead of writing a `.formatted` sibling.
        #[arg(short, long)]
        in_place: bool,

        /// Number of columns per indent level, in [1, 16].
        #[arg(long, default_value_t = 4)]
        indent_width: usize,

        /// Indent with tabs instead of spaces.
        #[arg(long)]
        use_tabs: bool,

        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let exit_ok = match &cli.command {
        Commands::Tokenize { files } => run_tokenize(&cli.locale, files)?,
        Commands::Parse { files } => run_parse(&cli.locale, files)?,
        Commands::Fmt {
            in_place,
            indent_width,
            use_tabs,
            files,
        } => run_fmt(&cli.locale, *in_place, *indent_width, *use_tabs, files)?,
    };

    if exit_ok {
        Ok(())
    } else {
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn session_for(locale: &str, indent_style: IndentStyle, indent_width: usize, in_place: bool) -> Result<Session> {
    let config = Config::new(locale, indent_style, indent_width, in_place).context("invalid configuration")?;
    Ok(Session::new(config))
}

fn report(outcome: &PipelineOutcome) {
    outcome.diagnostics.print_all(true);
}

fn run_tokenize(locale: &str, files: &[PathBuf]) -> Result<bool> {
    let session = session_for(locale, IndentStyle::Spaces, 4, false)?;
    let mut all_ok = true;

    for path in files {
        let outcome = session
            .run_pipeline_on_file(path, false)
            .with_context(|| format!("tokenizing {}", path.display()))?;
        report(&outcome);

        let listing = render_tokens(path, &outcome);
        let out_path = sibling_path(path, "tokens");
        fs::write(&out_path, listing).with_context(|| format!("writing {}", out_path.display()))?;

        if !outcome.succeeded() {
            all_ok = false;
        }
    }

    Ok(all_ok)
}

fn run_parse(locale: &str, files: &[PathBuf]) -> Result<bool> {
    let session = session_for(locale, IndentStyle::Spaces, 4, false)?;
    let mut all_ok = true;

    for path in files {
        let outcome = session
            .run_pipeline_on_file(path, false)
            .with_context(|| format!("parsing {}", path.display()))?;
        report(&outcome);

        if !outcome.succeeded() {
            all_ok = false;
        }
    }

    Ok(all_ok)
}

fn run_fmt(locale: &str, in_place: bool, indent_width: usize, use_tabs: bool, files: &[PathBuf]) -> Result<bool> {
    let indent_style = if use_tabs { IndentStyle::Tabs } else { IndentStyle::Spaces };
    let session = session_for(locale, indent_style, indent_width, in_place)?;
    let mut all_ok = true;

    for path in files {
        let outcome = session
            .run_pipeline_on_file(path, true)
            .with_context(|| format!("formatting {}", path.display()))?;
        report(&outcome);

        match &outcome.formatted {
            Some(formatted) => session.write_formatted(path, formatted)?,
            None => all_ok = false,
        }

        if !outcome.succeeded() {
            all_ok = false;
        }
    }

    Ok(all_ok)
}

fn sibling_path(path: &std::path::Path, extension: &str) -> PathBuf {
    let mut out = path.as_os_str().to_owned();
    out.push(".");
    out.push(extension);
    out.into()
}

/// Renders the `.tokens` listing format: a header comment block followed by
/// one tab-separated row per token.
fn render_tokens(path: &std::path::Path, outcome: &PipelineOutcome) -> String {
    let mut out = String::new();
    out.push_str("# Tokenization Result\n");
    out.push_str(&format!("# Source: {}\n", path.display()));
    out.push_str(&format!("# Total tokens: {}\n", outcome.tokens.len()));
    out.push_str("# Format: Index\tLine:Column\tType\tValue\n");
    out.push('\n');

    for (index, token) in outcome.tokens.iter().enumerate() {
        out.push_str(&format!(
            "{}\t{}:{}\t{:?}\t\"{}\"\n",
            index,
            token.line,
            token.column,
            token.kind,
            escape_token_value(&token.text),
        ));
    }

    out
}

fn escape_token_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\x{:02X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tokenize_subcommand() {
        let cli = Cli::parse_from(["zero", "tokenize", "a.zero"]);
        assert!(matches!(cli.command, Commands::Tokenize { .. }));
    }

    #[test]
    fn parses_fmt_with_options() {
        let cli = Cli::parse_from(["zero", "fmt", "--in-place", "--indent-width", "2", "a.zero"]);
        match cli.command {
            Commands::Fmt { in_place, indent_width, use_tabs, files } => {
                assert!(in_place);
                assert_eq!(indent_width, 2);
                assert!(!use_tabs);
                assert_eq!(files, vec![PathBuf::from("a.zero")]);
            }
            _ => panic!("expected Fmt command"),
        }
    }

    #[test]
    fn parses_global_locale() {
        let cli = Cli::parse_from(["zero", "--locale", "zh_CN", "parse", "a.zero"]);
        assert_eq!(cli.locale, "zh_CN");
    }

    #[test]
    fn defaults_locale_to_en_us() {
        let cli = Cli::parse_from(["zero", "parse", "a.zero"]);
        assert_eq!(cli.locale, "en_US");
    }

    #[test]
    fn escapes_control_characters_and_quotes() {
        assert_eq!(escape_token_value("a\nb\t\"c\""), "a\\nb\\t\\\"c\\\"");
        assert_eq!(escape_token_value("\u{1}"), "\\x01");
    }
}
