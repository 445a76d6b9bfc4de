//! SSML CLI
//!
//! Parses an SSML document and prints the text it speaks, its node tree,
//! its JSON form, or canonical markup.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;
use ssml_common::warning::{clear_warnings, report_error, warn_once};
use ssml_dom::{Node, print_tree, render};
use ssml_parser::{DEFAULT_MAX_DEPTH, IssueKind, SsmlParser};
use strum::IntoEnumIterator;

/// Parse SSML speech markup and flatten it to spoken text
#[derive(Parser, Debug)]
#[command(name = "ssml")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the text a document speaks
    ssml speech.ssml

    # Parse an inline string
    ssml --ssml '<speak>Hello<break time="3s"/>World!</speak>'

    # Show the node tree
    ssml -o tree speech.ssml

    # Read from stdin, fail on any warning
    cat speech.ssml | ssml --deny-warnings -o json
"#)]
struct Cli {
    /// Path to an SSML file; reads stdin when omitted or `-`
    #[arg(value_name = "FILE", conflicts_with = "ssml")]
    path: Option<PathBuf>,

    /// Parse an SSML string directly instead of a file
    #[arg(long, value_name = "SSML")]
    ssml: Option<String>,

    /// What to print for a successfully parsed document
    #[arg(short, long, value_enum, default_value_t = Output::Text)]
    output: Output,

    /// Reject documents nested deeper than this many elements (capped at 512)
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Suppress an issue kind (repeatable), e.g. `--allow unknown-entity`
    #[arg(long, value_name = "KIND", value_parser = parse_issue_kind)]
    allow: Vec<IssueKind>,

    /// Treat any reported issue as an error
    #[arg(long)]
    deny_warnings: bool,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    /// Flattened spoken text
    Text,
    /// Indented node tree
    Tree,
    /// Pretty-printed JSON
    Json,
    /// Canonical SSML markup
    Markup,
}

fn parse_issue_kind(value: &str) -> Result<IssueKind, String> {
    IssueKind::from_str(value).map_err(|_| {
        let known: Vec<String> = IssueKind::iter().map(|kind| kind.to_string()).collect();
        format!(
            "unknown issue kind '{value}', expected one of: {}",
            known.join(", ")
        )
    })
}

fn read_input(cli: &Cli) -> Result<String> {
    if let Some(ssml) = &cli.ssml {
        return Ok(ssml.clone());
    }
    match &cli.path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display())),
        _ => {
            let mut source = String::new();
            let _ = io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            Ok(source)
        }
    }
}

fn print_output(root: &Node, output: Output) -> Result<()> {
    match output {
        Output::Text => println!("{}", render(root)),
        Output::Tree => {
            println!("{}", "=== SSML Tree ===".bold());
            print_tree(root, 0);
        }
        Output::Json => {
            let json = serde_json::to_string_pretty(root).context("failed to encode tree")?;
            println!("{json}");
        }
        Output::Markup => println!("{root}"),
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let source = read_input(cli)?;

    clear_warnings();
    let (root, issues) = SsmlParser::new(&source)
        .with_max_depth(cli.max_depth)
        .run_with_issues()
        .context("invalid SSML")?;

    let issues: Vec<_> = issues
        .into_iter()
        .filter(|issue| !cli.allow.contains(&issue.kind))
        .collect();
    for issue in &issues {
        warn_once("SSML Parser", &issue.to_string());
    }
    if cli.deny_warnings && !issues.is_empty() {
        bail!(
            "{} issue(s) reported and --deny-warnings is set",
            issues.len()
        );
    }

    print_output(&root, cli.output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error("ssml", &format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_issue_kind() {
        assert_eq!(
            parse_issue_kind("unknown-entity"),
            Ok(IssueKind::UnknownEntity)
        );
        let err = parse_issue_kind("nope").unwrap_err();
        assert!(err.contains("duplicate-attribute, unknown-entity"), "{err}");
    }

    #[test]
    fn test_inline_ssml_wins_over_stdin() {
        let cli = Cli::parse_from(["ssml", "--ssml", "<speak>hi</speak>", "-o", "markup"]);
        assert_eq!(cli.output, Output::Markup);
        assert_eq!(read_input(&cli).unwrap(), "<speak>hi</speak>");
    }
}
