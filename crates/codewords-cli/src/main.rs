mod cmd_generate;
mod cmd_help;
mod cmd_list;
mod config;
mod diag;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cmd_generate::IndexArg;
use codewords::{Codex, CodexError};
use config::Config;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "code-words")]
#[command(about = "Randomly generate a sequence of code words from a reference file")]
#[command(disable_help_flag = true)]
struct Cli {
    /// Display the help page
    #[arg(short = 'h')]
    help: bool,

    /// Use a custom seed for the random number generator
    #[arg(short = 's', value_name = "seed", num_args = 0..=1)]
    seed: Option<Option<String>>,

    /// Use a custom reference file for code word generation
    #[arg(short = 'f', value_name = "filename", num_args = 0..=1)]
    file: Option<Option<PathBuf>>,

    /// List categories and indices from the reference file (-lc)
    #[arg(long = "list-categories", alias = "lc", conflicts_with = "list_verbose")]
    list_categories: bool,

    /// Verbosely list word categories from the reference file (-lv)
    #[arg(long = "list-verbose", alias = "lv")]
    list_verbose: bool,

    /// Generate a code word via a list of category index numbers
    #[arg(
        short = 'g',
        value_name = "#",
        num_args = 1..,
        allow_negative_numbers = true,
        value_parser = cmd_generate::parse_index
    )]
    generate: Option<Vec<IndexArg>>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Operation {
    Help,
    Usage,
    ListCategories,
    ListVerbose,
    Generate(Vec<IndexArg>),
}

impl Cli {
    fn operation(&self) -> Operation {
        if self.help {
            Operation::Help
        } else if self.list_categories {
            Operation::ListCategories
        } else if self.list_verbose {
            Operation::ListVerbose
        } else if let Some(indices) = &self.generate {
            Operation::Generate(indices.clone())
        } else {
            Operation::Usage
        }
    }
}

/// Rewrite the two-letter short flags into their long spellings.
fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-lc") => OsString::from("--list-categories"),
            Some("-lv") => OsString::from("--list-verbose"),
            _ => arg,
        })
        .collect()
}

fn run(cli: Cli) -> Result<()> {
    let operation = cli.operation();
    match operation {
        Operation::Help => {
            cmd_help::run();
            return Ok(());
        }
        Operation::Usage => {
            Cli::command().print_help()?;
            return Ok(());
        }
        _ => {}
    }

    let config = Config::from_env(cli.file, cli.seed, cli.json);
    diag::debug(format_args!("reference file {:?}", config.file));
    if matches!(operation, Operation::Generate(_)) && config.seed.is_weak() {
        eprintln!(
            "Warning: seeds shorter than {} characters are easy to guess",
            codewords::RECOMMENDED_SEED_LEN
        );
    }

    let codex = Codex::load(&config.file)?;
    diag::debug(format_args!(
        "loaded {} entries ({} categories)",
        codex.entries().len(),
        codex.category_count()
    ));

    match operation {
        Operation::ListCategories => cmd_list::run(&codex, false, config.json),
        Operation::ListVerbose => cmd_list::run(&codex, true, config.json),
        Operation::Generate(indices) => cmd_generate::run(&codex, &indices, &config),
        Operation::Help | Operation::Usage => Ok(()),
    }
}

fn report(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<CodexError>() {
        Some(e) if e.is_load_error() => {
            let file = e.path().map(|p| p.display().to_string()).unwrap_or_default();
            eprintln!(
                "ERROR: Either can't find the file [{}] or incorrect reference file format.",
                file
            );
            diag::debug(format_args!("{}", e));
            ExitCode::from(1)
        }
        Some(CodexError::InvalidIndex(index)) => report_index(&index.to_string()),
        Some(CodexError::IndexOutOfRange(text)) => report_index(text),
        _ => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn report_index(index: &str) -> ExitCode {
    eprintln!("ERROR: Invalid category index [{}] used.", index);
    eprintln!("Please check available category indices with the -lc flag.");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}
