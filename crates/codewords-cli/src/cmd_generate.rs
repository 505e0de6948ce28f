use crate::config::Config;
use crate::diag;
use anyhow::{Context, Result};
use codewords::{Codex, CodexError, Generator};
use std::io::Write;

/// One `-g` value. Integers too large for `i64` are kept as written so they
/// fail in order, like any other index that names no category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexArg {
    Index(i64),
    OutOfRange(String),
}

impl IndexArg {
    pub fn resolve(&self) -> codewords::Result<i64> {
        match self {
            IndexArg::Index(index) => Ok(*index),
            IndexArg::OutOfRange(text) => Err(CodexError::IndexOutOfRange(text.clone())),
        }
    }
}

/// clap value parser for `-g`: rejects anything that is not an integer.
pub fn parse_index(s: &str) -> std::result::Result<IndexArg, String> {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("'{}' is not an integer", s));
    }
    Ok(match s.parse::<i64>() {
        Ok(index) => IndexArg::Index(index),
        Err(_) => IndexArg::OutOfRange(s.to_string()),
    })
}

pub fn run(codex: &Codex, indices: &[IndexArg], config: &Config) -> Result<()> {
    let generator = Generator::new(codex, config.seed.clone());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if config.json {
        write_json(&mut out, codex, &generator, indices)?;
    } else {
        eprintln!(
            "Code word generation from reference file [{}]",
            codex.source().display()
        );
        write_words(&mut out, &generator, indices)?;
    }
    out.flush().context("Failed to write code words")
}

/// Print words as they are drawn. On a bad index the words drawn so far stay
/// on their line and the error is returned.
fn write_words<W: Write>(
    out: &mut W,
    generator: &Generator<'_>,
    indices: &[IndexArg],
) -> Result<()> {
    for (n, arg) in indices.iter().enumerate() {
        let word = match arg.resolve().and_then(|index| generator.draw(index)) {
            Ok(word) => word,
            Err(e) => {
                if n > 0 {
                    writeln!(out)?;
                }
                out.flush()?;
                return Err(e.into());
            }
        };
        diag::debug(format_args!("category {:?} -> {:?}", arg, word));
        if n > 0 {
            write!(out, " ")?;
        }
        write!(out, "{}", word)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_json<W: Write>(
    out: &mut W,
    codex: &Codex,
    generator: &Generator<'_>,
    indices: &[IndexArg],
) -> Result<()> {
    let indices = indices
        .iter()
        .map(IndexArg::resolve)
        .collect::<codewords::Result<Vec<i64>>>()?;
    let words = generator.generate(&indices)?;
    let output = serde_json::json!({
        "source": codex.source().display().to_string(),
        "seeded": generator.seed().is_fixed(),
        "indices": indices,
        "words": words,
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
