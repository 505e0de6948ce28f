use anyhow::{Context, Result};
use codewords::Codex;
use std::io::Write;

pub fn run(codex: &Codex, verbose: bool, json: bool) -> Result<()> {
    if !json {
        if verbose {
            eprintln!(
                "Listing categories verbosely from reference file [{}]",
                codex.source().display()
            );
        } else {
            eprintln!(
                "Listing category indices from reference file [{}]",
                codex.source().display()
            );
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_list(&mut out, codex, verbose, json)?;
    out.flush().context("Failed to write category listing")
}

fn write_list<W: Write>(out: &mut W, codex: &Codex, verbose: bool, json: bool) -> Result<()> {
    if json {
        let items = codex
            .categories()
            .map(|c| {
                if verbose {
                    serde_json::to_value(c)
                } else {
                    Ok(serde_json::json!({
                        "index": c.index,
                        "label": c.label,
                    }))
                }
            })
            .collect::<serde_json::Result<Vec<_>>>()?;
        let output = serde_json::json!({
            "source": codex.source().display().to_string(),
            "categories": items,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        return Ok(());
    }

    for c in codex.categories() {
        if verbose {
            writeln!(out)?;
            writeln!(out, "{} {}", c.index, c.label)?;
            writeln!(out, "{}", c.items.join(", "))?;
        } else {
            writeln!(out, "{} {}", c.index, c.label)?;
        }
    }
    Ok(())
}
