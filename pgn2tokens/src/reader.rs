use anyhow::{bail, Context, Result};
use log::info;
use pgn_lexer::{Lexer, Tokenized};
use std::path::PathBuf;

pub fn read_pgn_file(pgn_file_path: &PathBuf) -> Result<Tokenized> {
    let text = std::fs::read_to_string(pgn_file_path).context(format!(
        "Could not read {}",
        pgn_file_path.to_string_lossy()
    ))?;

    let tokenized = Lexer::new(&text).run()?;

    info!(
        "{}: {} tokens, {} illegal characters",
        pgn_file_path.to_string_lossy(),
        tokenized.tokens.len(),
        tokenized.diagnostics.len()
    );

    Ok(tokenized)
}

/// Fails if any character had to be skipped while tokenizing.
pub fn check_strict(pgn_file_path: &PathBuf, tokenized: &Tokenized) -> Result<()> {
    if let Some(first) = tokenized.diagnostics.first() {
        bail!(
            "{} illegal characters in {}, first: {}",
            tokenized.diagnostics.len(),
            pgn_file_path.to_string_lossy(),
            first
        );
    }
    Ok(())
}
