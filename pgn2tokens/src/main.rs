mod reader;
mod writer;

use self::reader::{check_strict, read_pgn_file};
use self::writer::{write_tokens, Format};

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// PGN file
    file: String,

    /// Path of the output file (if not specified, the tokens are written to stdout)
    #[arg(short, long)]
    output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    format: Format,

    /// Fail if any character could not be tokenized
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let pgn_path = PathBuf::from(cli.file);
    let tokenized = read_pgn_file(&pgn_path).context("Unable to tokenize PGN file")?;

    if cli.strict {
        check_strict(&pgn_path, &tokenized)?;
    }

    match cli.output.map(PathBuf::from) {
        Some(output_path) => {
            let output = File::create(&output_path).context(format!(
                "Could not open file {} for writing",
                output_path.to_string_lossy()
            ))?;
            let mut output = BufWriter::new(output);
            write_tokens(&mut output, &tokenized, cli.format, false)?;
            output.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut output = stdout.lock();
            let is_atty = atty::is(atty::Stream::Stdout);
            write_tokens(&mut output, &tokenized, cli.format, is_atty)?;
        }
    }

    Ok(())
}
