use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::{ColoredString, Colorize};
use pgn_lexer::{LexError, Token, TokenKind, Tokenized};
use serde::Serialize;
use std::io::Write;

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Yaml,
    Json,
    /// One token per line
    Text,
}

#[derive(Serialize)]
struct TokenDocument<'a> {
    tokens: &'a [Token],
    diagnostics: &'a [LexError],
}

pub fn write_tokens<W: Write>(
    output: &mut W,
    tokenized: &Tokenized,
    format: Format,
    is_atty: bool,
) -> Result<()> {
    let document = TokenDocument {
        tokens: &tokenized.tokens,
        diagnostics: &tokenized.diagnostics,
    };

    match format {
        Format::Yaml => {
            serde_yaml::to_writer(output, &document).context("Error writing YAML data")
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *output, &document)
                .context("Error writing JSON data")?;
            writeln!(output)?;
            Ok(())
        }
        Format::Text => write_text(output, &tokenized.tokens, is_atty),
    }
}

fn colored_kind(kind: TokenKind) -> ColoredString {
    let kind_str = kind.as_str();
    match kind {
        TokenKind::Sag => kind_str.green(),
        TokenKind::Moveno => kind_str.cyan(),
        TokenKind::Nag => kind_str.yellow(),
        TokenKind::Result => kind_str.bold(),
        TokenKind::Comment | TokenKind::RestOfLineComment => kind_str.dimmed(),
        TokenKind::Tag | TokenKind::String => kind_str.blue(),
        _ => kind_str.normal(),
    }
}

fn write_text<W: Write>(output: &mut W, tokens: &[Token], is_atty: bool) -> Result<()> {
    for token in tokens {
        let kind_str = if is_atty {
            colored_kind(token.kind)
        } else {
            colored_kind(token.kind).clear()
        };

        writeln!(
            output,
            "{}:{} {} {}",
            token.position.line, token.position.offset, kind_str, token.value
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write_tokens, Format};
    use pgn_lexer::Lexer;

    fn render(text: &str, format: Format) -> String {
        let tokenized = Lexer::new(text).run().unwrap();
        let mut output = Vec::new();
        write_tokens(&mut output, &tokenized, format, false).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn text_output() {
        assert_eq!(
            render("1. e4 ; best\n1-0", Format::Text),
            "1:0 MOVENO 1.\n1:3 SAG e4\n1:6 REST_OF_LINE_COMMENT ; best\n2:13 RESULT 1-0\n"
        );
    }

    #[test]
    fn json_output() {
        let output = render("e4 @", Format::Json);
        let document: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(document["tokens"][0]["kind"], "SAG");
        assert_eq!(document["tokens"][0]["value"], "e4");
        assert_eq!(document["tokens"][0]["position"]["offset"], 0);
        assert_eq!(
            document["diagnostics"][0]["IllegalCharacter"]["character"],
            "@"
        );
    }

    #[test]
    fn yaml_output() {
        let output = render("[Event \"Test\"]", Format::Yaml);
        let document: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();

        let tokens = document["tokens"].as_sequence().unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[1]["kind"].as_str(), Some("TAG"));
        assert_eq!(tokens[2]["value"].as_str(), Some("\"Test\""));
        assert!(document["diagnostics"].as_sequence().unwrap().is_empty());
    }
}
