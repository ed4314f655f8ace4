//! Line lexer for the `.fis` text format.
//!
//! The format is line-oriented; the parser feeds one line at a time through
//! this Logos DFA and matches the resulting token slice against the expected
//! shape for that line. Whitespace separates tokens and is skipped.

use logos::Logos;

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t]+")]
pub enum Token<'a> {
    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("=")]
    Equals,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    /// Single-quoted string; the slice excludes the quotes.
    #[regex(r"'[^'\n]*'", |lex| {
        let s = lex.slice();
        &s[1..s.len() - 1]
    })]
    Quoted(&'a str),

    /// Numeric literal, kept as its raw slice. The parser decides whether an
    /// integer or a float is required, and whether a leading minus means a
    /// negated rule term.
    #[regex(r"-?\d+(\.\d+)?([eE][+-]?\d+)?", |lex| lex.slice())]
    Number(&'a str),

    /// Bare keyword: section names and `Key=` prefixes.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice())]
    Ident(&'a str),
}

/// Tokenizes one line. Returns `None` if the line contains any character the
/// format does not use.
pub fn lex_line(line: &str) -> Option<Vec<Token<'_>>> {
    let mut lexer = Token::lexer(line);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next() {
        tokens.push(token.ok()?);
    }
    Some(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_key_value_line() {
        let toks = lex_line("Name='tipper'").unwrap();
        assert_eq!(
            toks,
            vec![Token::Ident("Name"), Token::Equals, Token::Quoted("tipper")]
        );
    }

    #[test]
    fn lexes_mf_line() {
        let toks = lex_line("MF1='Rancid':'gaussmf',[1.5 0.0 1.0]").unwrap();
        assert_eq!(
            toks,
            vec![
                Token::Ident("MF1"),
                Token::Equals,
                Token::Quoted("Rancid"),
                Token::Colon,
                Token::Quoted("gaussmf"),
                Token::Comma,
                Token::LBracket,
                Token::Number("1.5"),
                Token::Number("0.0"),
                Token::Number("1.0"),
                Token::RBracket,
            ]
        );
    }

    #[test]
    fn lexes_rule_line_with_negation() {
        let toks = lex_line("1 -2, 0 (0.5) : 2").unwrap();
        assert_eq!(
            toks,
            vec![
                Token::Number("1"),
                Token::Number("-2"),
                Token::Comma,
                Token::Number("0"),
                Token::LParen,
                Token::Number("0.5"),
                Token::RParen,
                Token::Colon,
                Token::Number("2"),
            ]
        );
    }

    #[test]
    fn rejects_foreign_characters() {
        assert!(lex_line("Name=\"double quoted\"").is_none());
        assert!(lex_line("Range=[0 1]; drop table").is_none());
    }

    #[test]
    fn quoted_slice_excludes_quotes() {
        let toks = lex_line("'a b c'").unwrap();
        assert_eq!(toks, vec![Token::Quoted("a b c")]);
    }
}
