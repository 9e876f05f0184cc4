//! Lexer for lingo using logos.
//!
//! Produces structural tokens and borrowed slices for words, strings and
//! comments. Words are classified later by the matcher chain, since which
//! words are function names depends on what was registered.

use logos::Logos;

use crate::ParseError;

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token("'")]
    QuoteMarker,

    #[regex(r";[^\n]*")]
    Comment,

    #[regex(r#""[^"]*""#)]
    String,

    // Longest match prefers `String` whenever the closing quote exists.
    #[regex(r#""[^"]*"#)]
    UnterminatedString,

    #[regex(r"[a-zA-Z0-9_:+\-=*/><?!]+")]
    Word,
}

/// Token kind with borrowed payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'src> {
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    QuoteMarker,
    /// Comment text after the `;`.
    Comment(&'src str),
    /// String contents without the quotes.
    Str(&'src str),
    Word(&'src str),
}

impl TokenKind<'_> {
    /// Source spelling, for error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::LParen => "(".to_owned(),
            TokenKind::RParen => ")".to_owned(),
            TokenKind::LBracket => "[".to_owned(),
            TokenKind::RBracket => "]".to_owned(),
            TokenKind::LBrace => "{".to_owned(),
            TokenKind::RBrace => "}".to_owned(),
            TokenKind::Comma => ",".to_owned(),
            TokenKind::QuoteMarker => "'".to_owned(),
            TokenKind::Comment(text) => format!(";{text}"),
            TokenKind::Str(text) => format!("\"{text}\""),
            TokenKind::Word(word) => (*word).to_owned(),
        }
    }
}

/// A token and its byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind<'src>,
    pub offset: usize,
}

/// Lexer over one source string.
pub struct Lexer<'src> {
    source: &'src str,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer { source }
    }

    /// Lex all tokens, stopping at the first error.
    pub fn lex_all(&self) -> Result<Vec<Token<'src>>, ParseError> {
        let mut tokens = Vec::new();
        let mut logos = RawToken::lexer(self.source);

        while let Some(token_result) = logos.next() {
            let offset = logos.span().start;
            let slice: &'src str = logos.slice();

            let kind = match token_result {
                Ok(RawToken::LParen) => TokenKind::LParen,
                Ok(RawToken::RParen) => TokenKind::RParen,
                Ok(RawToken::LBracket) => TokenKind::LBracket,
                Ok(RawToken::RBracket) => TokenKind::RBracket,
                Ok(RawToken::LBrace) => TokenKind::LBrace,
                Ok(RawToken::RBrace) => TokenKind::RBrace,
                Ok(RawToken::Comma) => TokenKind::Comma,
                Ok(RawToken::QuoteMarker) => TokenKind::QuoteMarker,
                Ok(RawToken::Comment) => TokenKind::Comment(&slice[1..]),
                Ok(RawToken::String) => TokenKind::Str(&slice[1..slice.len() - 1]),
                Ok(RawToken::UnterminatedString) => {
                    return Err(ParseError::UnterminatedString { offset });
                }
                Ok(RawToken::Word) => TokenKind::Word(slice),
                Err(()) => {
                    let ch = slice.chars().next().unwrap_or('\0');
                    return Err(ParseError::UnexpectedChar { ch, offset });
                }
            };
            tokens.push(Token { kind, offset });
        }

        Ok(tokens)
    }
}
