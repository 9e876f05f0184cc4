//! Tree builder.
//!
//! Turns the token stream into a single `root` node. Open forms live on an
//! explicit stack together with the delimiter that opened them, so closers
//! are checked against their openers instead of against node kinds.

use lingo_ir::{Name, SExpr, SymbolTable};

use crate::{Lexer, MatcherChain, ParseError, Token, TokenKind};

/// What opened a form still on the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Opener {
    Root,
    Paren,
    Bracket,
    Dict,
    Pair,
}

/// Parser over a symbol table and a matcher chain.
pub struct Parser<'a> {
    symbols: &'a SymbolTable,
    matchers: &'a MatcherChain,
}

impl<'a> Parser<'a> {
    pub fn new(symbols: &'a SymbolTable, matchers: &'a MatcherChain) -> Self {
        Parser { symbols, matchers }
    }

    /// Parse `source` into a `root` node holding every top-level form.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse(&self, source: &str) -> Result<SExpr, ParseError> {
        let tokens = Lexer::new(source).lex_all()?;
        tracing::trace!(count = tokens.len(), "lexed");

        let labels = self.symbols.labels();
        let mut stack = vec![(SExpr::new(labels.root, Vec::new()), Opener::Root)];
        let mut tokens = tokens.into_iter();

        while let Some(Token { kind, offset }) = tokens.next() {
            match kind {
                TokenKind::LParen => {
                    let head = tokens.next().ok_or(ParseError::Unclosed { open: stack.len() })?;
                    let TokenKind::Word(word) = head.kind else {
                        return Err(ParseError::UnknownKind {
                            found: head.kind.describe(),
                            offset: head.offset,
                        });
                    };
                    let kind = self.classify(word, head.offset)?;
                    stack.push((SExpr::new(kind, Vec::new()), Opener::Paren));
                }
                TokenKind::RParen => close(&mut stack, Opener::Paren, ')', offset)?,
                TokenKind::LBracket => {
                    stack.push((SExpr::new(labels.vector, Vec::new()), Opener::Bracket));
                }
                TokenKind::RBracket => close(&mut stack, Opener::Bracket, ']', offset)?,
                TokenKind::LBrace => {
                    stack.push((SExpr::new(labels.dict, Vec::new()), Opener::Dict));
                    stack.push((SExpr::new(labels.pair, Vec::new()), Opener::Pair));
                }
                TokenKind::Comma => {
                    close_pair(&mut stack, offset)?;
                    stack.push((SExpr::new(labels.pair, Vec::new()), Opener::Pair));
                }
                TokenKind::RBrace => {
                    close_pair(&mut stack, offset)?;
                    close(&mut stack, Opener::Dict, '}', offset)?;
                }
                TokenKind::QuoteMarker => {
                    append(&mut stack, SExpr::atom(labels.quote_marker, "'"));
                }
                TokenKind::Comment(text) => append(&mut stack, SExpr::atom(labels.comment, text)),
                TokenKind::Str(text) => append(&mut stack, SExpr::atom(labels.string, text)),
                TokenKind::Word(word) => {
                    let kind = self.classify(word, offset)?;
                    append(&mut stack, SExpr::atom(kind, word));
                }
            }
        }

        if stack.len() != 1 {
            return Err(ParseError::Unclosed {
                open: stack.len() - 1,
            });
        }
        stack
            .pop()
            .map(|(root, _)| root)
            .ok_or(ParseError::Unclosed { open: 0 })
    }

    fn classify(&self, word: &str, offset: usize) -> Result<Name, ParseError> {
        self.matchers
            .classify(word, self.symbols)
            .ok_or_else(|| ParseError::UnknownKind {
                found: word.to_owned(),
                offset,
            })
    }
}

fn append(stack: &mut [(SExpr, Opener)], node: SExpr) {
    // The root entry is never popped, so the stack is never empty here.
    if let Some((parent, _)) = stack.last_mut() {
        parent.push(node);
    }
}

/// Pop the top form if `expected` opened it and attach it to its parent.
fn close(
    stack: &mut Vec<(SExpr, Opener)>,
    expected: Opener,
    found: char,
    offset: usize,
) -> Result<(), ParseError> {
    match stack.last() {
        Some((_, opener)) if *opener == expected => {}
        _ => return Err(ParseError::UnexpectedCloser { found, offset }),
    }
    if let Some((node, _)) = stack.pop() {
        append(stack, node);
    }
    Ok(())
}

/// Close the current dictionary pair; it must sit directly inside a dict.
fn close_pair(stack: &mut Vec<(SExpr, Opener)>, offset: usize) -> Result<(), ParseError> {
    let in_pair = matches!(
        stack.as_slice(),
        [.., (_, Opener::Dict), (_, Opener::Pair)]
    );
    if !in_pair {
        return Err(ParseError::InvalidDictionary { offset });
    }
    if let Some((pair, _)) = stack.pop() {
        append(stack, pair);
    }
    Ok(())
}
