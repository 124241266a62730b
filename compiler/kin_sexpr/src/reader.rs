//! Token stream to tree.
//!
//! Nesting is tracked on an explicit stack so arbitrarily deep input cannot
//! overflow the native stack.

use thiserror::Error;

use crate::lexer::{tokenize, Token, TokenKind};
use crate::{Atom, Delimiter, List, Sexpr};

/// Failure to read the wire format.
///
/// `line` is the most recent line tag seen before the failure, if any.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("unexpected `{found}` with no open list")]
    UnmatchedClose { found: char, line: Option<u32> },

    #[error("unclosed list, expected `{expected}` before end of input")]
    Unclosed { expected: char, line: Option<u32> },

    #[error("mismatched delimiter, expected `{expected}` but found `{found}`")]
    Mismatched {
        expected: char,
        found: char,
        line: Option<u32>,
    },

    #[error("unterminated string literal")]
    UnterminatedString { line: Option<u32> },

    #[error("invalid escape `\\{escape}` in string literal")]
    InvalidEscape { escape: char, line: Option<u32> },

    #[error("malformed line tag `{tag}`")]
    BadLineTag { tag: String, line: Option<u32> },

    #[error("unexpected input after program: `{text}`")]
    TrailingInput { text: String, line: Option<u32> },

    #[error("empty input")]
    Empty,
}

impl ReadError {
    pub fn line(&self) -> Option<u32> {
        match self {
            ReadError::UnmatchedClose { line, .. }
            | ReadError::Unclosed { line, .. }
            | ReadError::Mismatched { line, .. }
            | ReadError::UnterminatedString { line }
            | ReadError::InvalidEscape { line, .. }
            | ReadError::BadLineTag { line, .. }
            | ReadError::TrailingInput { line, .. } => *line,
            ReadError::Empty => None,
        }
    }
}

/// Maximum tokens quoted back in a [`ReadError::TrailingInput`] message.
const TRAILING_PREVIEW: usize = 6;

/// Read exactly one expression from `source`.
///
/// Whitespace and comments around the expression are fine; anything else
/// after it is an error.
pub fn read(source: &str) -> Result<Sexpr, ReadError> {
    let tokens = tokenize(source)?;
    let mut tokens = tokens.into_iter();
    let mut last_line = None;
    let expr = read_expr(&mut tokens, &mut last_line)?;

    let rest: Vec<Token> = tokens.collect();
    if rest.is_empty() {
        return Ok(expr);
    }
    let mut text = rest
        .iter()
        .take(TRAILING_PREVIEW)
        .map(Token::spelling)
        .collect::<Vec<_>>()
        .join(" ");
    if rest.len() > TRAILING_PREVIEW {
        text.push_str(" ...");
    }
    let line = rest.iter().find_map(|t| t.line).or(last_line);
    Err(ReadError::TrailingInput { text, line })
}

/// An open list awaiting its close delimiter.
struct OpenList {
    delimiter: Delimiter,
    items: Vec<Sexpr>,
    /// Last line tag seen when the list opened.
    line: Option<u32>,
}

fn read_expr(
    tokens: &mut impl Iterator<Item = Token>,
    last_line: &mut Option<u32>,
) -> Result<Sexpr, ReadError> {
    let mut stack: Vec<OpenList> = Vec::new();

    loop {
        let Some(token) = tokens.next() else {
            return Err(match stack.last() {
                Some(open) => ReadError::Unclosed {
                    expected: open.delimiter.close(),
                    line: open.line,
                },
                None => ReadError::Empty,
            });
        };

        let complete = match token.kind {
            TokenKind::Open(delimiter) => {
                stack.push(OpenList {
                    delimiter,
                    items: Vec::new(),
                    line: *last_line,
                });
                continue;
            }
            TokenKind::Close(found) => match stack.pop() {
                None => {
                    return Err(ReadError::UnmatchedClose {
                        found: found.close(),
                        line: *last_line,
                    })
                }
                Some(open) if open.delimiter != found => {
                    return Err(ReadError::Mismatched {
                        expected: open.delimiter.close(),
                        found: found.close(),
                        line: *last_line,
                    })
                }
                Some(open) => Sexpr::List(List {
                    items: open.items,
                    delimiter: open.delimiter,
                }),
            },
            TokenKind::Atom { text, quoted } => {
                if token.line.is_some() {
                    *last_line = token.line;
                }
                Sexpr::Atom(Atom {
                    text,
                    quoted,
                    line: token.line,
                })
            }
        };

        match stack.last_mut() {
            Some(parent) => parent.items.push(complete),
            None => return Ok(complete),
        }
    }
}
