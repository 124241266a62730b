//! Tokenizer for the wire format.
//!
//! Produces delimiter and atom tokens. Line tags are stripped here and stored
//! on the atom token that carried them; comments and whitespace vanish.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::{Delimiter, ReadError};

/// What a token is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Open(Delimiter),
    Close(Delimiter),
    Atom { text: String, quoted: bool },
}

/// A token plus the line tag it carried (atoms only).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: Option<u32>,
}

impl Token {
    /// Source-like spelling of the token, for "trailing input" messages.
    pub fn spelling(&self) -> String {
        match &self.kind {
            TokenKind::Open(d) => d.open().to_string(),
            TokenKind::Close(d) => d.close().to_string(),
            TokenKind::Atom { text, quoted: true } => format!("\"{text}\""),
            TokenKind::Atom { text, quoted: false } => text.clone(),
        }
    }
}

/// Split `source` into tokens.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ReadError> {
    let mut lexer = Lexer {
        chars: source.char_indices().peekable(),
        source,
        last_line: None,
    };
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

struct Lexer<'src> {
    chars: Peekable<CharIndices<'src>>,
    source: &'src str,
    /// Most recent line tag, used to place errors.
    last_line: Option<u32>,
}

/// Characters that end an unquoted atom.
fn is_boundary(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | '{' | '}' | '"' | ';' | '[')
}

impl Lexer<'_> {
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.chars.next();
            } else if c == ';' {
                while let Some(c) = self.peek_char() {
                    if c == '\n' {
                        break;
                    }
                    self.chars.next();
                }
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>, ReadError> {
        self.skip_trivia();
        let Some(&(start, c)) = self.chars.peek() else {
            return Ok(None);
        };

        let delimiter = match c {
            '(' => Some(TokenKind::Open(Delimiter::Paren)),
            '{' => Some(TokenKind::Open(Delimiter::Brace)),
            ')' => Some(TokenKind::Close(Delimiter::Paren)),
            '}' => Some(TokenKind::Close(Delimiter::Brace)),
            _ => None,
        };
        if let Some(kind) = delimiter {
            self.chars.next();
            return Ok(Some(Token { kind, line: None }));
        }

        match c {
            '"' => {
                self.chars.next();
                let text = self.quoted_text()?;
                let line = self.line_tag()?;
                Ok(Some(Token {
                    kind: TokenKind::Atom { text, quoted: true },
                    line,
                }))
            }
            '[' => Err(self.bad_line_tag(start)),
            _ => {
                let mut end = start;
                while let Some(&(i, c)) = self.chars.peek() {
                    if is_boundary(c) {
                        break;
                    }
                    end = i + c.len_utf8();
                    self.chars.next();
                }
                let text = self.source[start..end].to_string();
                let line = self.line_tag()?;
                Ok(Some(Token {
                    kind: TokenKind::Atom {
                        text,
                        quoted: false,
                    },
                    line,
                }))
            }
        }
    }

    /// Body of a quoted string; the opening quote is already consumed.
    fn quoted_text(&mut self) -> Result<String, ReadError> {
        let mut text = String::new();
        loop {
            let Some((_, c)) = self.chars.next() else {
                return Err(ReadError::UnterminatedString {
                    line: self.last_line,
                });
            };
            match c {
                '"' => return Ok(text),
                '\\' => {
                    let escaped = match self.chars.next() {
                        Some((_, 'n')) => '\n',
                        Some((_, 't')) => '\t',
                        Some((_, 'r')) => '\r',
                        Some((_, '\\')) => '\\',
                        Some((_, '"')) => '"',
                        Some((_, other)) => {
                            return Err(ReadError::InvalidEscape {
                                escape: other,
                                line: self.last_line,
                            })
                        }
                        None => {
                            return Err(ReadError::UnterminatedString {
                                line: self.last_line,
                            })
                        }
                    };
                    text.push(escaped);
                }
                _ => text.push(c),
            }
        }
    }

    /// Strip an optional `[digits]` suffix directly after an atom.
    fn line_tag(&mut self) -> Result<Option<u32>, ReadError> {
        let Some(&(start, '[')) = self.chars.peek() else {
            return Ok(None);
        };
        self.chars.next();
        let mut digits = String::new();
        loop {
            match self.chars.next() {
                Some((_, ']')) => break,
                Some((_, c)) if c.is_ascii_digit() => digits.push(c),
                _ => return Err(self.bad_line_tag(start)),
            }
        }
        let line = digits
            .parse::<u32>()
            .map_err(|_| self.bad_line_tag(start))?;
        self.last_line = Some(line);
        Ok(Some(line))
    }

    /// Error for a malformed tag starting at byte `start`.
    fn bad_line_tag(&self, start: usize) -> ReadError {
        let tag: String = self.source[start..]
            .chars()
            .take_while(|c| !c.is_whitespace() && *c != ')' && *c != '}')
            .take(16)
            .collect();
        ReadError::BadLineTag {
            tag,
            line: self.last_line,
        }
    }
}
