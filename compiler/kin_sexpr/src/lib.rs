//! Kin S-Expression Reader.
//!
//! Compiled report programs arrive as one nested-bracket expression:
//!
//! ```text
//! ((global indent[1])
//!  (proc main () ((bltin print ("hello"[3])))))
//! ```
//!
//! This crate turns that text into a generic [`Sexpr`] tree and back. It knows
//! nothing about `proc`, `if` or any other keyword; the program-node builder
//! in `kin_parse` gives the tree its meaning.
//!
//! # Wire format
//!
//! - `(` … `)` and `{` … `}` delimit lists; a list must close with the
//!   delimiter kind it opened with.
//! - Atoms are runs of non-space, non-delimiter characters, or `"quoted"`
//!   strings with `\\ \" \n \t \r` escapes.
//! - Any atom may be followed immediately by `[<line>]`, the line of the
//!   script source it was compiled from.
//! - `;` starts a comment running to end of line.

mod lexer;
mod reader;
mod render;
mod sexpr;

pub use lexer::{tokenize, Token, TokenKind};
pub use reader::{read, ReadError};
pub use render::render;
pub use sexpr::{Atom, Delimiter, List, Sexpr};
