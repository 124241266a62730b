//! The generic atom/list tree.

use std::fmt;

/// Which bracket pair delimits a list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `(` … `)`
    Paren,
    /// `{` … `}`
    Brace,
}

impl Delimiter {
    pub fn open(self) -> char {
        match self {
            Delimiter::Paren => '(',
            Delimiter::Brace => '{',
        }
    }

    pub fn close(self) -> char {
        match self {
            Delimiter::Paren => ')',
            Delimiter::Brace => '}',
        }
    }
}

/// A single token-level value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Atom {
    /// Token text, with quotes removed and escapes resolved for quoted atoms.
    pub text: String,
    /// Whether the atom was written as a `"quoted"` string.
    pub quoted: bool,
    /// Source line from a trailing `[n]` tag.
    pub line: Option<u32>,
}

impl Atom {
    /// An unquoted atom with no line tag.
    pub fn bare(text: impl Into<String>) -> Self {
        Atom {
            text: text.into(),
            quoted: false,
            line: None,
        }
    }

    /// A quoted atom with no line tag.
    pub fn quoted(text: impl Into<String>) -> Self {
        Atom {
            text: text.into(),
            quoted: true,
            line: None,
        }
    }

    #[must_use]
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }
}

/// An ordered list of expressions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct List {
    pub items: Vec<Sexpr>,
    pub delimiter: Delimiter,
}

/// A parsed S-expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sexpr {
    Atom(Atom),
    List(List),
}

impl Sexpr {
    /// Convenience constructor for an unquoted atom.
    pub fn atom(text: impl Into<String>) -> Self {
        Sexpr::Atom(Atom::bare(text))
    }

    /// Convenience constructor for a parenthesized list.
    pub fn list(items: Vec<Sexpr>) -> Self {
        Sexpr::List(List {
            items,
            delimiter: Delimiter::Paren,
        })
    }

    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Sexpr::Atom(atom) => Some(atom),
            Sexpr::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Sexpr]> {
        match self {
            Sexpr::Atom(_) => None,
            Sexpr::List(list) => Some(&list.items),
        }
    }

    /// Text of an unquoted atom; `None` for lists and quoted strings.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Sexpr::Atom(atom) if !atom.quoted => Some(&atom.text),
            _ => None,
        }
    }

    /// The first line tag found in this expression, depth-first.
    ///
    /// Lists carry no tag of their own, so a list reports the line of the
    /// earliest tagged atom inside it.
    pub fn line(&self) -> Option<u32> {
        match self {
            Sexpr::Atom(atom) => atom.line,
            Sexpr::List(list) => list.items.iter().find_map(Sexpr::line),
        }
    }
}

impl fmt::Display for Sexpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_line_comes_from_first_tagged_atom() {
        let tree = Sexpr::list(vec![
            Sexpr::list(vec![]),
            Sexpr::atom("bltin"),
            Sexpr::Atom(Atom::bare("name").at_line(7)),
            Sexpr::Atom(Atom::bare("x").at_line(9)),
        ]);
        assert_eq!(tree.line(), Some(7));
    }

    #[test]
    fn quoted_atoms_are_not_symbols() {
        assert_eq!(Sexpr::atom("main").as_symbol(), Some("main"));
        assert_eq!(Sexpr::Atom(Atom::quoted("main")).as_symbol(), None);
        assert_eq!(Sexpr::list(vec![]).as_symbol(), None);
    }
}
