//! Tree back to wire text.

use std::fmt::Write;

use crate::{Atom, Sexpr};

/// Render `expr` in the wire format.
///
/// Quoted atoms are re-escaped and line tags are written back, so reading the
/// output yields an equal tree. An unquoted atom with empty text has no
/// spelling and renders as nothing.
pub fn render(expr: &Sexpr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr);
    out
}

fn write_expr(out: &mut String, expr: &Sexpr) {
    match expr {
        Sexpr::Atom(atom) => write_atom(out, atom),
        Sexpr::List(list) => {
            out.push(list.delimiter.open());
            for (i, item) in list.items.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write_expr(out, item);
            }
            out.push(list.delimiter.close());
        }
    }
}

fn write_atom(out: &mut String, atom: &Atom) {
    if atom.quoted {
        out.push('"');
        for c in atom.text.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\t' => out.push_str("\\t"),
                '\r' => out.push_str("\\r"),
                _ => out.push(c),
            }
        }
        out.push('"');
    } else {
        out.push_str(&atom.text);
    }
    if let Some(line) = atom.line {
        // Writing to a String cannot fail.
        let _ = write!(out, "[{line}]");
    }
}
