//! GEDCOM line-structure reader.
//!
//! Each line is `LEVEL [@XREF@] TAG [VALUE]`. Levels nest lines into trees;
//! `CONT` and `CONC` lines are folded into their parent's value.

use kin_value::{RecordNode, RecordRef};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GedcomError {
    #[error("line {line}: expected `LEVEL [@XREF@] TAG [VALUE]`, found `{text}`")]
    Malformed { line: usize, text: String },

    #[error("line {line}: level {level} does not follow level {previous}")]
    LevelJump {
        line: usize,
        level: u32,
        previous: u32,
    },

    #[error("cannot read `{path}`: {message}")]
    Io { path: String, message: String },
}

/// One parsed line.
struct Line<'a> {
    level: u32,
    xref: Option<&'a str>,
    tag: &'a str,
    value: Option<&'a str>,
}

fn parse_line(text: &str, line: usize) -> Result<Line<'_>, GedcomError> {
    let malformed = || GedcomError::Malformed {
        line,
        text: text.to_string(),
    };

    let (level, rest) = text.split_once(' ').ok_or_else(malformed)?;
    let level = level.parse::<u32>().map_err(|_| malformed())?;

    let (xref, rest) = if rest.starts_with('@') {
        let (xref, rest) = rest.split_once(' ').ok_or_else(malformed)?;
        (Some(xref), rest)
    } else {
        (None, rest)
    };

    let (tag, value) = match rest.split_once(' ') {
        Some((tag, value)) => (tag, Some(value)),
        None => (rest, None),
    };
    if tag.is_empty() {
        return Err(malformed());
    }

    Ok(Line {
        level,
        xref,
        tag,
        value,
    })
}

/// Parse GEDCOM text into its level-0 record trees, in file order.
pub fn parse_gedcom(text: &str) -> Result<Vec<RecordRef>, GedcomError> {
    let mut roots = Vec::new();
    // Open nodes from the current root down to the most recent line.
    let mut open: Vec<(u32, RecordNode)> = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let raw = raw.trim_start_matches('\u{feff}').trim();
        if raw.is_empty() {
            continue;
        }
        let line = parse_line(raw, index + 1)?;

        if let (Some((top_level, parent)), "CONT" | "CONC") = (open.last_mut(), line.tag) {
            if line.level == *top_level + 1 {
                let value = parent.value.get_or_insert_with(String::new);
                if line.tag == "CONT" {
                    value.push('\n');
                }
                value.push_str(line.value.unwrap_or_default());
                continue;
            }
        }

        let previous = open.last().map_or(0, |(level, _)| *level);
        let expected_max = if open.is_empty() { 0 } else { previous + 1 };
        if line.level > expected_max {
            return Err(GedcomError::LevelJump {
                line: index + 1,
                level: line.level,
                previous,
            });
        }

        close_to(&mut open, &mut roots, line.level);

        let mut node = RecordNode::new(line.tag);
        node.xref = line.xref.map(str::to_string);
        node.value = line.value.map(str::to_string);
        open.push((line.level, node));
    }

    close_to(&mut open, &mut roots, 0);
    Ok(roots)
}

/// Close every open node at `level` or deeper, attaching each to its parent.
fn close_to(open: &mut Vec<(u32, RecordNode)>, roots: &mut Vec<RecordRef>, level: u32) {
    while open.last().is_some_and(|(l, _)| *l >= level) {
        let Some((_, node)) = open.pop() else {
            break;
        };
        match open.last_mut() {
            Some((_, parent)) => parent.children.push(RecordRef::new(node)),
            None => roots.push(RecordRef::new(node)),
        }
    }
}
