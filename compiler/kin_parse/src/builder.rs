//! S-expression tree to program tables.

use kin_ir::{is_identifier, Call, Condition, Node, NodeKind, Program, Routine, RoutineKind};
use kin_sexpr::{Atom, Sexpr};
use kin_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::{LoadError, LoadErrorKind};

type BuildResult<T> = Result<T, LoadError>;

/// A successfully built top-level form.
enum TopLevel {
    Routine(Routine),
    Global(String),
}

/// Build the program tables from a root tree.
///
/// The root is either a list of top-level forms or a single form. Every bad
/// form contributes one error; the program is returned only if there are none.
pub fn build(root: &Sexpr) -> Result<Program, Vec<LoadError>> {
    let Some(items) = root.as_list() else {
        return Err(vec![LoadError::new(
            LoadErrorKind::BadTopLevel {
                found: describe(root).to_string(),
            },
            root.line(),
        )]);
    };

    let single_form = matches!(
        items.first().and_then(Sexpr::as_symbol),
        Some("proc" | "func" | "global")
    );
    let forms = if single_form {
        std::slice::from_ref(root)
    } else {
        items
    };

    let mut program = Program::new();
    let mut errors = Vec::new();
    for form in forms {
        match build_top_level(form) {
            Ok(TopLevel::Routine(routine)) => {
                let line = routine.line;
                if let Err(dup) = program.define(routine) {
                    errors.push(LoadError::new(
                        LoadErrorKind::Duplicate {
                            name: dup.name,
                            existing: dup.existing,
                        },
                        line,
                    ));
                }
            }
            Ok(TopLevel::Global(name)) => program.declare_global(name),
            Err(err) => errors.push(err),
        }
    }

    debug!(
        procs = program.procedure_count(),
        funcs = program.function_count(),
        globals = program.globals().len(),
        errors = errors.len(),
        "built program tables"
    );

    if errors.is_empty() {
        Ok(program)
    } else {
        Err(errors)
    }
}

fn build_top_level(form: &Sexpr) -> BuildResult<TopLevel> {
    let line = form.line();
    let bad = |found: &str| {
        LoadError::new(
            LoadErrorKind::BadTopLevel {
                found: found.to_string(),
            },
            line,
        )
    };

    let Some(items) = form.as_list() else {
        return Err(bad(describe(form)));
    };
    let Some(head) = items.first() else {
        return Err(bad("an empty list"));
    };
    match head.as_symbol() {
        Some("proc") => build_routine(RoutineKind::Proc, items, line).map(TopLevel::Routine),
        Some("func") => build_routine(RoutineKind::Func, items, line).map(TopLevel::Routine),
        Some("global") => {
            if items.len() != 2 {
                return Err(LoadError::new(
                    LoadErrorKind::Arity {
                        form: "global",
                        expected: "exactly one name",
                        found: items.len() - 1,
                    },
                    line,
                ));
            }
            identifier(&items[1], "global name").map(TopLevel::Global)
        }
        Some(other) => Err(bad(&format!("`{other}`"))),
        None => Err(bad(describe(head))),
    }
}

fn build_routine(kind: RoutineKind, items: &[Sexpr], line: Option<u32>) -> BuildResult<Routine> {
    if !matches!(items.len(), 4 | 5) {
        return Err(LoadError::new(
            LoadErrorKind::Arity {
                form: kind.keyword(),
                expected: "a name, a parameter list and a body",
                found: items.len() - 1,
            },
            line,
        ));
    }

    let name = identifier(&items[1], "routine name")?;
    let params = identifier_list(&items[2], "parameter")?;
    let locals = if items.len() == 5 {
        identifier_list(&items[3], "local")?
    } else {
        Vec::new()
    };
    let body = build_node(&items[items.len() - 1])?;

    Ok(Routine {
        kind,
        name,
        params,
        locals,
        body,
        line,
    })
}

/// Convert one expression or statement tree to a [`Node`].
pub fn build_node(expr: &Sexpr) -> BuildResult<Node> {
    ensure_sufficient_stack(|| match expr {
        Sexpr::Atom(atom) => build_atom(atom),
        Sexpr::List(_) => build_list(expr),
    })
}

fn build_atom(atom: &Atom) -> BuildResult<Node> {
    let kind = if atom.quoted {
        NodeKind::Str(atom.text.clone())
    } else if let Ok(value) = atom.text.parse::<i64>() {
        NodeKind::Int(value)
    } else if let Some(value) = parse_float(&atom.text) {
        NodeKind::Float(value)
    } else if is_identifier(&atom.text) {
        NodeKind::Ident(atom.text.clone())
    } else {
        return Err(LoadError::new(
            LoadErrorKind::BadIdentifier {
                text: atom.text.clone(),
                role: "identifier",
            },
            atom.line,
        ));
    };
    Ok(Node::new(kind, atom.line))
}

/// Decimal float literal. Spellings such as `inf` and `nan` stay identifiers.
fn parse_float(text: &str) -> Option<f64> {
    let numeric = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !numeric || !text.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn build_list(expr: &Sexpr) -> BuildResult<Node> {
    let line = expr.line();
    let items = expr.as_list().unwrap_or_default();

    let head = match items.first() {
        None | Some(Sexpr::List(_)) => {
            let stmts = items.iter().map(build_node).collect::<BuildResult<_>>()?;
            return Ok(Node::new(NodeKind::Block(stmts), line));
        }
        Some(Sexpr::Atom(head)) => head,
    };
    if head.quoted {
        return Err(LoadError::new(
            LoadErrorKind::UnknownKeyword {
                keyword: format!("\"{}\"", head.text),
            },
            line,
        ));
    }

    let arity = |form: &'static str, expected: &'static str| {
        LoadError::new(
            LoadErrorKind::Arity {
                form,
                expected,
                found: items.len() - 1,
            },
            line,
        )
    };

    let kind = match head.text.as_str() {
        "if" => {
            if !matches!(items.len(), 3 | 4) {
                return Err(arity("if", "a condition, a body and an optional else"));
            }
            NodeKind::If {
                cond: build_condition(&items[1])?,
                then_branch: Box::new(build_node(&items[2])?),
                else_branch: match items.get(3) {
                    Some(else_branch) => Some(Box::new(build_node(else_branch)?)),
                    None => None,
                },
            }
        }
        "while" => {
            if items.len() != 3 {
                return Err(arity("while", "a condition and a body"));
            }
            NodeKind::While {
                cond: build_condition(&items[1])?,
                body: Box::new(build_node(&items[2])?),
            }
        }
        "return" => match items {
            [_] => NodeKind::Return(None),
            [_, value] => NodeKind::Return(Some(Box::new(build_node(value)?))),
            _ => return Err(arity("return", "at most one value")),
        },
        "break" => {
            if items.len() != 1 {
                return Err(arity("break", "no operands"));
            }
            NodeKind::Break
        }
        "continue" => {
            if items.len() != 1 {
                return Err(arity("continue", "no operands"));
            }
            NodeKind::Continue
        }
        "bltin" => NodeKind::BuiltinCall(build_call("bltin", items, line)?),
        "call" => NodeKind::ProcCall(build_call("call", items, line)?),
        "fcall" => NodeKind::FuncCall(build_call("fcall", items, line)?),
        other => {
            return Err(LoadError::new(
                LoadErrorKind::UnknownKeyword {
                    keyword: other.to_string(),
                },
                line,
            ))
        }
    };
    Ok(Node::new(kind, line))
}

/// `(KW NAME (ARGS…))`; the argument list may be left out when empty.
fn build_call(form: &'static str, items: &[Sexpr], line: Option<u32>) -> BuildResult<Call> {
    if !matches!(items.len(), 2 | 3) {
        return Err(LoadError::new(
            LoadErrorKind::Arity {
                form,
                expected: "a name and an argument list",
                found: items.len() - 1,
            },
            line,
        ));
    }
    let name = identifier(&items[1], "callee name")?;
    let args = match items.get(2) {
        None => Vec::new(),
        Some(Sexpr::List(list)) => list
            .items
            .iter()
            .map(build_node)
            .collect::<BuildResult<_>>()?,
        Some(other) => return Err(expected("a list", other, "call arguments")),
    };
    Ok(Call { name, args })
}

/// `(EXPR)` or `(NAME EXPR)`, where NAME may also be written `(NAME)`.
fn build_condition(expr: &Sexpr) -> BuildResult<Condition> {
    let line = expr.line();
    let bad = |found| LoadError::new(LoadErrorKind::BadCondition { found }, line);

    let Some(items) = expr.as_list() else {
        return Err(bad(0));
    };
    match items {
        [test] => Ok(Condition::test(build_node(test)?)),
        [binder, value] => {
            let name = match binder {
                Sexpr::Atom(_) => identifier(binder, "condition variable")?,
                Sexpr::List(list) if list.items.len() == 1 && list.items[0].as_atom().is_some() => {
                    identifier(&list.items[0], "condition variable")?
                }
                Sexpr::List(_) => return Err(bad(2)),
            };
            Ok(Condition::binding(name, build_node(value)?))
        }
        _ => Err(bad(items.len())),
    }
}

fn identifier(expr: &Sexpr, role: &'static str) -> BuildResult<String> {
    match expr {
        Sexpr::Atom(atom) if !atom.quoted && is_identifier(&atom.text) => Ok(atom.text.clone()),
        Sexpr::Atom(atom) => Err(LoadError::new(
            LoadErrorKind::BadIdentifier {
                text: atom.text.clone(),
                role,
            },
            atom.line,
        )),
        Sexpr::List(_) => Err(expected("a name", expr, role)),
    }
}

fn identifier_list(expr: &Sexpr, role: &'static str) -> BuildResult<Vec<String>> {
    match expr.as_list() {
        Some(items) => items.iter().map(|item| identifier(item, role)).collect(),
        None => Err(expected("a list", expr, role)),
    }
}

fn expected(what: &'static str, found: &Sexpr, role: &'static str) -> LoadError {
    LoadError::new(
        LoadErrorKind::Expected {
            expected: what,
            found: describe(found),
            role,
        },
        found.line(),
    )
}

fn describe(expr: &Sexpr) -> &'static str {
    match expr {
        Sexpr::Atom(atom) if atom.quoted => "a string",
        Sexpr::Atom(_) => "an atom",
        Sexpr::List(_) => "a list",
    }
}

#[cfg(test)]
mod tests;
