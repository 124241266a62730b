//! Statement and expression nodes.

/// One node of a routine body.
///
/// Statements and expressions share the node type; which role a node plays
/// depends on where the interpreter meets it.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    /// Script line this node was compiled from.
    pub line: Option<u32>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Int(i64),
    Float(f64),
    Str(String),
    Ident(String),
    /// Statements run in order.
    Block(Vec<Node>),
    If {
        cond: Condition,
        then_branch: Box<Node>,
        else_branch: Option<Box<Node>>,
    },
    While {
        cond: Condition,
        body: Box<Node>,
    },
    Return(Option<Box<Node>>),
    Break,
    Continue,
    /// `(bltin NAME (ARGS…))`
    BuiltinCall(Call),
    /// `(call NAME (ARGS…))`
    ProcCall(Call),
    /// `(fcall NAME (ARGS…))`
    FuncCall(Call),
}

/// Callee name and argument nodes, in order.
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub name: String,
    pub args: Vec<Node>,
}

/// Test of an `if` or `while`.
///
/// When `bind` is present the value of `expr` is assigned to that name before
/// being tested.
#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    pub bind: Option<String>,
    pub expr: Box<Node>,
}

impl Node {
    pub fn new(kind: NodeKind, line: Option<u32>) -> Self {
        Node { kind, line }
    }

    pub fn int(value: i64) -> Self {
        Node::new(NodeKind::Int(value), None)
    }

    pub fn float(value: f64) -> Self {
        Node::new(NodeKind::Float(value), None)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::new(NodeKind::Str(value.into()), None)
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Node::new(NodeKind::Ident(name.into()), None)
    }

    pub fn block(stmts: Vec<Node>) -> Self {
        Node::new(NodeKind::Block(stmts), None)
    }

    pub fn builtin(name: impl Into<String>, args: Vec<Node>) -> Self {
        Node::new(NodeKind::BuiltinCall(Call::new(name, args)), None)
    }

    pub fn proc_call(name: impl Into<String>, args: Vec<Node>) -> Self {
        Node::new(NodeKind::ProcCall(Call::new(name, args)), None)
    }

    pub fn func_call(name: impl Into<String>, args: Vec<Node>) -> Self {
        Node::new(NodeKind::FuncCall(Call::new(name, args)), None)
    }

    pub fn if_(cond: Condition, then_branch: Node, else_branch: Option<Node>) -> Self {
        Node::new(
            NodeKind::If {
                cond,
                then_branch: Box::new(then_branch),
                else_branch: else_branch.map(Box::new),
            },
            None,
        )
    }

    pub fn while_(cond: Condition, body: Node) -> Self {
        Node::new(
            NodeKind::While {
                cond,
                body: Box::new(body),
            },
            None,
        )
    }

    pub fn return_(value: Option<Node>) -> Self {
        Node::new(NodeKind::Return(value.map(Box::new)), None)
    }

    #[must_use]
    pub fn at_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Short name of the node kind, for diagnostics.
    pub fn describe(&self) -> &'static str {
        match self.kind {
            NodeKind::Int(_) => "integer literal",
            NodeKind::Float(_) => "float literal",
            NodeKind::Str(_) => "string literal",
            NodeKind::Ident(_) => "identifier",
            NodeKind::Block(_) => "block",
            NodeKind::If { .. } => "if",
            NodeKind::While { .. } => "while",
            NodeKind::Return(_) => "return",
            NodeKind::Break => "break",
            NodeKind::Continue => "continue",
            NodeKind::BuiltinCall(_) => "builtin call",
            NodeKind::ProcCall(_) => "procedure call",
            NodeKind::FuncCall(_) => "function call",
        }
    }

    /// The identifier name if this is an identifier node.
    pub fn as_ident(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Ident(name) => Some(name),
            _ => None,
        }
    }
}

impl Call {
    pub fn new(name: impl Into<String>, args: Vec<Node>) -> Self {
        Call {
            name: name.into(),
            args,
        }
    }
}

impl Condition {
    /// A plain test with no binder.
    pub fn test(expr: Node) -> Self {
        Condition {
            bind: None,
            expr: Box::new(expr),
        }
    }

    /// Evaluate `expr`, assign it to `name`, then test it.
    pub fn binding(name: impl Into<String>, expr: Node) -> Self {
        Condition {
            bind: Some(name.into()),
            expr: Box::new(expr),
        }
    }
}

#[cfg(test)]
mod tests;
