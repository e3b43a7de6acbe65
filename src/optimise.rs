use std::rc::Rc;

use thiserror::Error;

use crate::ast::{Expr, Op};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Division by zero")]
    DivisionByZero,
}
pub type Result<T> = std::result::Result<T, EvalError>;

pub type NodeRef = Rc<Node>;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Node {
    /// `42`
    Num(i64),
    /// An additive or multiplicative group: `value` is the evaluation of the
    /// subtree the term was built from, cached at construction and never
    /// recomputed.
    Term {
        kind: Kind,
        positive: Vec<NodeRef>,
        negative: Vec<NodeRef>,
        value: i64,
    },
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Kind {
    Sum,
    Product,
}

impl Kind {
    pub fn operator(self) -> char {
        match self {
            Kind::Sum => '+',
            Kind::Product => '*',
        }
    }

    pub fn inverse(self) -> char {
        match self {
            Kind::Sum => '-',
            Kind::Product => '/',
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Num(n) => write!(f, "{n}"),
            Node::Term {
                kind,
                positive,
                negative,
                ..
            } => {
                f.write_str("(")?;
                for (i, child) in positive.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", kind.operator())?;
                    }
                    write!(f, "{child}")?;
                }
                for child in negative {
                    write!(f, " {} {child}", kind.inverse())?;
                }
                f.write_str(")")
            }
        }
    }
}

fn apply(op: Op, x: i64, y: i64) -> Result<i64> {
    Ok(match op {
        Op::Add => x + y,
        Op::Sub => x - y,
        Op::Mul => x * y,
        Op::Div => {
            if y == 0 {
                return Err(EvalError::DivisionByZero);
            }
            x / y
        }
    })
}

// `-` and `/` are the inverses of `+` and `*`: they keep the positive kind
// and push their right operand onto the negative side instead.
fn make_positive(op: Op) -> (Kind, bool) {
    match op {
        Op::Add => (Kind::Sum, false),
        Op::Sub => (Kind::Sum, true),
        Op::Mul => (Kind::Product, false),
        Op::Div => (Kind::Product, true),
    }
}

pub fn value_of(node: &Node) -> i64 {
    match node {
        Node::Num(n) => *n,
        Node::Term { value, .. } => *value,
    }
}

/// Direct arithmetic evaluation of a raw tree.
pub fn evaluate(expr: &Expr) -> Result<i64> {
    Ok(match expr {
        Expr::Num(n) => *n,
        Expr::BinOp { op, lhs, rhs } => apply(*op, evaluate(lhs)?, evaluate(rhs)?)?,
    })
}

/// Rewrite a raw operator tree into signed-term form, bottom-up. Every term
/// carries the evaluated value of its subtree; `-` and `/` nodes become `+`
/// and `*` terms with the right operand on the negative side, so the output
/// contains only `Sum` and `Product` terms.
pub fn transform(expr: &Expr) -> Result<NodeRef> {
    Ok(match expr {
        Expr::Num(n) => Node::Num(*n).into(),
        Expr::BinOp { op, lhs, rhs } => {
            let lhs = transform(lhs)?;
            let rhs = transform(rhs)?;
            let value = apply(*op, value_of(&lhs), value_of(&rhs))?;
            let (kind, inverted) = make_positive(*op);
            if inverted {
                Node::Term {
                    kind,
                    positive: vec![lhs],
                    negative: vec![rhs],
                    value,
                }
            } else {
                Node::Term {
                    kind,
                    positive: vec![lhs, rhs],
                    negative: vec![],
                    value,
                }
            }
            .into()
        }
    })
}

/// Flatten a transformed tree: every term in a `positive` list is replaced by
/// its own `positive` entries, rescanning from the splice point, until only
/// leaves remain. A spliced term's `negative` entries are dropped, and the
/// node's own `negative` list is carried through uncoalesced, so the operand
/// lists of the result do not in general re-evaluate to `value`; `value` is
/// the cached pre-coalesce evaluation and is deliberately left untouched.
pub fn coalesce(node: &NodeRef) -> NodeRef {
    let Node::Term {
        kind,
        positive,
        negative,
        value,
    } = node.as_ref()
    else {
        return node.clone();
    };
    let mut worklist: Vec<NodeRef> = positive.iter().map(coalesce).rev().collect();
    let mut pos = Vec::with_capacity(worklist.len());
    while let Some(child) = worklist.pop() {
        match child.as_ref() {
            Node::Num(_) => pos.push(child),
            // Splice: the term's positives take its place, first one
            // re-examined next; its negatives are dropped.
            Node::Term { positive, .. } => worklist.extend(positive.iter().cloned().rev()),
        }
    }
    Node::Term {
        kind: *kind,
        positive: pos,
        negative: negative.clone(),
        value: *value,
    }
    .into()
}
