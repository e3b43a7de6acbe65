use std::rc::Rc;

pub type ExprRef = Rc<Expr>;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
        })
    }
}

#[derive(PartialEq, Eq, Debug)]
pub enum Expr {
    /// `42`
    Num(i64),
    /// `x + y`
    BinOp { op: Op, lhs: ExprRef, rhs: ExprRef },
}

impl Expr {
    pub fn bin(op: Op, lhs: ExprRef, rhs: ExprRef) -> ExprRef {
        Expr::BinOp { op, lhs, rhs }.into()
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Num(n) => write!(f, "{n}"),
            Expr::BinOp { op, lhs, rhs } => write!(f, "({lhs} {op} {rhs})"),
        }
    }
}
