use anyhow::{anyhow, Result};
use lalrpop_util::lalrpop_mod;

pub mod ast;
pub mod lexer;
pub mod optimise;
pub mod solve;

lalrpop_mod!(
    #[allow(unused, clippy::all)]
    parser
);

trait ResultExt<T> {
    fn staticalize(self) -> Result<T>;
}
impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    fn staticalize(self) -> Result<T> {
        self.map_err(|e| anyhow!("{e:?}"))
    }
}

pub fn parse(s: &str) -> Result<ast::ExprRef> {
    let lexer = lexer::Lexer::new(s);
    parser::ExprParser::new().parse(lexer).staticalize()
}

#[cfg(test)]
mod test {
    use super::{
        ast::{Expr, Op},
        *,
    };

    #[test]
    fn test_parse() {
        assert_eq!(parse("42").unwrap().as_ref(), &Expr::Num(42));
        assert_eq!(
            parse("1 + 2").unwrap(),
            Expr::bin(Op::Add, Expr::Num(1).into(), Expr::Num(2).into())
        );
    }

    #[test]
    fn test_precedence() {
        // `*` binds tighter than `+`, both associate left.
        assert_eq!(parse("1 + 2 * 3").unwrap().to_string(), "(1 + (2 * 3))");
        assert_eq!(parse("(1 + 2) * 3").unwrap().to_string(), "((1 + 2) * 3)");
        assert_eq!(parse("10 - 4 - 3").unwrap().to_string(), "((10 - 4) - 3)");
        assert_eq!(parse("100 / 5 / 2").unwrap().to_string(), "((100 / 5) / 2)");
    }

    #[test]
    fn test_negative_literals() {
        assert_eq!(parse("-3").unwrap().as_ref(), &Expr::Num(-3));
        assert_eq!(parse("1 - -3").unwrap().to_string(), "(1 - -3)");
        assert_eq!(parse("-2 * 3").unwrap().to_string(), "(-2 * 3)");
    }

    #[test]
    fn test_malformed_input() {
        assert!(parse("").is_err());
        assert!(parse("1 +").is_err());
        assert!(parse("(1 + 2").is_err());
        assert!(parse("1 ^ 2").is_err());
        assert!(parse("99999999999999999999").is_err());
    }
}
