use lexgen::lexer;
use thiserror::Error;

pub type Loc = lexgen_util::Loc;
pub type LexerError = lexgen_util::LexerError<LexicalError>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Token {
    LParen,
    RParen,
    Plus,
    Minus,
    Star,
    Slash,
    Number(i64),
}

#[derive(Debug, Error)]
pub enum LexicalError {
    #[error("Number literal out of range: `{0}`")]
    NumberOutOfRange(String),
}

lexer! {
    pub Lexer -> Token;
    type Error = LexicalError;
    let digit = ['0'-'9'];
    let ws = [' ' '\t' '\n'] | "\r\n";

    $ws,
    "(" = Token::LParen,
    ")" = Token::RParen,
    "+" = Token::Plus,
    "-" = Token::Minus,
    "*" = Token::Star,
    "/" = Token::Slash,
    $digit+ =? |lexer| {
        use std::str::FromStr;
        let parsed = i64::from_str(lexer.match_())
            .map_err(|_| LexicalError::NumberOutOfRange(lexer.match_().to_string()))
            .map(Token::Number);
        lexer.return_(parsed)
    },
}
