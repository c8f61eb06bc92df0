#[lachs::token]
pub enum Token {
    #[terminal("let")]
    Let,
    #[terminal("in")]
    In,
    #[terminal("True")]
    True,
    #[terminal("False")]
    False,
    #[literal("[a-zA-Z_][a-zA-Z0-9_']*")]
    Ident,
    #[literal("-?[0-9]+")]
    Integer,
    #[terminal("=")]
    Equals,
    #[terminal("\\")]
    Backslash,
    #[terminal("->")]
    Arrow,
    #[terminal("(")]
    LParen,
    #[terminal(")")]
    RParen,
}

impl Token {
    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self {
            Token::Let(_) => "'let'".to_string(),
            Token::In(_) => "'in'".to_string(),
            Token::True(_) => "'True'".to_string(),
            Token::False(_) => "'False'".to_string(),
            Token::Ident(inner) => format!("identifier '{}'", inner.value),
            Token::Integer(inner) => format!("integer '{}'", inner.value),
            Token::Equals(_) => "'='".to_string(),
            Token::Backslash(_) => "'\\'".to_string(),
            Token::Arrow(_) => "'->'".to_string(),
            Token::LParen(_) => "'('".to_string(),
            Token::RParen(_) => "')'".to_string(),
        }
    }
}
