use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("package", TokenKind::Package);
        map.insert("func", TokenKind::Func);
        map.insert("if", TokenKind::If);
        map.insert("for", TokenKind::For);
        map.insert("var", TokenKind::Var);
        map.insert("int", TokenKind::Int);
        map.insert("return", TokenKind::Return);
        map.insert("nil", TokenKind::Nil);
        map.insert("type", TokenKind::Type);
        map.insert("struct", TokenKind::Struct);
        map.insert("interface", TokenKind::Interface);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    String,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assign,            // =
    DeclareInitialize, // :=
    Underscore,

    Plus,
    Dash,
    Star,
    Slash,

    // Reserved
    Package,
    Func,
    If,
    For,
    Var,
    Int,
    Return,
    Nil,
    Type,
    Struct,
    Interface,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified, positioned substring of source text.
///
/// `length` counts the source characters consumed to produce the token, in
/// character units rather than bytes. For string literals that includes the
/// two quote characters even though `text` holds only the contents. `line`
/// and `column` are the 1-based position of the token's first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub length: usize,
    pub line: usize,
    pub column: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\ntext: {}}}", self.kind, self.text)
    }
}
