//! The token type produced by the lexer and consumed by the parser.

/// The kind of a [`Token`]. Roughly 60 variants spanning keywords, literals,
/// operators, punctuation, and the two special markers `Comment`/`EndOfFile`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Let,
    Var,
    Fn,
    Return,
    If,
    Else,
    While,
    For,
    In,
    Struct,
    Enum,
    Type,
    Trait,
    True,
    False,

    // Literals and names
    Identifier,
    Integer,
    Float,
    String,
    /// `mantissa e exponent`, rewritten to `Integer`/`Float`/`Unknown` by the
    /// token preprocessor. Never reaches the parser.
    ScientificExponent,
    Comment,

    // Two-character operators
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    EqEq,
    NotEq,
    LtEq,
    GtEq,
    AndAnd,
    OrOr,
    Arrow,
    DotDot,

    // One-character operators and punctuation
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Eq,
    Bang,
    Tilde,
    Lt,
    Gt,
    Amp,
    Pipe,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Colon,
    Dot,

    EndOfFile,
    Unknown,
}

impl TokenKind {
    /// Look up a keyword kind for an identifier's exact text, or `None` if
    /// `text` is an ordinary identifier.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        Some(match text {
            "let" => TokenKind::Let,
            "var" => TokenKind::Var,
            "fn" => TokenKind::Fn,
            "return" => TokenKind::Return,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "for" => TokenKind::For,
            "in" => TokenKind::In,
            "struct" => TokenKind::Struct,
            "enum" => TokenKind::Enum,
            "type" => TokenKind::Type,
            "trait" => TokenKind::Trait,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            _ => return None,
        })
    }
}

/// An immutable lexical token: an exact slice of the source plus enough
/// metadata for both the parser and the formatter to reconstruct behavior
/// that depends on the original text.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact source slice this token covers, e.g. `"0xFF"`.
    pub text: String,
    /// For string tokens: the original quoted text including the opening
    /// `r`/`"` and all escapes, preserved byte-for-byte. Empty for non-string
    /// tokens.
    pub raw_literal: String,
    /// 1-based starting line.
    pub line: u32,
    /// 1-based starting column (Unicode characters).
    pub column: u32,
    /// `true` when the parser inserted this token during error recovery.
    /// The lexer never sets this.
    pub is_synthetic: bool,
    /// `true` for a raw string (`r"..."`) token.
    pub is_raw_string: bool,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            raw_literal: String::new(),
            line,
            column,
            is_synthetic: false,
            is_raw_string: false,
        }
    }

    /// A synthetic token inserted by the parser's error recovery. Carries no
    /// real source text and is skipped by the formatter.
    pub fn synthetic(kind: TokenKind, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: String::new(),
            raw_literal: String::new(),
            line,
            column,
            is_synthetic: true,
            is_raw_string: false,
        }
    }

    pub fn with_raw_literal(mut self, raw: impl Into<String>) -> Self {
        self.raw_literal = raw.into();
        self
    }

    pub fn raw_string(mut self) -> Self {
        self.is_raw_string = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup_matches_fixed_table() {
        assert_eq!(TokenKind::keyword("let"), Some(TokenKind::Let));
        assert_eq!(TokenKind::keyword("trait"), Some(TokenKind::Trait));
        assert_eq!(TokenKind::keyword("true"), Some(TokenKind::True));
        assert_eq!(TokenKind::keyword("letter"), None);
    }

    #[test]
    fn synthetic_tokens_carry_no_text() {
        let t = Token::synthetic(TokenKind::Semicolon, 3, 10);
        assert!(t.is_synthetic);
        assert!(t.text.is_empty());
    }
}
