//! The Concrete Syntax Tree (CST): every parsed node, including punctuation
//! and keywords, kept in source order so the formatter can reconstruct the
//! original text losslessly.

use zero_lex::Token;
use zero_util::span::Location;

/// ~45 variants spanning program structure, declarations, statements,
/// expressions, types, and the two leaf categories (`Operator`, `Delimiter`)
/// that hold punctuation/keyword tokens in their textual position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,

    VarDeclaration,
    FnDeclaration,
    StructDeclaration,
    TypeAliasDeclaration,
    Field,
    ParamList,
    Param,
    ArgList,

    BlockStmt,
    StatementList,
    ReturnStmt,
    IfStmt,
    WhileStmt,
    ExprStmt,

    BinaryExpr,
    UnaryExpr,
    AssignExpr,
    CallExpr,
    IndexExpr,
    MemberExpr,
    StructLiteral,
    StructLiteralField,
    ArrayLiteral,
    ParenExpr,
    TupleLiteral,

    IntegerLiteral,
    FloatLiteral,
    StringLiteral,
    BoolLiteral,
    Identifier,

    UnionType,
    IntersectionType,
    NegationType,
    ArrayType,
    SizedArrayType,
    TupleType,
    FunctionSignatureType,
    NamedType,
    AnonStructType,

    /// A punctuation or operator token kept in textual position (`+`, `=`,
    /// `->`, …) that doesn't warrant its own node kind.
    Operator,
    /// A delimiter or keyword token kept in textual position (`(`, `{`,
    /// `let`, `fn`, …).
    Delimiter,
    Comment,
}

/// One CST node. Non-leaf nodes always have ≥1 child; leaves (`Operator`,
/// `Delimiter`, `Identifier`, literals, `Comment`) carry their token directly.
#[derive(Clone, Debug)]
pub struct CstNode {
    pub kind: NodeKind,
    pub location: Location,
    pub children: Vec<CstNode>,
    pub token: Option<Token>,
}

impl CstNode {
    pub fn new(kind: NodeKind, location: Location, children: Vec<CstNode>) -> Self {
        Self { kind, location, children, token: None }
    }

    /// A leaf node wrapping a single token (`Operator`, `Delimiter`,
    /// `Identifier`, a literal, or `Comment`).
    pub fn leaf(kind: NodeKind, token: Token) -> Self {
        let location = Location {
            file: std::sync::Arc::from(""),
            start_line: token.line,
            start_col: token.column,
            end_line: token.line,
            end_col: token.column + token.text.chars().count().max(1) as u32,
        };
        Self { kind, location, children: Vec::new(), token: Some(token) }
    }

    pub fn push(&mut self, child: CstNode) {
        self.children.push(child);
    }
}
