//! Precedence-climbing expression parsing: `assignment` (right-assoc, lowest)
//! down through `||`, `&&`, equality, comparison, additive, multiplicative,
//! unary, and the postfix `call` chain (highest), bottoming out at `primary`.

use zero_lex::TokenKind;

use super::core::{punctuation_leaf, Parser};
use crate::cst::{CstNode, NodeKind};

fn is_assignment_op(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Eq
            | TokenKind::PlusEq
            | TokenKind::MinusEq
            | TokenKind::StarEq
            | TokenKind::SlashEq
            | TokenKind::PercentEq
    )
}

impl<'a> Parser<'a> {
    pub(crate) fn parse_expression(&mut self) -> CstNode {
        self.parse_assignment()
    }

    /// `assignment := logical_or ('=' assignment)?` — right-associative: the
    /// right-hand side recurses into `assignment` itself, not `logical_or`.
    fn parse_assignment(&mut self) -> CstNode {
        let target = self.parse_logical_or();
        if is_assignment_op(self.current().kind) {
            let start = target.location.clone();
            let op = self.advance();
            let rhs = self.parse_assignment();
            return CstNode::new(
                NodeKind::AssignExpr,
                start,
                vec![target, punctuation_leaf(op), rhs],
            );
        }
        target
    }

    fn parse_logical_or(&mut self) -> CstNode {
        self.parse_left_assoc_binary(TokenKind::OrOr, Self::parse_logical_and)
    }

    fn parse_logical_and(&mut self) -> CstNode {
        self.parse_left_assoc_binary(TokenKind::AndAnd, Self::parse_equality)
    }

    fn parse_equality(&mut self) -> CstNode {
        let mut left = self.parse_comparison();
        while matches!(self.current().kind, TokenKind::EqEq | TokenKind::NotEq) {
            left = self.fold_binary(left, Self::parse_comparison);
        }
        left
    }

    fn parse_comparison(&mut self) -> CstNode {
        let mut left = self.parse_term();
        while matches!(
            self.current().kind,
            TokenKind::Lt | TokenKind::LtEq | TokenKind::Gt | TokenKind::GtEq
        ) {
            left = self.fold_binary(left, Self::parse_term);
        }
        left
    }

    fn parse_term(&mut self) -> CstNode {
        let mut left = self.parse_factor();
        while matches!(self.current().kind, TokenKind::Plus | TokenKind::Minus) {
            left = self.fold_binary(left, Self::parse_factor);
        }
        left
    }

    fn parse_factor(&mut self) -> CstNode {
        let mut left = self.parse_unary();
        while matches!(
            self.current().kind,
            TokenKind::Star | TokenKind::Slash | TokenKind::Percent
        ) {
            left = self.fold_binary(left, Self::parse_unary);
        }
        left
    }

    /// Shared helper for a single left-associative binary tier whose operator
    /// set is exactly one token kind (`||`, `&&`).
    fn parse_left_assoc_binary(
        &mut self,
        op_kind: TokenKind,
        mut next: impl FnMut(&mut Self) -> CstNode,
    ) -> CstNode {
        let mut left = next(self);
        while self.check(op_kind) {
            let start = left.location.clone();
            let op = self.advance();
            let right = next(self);
            left = CstNode::new(NodeKind::BinaryExpr, start, vec![left, punctuation_leaf(op), right]);
        }
        left
    }

    fn fold_binary(&mut self, left: CstNode, mut next: impl FnMut(&mut Self) -> CstNode) -> CstNode {
        let start = left.location.clone();
        let op = self.advance();
        let right = next(self);
        CstNode::new(NodeKind::BinaryExpr, start, vec![left, punctuation_leaf(op), right])
    }

    /// `unary := ('!'|'-') unary | call`
    fn parse_unary(&mut self) -> CstNode {
        if matches!(self.current().kind, TokenKind::Bang | TokenKind::Minus) {
            let op = self.advance();
            let start = self.location_of(&op);
            let operand = self.parse_unary();
            return CstNode::new(NodeKind::UnaryExpr, start, vec![punctuation_leaf(op), operand]);
        }
        self.parse_call()
    }

    /// `call := primary ( '(' arg_list? ')' | '[' expression ']' | '.' Ident | '{' struct_init_body '}' )*`
    fn parse_call(&mut self) -> CstNode {
        let mut expr = self.parse_primary();

        loop {
            match self.current().kind {
                TokenKind::LParen => {
                    let start = expr.location.clone();
                    let lparen = self.advance();
                    let args = self.parse_arg_list();
                    let rparen = self.consume(TokenKind::RParen, "`)`");
                    expr = CstNode::new(
                        NodeKind::CallExpr,
                        start,
                        vec![expr, punctuation_leaf(lparen), args, punctuation_leaf(rparen)],
                    );
                }
                TokenKind::LBracket => {
                    let start = expr.location.clone();
                    let lbracket = self.advance();
                    let index = self.parse_expression();
                    let rbracket = self.consume(TokenKind::RBracket, "`]`");
                    expr = CstNode::new(
                        NodeKind::IndexExpr,
                        start,
                        vec![expr, punctuation_leaf(lbracket), index, punctuation_leaf(rbracket)],
                    );
                }
                TokenKind::Dot => {
                    let start = expr.location.clone();
                    let dot = self.advance();
                    let name = self.consume(TokenKind::Identifier, "identifier");
                    expr = CstNode::new(
                        NodeKind::MemberExpr,
                        start,
                        vec![expr, punctuation_leaf(dot), CstNode::leaf(NodeKind::Identifier, name)],
                    );
                }
                TokenKind::LBrace if self.looks_like_struct_literal() => {
                    let start = expr.location.clone();
                    let lbrace = self.advance();
                    let mut children = vec![expr, punctuation_leaf(lbrace)];
                    self.parse_struct_literal_body(&mut children);
                    let rbrace = self.consume(TokenKind::RBrace, "`}`");
                    children.push(punctuation_leaf(rbrace));
                    expr = CstNode::new(NodeKind::StructLiteral, start, children);
                }
                _ => break,
            }
        }

        expr
    }

    /// Peeks past the current `{` to decide whether it opens a struct
    /// literal: an immediate `}` (empty literal) or `Identifier ':'`. Any
    /// other shape means this `{` belongs to the caller (a block), and no
    /// token is consumed.
    pub(crate) fn looks_like_struct_literal(&self) -> bool {
        let after_brace = self.peek(1);
        if after_brace.kind == TokenKind::RBrace {
            return true;
        }
        after_brace.kind == TokenKind::Identifier && self.peek(2).kind == TokenKind::Colon
    }

    fn parse_struct_literal_body(&mut self, children: &mut Vec<CstNode>) {
        while self.check(TokenKind::Identifier) {
            children.push(self.parse_struct_literal_field());
            if let Some(comma) = self.match_kind(TokenKind::Comma) {
                children.push(punctuation_leaf(comma));
            } else {
                break;
            }
        }
    }

    fn parse_struct_literal_field(&mut self) -> CstNode {
        let name = self.advance();
        let start = self.location_of(&name);
        let mut children = vec![CstNode::leaf(NodeKind::Identifier, name)];
        let colon = self.consume(TokenKind::Colon, "`:`");
        children.push(punctuation_leaf(colon));
        children.push(self.parse_expression());
        CstNode::new(NodeKind::StructLiteralField, start, children)
    }

    /// `primary := literal | Ident | '(' tuple_or_paren ')' | '[' elems? ']'`
    fn parse_primary(&mut self) -> CstNode {
        match self.current().kind {
            TokenKind::Integer => {
                let t = self.advance();
                CstNode::leaf(NodeKind::IntegerLiteral, t)
            }
            TokenKind::Float => {
                let t = self.advance();
                CstNode::leaf(NodeKind::FloatLiteral, t)
            }
            TokenKind::String => {
                let t = self.advance();
                CstNode::leaf(NodeKind::StringLiteral, t)
            }
            TokenKind::True | TokenKind::False => {
                let t = self.advance();
                CstNode::leaf(NodeKind::BoolLiteral, t)
            }
            TokenKind::Identifier => {
                let t = self.advance();
                CstNode::leaf(NodeKind::Identifier, t)
            }
            TokenKind::LParen => self.parse_paren_or_tuple(),
            TokenKind::LBracket => self.parse_array_literal(),
            _ => {
                let found = self.current();
                self.report_unexpected("an expression", &found);
                let synthetic = zero_lex::Token::synthetic(TokenKind::Identifier, found.line, found.column);
                self.synchronize_to_statement_start();
                CstNode::leaf(NodeKind::Identifier, synthetic)
            }
        }
    }

    /// After `(`: parse one expression, then a `,` means this is a tuple
    /// literal (optional trailing comma before `)`); otherwise it's a plain
    /// parenthesized expression.
    fn parse_paren_or_tuple(&mut self) -> CstNode {
        let lparen = self.advance();
        let start = self.location_of(&lparen);

        if self.check(TokenKind::RParen) {
            let rparen = self.advance();
            return CstNode::new(
                NodeKind::TupleLiteral,
                start,
                vec![punctuation_leaf(lparen), punctuation_leaf(rparen)],
            );
        }

        let first = self.parse_expression();

        if self.check(TokenKind::Comma) {
            let mut children = vec![punctuation_leaf(lparen), first];
            while let Some(comma) = self.match_kind(TokenKind::Comma) {
                children.push(punctuation_leaf(comma));
                if self.check(TokenKind::RParen) {
                    break;
                }
                children.push(self.parse_expression());
            }
            let rparen = self.consume(TokenKind::RParen, "`)`");
            children.push(punctuation_leaf(rparen));
            return CstNode::new(NodeKind::TupleLiteral, start, children);
        }

        let rparen = self.consume(TokenKind::RParen, "`)`");
        CstNode::new(
            NodeKind::ParenExpr,
            start,
            vec![punctuation_leaf(lparen), first, punctuation_leaf(rparen)],
        )
    }

    /// `'[' (expression (',' expression)* ','?)? ']'`
    fn parse_array_literal(&mut self) -> CstNode {
        let lbracket = self.advance();
        let start = self.location_of(&lbracket);
        let mut children = vec![punctuation_leaf(lbracket)];

        while !self.check(TokenKind::RBracket) && !self.is_at_end() {
            children.push(self.parse_expression());
            if let Some(comma) = self.match_kind(TokenKind::Comma) {
                children.push(punctuation_leaf(comma));
            } else {
                break;
            }
        }

        let rbracket = self.consume(TokenKind::RBracket, "`]`");
        children.push(punctuation_leaf(rbracket));
        CstNode::new(NodeKind::ArrayLiteral, start, children)
    }
}
