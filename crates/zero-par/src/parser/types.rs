//! Type expressions: `type_union -> type_intersection -> type_primary`, plus
//! the trailing array-suffix loop (`T[]`, `T[3]`, repeated and stacked).

use std::collections::HashSet;

use zero_lex::TokenKind;

use super::core::{punctuation_leaf, Parser};
use crate::cst::{CstNode, NodeKind};

impl<'a> Parser<'a> {
    pub(crate) fn parse_type_expr(&mut self) -> CstNode {
        self.parse_type_union()
    }

    /// `type_union := type_intersection ('|' type_intersection)*`
    fn parse_type_union(&mut self) -> CstNode {
        let mut left = self.parse_type_intersection();
        while self.check(TokenKind::Pipe) {
            let start = left.location.clone();
            let op = self.advance();
            let right = self.parse_type_intersection();
            left = CstNode::new(NodeKind::UnionType, start, vec![left, punctuation_leaf(op), right]);
        }
        left
    }

    /// `type_intersection := type_primary ('&' type_primary)*`
    fn parse_type_intersection(&mut self) -> CstNode {
        let mut left = self.parse_type_with_suffix();
        while self.check(TokenKind::Amp) {
            let start = left.location.clone();
            let op = self.advance();
            let right = self.parse_type_with_suffix();
            left = CstNode::new(NodeKind::IntersectionType, start, vec![left, punctuation_leaf(op), right]);
        }
        left
    }

    /// A `type_primary` followed by zero or more `[` `Integer?` `]` suffixes,
    /// each wrapping the previous result (`Int[][3]` is a sized array of
    /// plain arrays of `Int`).
    fn parse_type_with_suffix(&mut self) -> CstNode {
        let mut ty = self.parse_type_primary();
        while self.check(TokenKind::LBracket) {
            let start = ty.location.clone();
            let lbracket = self.advance();
            if self.check(TokenKind::Integer) {
                let size = self.advance();
                let rbracket = self.consume(TokenKind::RBracket, "`]`");
                ty = CstNode::new(
                    NodeKind::SizedArrayType,
                    start,
                    vec![ty, punctuation_leaf(lbracket), CstNode::leaf(NodeKind::IntegerLiteral, size), punctuation_leaf(rbracket)],
                );
            } else {
                let rbracket = self.consume(TokenKind::RBracket, "`]`");
                ty = CstNode::new(NodeKind::ArrayType, start, vec![ty, punctuation_leaf(lbracket), punctuation_leaf(rbracket)]);
            }
        }
        ty
    }

    /// `type_primary := '~' type_primary
    ///               | 'struct' '{' field (',' field)* ','? '}'
    ///               | '(' type_list ')' ('->' type_expr)?
    ///               | Ident`
    fn parse_type_primary(&mut self) -> CstNode {
        match self.current().kind {
            TokenKind::Tilde => {
                let op = self.advance();
                let start = self.location_of(&op);
                let inner = self.parse_type_primary();
                CstNode::new(NodeKind::NegationType, start, vec![punctuation_leaf(op), inner])
            }
            TokenKind::Struct => self.parse_anon_struct_type(),
            TokenKind::LParen => self.parse_tuple_or_fn_sig_type(),
            TokenKind::Identifier => {
                let t = self.advance();
                CstNode::new(NodeKind::NamedType, self.location_of(&t), vec![CstNode::leaf(NodeKind::Identifier, t)])
            }
            _ => {
                let found = self.current();
                self.report_unexpected("a type", &found);
                let synthetic = zero_lex::Token::synthetic(TokenKind::Identifier, found.line, found.column);
                self.synchronize_to_statement_start();
                CstNode::new(NodeKind::NamedType, self.location_of(&synthetic), vec![CstNode::leaf(NodeKind::Identifier, synthetic)])
            }
        }
    }

    fn parse_anon_struct_type(&mut self) -> CstNode {
        let kw = self.advance();
        let start = self.location_of(&kw);
        let mut children = vec![punctuation_leaf(kw)];

        let lbrace = self.consume(TokenKind::LBrace, "`{`");
        children.push(punctuation_leaf(lbrace));

        let mut seen_fields: HashSet<String> = HashSet::new();
        while self.check(TokenKind::Identifier) {
            children.push(self.parse_field(&mut seen_fields));
            if let Some(comma) = self.match_kind(TokenKind::Comma) {
                children.push(punctuation_leaf(comma));
            } else {
                break;
            }
        }

        let rbrace = self.consume(TokenKind::RBrace, "`}`");
        children.push(punctuation_leaf(rbrace));

        CstNode::new(NodeKind::AnonStructType, start, children)
    }

    /// `'(' (type_expr (',' type_expr)* ','?)? ')' ('->' type_expr)?` — a
    /// trailing `->` makes this a function signature type; otherwise it's a
    /// tuple type (a single parenthesized type with no comma is just that
    /// type wrapped, treated as a one-element tuple type).
    fn parse_tuple_or_fn_sig_type(&mut self) -> CstNode {
        let lparen = self.advance();
        let start = self.location_of(&lparen);
        let mut children = vec![punctuation_leaf(lparen)];

        while !self.check(TokenKind::RParen) && !self.is_at_end() {
            children.push(self.parse_type_expr());
            if let Some(comma) = self.match_kind(TokenKind::Comma) {
                children.push(punctuation_leaf(comma));
            } else {
                break;
            }
        }

        let rparen = self.consume(TokenKind::RParen, "`)`");
        children.push(punctuation_leaf(rparen));

        if let Some(arrow) = self.match_kind(TokenKind::Arrow) {
            children.push(punctuation_leaf(arrow));
            children.push(self.parse_type_expr());
            return CstNode::new(NodeKind::FunctionSignatureType, start, children);
        }

        CstNode::new(NodeKind::TupleType, start, children)
    }
}
