//! Statements: `return | if | while | block | expr_stmt`.

use zero_lex::TokenKind;

use super::core::{punctuation_leaf, Parser};
use crate::cst::{CstNode, NodeKind};

impl<'a> Parser<'a> {
    pub(crate) fn parse_statement(&mut self) -> CstNode {
        match self.current().kind {
            TokenKind::Return => self.parse_return_stmt(),
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::While => self.parse_while_stmt(),
            TokenKind::LBrace => self.parse_block(),
            _ => self.parse_expr_stmt(),
        }
    }

    /// `return_stmt := 'return' expression? ';'`
    fn parse_return_stmt(&mut self) -> CstNode {
        let kw = self.advance();
        let start = self.location_of(&kw);
        let mut children = vec![punctuation_leaf(kw)];

        if !self.check(TokenKind::Semicolon) {
            children.push(self.parse_expression());
        }

        let semi = self.consume(TokenKind::Semicolon, "`;`");
        children.push(punctuation_leaf(semi));
        self.attach_inline_comment(&mut children);

        CstNode::new(NodeKind::ReturnStmt, start, children)
    }

    /// `if_stmt := 'if' expression block ('else' (if_stmt | block))?`
    fn parse_if_stmt(&mut self) -> CstNode {
        let kw = self.advance();
        let start = self.location_of(&kw);
        let mut children = vec![punctuation_leaf(kw)];

        children.push(self.parse_expression());
        children.push(self.parse_block());

        if let Some(else_kw) = self.match_kind(TokenKind::Else) {
            children.push(punctuation_leaf(else_kw));
            if self.check(TokenKind::If) {
                children.push(self.parse_if_stmt());
            } else {
                children.push(self.parse_block());
            }
        }

        CstNode::new(NodeKind::IfStmt, start, children)
    }

    /// `while_stmt := 'while' expression block`
    fn parse_while_stmt(&mut self) -> CstNode {
        let kw = self.advance();
        let start = self.location_of(&kw);
        let mut children = vec![punctuation_leaf(kw)];

        children.push(self.parse_expression());
        children.push(self.parse_block());

        CstNode::new(NodeKind::WhileStmt, start, children)
    }

    /// `block := '{' (declaration | comment)* '}'`
    pub(crate) fn parse_block(&mut self) -> CstNode {
        let lbrace = self.consume(TokenKind::LBrace, "`{`");
        let start = self.location_of(&lbrace);
        let mut children = vec![punctuation_leaf(lbrace)];

        let statement_list = self.parse_statement_list();
        children.push(statement_list);

        let rbrace = self.consume(TokenKind::RBrace, "`}`");
        children.push(punctuation_leaf(rbrace));

        CstNode::new(NodeKind::BlockStmt, start, children)
    }

    fn parse_statement_list(&mut self) -> CstNode {
        let start = self.location_of(&self.current());
        let mut children = Vec::new();

        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            if self.check(TokenKind::Comment) {
                children.push(self.consume_comment());
                continue;
            }
            let before = self.pos;
            children.push(self.parse_declaration());
            if self.pos == before {
                // No progress — avoid looping forever on an unrecoverable token.
                self.synchronize_to_statement_start();
                if self.pos == before {
                    self.advance();
                }
            }
        }

        CstNode::new(NodeKind::StatementList, start, children)
    }

    /// `expr_stmt := expression ';' Comment?`
    fn parse_expr_stmt(&mut self) -> CstNode {
        let expr = self.parse_expression();
        let start = expr.location.clone();
        let mut children = vec![expr];

        let semi = self.consume(TokenKind::Semicolon, "`;`");
        children.push(punctuation_leaf(semi));
        self.attach_inline_comment(&mut children);

        CstNode::new(NodeKind::ExprStmt, start, children)
    }
}
