//! Declarations: `var_decl | fn_decl | struct_decl | type_alias_decl`, plus
//! the dispatch that falls through to a plain statement.

use std::collections::HashSet;

use zero_diag::{DiagnosticBuilder, DiagnosticCode};
use zero_lex::TokenKind;

use super::core::{punctuation_leaf, Parser};
use crate::cst::{CstNode, NodeKind};

impl<'a> Parser<'a> {
    /// `declaration := var_decl | fn_decl | struct_decl | type_alias_decl | statement`
    pub(crate) fn parse_declaration(&mut self) -> CstNode {
        match self.current().kind {
            TokenKind::Let | TokenKind::Var => self.parse_var_decl(),
            TokenKind::Fn => self.parse_fn_decl(),
            TokenKind::Struct => self.parse_struct_decl(),
            TokenKind::Type => self.parse_type_alias_decl(),
            _ => self.parse_statement(),
        }
    }

    /// `var_decl := ('let'|'var') Ident (':' type_expr)? ('=' expression)? ';'`
    fn parse_var_decl(&mut self) -> CstNode {
        let mut children = Vec::new();
        let kw = self.advance();
        let start = self.location_of(&kw);
        children.push(punctuation_leaf(kw));

        let name = self.consume(TokenKind::Identifier, "identifier");
        children.push(CstNode::leaf(NodeKind::Identifier, name));

        if let Some(colon) = self.match_kind(TokenKind::Colon) {
            children.push(punctuation_leaf(colon));
            children.push(self.parse_type_expr());
        }

        if let Some(eq) = self.match_kind(TokenKind::Eq) {
            children.push(punctuation_leaf(eq));
            children.push(self.parse_expression());
        }

        let semi = self.consume(TokenKind::Semicolon, "`;`");
        children.push(punctuation_leaf(semi));
        self.attach_inline_comment(&mut children);

        CstNode::new(NodeKind::VarDeclaration, start, children)
    }

    /// `fn_decl := 'fn' Ident '(' param_list? ')' ('->' type_expr)? block`
    fn parse_fn_decl(&mut self) -> CstNode {
        let mut children = Vec::new();
        let kw = self.advance();
        let start = self.location_of(&kw);
        children.push(punctuation_leaf(kw));

        let name = self.consume(TokenKind::Identifier, "identifier");
        children.push(CstNode::leaf(NodeKind::Identifier, name));

        let lparen = self.consume(TokenKind::LParen, "`(`");
        children.push(punctuation_leaf(lparen));

        children.push(self.parse_param_list());

        let rparen = self.consume(TokenKind::RParen, "`)`");
        children.push(punctuation_leaf(rparen));

        if let Some(arrow) = self.match_kind(TokenKind::Arrow) {
            children.push(punctuation_leaf(arrow));
            children.push(self.parse_type_expr());
        }

        children.push(self.parse_block());

        CstNode::new(NodeKind::FnDeclaration, start, children)
    }

    fn parse_param_list(&mut self) -> CstNode {
        let start = self.location_of(&self.current());
        let mut children = Vec::new();
        while self.check(TokenKind::Identifier) {
            children.push(self.parse_param());
            if let Some(comma) = self.match_kind(TokenKind::Comma) {
                children.push(punctuation_leaf(comma));
            } else {
                break;
            }
        }
        CstNode::new(NodeKind::ParamList, start, children)
    }

    fn parse_param(&mut self) -> CstNode {
        let name = self.advance();
        let start = self.location_of(&name);
        let mut children = vec![CstNode::leaf(NodeKind::Identifier, name)];
        let colon = self.consume(TokenKind::Colon, "`:`");
        children.push(punctuation_leaf(colon));
        children.push(self.parse_type_expr());
        CstNode::new(NodeKind::Param, start, children)
    }

    /// `struct_decl := 'struct' Ident '{' (field (',' field)* ','?)? '}' ';'?`
    fn parse_struct_decl(&mut self) -> CstNode {
        let mut children = Vec::new();
        let kw = self.advance();
        let start = self.location_of(&kw);
        children.push(punctuation_leaf(kw));

        let name = self.consume(TokenKind::Identifier, "identifier");
        children.push(CstNode::leaf(NodeKind::Identifier, name));

        let lbrace = self.consume(TokenKind::LBrace, "`{`");
        children.push(punctuation_leaf(lbrace));

        let mut seen_fields: HashSet<String> = HashSet::new();
        while self.check(TokenKind::Identifier) {
            let field = self.parse_field(&mut seen_fields);
            children.push(field);
            if let Some(comma) = self.match_kind(TokenKind::Comma) {
                children.push(punctuation_leaf(comma));
            } else {
                break;
            }
        }

        let rbrace = self.consume(TokenKind::RBrace, "`}`");
        children.push(punctuation_leaf(rbrace));

        if let Some(semi) = self.match_kind(TokenKind::Semicolon) {
            children.push(punctuation_leaf(semi));
        }

        CstNode::new(NodeKind::StructDeclaration, start, children)
    }

    /// `field := Ident ':' type_expr`. Tracks `seen_fields` to detect a
    /// repeated field name — parsing continues regardless; the duplicate
    /// is still attached to the CST.
    pub(crate) fn parse_field(&mut self, seen_fields: &mut HashSet<String>) -> CstNode {
        let name = self.advance();
        let start = self.location_of(&name);

        if !seen_fields.insert(name.text.clone()) {
            DiagnosticBuilder::error(DiagnosticCode::S0012_DuplicateFieldName, start.clone())
                .arg(name.text.clone())
                .emit(self.diagnostics);
        }

        let mut children = vec![CstNode::leaf(NodeKind::Identifier, name)];
        let colon = self.consume(TokenKind::Colon, "`:`");
        children.push(punctuation_leaf(colon));
        children.push(self.parse_type_expr());
        CstNode::new(NodeKind::Field, start, children)
    }

    /// `type_alias_decl := 'type' Ident '=' type_expr ';'`
    fn parse_type_alias_decl(&mut self) -> CstNode {
        let mut children = Vec::new();
        let kw = self.advance();
        let start = self.location_of(&kw);
        children.push(punctuation_leaf(kw));

        let name = self.consume(TokenKind::Identifier, "identifier");
        children.push(CstNode::leaf(NodeKind::Identifier, name));

        let eq = self.consume(TokenKind::Eq, "`=`");
        children.push(punctuation_leaf(eq));

        children.push(self.parse_type_expr());

        let semi = self.consume(TokenKind::Semicolon, "`;`");
        children.push(punctuation_leaf(semi));

        CstNode::new(NodeKind::TypeAliasDeclaration, start, children)
    }

    /// `arg_list := (expression (',' expression)* ','?)?`
    pub(crate) fn parse_arg_list(&mut self) -> CstNode {
        let start = self.location_of(&self.current());
        let mut children = Vec::new();
        while !self.check(TokenKind::RParen) && !self.is_at_end() {
            children.push(self.parse_expression());
            if let Some(comma) = self.match_kind(TokenKind::Comma) {
                children.push(punctuation_leaf(comma));
            } else {
                break;
            }
        }
        CstNode::new(NodeKind::ArgList, start, children)
    }
}
