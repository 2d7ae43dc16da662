//! The formatting visitor: walks a CST and reproduces the program as text,
//! re-laying out whitespace according to [`FormatOptions`] while leaving the
//! token content itself untouched.

use zero_par::{CstNode, NodeKind};

use crate::options::{FormatOptions, IndentStyle};

pub fn format(root: &CstNode, options: &FormatOptions) -> String {
    let mut formatter = Formatter { options, out: String::new(), indent_level: 0 };
    formatter.visit_container(root);
    formatter.out
}

struct Formatter<'a> {
    options: &'a FormatOptions,
    out: String,
    indent_level: usize,
}

impl<'a> Formatter<'a> {
    fn indent_unit(&self) -> String {
        match self.options.indent_style {
            IndentStyle::Spaces => " ".repeat(self.options.indent_width),
            IndentStyle::Tabs => "\t".to_string(),
        }
    }

    fn write_indent(&mut self) {
        let unit = self.indent_unit();
        for _ in 0..self.indent_level {
            self.out.push_str(&unit);
        }
    }

    /// Walks the children of `Program`/`StatementList`-shaped nodes: a
    /// standalone `Comment` gets its own indented line, everything else is
    /// dispatched to its own full-line visitor.
    fn visit_container(&mut self, node: &CstNode) {
        for child in &node.children {
            if child.kind == NodeKind::Comment {
                self.write_indent();
                self.out.push_str(&render_leaf(child));
                self.out.push('\n');
                continue;
            }
            self.visit_item(child);
        }
    }

    fn visit_item(&mut self, node: &CstNode) {
        match node.kind {
            NodeKind::VarDeclaration => self.visit_var_declaration(node),
            NodeKind::FnDeclaration => self.visit_fn_declaration(node),
            NodeKind::StructDeclaration => self.visit_struct_declaration(node),
            NodeKind::TypeAliasDeclaration => self.visit_type_alias_declaration(node),
            NodeKind::ReturnStmt => self.visit_return_stmt(node),
            NodeKind::IfStmt => self.visit_if_stmt(node, true),
            NodeKind::WhileStmt => self.visit_while_stmt(node),
            NodeKind::ExprStmt => self.visit_expr_stmt(node),
            NodeKind::BlockStmt => {
                self.write_indent();
                self.append_block_body(node);
            }
            _ => {
                self.write_indent();
                self.out.push_str(&render(node, self.options));
                self.out.push('\n');
            }
        }
    }

    fn visit_var_declaration(&mut self, node: &CstNode) {
        self.write_indent();
        let (main, trailing_comment) = split_trailing_comment(&node.children);
        self.out.push_str(&join_with_semicolon_rule(main, self.options));
        if let Some(comment) = trailing_comment {
            self.out.push_str("  ");
            self.out.push_str(&render_leaf(comment));
        }
        self.out.push('\n');
    }

    fn visit_fn_declaration(&mut self, node: &CstNode) {
        self.write_indent();
        // children: fn, name, (, ParamList, ), [->, ret_type], block
        self.out.push_str("fn ");
        self.out.push_str(&render_leaf(&node.children[1]));
        self.out.push('(');
        self.out.push_str(&render(&node.children[3], self.options));
        self.out.push(')');

        let block = node.children.last().expect("fn declaration always has a body");
        let rest = &node.children[5..node.children.len() - 1];
        if rest.len() == 2 {
            self.out.push_str(" -> ");
            self.out.push_str(&render(&rest[1], self.options));
        }
        self.out.push(' ');
        self.append_block_body(block);
    }

    fn visit_struct_declaration(&mut self, node: &CstNode) {
        self.write_indent();
        self.out.push_str("struct ");
        self.out.push_str(&render_leaf(&node.children[1]));
        self.out.push_str(" {\n");
        self.indent_level += 1;
        for child in &node.children {
            if child.kind == NodeKind::Field {
                self.write_indent();
                self.out.push_str(&render(child, self.options));
                self.out.push_str(",\n");
            }
        }
        self.indent_level -= 1;
        self.write_indent();
        self.out.push('}');
        if node.children.last().map(|c| c.kind) == Some(NodeKind::Delimiter)
            && node.children.last().and_then(|c| c.token.as_ref()).map(|t| t.text.as_str()) == Some(";")
        {
            self.out.push(';');
        }
        self.out.push('\n');
    }

    fn visit_type_alias_declaration(&mut self, node: &CstNode) {
        self.write_indent();
        self.out.push_str("type ");
        self.out.push_str(&render_leaf(&node.children[1]));
        self.out.push_str(" = ");
        self.out.push_str(&render(&node.children[3], self.options));
        self.out.push_str(";\n");
    }

    fn visit_return_stmt(&mut self, node: &CstNode) {
        self.write_indent();
        self.out.push_str("return");
        let (main, trailing_comment) = split_trailing_comment(&node.children);
        // main[0] is `return`, main[1] is either the expression or `;`.
        if main.len() > 2 {
            self.out.push(' ');
            self.out.push_str(&render(&main[1], self.options));
        }
        self.out.push(';');
        if let Some(comment) = trailing_comment {
            self.out.push_str("  ");
            self.out.push_str(&render_leaf(comment));
        }
        self.out.push('\n');
    }

    fn visit_if_stmt(&mut self, node: &CstNode, needs_indent: bool) {
        if needs_indent {
            self.write_indent();
        }
        self.out.push_str("if ");
        self.out.push_str(&render(&node.children[1], self.options));
        self.out.push(' ');
        self.append_block_body(&node.children[2]);

        if node.children.len() > 3 {
            // Drop the trailing newline the block body just wrote so `else`
            // continues on the same line.
            self.out.pop();
            self.out.push_str(" else ");
            let branch = &node.children[4];
            if branch.kind == NodeKind::IfStmt {
                self.visit_if_stmt(branch, false);
            } else {
                self.append_block_body(branch);
            }
        }
    }

    fn visit_while_stmt(&mut self, node: &CstNode) {
        self.write_indent();
        self.out.push_str("while ");
        self.out.push_str(&render(&node.children[1], self.options));
        self.out.push(' ');
        self.append_block_body(&node.children[2]);
    }

    fn visit_expr_stmt(&mut self, node: &CstNode) {
        self.write_indent();
        let (main, trailing_comment) = split_trailing_comment(&node.children);
        self.out.push_str(&render(&main[0], self.options));
        self.out.push(';');
        if let Some(comment) = trailing_comment {
            self.out.push_str("  ");
            self.out.push_str(&render_leaf(comment));
        }
        self.out.push('\n');
    }

    /// Appends `{\n<indented body>}\n` for a `BlockStmt` node, assuming the
    /// caller has already placed the cursor right where `{` belongs.
    fn append_block_body(&mut self, node: &CstNode) {
        self.out.push_str("{\n");
        self.indent_level += 1;
        self.visit_container(&node.children[1]);
        self.indent_level -= 1;
        self.write_indent();
        self.out.push_str("}\n");
    }
}

fn split_trailing_comment(children: &[CstNode]) -> (&[CstNode], Option<&CstNode>) {
    match children.last() {
        Some(last) if last.kind == NodeKind::Comment => (&children[..children.len() - 1], Some(last)),
        _ => (children, None),
    }
}

/// `VarDeclaration`'s rule: children joined by a single space, except no
/// space is inserted immediately before `;` or `:` (matching the no-space-
/// before-colon convention used everywhere else a name is typed, e.g.
/// struct fields and parameters).
fn join_with_semicolon_rule(children: &[CstNode], options: &FormatOptions) -> String {
    let mut out = String::new();
    for (i, child) in children.iter().enumerate() {
        let text = child.token.as_ref().map(|t| t.text.as_str()).unwrap_or("");
        let suppress_leading_space = text == ";" || text == ":";
        if i > 0 && !suppress_leading_space {
            out.push(' ');
        }
        out.push_str(&render(child, options));
    }
    out
}

/// Renders an expression/type/leaf node to a single inline string. Never
/// writes indentation or newlines — those belong to the statement-level
/// visitor.
fn render(node: &CstNode, options: &FormatOptions) -> String {
    match node.kind {
        NodeKind::Identifier
        | NodeKind::IntegerLiteral
        | NodeKind::FloatLiteral
        | NodeKind::StringLiteral
        | NodeKind::BoolLiteral
        | NodeKind::Operator
        | NodeKind::Delimiter
        | NodeKind::Comment => render_leaf(node),

        NodeKind::BinaryExpr => format!(
            "{} {} {}",
            render(&node.children[0], options),
            render(&node.children[1], options),
            render(&node.children[2], options)
        ),
        NodeKind::UnaryExpr => format!("{}{}", render(&node.children[0], options), render(&node.children[1], options)),
        NodeKind::AssignExpr => format!(
            "{} {} {}",
            render(&node.children[0], options),
            render(&node.children[1], options),
            render(&node.children[2], options)
        ),
        NodeKind::CallExpr => format!(
            "{}({})",
            render(&node.children[0], options),
            render(&node.children[2], options)
        ),
        NodeKind::IndexExpr => format!(
            "{}[{}]",
            render(&node.children[0], options),
            render(&node.children[2], options)
        ),
        NodeKind::MemberExpr => format!(
            "{}.{}",
            render(&node.children[0], options),
            render(&node.children[2], options)
        ),
        NodeKind::StructLiteral => {
            let name = render(&node.children[0], options);
            let fields = comma_join(&node.children[2..node.children.len() - 1], options);
            if fields.is_empty() {
                format!("{name} {{}}")
            } else {
                format!("{name} {{ {fields} }}")
            }
        }
        NodeKind::StructLiteralField => format!(
            "{}: {}",
            render(&node.children[0], options),
            render(&node.children[2], options)
        ),
        NodeKind::ArrayLiteral => format!("[{}]", comma_join(&node.children, options)),
        NodeKind::ParenExpr => format!("({})", render(&node.children[1], options)),
        NodeKind::TupleLiteral => format!("({})", comma_join(&node.children, options)),

        NodeKind::ArgList | NodeKind::ParamList => comma_join(&node.children, options),
        NodeKind::Param | NodeKind::Field => format!(
            "{}: {}",
            render(&node.children[0], options),
            render(&node.children[2], options)
        ),

        NodeKind::NamedType => render(&node.children[0], options),
        NodeKind::UnionType => format!(
            "{} | {}",
            render(&node.children[0], options),
            render(&node.children[2], options)
        ),
        NodeKind::IntersectionType => format!(
            "{} & {}",
            render(&node.children[0], options),
            render(&node.children[2], options)
        ),
        NodeKind::NegationType => format!("~{}", render(&node.children[1], options)),
        NodeKind::ArrayType => format!("{}[]", render(&node.children[0], options)),
        NodeKind::SizedArrayType => format!(
            "{}[{}]",
            render(&node.children[0], options),
            render(&node.children[2], options)
        ),
        NodeKind::TupleType => format!("({})", comma_join(&node.children, options)),
        NodeKind::FunctionSignatureType => {
            let params = comma_join(&node.children[1..node.children.len() - 2], options);
            let ret = render(node.children.last().unwrap(), options);
            format!("({params}) -> {ret}")
        }
        NodeKind::AnonStructType => {
            let fields = node
                .children
                .iter()
                .filter(|c| c.kind == NodeKind::Field)
                .map(|c| render(c, options))
                .collect::<Vec<_>>()
                .join(if options.space_after_comma { ", " } else { "," });
            format!("struct {{ {fields} }}")
        }

        _ => node.children.iter().map(|c| render(c, options)).collect::<Vec<_>>().join(""),
    }
}

/// Joins the non-`,` children of a list-shaped node (arg list, tuple,
/// array literal, …) with a comma and an optional trailing space.
fn comma_join(children: &[CstNode], options: &FormatOptions) -> String {
    let separator = if options.space_after_comma { ", " } else { "," };
    children
        .iter()
        .filter(|c| !(c.kind == NodeKind::Delimiter && c.token.as_ref().map(|t| t.text == "(" || t.text == ")" || t.text == "[" || t.text == "]").unwrap_or(false)))
        .filter(|c| !(c.kind == NodeKind::Delimiter && c.token.as_ref().map(|t| t.text == ",").unwrap_or(false)))
        .map(|c| render(c, options))
        .collect::<Vec<_>>()
        .join(separator)
}

fn render_leaf(node: &CstNode) -> String {
    match &node.token {
        Some(token) if token.is_synthetic => String::new(),
        Some(token) if node.kind == NodeKind::StringLiteral => token.raw_literal.clone(),
        Some(token) => token.text.clone(),
        None => String::new(),
    }
}
