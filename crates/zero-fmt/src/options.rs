//! Formatter configuration.

/// Whitespace character used for one indent level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndentStyle {
    Spaces,
    Tabs,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormatOptions {
    pub indent_style: IndentStyle,
    pub indent_width: usize,
    pub max_line_length: usize,
    pub space_before_paren: bool,
    pub space_after_comma: bool,
    pub newline_before_brace: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_style: IndentStyle::Spaces,
            indent_width: 4,
            max_line_length: 100,
            space_before_paren: false,
            space_after_comma: true,
            newline_before_brace: false,
        }
    }
}
