//! Typed configuration the CLI builds from parsed arguments and the driver
//! consumes. No configuration file format — just this struct, per §10.4.

use zero_fmt::{FormatOptions, IndentStyle};

use crate::error::{DriverError, DriverResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub locale: String,
    pub indent_style: IndentStyle,
    pub indent_width: usize,
    pub in_place: bool,
}

impl Config {
    pub fn new(locale: impl Into<String>, indent_style: IndentStyle, indent_width: usize, in_place: bool) -> DriverResult<Self> {
        if indent_width == 0 || indent_width > 16 {
            return Err(DriverError::InvalidIndentWidth(indent_width));
        }
        Ok(Self {
            locale: locale.into(),
            indent_style,
            indent_width,
            in_place,
        })
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            indent_style: self.indent_style,
            indent_width: self.indent_width,
            ..FormatOptions::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en_US".to_string(),
            indent_style: IndentStyle::Spaces,
            indent_width: 4,
            in_place: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_indent_width() {
        assert!(Config::new("en_US", IndentStyle::Spaces, 0, false).is_err());
    }

    #[test]
    fn rejects_indent_width_above_sixteen() {
        assert!(Config::new("en_US", IndentStyle::Spaces, 17, false).is_err());
    }

    #[test]
    fn accepts_boundary_values() {
        assert!(Config::new("en_US", IndentStyle::Spaces, 1, false).is_ok());
        assert!(Config::new("en_US", IndentStyle::Tabs, 16, false).is_ok());
    }
}
