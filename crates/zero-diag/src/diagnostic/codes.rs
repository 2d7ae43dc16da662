//! Stable diagnostic codes.
//!
//! A code is a subsystem prefix (`L` lexer, `T` token preprocessor, `P`
//! parser, `S` struct/type) plus a four-digit zero-padded number. Codes are
//! identifiers, not messages — the text shown to the user always comes from
//! the active locale's catalog, keyed by the code's string form.

use std::fmt;

/// A subsystem prefix a [`DiagnosticCode`] can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subsystem {
    Lexer,
    TokenPreprocessor,
    Parser,
    StructType,
}

impl Subsystem {
    const fn prefix(self) -> &'static str {
        match self {
            Subsystem::Lexer => "L",
            Subsystem::TokenPreprocessor => "T",
            Subsystem::Parser => "P",
            Subsystem::StructType => "S",
        }
    }

    /// Name shown in a rendered diagnostic's `(from: ...)` suffix.
    pub const fn label(self) -> &'static str {
        match self {
            Subsystem::Lexer => "lexer",
            Subsystem::TokenPreprocessor => "token preprocessor",
            Subsystem::Parser => "parser",
            Subsystem::StructType => "struct/type",
        }
    }
}

/// A stable diagnostic identifier, e.g. `L0007`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    pub subsystem: Subsystem,
    pub number: u16,
}

impl DiagnosticCode {
    pub const fn new(subsystem: Subsystem, number: u16) -> Self {
        Self { subsystem, number }
    }

    /// The four-digit zero-padded code string, e.g. `"L0007"`.
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.subsystem.prefix(), self.number)
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.subsystem.prefix(), self.number)
    }
}

macro_rules! codes {
    ($($name:ident => $subsystem:ident, $number:literal;)*) => {
        #[allow(non_upper_case_globals)]
        impl DiagnosticCode {
            $(
                pub const $name: DiagnosticCode = DiagnosticCode::new(Subsystem::$subsystem, $number);
            )*
        }
    };
}

codes! {
    L0001_MissingDigitsAfterHexPrefix => Lexer, 1;
    L0002_MissingDigitsAfterBinPrefix => Lexer, 2;
    L0003_MissingDigitsAfterOctPrefix => Lexer, 3;
    L0004_MissingDigitsAfterExponent => Lexer, 4;
    L0005_InvalidTrailingChar => Lexer, 5;
    L0006_InvalidEscapeSequence => Lexer, 6;
    L0007_UnterminatedString => Lexer, 7;
    L0008_InvalidHexEscape => Lexer, 8;
    L0009_InvalidUnicodeEscape => Lexer, 9;
    L0010_InvalidCharacter => Lexer, 10;
    L0011_InvalidUtf8Sequence => Lexer, 11;

    T0001_ScientificIntOverflow => TokenPreprocessor, 1;
    T0002_ScientificFloatOverflow => TokenPreprocessor, 2;

    P0001_UnexpectedToken => Parser, 1;

    S0012_DuplicateFieldName => StructType, 12;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_zero_padded_number() {
        assert_eq!(DiagnosticCode::L0007_UnterminatedString.as_str(), "L0007");
        assert_eq!(DiagnosticCode::S0012_DuplicateFieldName.as_str(), "S0012");
    }

    #[test]
    fn display_matches_as_str() {
        let code = DiagnosticCode::P0001_UnexpectedToken;
        assert_eq!(code.to_string(), code.as_str());
    }

    #[test]
    fn subsystem_label_used_in_rendering() {
        assert_eq!(DiagnosticCode::T0001_ScientificIntOverflow.subsystem.label(), "token preprocessor");
    }
}
