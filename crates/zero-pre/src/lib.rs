//! Rewrites every `ScientificExponent` token the lexer produced into either
//! `Integer` or `Float`, deciding which by an approximate magnitude check
//! rather than a full bignum parse.
//!
//! A pure `Tokens -> Tokens` transform: stateless apart from the diagnostic
//! collector it reports through, and every other token kind passes through
//! untouched.

use zero_diag::{DiagnosticBuilder, DiagnosticCode, DiagnosticEngine};
use zero_lex::{Token, TokenKind};
use zero_util::span::Location;

/// Above this approximate magnitude, a value cannot fit in a signed 64-bit
/// integer.
const MAX_I64_MAGNITUDE: i64 = 18;
/// Above this approximate magnitude, a value exceeds the range an IEEE-754
/// double can represent.
const MAX_F64_MAGNITUDE: i64 = 308;

/// Rewrites `tokens` in place (conceptually — it returns a new vector),
/// reporting `T0001`/`T0002` through `diagnostics` for any literal that
/// overflows its inferred kind.
pub fn preprocess(tokens: Vec<Token>, diagnostics: &mut DiagnosticEngine) -> Vec<Token> {
    tokens
        .into_iter()
        .map(|token| rewrite(token, diagnostics))
        .collect()
}

fn rewrite(token: Token, diagnostics: &mut DiagnosticEngine) -> Token {
    if token.kind != TokenKind::ScientificExponent {
        return token;
    }

    let Some(decomposed) = decompose(&token.text) else {
        // Shouldn't happen: the lexer only emits `ScientificExponent` for
        // text matching `mantissa (e|E) [+-]? digits`. Treat defensively as
        // an ordinary float rather than panicking on malformed input.
        return Token { kind: TokenKind::Float, ..token };
    };

    let (kind, overflow) = classify(&decomposed);

    if let Some(code) = overflow {
        let location = Location {
            file: std::sync::Arc::from(""),
            start_line: token.line,
            start_col: token.column,
            end_line: token.line,
            end_col: token.column + token.text.chars().count() as u32,
        };
        DiagnosticBuilder::error(code, location)
            .arg(token.text.clone())
            .emit(diagnostics);
    }

    Token { kind, ..token }
}

struct Decomposed {
    has_dot: bool,
    /// Digits after the mantissa's `.`, trailing zeros stripped.
    decimal_digits: i64,
    /// Digits after the mantissa's `.`, as written (not stripped) — used to
    /// shift the decimal point when approximating magnitude.
    trailing_fraction_length: i64,
    /// Count of digit characters anywhere in the mantissa.
    significant_digits: i64,
    exponent: i64,
}

/// Splits `mantissa e exponent` into its parts. Returns `None` if `text`
/// doesn't contain an `e`/`E`, which should never happen for a genuine
/// `ScientificExponent` token.
fn decompose(text: &str) -> Option<Decomposed> {
    let e_pos = text.find(['e', 'E'])?;
    let mantissa = &text[..e_pos];
    let exponent_str = &text[e_pos + 1..];
    let exponent: i64 = exponent_str.parse().ok()?;

    let (has_dot, decimal_digits, trailing_fraction_length, significant_digits) =
        match mantissa.split_once('.') {
            Some((int_part, frac_part)) => {
                let trimmed = frac_part.trim_end_matches('0');
                let digits = int_part.chars().filter(|c| c.is_ascii_digit()).count()
                    + frac_part.chars().filter(|c| c.is_ascii_digit()).count();
                (true, trimmed.len() as i64, frac_part.len() as i64, digits as i64)
            }
            None => {
                let digits = mantissa.chars().filter(|c| c.is_ascii_digit()).count();
                (false, 0, 0, digits as i64)
            }
        };

    Some(Decomposed {
        has_dot,
        decimal_digits,
        trailing_fraction_length,
        significant_digits: significant_digits.max(1),
        exponent,
    })
}

fn classify(d: &Decomposed) -> (TokenKind, Option<DiagnosticCode>) {
    let adjusted_exponent = d.exponent - d.trailing_fraction_length;
    let magnitude = (d.significant_digits - 1) + adjusted_exponent;

    let mut kind = if d.exponent < 0 {
        TokenKind::Float
    } else if !d.has_dot {
        TokenKind::Integer
    } else if d.decimal_digits > d.exponent {
        TokenKind::Float
    } else {
        TokenKind::Integer
    };

    let mut overflow = None;
    if magnitude > MAX_F64_MAGNITUDE {
        kind = TokenKind::Unknown;
        overflow = Some(DiagnosticCode::T0002_ScientificFloatOverflow);
    } else if magnitude > MAX_I64_MAGNITUDE && kind == TokenKind::Integer {
        kind = TokenKind::Float;
        overflow = Some(DiagnosticCode::T0001_ScientificIntOverflow);
    }

    (kind, overflow)
}
