//! Operators and punctuation: one lookahead character decides between the
//! one-character and two-character form.

use super::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    fn bump(&mut self) {
        let c = self.tracker.current_char();
        self.tracker.advance(c);
    }

    pub(crate) fn lex_plus(&mut self) -> Token {
        self.bump();
        if self.tracker.match_char('=') {
            self.make_token(TokenKind::PlusEq)
        } else {
            self.make_token(TokenKind::Plus)
        }
    }

    pub(crate) fn lex_minus(&mut self) -> Token {
        self.bump();
        if self.tracker.match_char('=') {
            self.make_token(TokenKind::MinusEq)
        } else if self.tracker.match_char('>') {
            self.make_token(TokenKind::Arrow)
        } else {
            self.make_token(TokenKind::Minus)
        }
    }

    pub(crate) fn lex_star(&mut self) -> Token {
        self.bump();
        if self.tracker.match_char('=') {
            self.make_token(TokenKind::StarEq)
        } else {
            self.make_token(TokenKind::Star)
        }
    }

    pub(crate) fn lex_slash(&mut self) -> Token {
        self.bump();
        if self.tracker.match_char('=') {
            self.make_token(TokenKind::SlashEq)
        } else {
            self.make_token(TokenKind::Slash)
        }
    }

    pub(crate) fn lex_percent(&mut self) -> Token {
        self.bump();
        if self.tracker.match_char('=') {
            self.make_token(TokenKind::PercentEq)
        } else {
            self.make_token(TokenKind::Percent)
        }
    }

    pub(crate) fn lex_equals(&mut self) -> Token {
        self.bump();
        if self.tracker.match_char('=') {
            self.make_token(TokenKind::EqEq)
        } else {
            self.make_token(TokenKind::Eq)
        }
    }

    pub(crate) fn lex_bang(&mut self) -> Token {
        self.bump();
        if self.tracker.match_char('=') {
            self.make_token(TokenKind::NotEq)
        } else {
            self.make_token(TokenKind::Bang)
        }
    }

    pub(crate) fn lex_less(&mut self) -> Token {
        self.bump();
        if self.tracker.match_char('=') {
            self.make_token(TokenKind::LtEq)
        } else {
            self.make_token(TokenKind::Lt)
        }
    }

    pub(crate) fn lex_greater(&mut self) -> Token {
        self.bump();
        if self.tracker.match_char('=') {
            self.make_token(TokenKind::GtEq)
        } else {
            self.make_token(TokenKind::Gt)
        }
    }

    pub(crate) fn lex_amp(&mut self) -> Token {
        self.bump();
        if self.tracker.match_char('&') {
            self.make_token(TokenKind::AndAnd)
        } else {
            self.make_token(TokenKind::Amp)
        }
    }

    pub(crate) fn lex_pipe(&mut self) -> Token {
        self.bump();
        if self.tracker.match_char('|') {
            self.make_token(TokenKind::OrOr)
        } else {
            self.make_token(TokenKind::Pipe)
        }
    }

    pub(crate) fn lex_dot(&mut self) -> Token {
        self.bump();
        if self.tracker.match_char('.') {
            self.make_token(TokenKind::DotDot)
        } else {
            self.make_token(TokenKind::Dot)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Lexer;
    use crate::token::TokenKind;
    use zero_diag::DiagnosticEngine;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut diagnostics = DiagnosticEngine::new("en_US");
        let lexer = Lexer::new("t.zr", source, &mut diagnostics);
        lexer.tokenize().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn two_char_operators_win_over_one_char() {
        assert_eq!(
            kinds("+= -= *= /= %= == != <= >= && || -> .."),
            vec![
                TokenKind::PlusEq,
                TokenKind::MinusEq,
                TokenKind::StarEq,
                TokenKind::SlashEq,
                TokenKind::PercentEq,
                TokenKind::EqEq,
                TokenKind::NotEq,
                TokenKind::LtEq,
                TokenKind::GtEq,
                TokenKind::AndAnd,
                TokenKind::OrOr,
                TokenKind::Arrow,
                TokenKind::DotDot,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn lone_amp_and_pipe_fall_back_to_single_char() {
        assert_eq!(
            kinds("& |"),
            vec![TokenKind::Amp, TokenKind::Pipe, TokenKind::EndOfFile]
        );
    }

    #[test]
    fn single_dot_is_not_dotdot() {
        assert_eq!(kinds("."), vec![TokenKind::Dot, TokenKind::EndOfFile]);
    }
}
