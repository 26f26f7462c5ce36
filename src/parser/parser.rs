//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and the core parsing
//! infrastructure: error types, token helpers, the screen header, and the
//! document entry point.
//!
//! # Parser Architecture
//!
//! The parser pulls tokens from the [`Lexer`] one at a time and keeps a single
//! current token. Productions are split across files using `impl Parser`
//! blocks:
//! - This module: Parser struct, helper methods, screen header, document loop
//! - `output`: the output status line (name, status, geometry, legend, size)
//! - `properties`: tab-indented property blocks
//! - `modes`: mode lines and their refresh rates
//!
//! # Whitespace
//!
//! Whether whitespace is significant depends on where the parser is in the
//! grammar. Every call that moves to the next token takes a [`LexContext`]
//! saying whether whitespace tokens should be skipped on the way.

use super::lexer::{LexError, Lexer, Token, TokenKind};
use super::model::{ParseResult, SourceLocation};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// What the parser was looking for when it gave up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// Any token of the kind.
    Kind(TokenKind),
    /// A token of the kind with exactly this literal.
    Literal(TokenKind, &'static str),
    /// A token of the kind whose literal has the described shape.
    Pattern(TokenKind, &'static str),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Kind(kind) => write!(f, "{}", kind),
            Expected::Literal(kind, literal) => write!(f, "{} {:?}", kind, literal),
            Expected::Pattern(kind, shape) => write!(f, "{} matching {}", kind, shape),
        }
    }
}

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("syntax error: unexpected token found: {found_kind} ({found:?}), wanted {expected} at {location}")]
    UnexpectedToken {
        found_kind: TokenKind,
        found: String,
        expected: Expected,
        location: SourceLocation,
    },

    #[error("number {literal:?} out of range at {location}")]
    NumberOutOfRange {
        literal: String,
        location: SourceLocation,
    },
}

impl ParseError {
    /// Position of the offending token or byte.
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::Lex(err) => err.location,
            ParseError::UnexpectedToken { location, .. }
            | ParseError::NumberOutOfRange { location, .. } => *location,
        }
    }
}

/// How the next token should be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexContext {
    /// Discard whitespace tokens until something else shows up. Line
    /// terminators are never discarded.
    SkipWhitespace,
    /// Return whitespace tokens; used where leading tabs carry meaning.
    Raw,
}

/// Recursive descent parser for `xrandr --props` reports.
///
/// A parser consumes its input once: [`Parser::parse_report`] takes `self`.
pub struct Parser<'a> {
    pub(crate) lexer: Lexer<'a>,
    pub(crate) token: Token<'a>,
}

impl<'a> Parser<'a> {
    /// Create a parser and read the first token.
    pub fn new(input: &'a [u8]) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        let token = lexer.scan()?;
        let mut parser = Self { lexer, token };
        if parser.token.kind == TokenKind::WhiteSpace {
            parser.advance(LexContext::SkipWhitespace)?;
        }
        Ok(parser)
    }

    /// Parse the whole report: the screen header, then one or more outputs.
    pub fn parse_report(mut self) -> Result<ParseResult, ParseError> {
        let mut result = ParseResult::default();

        // The header carries nothing we keep; it only has to be there.
        self.parse_screen_header()?;

        loop {
            let output = self.parse_output()?;
            tracing::debug!(
                name = %output.name,
                connected = output.is_connected,
                enabled = output.is_enabled,
                properties = output.properties.len(),
                modes = output.modes.len(),
                "parsed output"
            );
            result.outputs.push(output);

            if self.check(TokenKind::EndOfInput) {
                break;
            }
        }

        Ok(result)
    }

    /// `Screen 0: minimum 8 x 8, current 3840 x 1080, maximum 32767 x 32767`
    fn parse_screen_header(&mut self) -> Result<(), ParseError> {
        use LexContext::SkipWhitespace as Skip;

        self.expect_literal(TokenKind::Name, "Screen", Skip)?;
        self.expect(TokenKind::IntValue, Skip)?;
        self.expect_literal(TokenKind::Punctuator, ":", Skip)?;

        for (index, bound) in ["minimum", "current", "maximum"].into_iter().enumerate() {
            if index > 0 {
                self.expect_literal(TokenKind::Punctuator, ",", Skip)?;
            }
            self.expect_literal(TokenKind::Name, bound, Skip)?;
            self.expect(TokenKind::IntValue, Skip)?;
            self.expect_literal(TokenKind::Name, "x", Skip)?;
            self.expect(TokenKind::IntValue, Skip)?;
        }

        self.expect(TokenKind::LineTerminator, LexContext::Raw)?;
        Ok(())
    }

    // ===== Helper methods =====

    /// Move to the next token in the given context.
    pub(crate) fn advance(&mut self, context: LexContext) -> Result<(), ParseError> {
        loop {
            self.token = self.lexer.scan()?;
            if context == LexContext::Raw || self.token.kind != TokenKind::WhiteSpace {
                return Ok(());
            }
        }
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.token.kind == kind
    }

    pub(crate) fn check_literal(&self, kind: TokenKind, literal: &str) -> bool {
        self.token.is(kind, literal)
    }

    /// Consume the current token if it has the given kind, returning it.
    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        context: LexContext,
    ) -> Result<Token<'a>, ParseError> {
        if !self.check(kind) {
            return Err(self.unexpected(Expected::Kind(kind)));
        }
        let token = self.token;
        self.advance(context)?;
        Ok(token)
    }

    pub(crate) fn expect_literal(
        &mut self,
        kind: TokenKind,
        literal: &'static str,
        context: LexContext,
    ) -> Result<(), ParseError> {
        if !self.check_literal(kind, literal) {
            return Err(self.unexpected(Expected::Literal(kind, literal)));
        }
        self.advance(context)
    }

    /// Consume the current token only if it matches; report whether it did.
    pub(crate) fn eat_literal(
        &mut self,
        kind: TokenKind,
        literal: &str,
        context: LexContext,
    ) -> Result<bool, ParseError> {
        if self.check_literal(kind, literal) {
            self.advance(context)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub(crate) fn unexpected(&self, expected: Expected) -> ParseError {
        ParseError::UnexpectedToken {
            found_kind: self.token.kind,
            found: self.token.literal.to_string(),
            expected,
            location: self.token.location,
        }
    }

    pub(crate) fn parse_number<T: FromStr>(token: Token<'_>) -> Result<T, ParseError> {
        token.literal.parse().map_err(|_| ParseError::NumberOutOfRange {
            literal: token.literal.to_string(),
            location: token.location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::model::{Dimensions, Position, Resolution, Rotation};

    const HEADER: &str = "Screen 0: minimum 320 x 200, current 1920 x 1080, maximum 16384 x 16384\n";

    fn parse(body: &str) -> Result<ParseResult, ParseError> {
        let input = format!("{}{}", HEADER, body);
        Parser::new(input.as_bytes())?.parse_report()
    }

    #[test]
    fn test_parse_enabled_output() {
        let result = parse(
            "eDP-1 connected primary 1920x1080+0+0 normal (normal left inverted right x axis y axis) 310mm x 170mm\n",
        )
        .unwrap();

        assert_eq!(result.outputs.len(), 1);
        let output = &result.outputs[0];
        assert_eq!(output.name, "eDP-1");
        assert!(output.is_connected);
        assert!(output.is_primary);
        assert!(output.is_enabled);
        assert_eq!(output.resolution, Some(Resolution::new(1920, 1080)));
        assert_eq!(output.position, Some(Position::new(0, 0)));
        assert_eq!(output.rotation, Rotation::Normal);
        assert_eq!(output.dimensions, Dimensions::new(310, 170));
        assert!(output.properties.is_empty());
        assert!(output.modes.is_empty());
    }

    #[test]
    fn test_missing_header() {
        let err = Parser::new(b"eDP-1 connected (normal left inverted right x axis y axis)\n")
            .unwrap()
            .parse_report()
            .unwrap_err();

        match err {
            ParseError::UnexpectedToken {
                found_kind,
                found,
                expected,
                location,
            } => {
                assert_eq!(found_kind, TokenKind::Name);
                assert_eq!(found, "eDP-1");
                assert_eq!(expected, Expected::Literal(TokenKind::Name, "Screen"));
                assert_eq!(location, SourceLocation::new(1, 1));
            }
            other => panic!("Expected unexpected-token error, got {:?}", other),
        }
    }

    #[test]
    fn test_truncated_header() {
        let err = Parser::new(b"Screen 0: minimum 320 x 200, current\n")
            .unwrap()
            .parse_report()
            .unwrap_err();

        assert_eq!(err.location(), SourceLocation::new(1, 37));
        assert!(err.to_string().contains("wanted IntValue"));
    }

    #[test]
    fn test_header_without_outputs() {
        let err = parse("").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnexpectedToken {
                found_kind: TokenKind::EndOfInput,
                expected: Expected::Kind(TokenKind::Name),
                ..
            }
        ));
    }

    #[test]
    fn test_offset_out_of_range() {
        let err = parse("DP-1 connected 1920x1080+99999999999+0 (normal left inverted right x axis y axis)\n")
            .unwrap_err();
        assert!(matches!(err, ParseError::NumberOutOfRange { ref literal, .. } if literal == "99999999999"));
    }

    #[test]
    fn test_error_message_format() {
        let err = parse("DP-1 connected 1920x1080+0 (normal left inverted right x axis y axis)\n")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "syntax error: unexpected token found: Punctuator (\"(\"), wanted Punctuator \"+\" at line 2, column 28"
        );
    }

    #[test]
    fn test_lex_error_is_propagated() {
        let mut input = HEADER.as_bytes().to_vec();
        input.extend_from_slice(b"DP-1 \xff\n");
        let err = Parser::new(&input).unwrap().parse_report().unwrap_err();
        assert!(matches!(err, ParseError::Lex(_)));
    }
}
