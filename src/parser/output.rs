//! Output status line parsing
//!
//! `eDP-1 connected primary 1920x1080+0+0 left X axis (normal left inverted right x axis y axis) 310mm x 170mm`
//!
//! Only the name and the rotation legend are mandatory; every other clause is
//! optional and leaves the corresponding field at its default when absent.

use super::lexer::TokenKind;
use super::model::{Dimensions, Output, Position, Reflection, Rotation};
use super::parser::LexContext::SkipWhitespace as Skip;
use super::parser::{Expected, LexContext, ParseError, Parser};
use super::patterns::{match_current_resolution, match_physical_dimension};

/// The rotation/reflection legend printed after every output's status.
const LEGEND: [(TokenKind, &str); 10] = [
    (TokenKind::Punctuator, "("),
    (TokenKind::Name, "normal"),
    (TokenKind::Name, "left"),
    (TokenKind::Name, "inverted"),
    (TokenKind::Name, "right"),
    (TokenKind::Name, "x"),
    (TokenKind::Name, "axis"),
    (TokenKind::Name, "y"),
    (TokenKind::Name, "axis"),
    (TokenKind::Punctuator, ")"),
];

impl<'a> Parser<'a> {
    /// Parse one output block: status line, properties, then modes.
    pub(crate) fn parse_output(&mut self) -> Result<Output, ParseError> {
        let name = self.expect(TokenKind::Name, Skip)?;
        let mut output = Output::new(name.literal);

        self.parse_output_status(&mut output)?;
        self.parse_resolution_and_position(&mut output)?;
        self.parse_rotation_and_reflection(&mut output)?;
        self.parse_rotation_and_reflection_legend()?;
        self.parse_dimensions(&mut output)?;
        self.parse_properties(&mut output)?;
        self.parse_modes(&mut output)?;

        Ok(output)
    }

    /// `connected [primary]`, `disconnected`, or `unknown connection`.
    fn parse_output_status(&mut self, output: &mut Output) -> Result<(), ParseError> {
        if self.eat_literal(TokenKind::Name, "connected", Skip)? {
            output.is_connected = true;
            output.is_primary = self.eat_literal(TokenKind::Name, "primary", Skip)?;
        } else if self.eat_literal(TokenKind::Name, "unknown", Skip)? {
            self.expect_literal(TokenKind::Name, "connection", Skip)?;
        } else {
            self.eat_literal(TokenKind::Name, "disconnected", Skip)?;
        }
        Ok(())
    }

    /// `1920x1080+0+0`. Skipped entirely, leaving the output disabled, when the
    /// current token does not look like a resolution.
    fn parse_resolution_and_position(&mut self, output: &mut Output) -> Result<(), ParseError> {
        if !self.check(TokenKind::Name) {
            return Ok(());
        }
        let Some(resolution) = match_current_resolution(self.token.literal) else {
            return Ok(());
        };
        self.advance(Skip)?;

        self.expect_literal(TokenKind::Punctuator, "+", Skip)?;
        let offset_x = self.parse_offset()?;
        self.expect_literal(TokenKind::Punctuator, "+", Skip)?;
        let offset_y = self.parse_offset()?;

        output.is_enabled = true;
        output.resolution = Some(resolution);
        output.position = Some(Position::new(offset_x, offset_y));
        Ok(())
    }

    /// An integer with an optional leading `-`.
    fn parse_offset(&mut self) -> Result<i32, ParseError> {
        let negative = self.eat_literal(TokenKind::Punctuator, "-", Skip)?;
        let token = self.expect(TokenKind::IntValue, Skip)?;
        let magnitude: i32 = Self::parse_number(token)?;
        Ok(if negative { -magnitude } else { magnitude })
    }

    fn parse_rotation_and_reflection(&mut self, output: &mut Output) -> Result<(), ParseError> {
        if self.check(TokenKind::Name) {
            if let Some(rotation) = Rotation::from_keyword(self.token.literal) {
                output.rotation = rotation;
                self.advance(Skip)?;
            }
        }

        if !self.check(TokenKind::Name) {
            return Ok(());
        }
        let mut reflection = match self.token.literal {
            "x" | "X" => Reflection::XAxis,
            "y" | "Y" => Reflection::YAxis,
            _ => return Ok(()),
        };
        self.advance(Skip)?;

        if reflection == Reflection::XAxis && self.eat_literal(TokenKind::Name, "and", Skip)? {
            if !(self.check_literal(TokenKind::Name, "Y") || self.check_literal(TokenKind::Name, "y")) {
                return Err(self.unexpected(Expected::Literal(TokenKind::Name, "Y")));
            }
            self.advance(Skip)?;
            reflection = Reflection::XAndYAxis;
        }

        if self.eat_literal(TokenKind::Name, "axis", Skip)? {
            output.reflection = reflection;
        }
        Ok(())
    }

    /// The legend never changes, so it is matched and thrown away.
    fn parse_rotation_and_reflection_legend(&mut self) -> Result<(), ParseError> {
        for (kind, literal) in LEGEND {
            self.expect_literal(kind, literal, Skip)?;
        }
        Ok(())
    }

    /// `310mm x 170mm`, then the end of the status line. The line terminator is
    /// consumed raw: property lines are recognised by their leading tabs.
    fn parse_dimensions(&mut self, output: &mut Output) -> Result<(), ParseError> {
        if self.check(TokenKind::Name) {
            let width = self.parse_dimension()?;
            self.expect_literal(TokenKind::Name, "x", Skip)?;
            let height = self.parse_dimension()?;
            output.dimensions = Dimensions::new(width, height);
        }

        if self.check(TokenKind::LineTerminator) {
            self.advance(LexContext::Raw)?;
        }
        Ok(())
    }

    fn parse_dimension(&mut self) -> Result<u32, ParseError> {
        if !self.check(TokenKind::Name) {
            return Err(self.unexpected(Expected::Kind(TokenKind::Name)));
        }
        let millimetres = match_physical_dimension(self.token.literal)
            .ok_or_else(|| self.unexpected(Expected::Pattern(TokenKind::Name, "<digits>mm")))?;
        self.advance(Skip)?;
        Ok(millimetres)
    }
}
