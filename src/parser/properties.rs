//! Property block parsing
//!
//! Properties follow the status line, one per line, indented with a single
//! tab. A value either follows the colon on the same line or starts on the
//! next line, in which case it is spread over lines indented with two tabs:
//!
//! ```text
//! <TAB>EDID:
//! <TAB><TAB>00ffffffffffff0006af3d5700000000
//! <TAB><TAB>001c0104a51f1178028d15a156529d28
//! <TAB>link-status: Good
//! <TAB><TAB>supported: Good, Bad
//! ```
//!
//! The number of leading tab tokens is what tells the lines apart, so the
//! whole block is lexed in the raw context.

use super::lexer::TokenKind;
use super::model::Output;
use super::parser::LexContext::Raw;
use super::parser::{Expected, ParseError, Parser};

/// How a property ended, as seen from the start of the following line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PropertyEnd {
    /// A single tab started another property; the current token is its name.
    NextProperty,
    /// The line does not start with a tab: the block is over.
    EndOfBlock,
}

/// What to do with the text of doubly indented lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Continuation {
    Append,
    Skip,
}

impl<'a> Parser<'a> {
    pub(crate) fn parse_properties(&mut self, output: &mut Output) -> Result<(), ParseError> {
        if !self.token.is_tab() {
            return Ok(());
        }
        self.advance(Raw)?;

        while self.check(TokenKind::Name) {
            let (name, value, end) = self.parse_property()?;
            tracing::trace!(output = %output.name, property = %name, "parsed property");
            output.properties.insert(name, value);

            if end == PropertyEnd::EndOfBlock {
                break;
            }
        }

        Ok(())
    }

    /// Parse `name: value` with the current token at the start of the name.
    /// Returns the trimmed name and value.
    fn parse_property(&mut self) -> Result<(String, String, PropertyEnd), ParseError> {
        // Names may contain spaces and punctuation; everything up to the colon
        // belongs to the name.
        let mut name = String::from(self.token.literal);
        self.advance(Raw)?;
        while !self.check_literal(TokenKind::Punctuator, ":") {
            if self.check(TokenKind::LineTerminator) || self.check(TokenKind::EndOfInput) {
                return Err(self.unexpected(Expected::Literal(TokenKind::Punctuator, ":")));
            }
            name.push_str(self.token.literal);
            self.advance(Raw)?;
        }
        self.advance(Raw)?;
        self.expect_literal(TokenKind::WhiteSpace, " ", Raw)?;

        let mut value = String::new();
        let end = if self.check(TokenKind::LineTerminator) {
            self.parse_continuation_lines(&mut value, Continuation::Append)?
        } else {
            self.push_rest_of_line(&mut value, Continuation::Append)?;
            // Only the first line of an inline value is kept.
            self.parse_continuation_lines(&mut value, Continuation::Skip)?
        };

        Ok((name.trim().to_string(), value.trim().to_string(), end))
    }

    /// Walk the doubly indented lines following a property, starting on the
    /// line terminator (or end of input) that closes the previous line.
    fn parse_continuation_lines(
        &mut self,
        value: &mut String,
        continuation: Continuation,
    ) -> Result<PropertyEnd, ParseError> {
        loop {
            self.advance(Raw)?;
            if !self.token.is_tab() {
                return Ok(PropertyEnd::EndOfBlock);
            }

            self.advance(Raw)?;
            if !self.token.is_tab() {
                return Ok(PropertyEnd::NextProperty);
            }

            self.advance(Raw)?;
            self.push_rest_of_line(value, continuation)?;
        }
    }

    /// Consume tokens up to the end of the line, leaving the line terminator
    /// (or end of input) as the current token.
    fn push_rest_of_line(
        &mut self,
        value: &mut String,
        continuation: Continuation,
    ) -> Result<(), ParseError> {
        while !self.check(TokenKind::LineTerminator) && !self.check(TokenKind::EndOfInput) {
            if continuation == Continuation::Append {
                value.push_str(self.token.literal);
            }
            self.advance(Raw)?;
        }
        Ok(())
    }
}
