//! Mode list parsing
//!
//! Mode lines are indented with spaces and list a resolution followed by
//! refresh rates. `*` marks the rate in use, `+` the preferred one:
//!
//! ```text
//!    1920x1080     60.02*+  59.93    48.02
//!    1920x1080i    60.00    50.00    59.94
//! ```

use super::lexer::TokenKind;
use super::model::{Output, OutputMode, Rate};
use super::parser::LexContext::{Raw, SkipWhitespace as Skip};
use super::parser::{ParseError, Parser};
use super::patterns::match_mode_resolution;

impl<'a> Parser<'a> {
    /// Parse mode lines while the current line starts with spaces.
    ///
    /// A line whose first word is not a resolution ends the list without
    /// error; that word is left as the current token for the caller.
    pub(crate) fn parse_modes(&mut self, output: &mut Output) -> Result<(), ParseError> {
        while self.token.is_space() {
            self.advance(Skip)?;

            if !self.check(TokenKind::Name) {
                return Ok(());
            }
            let Some(matched) = match_mode_resolution(self.token.literal) else {
                return Ok(());
            };
            self.advance(Skip)?;

            let mut mode = OutputMode::new(matched.resolution, matched.interlaced);
            while self.check(TokenKind::FloatValue) {
                mode.rates.push(self.parse_rate()?);
            }
            tracing::trace!(
                output = %output.name,
                resolution = %mode.resolution,
                rates = mode.rates.len(),
                "parsed mode"
            );
            output.modes.push(mode);

            if !self.check(TokenKind::LineTerminator) {
                return Ok(());
            }
            self.advance(Raw)?;
        }

        Ok(())
    }

    /// `60.00*+`: the rate, then the current and preferred markers in that
    /// order, each optional.
    fn parse_rate(&mut self) -> Result<Rate, ParseError> {
        let value: f64 = Self::parse_number(self.token)?;
        self.advance(Skip)?;

        let is_current = self.eat_literal(TokenKind::Punctuator, "*", Skip)?;
        let is_preferred = self.eat_literal(TokenKind::Punctuator, "+", Skip)?;

        Ok(Rate {
            value,
            is_current,
            is_preferred,
        })
    }
}
