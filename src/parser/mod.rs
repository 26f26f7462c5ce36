//! `xrandr --props` report parser
//!
//! This module turns the raw bytes of a report into a [`model::ParseResult`]:
//! - [`lexer`]: Tokenization (bytes → tokens with line/column positions)
//! - [`parser`]: Parsing (tokens → outputs), split across `output`,
//!   `properties` and `modes`
//! - [`patterns`]: Recognising resolutions and sizes inside name tokens
//! - [`model`]: The parsed output records
//!
//! # Report Shape
//!
//! ```text
//! Screen 0: minimum 8 x 8, current 1920 x 1080, maximum 32767 x 32767
//! eDP-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 310mm x 170mm
//!     EDID:
//!         00ffffffffffff0006af3d5700000000
//!     Brightness: 1.000000
//!    1920x1080     60.02*+  59.93
//! ```
//!
//! Property lines are indented with tabs (shown as spaces above) and mode
//! lines with spaces.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent over a pull lexer, one token of lookahead.
//! No external parser generator dependencies.

pub mod lexer;
pub mod model;
pub mod parser;
pub mod patterns;

mod modes;
mod output;
mod properties;

use model::ParseResult;
use parser::{ParseError, Parser};

/// Parse a complete report.
///
/// The input is read as UTF-8; invalid bytes are reported as a lexical error
/// with their position.
pub fn parse(input: &[u8]) -> Result<ParseResult, ParseError> {
    Parser::new(input)?.parse_report()
}
