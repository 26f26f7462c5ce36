//! # Introduction
//!
//! `xrandr-props` parses the report printed by `xrandr --props` into typed
//! output records, and browses them in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → ParseResult → Report / TUI
//! ```
//!
//! 1. [`source`] — where the report bytes come from: a file, stdin, or a
//!    fresh `xrandr --props` run.
//! 2. [`parser`] — tokenises the report and builds one [`Output`] per
//!    connector, with its properties and modes.
//! 3. [`report`] — plain-text summaries and a fingerprint of the connected
//!    displays, for scripts.
//! 4. [`ui`] — ratatui-based viewer; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! let report = concat!(
//!     "Screen 0: minimum 8 x 8, current 1920 x 1080, maximum 32767 x 32767\n",
//!     "eDP-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 310mm x 170mm\n",
//!     "\tBrightness: 1.000000\n",
//!     "   1920x1080     60.02*+  59.93\n",
//! );
//!
//! let result = xrandr_props::parse(report.as_bytes()).unwrap();
//! let output = result.output("eDP-1").unwrap();
//! assert!(output.is_primary);
//! assert_eq!(output.property("Brightness"), Some("1.000000"));
//! assert_eq!(output.modes[0].rates.len(), 2);
//! ```

pub mod parser;
pub mod report;
pub mod source;
pub mod ui;

pub use parser::lexer::LexError;
pub use parser::model::{Output, ParseResult};
pub use parser::parse;
pub use parser::parser::ParseError;
