//! Structured model of an `xrandr --props` report
//!
//! Everything here is plain data: the parser fills it in once per call and
//! hands ownership to the caller.

use rustc_hash::FxHashMap;
use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A pixel resolution such as `1920x1080`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Offset of an output inside the virtual screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub offset_x: i32,
    pub offset_y: i32,
}

impl Position {
    pub fn new(offset_x: i32, offset_y: i32) -> Self {
        Self { offset_x, offset_y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}{:+}", self.offset_x, self.offset_y)
    }
}

/// Physical size of the panel in millimetres. Zero when not reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    pub width_mm: u32,
    pub height_mm: u32,
}

impl Dimensions {
    pub fn new(width_mm: u32, height_mm: u32) -> Self {
        Self {
            width_mm,
            height_mm,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.width_mm == 0 && self.height_mm == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Normal,
    Left,
    Inverted,
    Right,
}

impl Rotation {
    /// Map an xrandr rotation keyword to its variant.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "normal" => Some(Rotation::Normal),
            "left" => Some(Rotation::Left),
            "inverted" => Some(Rotation::Inverted),
            "right" => Some(Rotation::Right),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Rotation::Normal => "normal",
            Rotation::Left => "left",
            Rotation::Inverted => "inverted",
            Rotation::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Reflection {
    #[default]
    None,
    XAxis,
    YAxis,
    XAndYAxis,
}

impl fmt::Display for Reflection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reflection::None => write!(f, "none"),
            Reflection::XAxis => write!(f, "X axis"),
            Reflection::YAxis => write!(f, "Y axis"),
            Reflection::XAndYAxis => write!(f, "X and Y axis"),
        }
    }
}

/// A refresh rate of a mode, in Hz.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rate {
    pub value: f64,
    pub is_current: bool,
    pub is_preferred: bool,
}

/// A supported resolution with its refresh rates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputMode {
    pub resolution: Resolution,
    /// The mode name carried the `i` interlace suffix.
    pub interlaced: bool,
    pub rates: Vec<Rate>,
}

impl OutputMode {
    pub fn new(resolution: Resolution, interlaced: bool) -> Self {
        Self {
            resolution,
            interlaced,
            rates: Vec::new(),
        }
    }

    pub fn current_rate(&self) -> Option<&Rate> {
        self.rates.iter().find(|rate| rate.is_current)
    }

    pub fn is_preferred(&self) -> bool {
        self.rates.iter().any(|rate| rate.is_preferred)
    }
}

/// One output block of the report.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Output {
    pub name: String,
    pub is_connected: bool,
    pub is_primary: bool,
    /// Set only when a current resolution was reported.
    pub is_enabled: bool,
    pub resolution: Option<Resolution>,
    pub position: Option<Position>,
    pub rotation: Rotation,
    pub reflection: Reflection,
    pub dimensions: Dimensions,
    pub properties: FxHashMap<String, String>,
    pub modes: Vec<OutputMode>,
}

impl Output {
    pub fn new(name: impl Into<String>) -> Self {
        Output {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Hex-encoded EDID blob, when the driver exposes it.
    pub fn edid(&self) -> Option<&str> {
        self.property("EDID")
    }

    /// The mode holding the current rate, together with that rate.
    pub fn current_mode(&self) -> Option<(&OutputMode, &Rate)> {
        self.modes
            .iter()
            .find_map(|mode| mode.current_rate().map(|rate| (mode, rate)))
    }

    pub fn preferred_mode(&self) -> Option<&OutputMode> {
        self.modes.iter().find(|mode| mode.is_preferred())
    }
}

/// Result of parsing a whole report.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseResult {
    /// Outputs in the order the report lists them.
    pub outputs: Vec<Output>,
}

impl ParseResult {
    pub fn output(&self, name: &str) -> Option<&Output> {
        self.outputs.iter().find(|output| output.name == name)
    }

    pub fn connected(&self) -> impl Iterator<Item = &Output> {
        self.outputs.iter().filter(|output| output.is_connected)
    }
}
