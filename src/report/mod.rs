//! Plain-text views of a parsed report
//!
//! Used by the binary's `--summary` and `--fingerprint` modes, and by the
//! viewer's status bar.

use crate::parser::model::{Output, ParseResult, Reflection};
use rustc_hash::FxHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Stable identifier for a set of connected displays.
///
/// Two reports with the same connected outputs (by name and EDID, in the
/// same order) produce the same fingerprint, whatever the current modes,
/// positions or disconnected connectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(pub u64);

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

pub fn fingerprint(outputs: &[Output]) -> Fingerprint {
    let mut hasher = FxHasher::default();
    for output in outputs.iter().filter(|output| output.is_connected) {
        output.name.hash(&mut hasher);
        output.edid().hash(&mut hasher);
    }
    Fingerprint(hasher.finish())
}

/// One block per output, in report order.
///
/// ```text
/// eDP-1 connected primary 1920x1080+0+0 normal
///   size: 310mm x 170mm
///   current: 1920x1080 @ 60.02 Hz
///   preferred: 1920x1080
///   modes: 12, properties: 9
/// ```
pub struct Summary<'a>(pub &'a ParseResult);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, output) in self.0.outputs.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write_output(f, output)?;
        }
        Ok(())
    }
}

fn write_output(f: &mut fmt::Formatter<'_>, output: &Output) -> fmt::Result {
    write!(f, "{} {}", output.name, status_label(output))?;
    if output.is_primary {
        write!(f, " primary")?;
    }
    if let (Some(resolution), Some(position)) = (output.resolution, output.position) {
        write!(f, " {}{} {}", resolution, position, output.rotation.keyword())?;
    }
    if output.reflection != Reflection::None {
        write!(f, " reflected {}", output.reflection)?;
    }
    writeln!(f)?;

    if !output.dimensions.is_zero() {
        writeln!(
            f,
            "  size: {}mm x {}mm",
            output.dimensions.width_mm, output.dimensions.height_mm
        )?;
    }
    if let Some((mode, rate)) = output.current_mode() {
        writeln!(f, "  current: {} @ {:.2} Hz", mode.resolution, rate.value)?;
    }
    if let Some(mode) = output.preferred_mode() {
        writeln!(f, "  preferred: {}", mode.resolution)?;
    }
    writeln!(
        f,
        "  modes: {}, properties: {}",
        output.modes.len(),
        output.properties.len()
    )
}

pub(crate) fn status_label(output: &Output) -> &'static str {
    if output.is_connected {
        "connected"
    } else {
        "disconnected"
    }
}
