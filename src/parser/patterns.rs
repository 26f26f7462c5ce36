//! Matchers for numeric structure hidden inside `Name` tokens
//!
//! The lexer reports `1920x1080`, `1920x1080i` and `310mm` as plain names.
//! These functions recognise the shapes the grammar cares about and return
//! `None` on anything else, so a failed match can drive lookahead decisions
//! without raising an error.

use super::model::Resolution;

/// Resolution of a mode line, with the interlace marker it carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeResolution {
    pub resolution: Resolution,
    pub interlaced: bool,
}

/// `<digits>x<digits>` with an optional `i` suffix, as printed after an
/// output's status. The suffix is accepted and dropped.
pub fn match_current_resolution(literal: &str) -> Option<Resolution> {
    let (resolution, _) = split_resolution(literal)?;
    Some(resolution)
}

/// `<digits>x<digits>` with an optional `i` suffix, as printed at the start
/// of a mode line.
pub fn match_mode_resolution(literal: &str) -> Option<ModeResolution> {
    let (resolution, interlaced) = split_resolution(literal)?;
    Some(ModeResolution {
        resolution,
        interlaced,
    })
}

/// `<digits>mm`, returning the millimetre count.
pub fn match_physical_dimension(literal: &str) -> Option<u32> {
    parse_digits(literal.strip_suffix("mm")?)
}

fn split_resolution(literal: &str) -> Option<(Resolution, bool)> {
    let (body, interlaced) = match literal.strip_suffix('i') {
        Some(body) => (body, true),
        None => (literal, false),
    };
    let (width, height) = body.split_once('x')?;
    let resolution = Resolution::new(parse_digits(width)?, parse_digits(height)?);
    Some((resolution, interlaced))
}

/// Non-empty run of ASCII digits that fits a `u32`. Rejects the signs and
/// whitespace that `str::parse` would tolerate or report differently.
fn parse_digits(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_resolution() {
        assert_eq!(
            match_current_resolution("1920x1080"),
            Some(Resolution::new(1920, 1080))
        );
        assert_eq!(
            match_current_resolution("720x576i"),
            Some(Resolution::new(720, 576))
        );
        assert_eq!(match_current_resolution("normal"), None);
        assert_eq!(match_current_resolution("x1080"), None);
        assert_eq!(match_current_resolution("1920x"), None);
        assert_eq!(match_current_resolution("1920x1080ii"), None);
        assert_eq!(match_current_resolution("1920x1080x2"), None);
        assert_eq!(match_current_resolution("DP-1"), None);
    }

    #[test]
    fn test_mode_resolution_accepts_interlace() {
        assert_eq!(
            match_mode_resolution("1920x1080i"),
            Some(ModeResolution {
                resolution: Resolution::new(1920, 1080),
                interlaced: true,
            })
        );
        assert_eq!(
            match_mode_resolution("640x480"),
            Some(ModeResolution {
                resolution: Resolution::new(640, 480),
                interlaced: false,
            })
        );
        assert_eq!(match_mode_resolution("1920x1080_60.00"), None);
    }

    #[test]
    fn test_physical_dimension() {
        assert_eq!(match_physical_dimension("310mm"), Some(310));
        assert_eq!(match_physical_dimension("0mm"), Some(0));
        assert_eq!(match_physical_dimension("mm"), None);
        assert_eq!(match_physical_dimension("310cm"), None);
        assert_eq!(match_physical_dimension("+3mm"), None);
    }

    #[test]
    fn test_overflow_is_not_a_match() {
        assert_eq!(match_current_resolution("99999999999x1"), None);
        assert_eq!(match_physical_dimension("99999999999mm"), None);
    }
}
