// Integration tests against complete `xrandr --props` reports

use pretty_assertions::assert_eq;
use xrandr_props::parser::model::{
    Dimensions, OutputMode, Position, Rate, Reflection, Resolution, Rotation,
};
use xrandr_props::parser::lexer::TokenKind;
use xrandr_props::parser::parser::{Expected, Parser};
use xrandr_props::report::{fingerprint, Summary};
use xrandr_props::{parse, Output, ParseError};

const LEGEND: &str = "(normal left inverted right x axis y axis)";

/// Laptop panel plus a rotated external monitor, with one empty port
/// between them.
const DOCKED: &str = concat!(
    "Screen 0: minimum 320 x 200, current 3000 x 1920, maximum 16384 x 16384\n",
    "eDP-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 309mm x 174mm\n",
    "\tEDID: \n",
    "\t\t00ffffffffffff0006af3d5700000000\n",
    "\t\t001c0104a51f1178028d15a156529d28\n",
    "\tscaling mode: Full aspect \n",
    "\t\tsupported: Full, Center, Full aspect\n",
    "\tBrightness: 1.000000\n",
    "\tnon-desktop: 0 \n",
    "\t\trange: (0, 1)\n",
    "   1920x1080     60.02*+  59.93    48.02  \n",
    "   1680x1050     59.95    59.88  \n",
    "   1280x720      60.00    59.99    59.86    59.74  \n",
    "HDMI-1 disconnected (normal left inverted right x axis y axis)\n",
    "\tmax bpc: 12 \n",
    "\t\trange: (8, 12)\n",
    "\tBroadcast RGB: Automatic \n",
    "\t\tsupported: Automatic, Full, Limited 16:235\n",
    "DP-1 connected 1080x1920+1920+0 left (normal left inverted right x axis y axis) 527mm x 296mm\n",
    "\tEDID: \n",
    "\t\t00ffffffffffff0010acb5a04c4c3931\n",
    "\tlink-status: Good \n",
    "\t\tsupported: Good, Bad\n",
    "   1920x1080     60.00*+  74.97    50.00  \n",
    "   1920x1080i    60.00    50.00    59.94  \n",
    "   1280x1024     75.02    60.02  \n",
);

fn rate(value: f64, is_current: bool, is_preferred: bool) -> Rate {
    Rate {
        value,
        is_current,
        is_preferred,
    }
}

#[test]
fn test_docked_report_structure() {
    let result = parse(DOCKED.as_bytes()).unwrap();

    let names: Vec<&str> = result.outputs.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["eDP-1", "HDMI-1", "DP-1"]);

    let laptop = &result.outputs[0];
    assert!(laptop.is_connected && laptop.is_primary && laptop.is_enabled);
    assert_eq!(laptop.dimensions, Dimensions::new(309, 174));
    assert_eq!(
        laptop.edid(),
        Some("00ffffffffffff0006af3d5700000000001c0104a51f1178028d15a156529d28")
    );
    assert_eq!(laptop.property("scaling mode"), Some("Full aspect"));
    assert_eq!(laptop.property("Brightness"), Some("1.000000"));
    assert_eq!(laptop.property("non-desktop"), Some("0"));
    assert_eq!(laptop.properties.len(), 4);
    assert_eq!(laptop.modes.len(), 3);
    assert_eq!(
        laptop.modes[2].rates.iter().map(|r| r.value).collect::<Vec<_>>(),
        [60.00, 59.99, 59.86, 59.74]
    );

    let empty_port = &result.outputs[1];
    assert!(!empty_port.is_connected);
    assert_eq!(empty_port.property("max bpc"), Some("12"));
    assert_eq!(empty_port.property("Broadcast RGB"), Some("Automatic"));
    assert!(empty_port.modes.is_empty());

    let monitor = &result.outputs[2];
    assert_eq!(monitor.rotation, Rotation::Left);
    assert_eq!(monitor.reflection, Reflection::None);
    assert_eq!(monitor.resolution, Some(Resolution::new(1080, 1920)));
    assert_eq!(monitor.position, Some(Position::new(1920, 0)));
    assert_eq!(monitor.property("link-status"), Some("Good"));
    assert_eq!(
        monitor.modes[1],
        OutputMode {
            resolution: Resolution::new(1920, 1080),
            interlaced: true,
            rates: vec![
                rate(60.00, false, false),
                rate(50.00, false, false),
                rate(59.94, false, false),
            ],
        }
    );
}

#[test]
fn test_current_and_preferred_modes() {
    let result = parse(DOCKED.as_bytes()).unwrap();
    let monitor = result.output("DP-1").unwrap();

    let (mode, current) = monitor.current_mode().unwrap();
    assert_eq!(mode.resolution, Resolution::new(1920, 1080));
    assert_eq!(*current, rate(60.00, true, true));
    assert_eq!(
        monitor.preferred_mode().map(|mode| mode.resolution),
        Some(Resolution::new(1920, 1080))
    );
}

#[test]
fn test_single_bare_output_has_defaults() {
    let input = format!(
        "Screen 0: minimum 8 x 8, current 1024 x 768, maximum 8192 x 8192\nVIRTUAL1 disconnected {}\n",
        LEGEND
    );
    let result = parse(input.as_bytes()).unwrap();

    let mut expected = Output::new("VIRTUAL1");
    expected.is_connected = false;
    assert_eq!(result.outputs, vec![expected]);
}

#[test]
fn test_missing_screen_header() {
    let input = format!("HDMI-1 disconnected {}\n", LEGEND);
    let err = parse(input.as_bytes()).unwrap_err();

    assert_eq!(err.location().line, 1);
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            expected: Expected::Literal(TokenKind::Name, "Screen"),
            ..
        }
    ));
    assert!(err.to_string().contains("\"Screen\""));
}

#[test]
fn test_independent_parsers_agree() {
    let first = Parser::new(DOCKED.as_bytes())
        .unwrap()
        .parse_report()
        .unwrap();
    let second = Parser::new(DOCKED.as_bytes())
        .unwrap()
        .parse_report()
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(fingerprint(&first.outputs), fingerprint(&second.outputs));
}

#[test]
fn test_fingerprint_follows_connected_set() {
    let docked = parse(DOCKED.as_bytes()).unwrap();

    // Same displays, monitor moved to the left and no longer rotated.
    let rearranged = DOCKED
        .replace("1080x1920+1920+0 left", "1920x1080+0+0")
        .replace("eDP-1 connected primary 1920x1080+0+0", "eDP-1 connected primary 1920x1080+1920+0");
    let rearranged = parse(rearranged.as_bytes()).unwrap();
    assert_eq!(rearranged.outputs[2].rotation, Rotation::Normal);
    assert_eq!(fingerprint(&docked.outputs), fingerprint(&rearranged.outputs));

    // Monitor unplugged.
    let undocked = DOCKED.replace("DP-1 connected 1080x1920+1920+0 left", "DP-1 disconnected");
    let undocked = parse(undocked.as_bytes()).unwrap();
    assert!(!undocked.outputs[2].is_connected);
    assert_ne!(fingerprint(&docked.outputs), fingerprint(&undocked.outputs));
}

#[test]
fn test_summary_lists_every_output() {
    let result = parse(DOCKED.as_bytes()).unwrap();
    let summary = Summary(&result).to_string();

    assert!(summary.starts_with("eDP-1 connected primary 1920x1080+0+0 normal\n"));
    assert!(summary.contains("\nHDMI-1 disconnected\n"));
    assert!(summary.contains("\nDP-1 connected 1080x1920+1920+0 left\n"));
    assert!(summary.contains("  current: 1920x1080 @ 60.02 Hz\n"));
}

#[test]
fn test_windows_line_endings_are_rejected_with_position() {
    let input = DOCKED.replace('\n', "\r\n");
    let err = parse(input.as_bytes()).unwrap_err();

    assert_eq!(err.location().line, 1);
}
