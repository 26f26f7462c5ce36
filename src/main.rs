// xrandr-props: parse and browse `xrandr --props` reports

use std::io;
use std::process;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use xrandr_props::report::{fingerprint, Summary};
use xrandr_props::source::ReportSource;
use xrandr_props::ui::App;

/// What to do with the parsed report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Viewer,
    Summary,
    Fingerprint,
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [--summary | --fingerprint] [FILE | -]", program_name);
    eprintln!();
    eprintln!("Reads the report from FILE, from stdin when FILE is '-', or by running");
    eprintln!("`$XRANDR --props` (default: xrandr) when no FILE is given.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --summary       Print a text summary and the fingerprint");
    eprintln!("  --fingerprint   Print the fingerprint of the connected outputs");
    eprintln!("  --help          Show this message");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("xrandr-props");

    let mut mode = Mode::Viewer;
    let mut source = None;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--summary" => mode = Mode::Summary,
            "--fingerprint" => mode = Mode::Fingerprint,
            "-h" | "--help" => {
                print_usage(program_name);
                return Ok(());
            }
            flag if flag.starts_with("--") => {
                eprintln!("Error: Unknown option '{}'", flag);
                eprintln!();
                print_usage(program_name);
                process::exit(1);
            }
            operand => {
                if source.is_some() {
                    eprintln!("Error: More than one input given");
                    eprintln!();
                    print_usage(program_name);
                    process::exit(1);
                }
                source = Some(ReportSource::from_arg(operand));
            }
        }
    }
    let source = source.unwrap_or_else(ReportSource::from_env);

    // Read the report
    let input = match source.read() {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: Failed to read {}: {}", source, e);
            process::exit(1);
        }
    };

    // Parse the report
    if mode == Mode::Viewer {
        eprintln!("Parsing {}...", source);
    }
    let result = match xrandr_props::parse(&input) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Parser error: {}", e);
            process::exit(1);
        }
    };

    match mode {
        Mode::Summary => {
            print!("{}", Summary(&result));
            println!();
            println!("fingerprint: {}", fingerprint(&result.outputs));
            return Ok(());
        }
        Mode::Fingerprint => {
            println!("{}", fingerprint(&result.outputs));
            return Ok(());
        }
        Mode::Viewer => {}
    }

    eprintln!(
        "Parsed successfully. Found {} outputs ({} connected).",
        result.outputs.len(),
        result.connected().count()
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(result, source.to_string());
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
