//! Main TUI application state and logic

use crate::parser::model::{Output, ParseResult};
use crate::report::{fingerprint, Fingerprint};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Outputs,
    Details,
    Modes,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: outputs -> details -> modes)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Outputs => FocusedPane::Details,
            FocusedPane::Details => FocusedPane::Modes,
            FocusedPane::Modes => FocusedPane::Outputs,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Outputs => FocusedPane::Modes,
            FocusedPane::Details => FocusedPane::Outputs,
            FocusedPane::Modes => FocusedPane::Details,
        }
    }
}

/// The main application state
pub struct App {
    /// The parsed report being browsed
    pub result: ParseResult,

    /// Where the report came from, shown in the status bar
    pub source_name: String,

    pub fingerprint: Fingerprint,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Index of the selected output among the visible ones
    pub selected: usize,

    /// Per-pane scroll offsets
    pub details_scroll: usize,
    pub modes_scroll: usize,

    /// Hide outputs with nothing plugged in
    pub hide_disconnected: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(result: ParseResult, source_name: impl Into<String>) -> Self {
        let fingerprint = fingerprint(&result.outputs);
        App {
            result,
            source_name: source_name.into(),
            fingerprint,
            focused_pane: FocusedPane::Outputs,
            selected: 0,
            details_scroll: 0,
            modes_scroll: 0,
            hide_disconnected: false,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Nothing changes between key presses, so block until one arrives.
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Outputs shown in the list, honouring the disconnected filter.
    pub fn visible_outputs(&self) -> Vec<&Output> {
        self.result
            .outputs
            .iter()
            .filter(|output| !self.hide_disconnected || output.is_connected)
            .collect()
    }

    pub fn selected_output(&self) -> Option<&Output> {
        self.visible_outputs().get(self.selected).copied()
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(pane_area);

        // Right column: Details (top) | Modes (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        // Borrow only `result` so the scroll offsets below stay mutable.
        let hide_disconnected = self.hide_disconnected;
        let visible: Vec<&Output> = self
            .result
            .outputs
            .iter()
            .filter(|output| !hide_disconnected || output.is_connected)
            .collect();
        let selected = visible.get(self.selected).copied();

        super::panes::render_outputs_pane(
            frame,
            columns[0],
            &visible,
            self.selected,
            self.focused_pane == FocusedPane::Outputs,
        );

        super::panes::render_details_pane(
            frame,
            right_rows[0],
            selected,
            self.focused_pane == FocusedPane::Details,
            &mut self.details_scroll,
        );

        super::panes::render_modes_pane(
            frame,
            right_rows[1],
            selected,
            self.focused_pane == FocusedPane::Modes,
            &mut self.modes_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            super::panes::StatusRenderData {
                source_name: &self.source_name,
                fingerprint: self.fingerprint,
                connected: self.result.connected().count(),
                total: self.result.outputs.len(),
                hide_disconnected: self.hide_disconnected,
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Outputs => {
                    if self.selected > 0 {
                        self.select(self.selected - 1);
                    }
                }
                FocusedPane::Details => {
                    self.details_scroll = self.details_scroll.saturating_sub(1);
                }
                FocusedPane::Modes => {
                    self.modes_scroll = self.modes_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Outputs => {
                    if self.selected + 1 < self.visible_outputs().len() {
                        self.select(self.selected + 1);
                    }
                }
                // Clamped against the content height when rendering
                FocusedPane::Details => {
                    self.details_scroll = self.details_scroll.saturating_add(1);
                }
                FocusedPane::Modes => {
                    self.modes_scroll = self.modes_scroll.saturating_add(1);
                }
            },
            KeyCode::Home => {
                self.select(0);
            }
            KeyCode::End => {
                let count = self.visible_outputs().len();
                self.select(count.saturating_sub(1));
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.toggle_disconnected();
            }
            _ => {}
        }
    }

    /// Select a visible output and reset the scroll of the panes showing it.
    fn select(&mut self, index: usize) {
        self.selected = index;
        self.details_scroll = 0;
        self.modes_scroll = 0;
        if let Some(output) = self.selected_output() {
            self.status_message = format!("Selected {}", output.name);
        }
    }

    /// Flip the disconnected filter, keeping the same output selected when it
    /// stays visible.
    fn toggle_disconnected(&mut self) {
        let current = self.selected_output().map(|output| output.name.clone());
        self.hide_disconnected = !self.hide_disconnected;

        let position = current.and_then(|name| {
            self.visible_outputs()
                .iter()
                .position(|output| output.name == name)
        });
        match position {
            Some(index) => self.selected = index,
            None => self.select(0),
        }

        self.status_message = if self.hide_disconnected {
            "Hiding disconnected outputs".to_string()
        } else {
            "Showing all outputs".to_string()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    const REPORT: &str = concat!(
        "Screen 0: minimum 8 x 8, current 3840 x 1080, maximum 32767 x 32767\n",
        "eDP-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 310mm x 170mm\n",
        "\tBrightness: 1.000000\n",
        "   1920x1080     60.02*+  59.93\n",
        "HDMI-1 disconnected (normal left inverted right x axis y axis)\n",
        "DP-1 connected 1920x1080+1920+0 (normal left inverted right x axis y axis) 527mm x 296mm\n",
        "   1920x1080     60.00*+\n",
        "   1280x720      60.00\n",
    );

    fn app() -> App {
        let result = crate::parser::parse(REPORT.as_bytes()).unwrap();
        App::new(result, "test")
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn selected_name(app: &App) -> String {
        app.selected_output().unwrap().name.clone()
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Details);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Outputs);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Modes);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(selected_name(&app), "eDP-1");

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(selected_name(&app), "DP-1");

        press(&mut app, KeyCode::Home);
        assert_eq!(selected_name(&app), "eDP-1");
        press(&mut app, KeyCode::End);
        assert_eq!(selected_name(&app), "DP-1");
    }

    #[test]
    fn test_arrows_scroll_focused_pane() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);

        assert_eq!(app.details_scroll, 2);
        assert_eq!(app.selected, 0);

        // Changing the selection starts the new output from the top.
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.details_scroll, 0);
    }

    #[test]
    fn test_hide_disconnected_keeps_selection() {
        let mut app = app();
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Char('c'));

        assert!(app.hide_disconnected);
        assert_eq!(app.visible_outputs().len(), 2);
        assert_eq!(app.selected, 1);
        assert_eq!(selected_name(&app), "DP-1");
    }

    #[test]
    fn test_hiding_selected_output_falls_back_to_first() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        assert_eq!(selected_name(&app), "HDMI-1");

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(selected_name(&app), "eDP-1");
    }

    #[test]
    fn test_render() {
        let mut app = app();
        let text = screen_text(&mut app);

        assert!(text.contains("eDP-1"));
        assert!(text.contains("HDMI-1"));
        assert!(text.contains("Brightness"));
        assert!(text.contains("1920x1080"));
        assert!(text.contains(&app.fingerprint.to_string()));
    }

    #[test]
    fn test_render_empty_filter() {
        let result = ParseResult {
            outputs: vec![Output::new("VIRTUAL1")],
        };
        let mut app = App::new(result, "test");
        press(&mut app, KeyCode::Char('c'));

        assert!(app.selected_output().is_none());
        let text = screen_text(&mut app);
        assert!(text.contains("(no outputs)"));
    }
}
