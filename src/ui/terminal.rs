use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use super::app::App;

/// Spin up the terminal backend, enter the draw loop, and keep processing input
/// until the user quits.
pub fn run_app(app: &mut App) -> Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal backend")?;

    let result = event_loop(&mut terminal, app);

    cleanup_terminal(&mut terminal)?;
    info!("terminal restored");
    result
}

/// What a Ctrl-modified key does. Only Ctrl+C and Ctrl+U are bound; every
/// other chord is swallowed instead of reaching the app as a plain key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControlAction {
    Quit,
    ClearSearch,
    Ignore,
}

fn control_action(code: KeyCode) -> ControlAction {
    match code {
        KeyCode::Char('c') | KeyCode::Char('C') => ControlAction::Quit,
        KeyCode::Char('u') | KeyCode::Char('U') => ControlAction::ClearSearch,
        _ => ControlAction::Ignore,
    }
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal
            .draw(|frame| app.draw(frame))
            .context("failed to draw frame")?;

        if event::poll(Duration::from_millis(250)).context("event polling failed")? {
            if let Event::Key(key_event) = event::read().context("failed to read event")? {
                if key_event.kind == KeyEventKind::Press {
                    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
                        match control_action(key_event.code) {
                            ControlAction::Quit => return Ok(()),
                            ControlAction::ClearSearch => app.handle_ctrl_u(),
                            ControlAction::Ignore => {}
                        }
                        continue;
                    }

                    if app.handle_key(key_event.code)? {
                        return Ok(());
                    }
                }
            }
        }
    }
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal
        .show_cursor()
        .context("failed to restore cursor visibility")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_ctrl_c_and_ctrl_u_are_bound() {
        assert_eq!(control_action(KeyCode::Char('c')), ControlAction::Quit);
        assert_eq!(control_action(KeyCode::Char('u')), ControlAction::ClearSearch);
        for ch in ['a', 'q', 'o', '1', '/'] {
            assert_eq!(control_action(KeyCode::Char(ch)), ControlAction::Ignore);
        }
        assert_eq!(control_action(KeyCode::Enter), ControlAction::Ignore);
        assert_eq!(control_action(KeyCode::Esc), ControlAction::Ignore);
    }
}
