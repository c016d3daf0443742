use clap::Parser;
use color_eyre::eyre::WrapErr;
use crossterm::{
    cursor::Show,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::OpenOptions;
use std::io::{Write, stdout};
use std::path::Path;

use galaga::app::App;
use galaga::config::Settings;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let settings = Settings::parse();
    init_logging(&settings.log_file)?;

    // Key release events are only reported with the enhancement flags
    let supports_keyboard_enhancement = matches!(
        crossterm::terminal::supports_keyboard_enhancement(),
        Ok(true)
    );
    log::info!("keyboard enhancement supported: {supports_keyboard_enhancement}");

    enable_raw_mode().wrap_err("failed to enable raw mode")?;
    let result = run_in_terminal(settings, supports_keyboard_enhancement);

    // Restore whatever we can; the game's own result wins
    if let Err(err) = disable_raw_mode() {
        log::warn!("failed to disable raw mode: {err}");
    }
    restore_screen(&mut stdout(), supports_keyboard_enhancement);

    result
}

fn run_in_terminal(settings: Settings, keyboard_enhanced: bool) -> color_eyre::Result<()> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Enable keyboard enhancement AFTER entering alternate screen
    if keyboard_enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    App::new(settings, keyboard_enhanced).run(&mut terminal)
}

/// Undoes the screen setup step by step. A failing step is logged and the
/// rest still run.
fn restore_screen<W: Write>(out: &mut W, keyboard_enhanced: bool) {
    if keyboard_enhanced {
        if let Err(err) = execute!(out, PopKeyboardEnhancementFlags) {
            log::warn!("failed to pop keyboard enhancement flags: {err}");
        }
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen) {
        log::warn!("failed to leave alternate screen: {err}");
    }
    if let Err(err) = execute!(out, Show) {
        log::warn!("failed to show cursor: {err}");
    }
}

/// Routes `log` output to a file; the terminal itself belongs to the game
fn init_logging(path: &Path) -> color_eyre::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Rejects the first write, accepts the rest
    struct FlakyWriter {
        failed_once: bool,
        written: Vec<u8>,
    }

    impl Write for FlakyWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if !self.failed_once {
                self.failed_once = true;
                return Err(io::Error::other("terminal went away"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_restore_screen_emits_every_step() {
        let mut out = Vec::new();
        restore_screen(&mut out, true);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("\x1b[<1u"));
        assert!(text.contains("\x1b[?1049l"));
        assert!(text.contains("\x1b[?25h"));
    }

    #[test]
    fn test_failed_restore_step_does_not_stop_the_rest() {
        let mut out = FlakyWriter {
            failed_once: false,
            written: Vec::new(),
        };
        restore_screen(&mut out, true);
        let text = String::from_utf8_lossy(&out.written);
        assert!(!text.contains("\x1b[<1u"));
        assert!(text.contains("\x1b[?1049l"));
        assert!(text.contains("\x1b[?25h"));
    }
}
