//! Terminal cabinet: the strip drawn as a row of colored cells, keys as
//! trigger buttons.
//!
//! Layout (rows): 0 title, 2 strip, 4 turn lamps, 6.. status log.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{self, Color},
    terminal,
};

use crate::core::error::Result;
use crate::core::types::{Side, Triggers};
use crate::game::cabinet::Cabinet;
use crate::game::events::DuelEvent;
use crate::render::colors::{Rgb, OFF};
use crate::render::strip::LedStrip;
use crate::ui::state::{LogCategory, StatusLog};

const TITLE_ROW: u16 = 0;
const STRIP_ROW: u16 = 2;
const LAMP_ROW: u16 = 4;
const LOG_ROW: u16 = 6;

/// How long one poll waits for a key before reporting "no trigger"
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Raw mode + alternate screen for as long as it lives
pub struct TerminalSession {
    out: Stdout,
}

impl TerminalSession {
    pub fn start() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
            terminal::Clear(terminal::ClearType::All),
        )?;
        queue!(
            out,
            cursor::MoveTo(0, TITLE_ROW),
            style::Print("SPACE DUEL   [A/Left] Red fires   [L/Right] Green fires   [Q] quit"),
        )?;
        out.flush()?;
        Ok(Self { out })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn term_color(color: Rgb) -> Color {
    Color::Rgb {
        r: color.red,
        g: color.green,
        b: color.blue,
    }
}

/// A strip emulated on one terminal row
pub struct TerminalStrip {
    cells: Vec<Rgb>,
    out: Stdout,
}

impl TerminalStrip {
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![OFF; len],
            out: io::stdout(),
        }
    }
}

impl LedStrip for TerminalStrip {
    fn len(&self) -> usize {
        self.cells.len()
    }

    fn set(&mut self, index: usize, color: Rgb) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = color;
        }
    }

    fn show(&mut self) -> Result<()> {
        queue!(self.out, cursor::MoveTo(0, STRIP_ROW))?;
        for &cell in &self.cells {
            if cell == OFF {
                queue!(
                    self.out,
                    style::SetForegroundColor(Color::DarkGrey),
                    style::Print('·')
                )?;
            } else {
                queue!(
                    self.out,
                    style::SetForegroundColor(term_color(cell)),
                    style::Print('█')
                )?;
            }
        }
        queue!(self.out, style::ResetColor)?;
        self.out.flush()?;
        Ok(())
    }
}

enum Key {
    Fire(Side),
    Quit,
}

fn map_key(key: KeyEvent) -> Option<Key> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Key::Quit),
        KeyCode::Char('a') | KeyCode::Left => Some(Key::Fire(Side::Red)),
        KeyCode::Char('l') | KeyCode::Right => Some(Key::Fire(Side::Green)),
        _ => None,
    }
}

/// Keyboard triggers, on-screen lamps and status log
pub struct TerminalCabinet {
    out: Stdout,
    log: StatusLog,
    lit_lamp: Option<Side>,
}

impl TerminalCabinet {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            log: StatusLog::new(),
            lit_lamp: None,
        }
    }

    fn draw_log(&mut self) -> Result<()> {
        for (row, entry) in self.log.entries().enumerate() {
            let color = match entry.category {
                LogCategory::Match => Color::White,
                LogCategory::Hit => Color::Yellow,
                LogCategory::Critical => Color::Magenta,
                LogCategory::Miss => Color::DarkGrey,
                LogCategory::GameOver => Color::Cyan,
            };
            queue!(
                self.out,
                cursor::MoveTo(0, LOG_ROW + row as u16),
                terminal::Clear(terminal::ClearType::CurrentLine),
                style::SetForegroundColor(color),
                style::Print(&entry.message),
                style::ResetColor,
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl Default for TerminalCabinet {
    fn default() -> Self {
        Self::new()
    }
}

impl Cabinet for TerminalCabinet {
    fn poll_triggers(&mut self) -> Result<Option<Triggers>> {
        // Presses made while an animation was blocking the loop are stale;
        // only a quit request survives the drain.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(Key::Quit) = map_key(key) {
                    return Ok(None);
                }
            }
        }

        let mut triggers = Triggers::none();
        if event::poll(POLL_INTERVAL)? {
            while event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    match map_key(key) {
                        Some(Key::Quit) => return Ok(None),
                        Some(Key::Fire(side)) => triggers.set(side, true),
                        None => {}
                    }
                }
            }
        }
        Ok(Some(triggers))
    }

    fn show_turn(&mut self, turn: Side) -> Result<()> {
        if self.lit_lamp == Some(turn) {
            return Ok(());
        }
        self.lit_lamp = Some(turn);

        let (red, green) = match turn {
            Side::Red => (Color::Red, Color::DarkGrey),
            Side::Green => (Color::DarkGrey, Color::Green),
        };
        queue!(
            self.out,
            cursor::MoveTo(0, LAMP_ROW),
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::SetForegroundColor(red),
            style::Print("● RED"),
            style::ResetColor,
            style::Print("    "),
            style::SetForegroundColor(green),
            style::Print("GREEN ●"),
            style::ResetColor,
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn report(&mut self, event: &DuelEvent) -> Result<()> {
        self.log.log_event(event);
        self.draw_log()
    }
}
