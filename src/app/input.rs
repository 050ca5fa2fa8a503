use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    TogglePause,
    ToggleInfo,
    ToggleColors,
    ToggleHistory,
    ToggleDoubleHeight,
    Reset,
    Reseed,
}

impl Command {
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Command::Quit),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Char('p') => Some(Command::TogglePause),
            KeyCode::Char('i') => Some(Command::ToggleInfo),
            KeyCode::Char('c') => Some(Command::ToggleColors),
            KeyCode::Char('h') => Some(Command::ToggleHistory),
            KeyCode::Char('2') => Some(Command::ToggleDoubleHeight),
            KeyCode::Char('r') => Some(Command::Reset),
            KeyCode::Char('n') => Some(Command::Reseed),
            _ => None,
        }
    }
}

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match Command::from_key(key) {
            Some(command) => self.apply(command),
            None => Ok(()),
        }
    }

    pub fn apply(&mut self, command: Command) -> Result<()> {
        tracing::debug!(?command, "Key command");
        match command {
            Command::Quit => self.running = false,
            Command::TogglePause => {
                self.sim.toggle_pause();
            }
            Command::ToggleInfo => self.display.show_info = !self.display.show_info,
            Command::ToggleColors => self.display.use_colors = !self.display.use_colors,
            Command::ToggleHistory => self.display.show_history = !self.display.show_history,
            Command::ToggleDoubleHeight => {
                self.display.double_height = !self.display.double_height;
            }
            Command::Reset => self.sim.reset()?,
            Command::Reseed => self.sim.reseed()?,
        }
        Ok(())
    }
}
