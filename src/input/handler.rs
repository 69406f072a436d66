use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, GameEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Game(GameEvent),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => turn(Direction::Up),
            KeyCode::Down => turn(Direction::Down),
            KeyCode::Left => turn(Direction::Left),
            KeyCode::Right => turn(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => turn(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => turn(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => turn(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => turn(Direction::Right),

            // Controls
            KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
                KeyAction::Game(GameEvent::TogglePause)
            }
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Game(GameEvent::Restart),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

fn turn(direction: Direction) -> KeyAction {
    KeyAction::Game(GameEvent::Turn(direction))
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Up)), turn(Direction::Up));
        assert_eq!(handler.handle_key_event(press(KeyCode::Down)), turn(Direction::Down));
        assert_eq!(handler.handle_key_event(press(KeyCode::Left)), turn(Direction::Left));
        assert_eq!(handler.handle_key_event(press(KeyCode::Right)), turn(Direction::Right));
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Char('w'))), turn(Direction::Up));
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('a'))), turn(Direction::Left));
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('s'))), turn(Direction::Down));
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('d'))), turn(Direction::Right));

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(w_upper), turn(Direction::Up));
    }

    #[test]
    fn test_pause_keys() {
        let handler = InputHandler::new();
        let pause = KeyAction::Game(GameEvent::TogglePause);

        assert_eq!(handler.handle_key_event(press(KeyCode::Char(' '))), pause);
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('p'))), pause);
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key_event(press(KeyCode::Esc)), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_restart_key() {
        let handler = InputHandler::new();

        let r_upper = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(r_upper), KeyAction::Game(GameEvent::Restart));
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('x'))), KeyAction::None);
    }
}
