use crate::grid::Direction;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

/// What the player asked for
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Turn(Direction),
    Pause,
    Reload,
    Quit,
    PanStart { column: u16, row: u16 },
    PanMove { column: u16, row: u16 },
    PanEnd,
}

impl Command {
    pub fn from_event(event: &Event) -> Option<Command> {
        match event {
            Event::Key(key) => Command::from_key_event(key),
            Event::Mouse(mouse) => Command::from_mouse_event(mouse),
            _ => None,
        }
    }

    pub fn from_key_event(key: &KeyEvent) -> Option<Command> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('w') => Some(Command::Turn(Direction::Up)),
            KeyCode::Down | KeyCode::Char('s') => Some(Command::Turn(Direction::Down)),
            KeyCode::Left | KeyCode::Char('a') => Some(Command::Turn(Direction::Left)),
            KeyCode::Right | KeyCode::Char('d') => Some(Command::Turn(Direction::Right)),
            KeyCode::Char('p') | KeyCode::Char(' ') => Some(Command::Pause),
            KeyCode::Char('r') => Some(Command::Reload),
            KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        }
    }

    pub fn from_mouse_event(mouse: &MouseEvent) -> Option<Command> {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Command::PanStart { column, row }),
            MouseEventKind::Drag(MouseButton::Left) => Some(Command::PanMove { column, row }),
            MouseEventKind::Up(MouseButton::Left) => Some(Command::PanEnd),
            _ => None,
        }
    }
}
