use crossterm::event::KeyCode;

use crate::games::snake::Direction;

/// Ordered key bindings. Earlier entries win when several bound keys were
/// pressed during the same frame.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<(KeyCode, Direction)>,
}

impl KeyMap {
    pub fn new(bindings: Vec<(KeyCode, Direction)>) -> Self {
        Self { bindings }
    }

    /// First binding whose key appears in `pressed`. `None` keeps the
    /// current heading.
    pub fn resolve(&self, pressed: &[KeyCode]) -> Option<Direction> {
        self.bindings
            .iter()
            .find(|(key, _)| pressed.iter().any(|p| same_key(p, key)))
            .map(|&(_, dir)| dir)
    }

    pub fn bindings(&self) -> &[(KeyCode, Direction)] {
        &self.bindings
    }
}

impl Default for KeyMap {
    /// WASD first, then the arrow keys
    fn default() -> Self {
        Self::new(vec![
            (KeyCode::Char('w'), Direction::Up),
            (KeyCode::Char('s'), Direction::Down),
            (KeyCode::Char('a'), Direction::Left),
            (KeyCode::Char('d'), Direction::Right),
            (KeyCode::Up, Direction::Up),
            (KeyCode::Down, Direction::Down),
            (KeyCode::Left, Direction::Left),
            (KeyCode::Right, Direction::Right),
        ])
    }
}

fn same_key(pressed: &KeyCode, bound: &KeyCode) -> bool {
    match (pressed, bound) {
        (KeyCode::Char(a), KeyCode::Char(b)) => a.eq_ignore_ascii_case(b),
        _ => pressed == bound,
    }
}
