//! Terminal-agnostic keyboard input.

/// Keyboard input abstraction.
///
/// Decouples application logic from terminal libraries (crossterm, termion,
/// etc.) enabling deterministic simulation testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter/Return key (reveal answer).
    Enter,
    /// Escape key (quit).
    Esc,
    /// Left arrow key (wrong).
    Left,
    /// Right arrow key (correct).
    Right,
}
