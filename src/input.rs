//! Keyboard input and the commands it maps to.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"z"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// A user command triggered from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Restore the draw layer to its state before the last stroke segment.
    Undo,
}

impl Command {
    /// The command bound to `key`, if any. Bindings are case-sensitive.
    #[must_use]
    pub fn from_key(key: &Key) -> Option<Self> {
        match key.0.as_str() {
            "z" => Some(Self::Undo),
            _ => None,
        }
    }
}
