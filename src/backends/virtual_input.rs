use crate::device::InputBackend;
use crate::source::Key;
use std::collections::{HashMap, HashSet};

/// In-memory keyboard state for any number of device indices.
///
/// Nothing reads real hardware here: callers press and release keys directly.
/// Useful for tests, scripted demos, and replaying recorded input.
#[derive(Debug, Default, Clone)]
pub struct VirtualKeyboard {
    held: HashMap<i32, HashSet<Key>>,
}

impl VirtualKeyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, index: i32, key: Key) {
        self.held.entry(index).or_default().insert(key);
    }

    pub fn release(&mut self, index: i32, key: Key) {
        if let Some(keys) = self.held.get_mut(&index) {
            keys.remove(&key);
        }
    }

    /// Convenience for replaying a boolean sample.
    pub fn set(&mut self, index: i32, key: Key, down: bool) {
        if down {
            self.press(index, key);
        } else {
            self.release(index, key);
        }
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

impl InputBackend for VirtualKeyboard {
    fn is_key_down(&self, index: i32, key: Key) -> bool {
        self.held.get(&index).is_some_and(|keys| keys.contains(&key))
    }
}
