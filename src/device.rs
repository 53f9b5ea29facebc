use crate::source::Key;

/// Platform input query interface.
///
/// Backends own the live device state; bindings only read it. `index` selects
/// which keyboard to read. A backend that does not know an index reports every
/// key as up.
///
/// Joystick queries are not part of this trait; polling joystick sources is
/// reported as [`Error::UnsupportedSource`](crate::Error::UnsupportedSource).
pub trait InputBackend {
    fn is_key_down(&self, index: i32, key: Key) -> bool;
}

impl<B: InputBackend + ?Sized> InputBackend for &B {
    fn is_key_down(&self, index: i32, key: Key) -> bool {
        (**self).is_key_down(index, key)
    }
}

impl<B: InputBackend + ?Sized> InputBackend for Box<B> {
    fn is_key_down(&self, index: i32, key: Key) -> bool {
        (**self).is_key_down(index, key)
    }
}
