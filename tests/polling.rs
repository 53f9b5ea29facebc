use inputprofile::backends::virtual_input::VirtualKeyboard;
use inputprofile::{InputBinding, InputProfile, InputState, Key};

/// Feed one boolean sample per poll and collect the resulting states.
fn replay(samples: &[bool]) -> Vec<InputState> {
    let mut profile = InputProfile::new("replay", vec![InputBinding::key("Jump", Key::Space)]);
    let mut kb = VirtualKeyboard::new();
    samples
        .iter()
        .map(|&down| {
            kb.set(0, Key::Space, down);
            profile.get_state(&kb, "Jump").unwrap()
        })
        .collect()
}

#[test]
fn press_hold_release_sequence() {
    use InputState::*;
    assert_eq!(
        replay(&[false, true, true, true, false, false, false]),
        [Up, Down, Down, Down, Pressed, Up, Up]
    );
}

#[test]
fn repeated_taps_each_report_one_release() {
    use InputState::*;
    assert_eq!(
        replay(&[true, false, true, false, true, false]),
        [Down, Pressed, Down, Pressed, Down, Pressed]
    );
}

#[test]
fn profiles_keep_separate_edge_state() {
    let bindings = vec![InputBinding::from_names("Jump", "Space")];
    let mut first = InputProfile::new("a", bindings.clone());
    let mut second = InputProfile::new("b", bindings);
    let mut kb = VirtualKeyboard::new();

    kb.press(0, Key::Space);
    assert_eq!(first.get_state(&kb, "Jump").unwrap(), InputState::Down);
    kb.release(0, Key::Space);

    assert_eq!(first.get_state(&kb, "Jump").unwrap(), InputState::Pressed);
    assert_eq!(second.get_state(&kb, "Jump").unwrap(), InputState::Up);
}

#[test]
fn boxed_backend_works() {
    let mut kb = VirtualKeyboard::new();
    kb.press(0, Key::Enter);
    let backend: Box<dyn inputprofile::InputBackend> = Box::new(kb);

    let mut profile = InputProfile::new("menu", vec![InputBinding::key("Confirm", Key::Enter)]);
    assert_eq!(
        profile.get_state(backend.as_ref(), "Confirm").unwrap(),
        InputState::Down
    );
}
