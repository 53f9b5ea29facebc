use inputprofile::backends::virtual_input::VirtualKeyboard;
use inputprofile::{Error, InputBinding, InputProfile, InputSource, InputState, JoystickHat, Key};
use std::fs;

const PLAYER_JSON: &str = r#"{
  "name": "Player 1",
  "inputs": [
    { "actionName": "Jump", "inputName": "Space" },
    { "actionName": "Fire", "inputName": "ControlLeft" },
    { "actionName": "Look", "inputName": "Hat0" },
    { "actionName": "Dash", "inputName": "DoubleTap" }
  ]
}"#;

const PLAYER_TOML: &str = r#"
name = "Player 2"
index = 1

[[inputs]]
actionName = "Jump"
inputName = "Keypad0"
"#;

#[test]
fn missing_file_is_no_profile() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = InputProfile::load(dir.path().join("absent.json")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn directory_is_no_profile() {
    let dir = tempfile::tempdir().unwrap();
    assert!(InputProfile::load(dir.path()).unwrap().is_none());
}

#[test]
fn loads_json_profile_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("player.json");
    fs::write(&path, PLAYER_JSON).unwrap();

    let profile = InputProfile::load(&path).unwrap().expect("profile exists");
    assert_eq!(profile.name(), "Player 1");
    assert_eq!(profile.index(), 0);

    let names: Vec<_> = profile.inputs().iter().map(|b| b.name()).collect();
    assert_eq!(names, ["Space", "ControlLeft", "Hat0", "InputBinding"]);
    assert_eq!(
        profile.inputs()[2].source(),
        InputSource::JoystickHat(JoystickHat::Hat0)
    );
    // unknown identifiers load, but do not validate
    assert_eq!(profile.inputs()[3].source(), InputSource::None);
    assert!(matches!(
        profile.validate(),
        Err(Error::SourcelessBinding { ref action }) if action == "Dash"
    ));
}

#[test]
fn loads_toml_profile_with_index() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("player.toml");
    fs::write(&path, PLAYER_TOML).unwrap();

    let mut profile = InputProfile::load(&path).unwrap().expect("profile exists");
    assert_eq!(profile.name(), "Player 2");
    assert_eq!(profile.index(), 1);

    let mut kb = VirtualKeyboard::new();
    kb.press(1, Key::Keypad0);
    assert_eq!(profile.get_state(&kb, "Jump").unwrap(), InputState::Down);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("broken.json");
    let toml = dir.path().join("broken.toml");
    fs::write(&json, "{ \"name\": ").unwrap();
    fs::write(&toml, "name = ").unwrap();

    assert!(matches!(InputProfile::load(&json), Err(Error::Json(_))));
    assert!(matches!(InputProfile::load(&toml), Err(Error::TomlDe(_))));
}

#[test]
fn saved_profile_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let profile = InputProfile::with_index(
        "saved",
        vec![
            InputBinding::key("Jump", Key::Space),
            InputBinding::joystick_hat("Look", JoystickHat::Hat1),
        ],
        3,
    );

    for file in ["saved.json", "saved.toml"] {
        let path = dir.path().join(file);
        profile.save(&path).unwrap();
        let back = InputProfile::load(&path).unwrap().expect("just saved");
        assert_eq!(back.name(), "saved");
        assert_eq!(back.index(), 3);
        assert_eq!(back.inputs(), profile.inputs());
    }
}

#[test]
fn save_into_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope").join("p.json");
    let profile = InputProfile::new("p", vec![]);
    assert!(matches!(profile.save(&path), Err(Error::Io { .. })));
}

#[test]
fn legacy_key_names_load_as_live_bindings() {
    let profile = InputProfile::from_json_str(
        r#"{
          "Name": "Legacy",
          "Inputs": [
            { "ActionName": "Crouch", "InputName": "LShift" },
            { "ActionName": "Confirm", "InputName": "KeypadEnter" },
            { "ActionName": "Zoom", "InputName": "KeypadAdd" },
            { "ActionName": "Pause", "InputName": "Pause" },
            { "ActionName": "Menu", "InputName": "WinLeft" },
            { "ActionName": "Macro", "InputName": "F13" },
            { "ActionName": "Erase", "InputName": "Back" }
          ]
        }"#,
    )
    .unwrap();
    assert!(profile.validate().is_ok());

    let names: Vec<_> = profile.inputs().iter().map(|b| b.name()).collect();
    assert_eq!(
        names,
        ["ShiftLeft", "KeypadEnter", "KeypadAdd", "Pause", "WinLeft", "F13", "BackSpace"]
    );

    let mut profile = profile;
    let mut kb = VirtualKeyboard::new();
    kb.press(0, Key::ShiftLeft);
    assert_eq!(profile.get_state(&kb, "Crouch").unwrap(), InputState::Down);
}
