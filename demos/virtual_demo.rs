use inputprofile::backends::virtual_input::VirtualKeyboard;
use inputprofile::{InputBinding, InputProfile, InputState, Key};

fn main() {
    env_logger::init();

    let mut profile = InputProfile::new(
        "Demo",
        vec![
            InputBinding::key("Jump", Key::Space),
            InputBinding::from_names("Fire", "ControlLeft"),
            InputBinding::from_names("Dash", "Shift"), // not a key name; never fires
        ],
    );
    let mut kb = VirtualKeyboard::new();

    // One entry per frame: (Space held, ControlLeft held)
    let script = [
        (false, false),
        (true, false),
        (true, true),
        (false, true),
        (false, false),
        (false, false),
    ];

    for (frame, (space, ctrl)) in script.into_iter().enumerate() {
        kb.set(0, Key::Space, space);
        kb.set(0, Key::ControlLeft, ctrl);

        for action in ["Jump", "Fire", "Dash"] {
            match profile.get_state(&kb, action) {
                Ok(InputState::Up) => {}
                Ok(state) => println!("frame {frame}: {action} {state:?}"),
                Err(e) => eprintln!("frame {frame}: {action}: {e}"),
            }
        }
    }
}
