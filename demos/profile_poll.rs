use inputprofile::backends::system_keyboard;
use inputprofile::{InputProfile, InputState};
use std::collections::BTreeSet;

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/profiles/player.json".to_string());

    let mut profile = match InputProfile::load(&path) {
        Ok(Some(p)) => p,
        Ok(None) => {
            eprintln!("no profile at {path}");
            return;
        }
        Err(e) => {
            eprintln!("failed to load {path}: {e}");
            return;
        }
    };

    if let Err(e) = profile.validate() {
        eprintln!("warning: {e}");
    }

    println!("Profile `{}` (device {}):", profile.name(), profile.index());
    for b in profile.inputs() {
        println!("- {} -> {}", b.action_name(), b);
    }

    let actions: BTreeSet<String> = profile
        .inputs()
        .iter()
        .map(|b| b.action_name().to_string())
        .collect();
    let keyboard = system_keyboard();

    loop {
        for action in &actions {
            match profile.get_state(keyboard.as_ref(), action) {
                Ok(InputState::Up) => {}
                Ok(state) => println!("{action}: {state:?}"),
                Err(e) => {
                    eprintln!("{action}: {e}");
                    return;
                }
            }
        }
        // Sleep a touch to avoid pegging the CPU in the demo
        std::thread::sleep(std::time::Duration::from_millis(16));
    }
}
