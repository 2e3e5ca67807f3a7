use sdl2::{event::Event, keyboard::Keycode};

// COSMAC VIP hex keypad laid over the left side of a QWERTY keyboard:
//   1 2 3 C      1 2 3 4
//   4 5 6 D  <=  Q W E R
//   7 8 9 E      A S D F
//   A 0 B F      Z X C V
const KEYPAD: [(Keycode, u8); 16] = [
    (Keycode::Num1, 0x1),
    (Keycode::Num2, 0x2),
    (Keycode::Num3, 0x3),
    (Keycode::Num4, 0xC),
    (Keycode::Q, 0x4),
    (Keycode::W, 0x5),
    (Keycode::E, 0x6),
    (Keycode::R, 0xD),
    (Keycode::A, 0x7),
    (Keycode::S, 0x8),
    (Keycode::D, 0x9),
    (Keycode::F, 0xE),
    (Keycode::Z, 0xA),
    (Keycode::X, 0x0),
    (Keycode::C, 0xB),
    (Keycode::V, 0xF),
];

/// Actions to be executed by the application
pub enum Action {
    KeyState(u8, bool),
    TogglePause,
    Quit,
}

fn keypad_index(code: Keycode) -> Option<u8> {
    KEYPAD
        .iter()
        .find(|(k, _)| *k == code)
        .map(|(_, index)| *index)
}

/// Translate an SDL2 event into an action to be executed by the app
pub fn translate_action(event: &Event) -> Option<Action> {
    match event {
        Event::Quit { .. } => Some(Action::Quit),
        Event::KeyDown {
            keycode: Some(Keycode::Escape),
            ..
        } => Some(Action::Quit),
        Event::KeyDown {
            keycode: Some(Keycode::Space),
            repeat: false,
            ..
        } => Some(Action::TogglePause),
        Event::KeyDown {
            keycode: Some(code),
            ..
        } => keypad_index(*code).map(|key| Action::KeyState(key, true)),
        Event::KeyUp {
            keycode: Some(code),
            ..
        } => keypad_index(*code).map(|key| Action::KeyState(key, false)),
        _ => None,
    }
}
