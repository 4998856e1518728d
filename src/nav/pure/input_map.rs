// Input mapping from raw key events to NavInput

use evdev::KeyCode;

use crate::nav::types::{NavInput, RawKey};

// Linux input-event codes a TV remote reports through evdev
const CODE_UP: u16 = KeyCode::KEY_UP.0;
const CODE_DOWN: u16 = KeyCode::KEY_DOWN.0;
const CODE_LEFT: u16 = KeyCode::KEY_LEFT.0;
const CODE_RIGHT: u16 = KeyCode::KEY_RIGHT.0;
const CODE_ENTER: u16 = KeyCode::KEY_ENTER.0;
const CODE_KP_ENTER: u16 = KeyCode::KEY_KPENTER.0;
const CODE_SPACE: u16 = KeyCode::KEY_SPACE.0;
const CODE_OK: u16 = KeyCode::KEY_OK.0;
const CODE_SELECT: u16 = KeyCode::KEY_SELECT.0;
const CODE_ESC: u16 = KeyCode::KEY_ESC.0;
const CODE_BACKSPACE: u16 = KeyCode::KEY_BACKSPACE.0;
const CODE_BACK: u16 = KeyCode::KEY_BACK.0;

/// Map a symbolic key name to a navigation input.
///
/// Accepts DOM-style names (`ArrowUp`) and egui's short names (`Up`).
pub fn classify_name(name: &str) -> NavInput {
    match name {
        "ArrowUp" | "Up" => NavInput::Up,
        "ArrowDown" | "Down" => NavInput::Down,
        "ArrowLeft" | "Left" => NavInput::Left,
        "ArrowRight" | "Right" => NavInput::Right,
        "Enter" | "Space" | " " => NavInput::Select,
        "Escape" | "Backspace" => NavInput::Back,
        _ => NavInput::Unknown,
    }
}

/// Map a numeric key code to a navigation input
pub fn classify_code(code: u16) -> NavInput {
    match code {
        CODE_UP => NavInput::Up,
        CODE_DOWN => NavInput::Down,
        CODE_LEFT => NavInput::Left,
        CODE_RIGHT => NavInput::Right,
        CODE_ENTER | CODE_KP_ENTER | CODE_SPACE | CODE_OK | CODE_SELECT => NavInput::Select,
        CODE_ESC | CODE_BACKSPACE | CODE_BACK => NavInput::Back,
        _ => NavInput::Unknown,
    }
}

/// Classify a raw key through both recognition paths.
///
/// When the name and the code disagree, a recognized name wins.
pub fn classify(key: &RawKey) -> NavInput {
    let by_name = key.name.as_deref().map_or(NavInput::Unknown, classify_name);
    let by_code = key.code.map_or(NavInput::Unknown, classify_code);

    match (by_name, by_code) {
        (NavInput::Unknown, by_code) => by_code,
        (by_name, NavInput::Unknown) => by_name,
        (by_name, by_code) if by_name == by_code => by_name,
        (by_name, by_code) => {
            log::debug!(
                "nav: key name {:?} ({:?}) disagrees with code {:?} ({:?}), using name",
                key.name,
                by_name,
                key.code,
                by_code
            );
            by_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_names() {
        assert_eq!(classify(&RawKey::named("ArrowUp")), NavInput::Up);
        assert_eq!(classify(&RawKey::named("ArrowDown")), NavInput::Down);
        assert_eq!(classify(&RawKey::named("ArrowLeft")), NavInput::Left);
        assert_eq!(classify(&RawKey::named("ArrowRight")), NavInput::Right);
    }

    #[test]
    fn test_egui_short_names() {
        assert_eq!(classify(&RawKey::named("Up")), NavInput::Up);
        assert_eq!(classify(&RawKey::named("Down")), NavInput::Down);
        assert_eq!(classify(&RawKey::named("Left")), NavInput::Left);
        assert_eq!(classify(&RawKey::named("Right")), NavInput::Right);
    }

    #[test]
    fn test_select_and_back_names() {
        for name in ["Enter", "Space", " "] {
            assert_eq!(classify(&RawKey::named(name)), NavInput::Select, "{name}");
        }
        for name in ["Escape", "Backspace"] {
            assert_eq!(classify(&RawKey::named(name)), NavInput::Back, "{name}");
        }
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(classify(&RawKey::named("Tab")), NavInput::Unknown);
        assert_eq!(classify(&RawKey::named("a")), NavInput::Unknown);
        assert_eq!(classify(&RawKey::named("")), NavInput::Unknown);
    }

    #[test]
    fn test_remote_codes() {
        assert_eq!(classify(&RawKey::coded(103)), NavInput::Up);
        assert_eq!(classify(&RawKey::coded(108)), NavInput::Down);
        assert_eq!(classify(&RawKey::coded(105)), NavInput::Left);
        assert_eq!(classify(&RawKey::coded(106)), NavInput::Right);
        for code in [28, 96, 57, 352, 353] {
            assert_eq!(classify(&RawKey::coded(code)), NavInput::Select, "{code}");
        }
        for code in [1, 14, 158] {
            assert_eq!(classify(&RawKey::coded(code)), NavInput::Back, "{code}");
        }
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(classify(&RawKey::coded(0)), NavInput::Unknown);
        assert_eq!(classify(&RawKey::coded(30)), NavInput::Unknown); // KEY_A
        assert_eq!(classify(&RawKey::default()), NavInput::Unknown);
    }

    #[test]
    fn test_name_and_code_agree() {
        let key = RawKey::named("ArrowLeft").with_code(105);
        assert_eq!(classify(&key), NavInput::Left);
    }

    #[test]
    fn test_either_path_can_classify() {
        // Unrecognized name falls through to the code
        assert_eq!(classify(&RawKey::named("Unidentified").with_code(352)), NavInput::Select);
        // Unrecognized code falls through to the name
        assert_eq!(classify(&RawKey::named("Escape").with_code(999)), NavInput::Back);
    }

    #[test]
    fn test_conflict_prefers_name() {
        let key = RawKey::named("ArrowUp").with_code(108);
        assert_eq!(classify(&key), NavInput::Up);
    }
}
