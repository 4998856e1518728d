// Remote device classification (pure functions)

use evdev::KeyCode;

const DIRECTIONAL: [KeyCode; 4] = [KeyCode::KEY_UP, KeyCode::KEY_DOWN, KeyCode::KEY_LEFT, KeyCode::KEY_RIGHT];
const CONFIRM: [KeyCode; 3] = [KeyCode::KEY_OK, KeyCode::KEY_SELECT, KeyCode::KEY_ENTER];
const TYPING: [KeyCode; 3] = [KeyCode::KEY_Q, KeyCode::KEY_A, KeyCode::KEY_Z];

/// Check whether a device with the given key set behaves like a TV remote.
///
/// Remotes report a full D-pad plus an OK/Enter key. Full keyboards are
/// excluded: their arrow keys already arrive through the window system.
pub fn is_remote_like(has_key: impl Fn(KeyCode) -> bool) -> bool {
    let directional = DIRECTIONAL.iter().all(|key| has_key(*key));
    let confirm = CONFIRM.iter().any(|key| has_key(*key));
    let typing = TYPING.iter().all(|key| has_key(*key));
    directional && confirm && !typing
}
