use tui_textarea::Input;
use tui_textarea::Key;

use super::dismisses_alert;

fn key(key: Key) -> Input {
    return Input {
        key,
        ctrl: false,
        alt: false,
    };
}

#[test]
fn it_dismisses_alerts_on_key_presses() {
    assert!(dismisses_alert(&key(Key::Char('x'))));
    assert!(dismisses_alert(&key(Key::Enter)));
    assert!(dismisses_alert(&key(Key::Esc)));
}

#[test]
fn it_keeps_alerts_open_on_resize() {
    assert!(!dismisses_alert(&key(Key::Null)));
}
