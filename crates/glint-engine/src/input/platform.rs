use winit::keyboard::{KeyCode, PhysicalKey};

use super::Key;

/// Maps a winit physical key to the engine key model.
pub(crate) fn map_physical_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab => Key::Tab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Space => Key::Space,
            other => Key::Unknown(other as u32),
        },

        // Unidentified keys have no stable numeric code in winit 0.30.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_maps_to_escape() {
        assert_eq!(map_physical_key(PhysicalKey::Code(KeyCode::Escape)), Key::Escape);
    }

    #[test]
    fn unmapped_codes_preserve_identity() {
        let a = map_physical_key(PhysicalKey::Code(KeyCode::KeyA));
        let b = map_physical_key(PhysicalKey::Code(KeyCode::KeyB));
        assert_ne!(a, b);
        assert!(matches!(a, Key::Unknown(_)));
    }
}
