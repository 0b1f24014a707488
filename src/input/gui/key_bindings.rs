use winit::keyboard::KeyCode;

use crate::input::keyboard::ExplorerKey;

#[must_use]
pub fn explorer_key(key_code: KeyCode) -> Option<ExplorerKey> {
    match key_code {
        KeyCode::ArrowUp => Some(ExplorerKey::Up),
        KeyCode::ArrowDown => Some(ExplorerKey::Down),
        KeyCode::ArrowLeft => Some(ExplorerKey::Left),
        KeyCode::ArrowRight => Some(ExplorerKey::Right),
        KeyCode::KeyI => Some(ExplorerKey::ZoomIn),
        KeyCode::KeyO => Some(ExplorerKey::ZoomOut),
        KeyCode::KeyR => Some(ExplorerKey::Reset),
        KeyCode::Escape => Some(ExplorerKey::Exit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_letters_are_bound() {
        assert_eq!(explorer_key(KeyCode::ArrowUp), Some(ExplorerKey::Up));
        assert_eq!(explorer_key(KeyCode::KeyO), Some(ExplorerKey::ZoomOut));
        assert_eq!(explorer_key(KeyCode::Escape), Some(ExplorerKey::Exit));
        assert_eq!(explorer_key(KeyCode::KeyW), None);
    }
}
