use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Compute the new input field value after a key press.
///
/// Returns `None` when the key does not edit the field. The session decides
/// what the field ends up holding, so callers re-read `current_input` after
/// submitting the returned text.
pub fn edit_field(field: &str, key: &KeyEvent) -> Option<String> {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(String::new()),
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let trimmed = field.trim_end();
            let cut = trimmed.rfind(' ').map(|i| i + 1).unwrap_or(0);
            Some(trimmed[..cut].to_string())
        }
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
        KeyCode::Char(c) => {
            let mut next = field.to_string();
            next.push(c);
            Some(next)
        }
        KeyCode::Backspace => {
            let mut next = field.to_string();
            next.pop();
            Some(next)
        }
        _ => None,
    }
}
