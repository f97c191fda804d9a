//! Theme field rules applied when an admin creates a theme.

use validator::ValidationError;

/// Maximum length of a theme name.
pub const MAX_THEME_NAME_LEN: u64 = 100;

/// Check that a display color is a `#RRGGBB` hex string.
pub fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("hex_color")
            .with_message("must be a #RRGGBB hex color".into()))
    }
}
