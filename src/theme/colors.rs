//! Color constants and token mapping.
//!
//! Dark gradient aesthetic: deep blue-black backgrounds with cyan/violet
//! gradient accents. The catalog data carries utility-class color tokens
//! ("from-blue-500 to-blue-700", "bg-purple-600"); the helpers here turn
//! those tokens into concrete CSS values.

#![allow(dead_code)]

// === DARK (Backgrounds) ===
pub const DARK: &str = "#0a0a0e";
pub const DARK_100: &str = "#0d0d13";
pub const DARK_200: &str = "#12121a";
pub const DARK_300: &str = "#1a1a24";

// === BRAND ===
pub const PRIMARY: &str = "#0ea5e9";
pub const SECONDARY: &str = "#8b5cf6";
pub const ACCENT: &str = "#00aeef";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f5f5f7";
pub const TEXT_SECONDARY: &str = "rgba(245, 245, 247, 0.72)";
pub const TEXT_MUTED: &str = "rgba(245, 245, 247, 0.45)";

// === SEMANTIC ===
pub const SUCCESS: &str = "#16a34a";
pub const BORDER: &str = "rgba(120, 130, 150, 0.25)";

/// Hex value for a utility-class color name ("blue-500", "teal-700")
fn token_hex(name: &str) -> Option<&'static str> {
    let hex = match name {
        "blue-400" => "#60a5fa",
        "blue-500" => "#3b82f6",
        "blue-600" => "#2563eb",
        "blue-700" => "#1d4ed8",
        "purple-400" => "#c084fc",
        "purple-500" => "#a855f7",
        "purple-600" => "#9333ea",
        "purple-800" => "#6b21a8",
        "teal-400" => "#2dd4bf",
        "teal-500" => "#14b8a6",
        "teal-600" => "#0d9488",
        "teal-700" => "#0f766e",
        _ => return None,
    };
    Some(hex)
}

/// CSS linear-gradient for a category color token ("from-blue-500 to-blue-700").
///
/// Unknown tokens fall back to the brand gradient.
pub fn category_gradient(token: &str) -> String {
    let mut from = None;
    let mut to = None;
    for part in token.split_whitespace() {
        if let Some(name) = part.strip_prefix("from-") {
            from = token_hex(name);
        } else if let Some(name) = part.strip_prefix("to-") {
            to = token_hex(name);
        }
    }
    format!(
        "linear-gradient(135deg, {}, {})",
        from.unwrap_or(PRIMARY),
        to.unwrap_or(SECONDARY)
    )
}

/// Background color for a badge token ("bg-blue-600").
///
/// Unknown tokens fall back to the primary brand color.
pub fn badge_background(token: &str) -> &'static str {
    token
        .strip_prefix("bg-")
        .and_then(token_hex)
        .unwrap_or(PRIMARY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_gradient_resolves_known_tokens() {
        let css = category_gradient("from-blue-500 to-blue-700");
        assert!(css.contains("#3b82f6"));
        assert!(css.contains("#1d4ed8"));
    }

    #[test]
    fn test_category_gradient_falls_back_for_unknown_tokens() {
        let css = category_gradient("from-amber-500 to-rose-700");
        assert!(css.contains(PRIMARY));
        assert!(css.contains(SECONDARY));
    }

    #[test]
    fn test_badge_background() {
        assert_eq!(badge_background("bg-purple-600"), "#9333ea");
        assert_eq!(badge_background("bg-chartreuse-900"), PRIMARY);
    }
}
