//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::aqi::AqiCategory;

/// Dimmt eine Farbe auf `brightness` (0-255)
///
/// WS2812 LEDs sind bei 0xFF sehr hell, daher wird die Kategorie-Farbe
/// vor dem Schreiben skaliert.
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use aqm_core::scale_brightness;
/// let dimmed = scale_brightness(RGB8 { r: 255, g: 128, b: 0 }, 10);
/// assert_eq!(dimmed, RGB8 { r: 10, g: 5, b: 0 });
/// ```
pub fn scale_brightness(color: RGB8, brightness: u8) -> RGB8 {
    let scale = |channel: u8| ((u16::from(channel) * u16::from(brightness) + 127) / 255) as u8;
    RGB8 {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}

/// Farbe der Status-LED für eine Kategorie
///
/// Ohne Kategorie (noch keine Messwerte) bleibt die LED aus.
pub fn status_color(category: Option<AqiCategory>, brightness: u8) -> RGB8 {
    match category {
        Some(category) => scale_brightness(category.color(), brightness),
        None => RGB8::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_full_brightness_is_identity() {
        let color = RGB8 { r: 0x7F, g: 0, b: 0xFF };
        assert_eq!(scale_brightness(color, 255), color);
    }

    #[test]
    fn test_scale_zero_brightness_is_off() {
        let color = RGB8 { r: 0xFF, g: 0xFF, b: 0xFF };
        assert_eq!(scale_brightness(color, 0), RGB8::default());
    }

    #[test]
    fn test_scale_keeps_hue_ratio() {
        let orange = RGB8 { r: 0xFF, g: 0x80, b: 0 };
        assert_eq!(scale_brightness(orange, 10), RGB8 { r: 10, g: 5, b: 0 });
    }

    #[test]
    fn test_status_color_without_data_is_off() {
        assert_eq!(status_color(None, 255), RGB8::default());
    }
}
