//! Integration Tests für die Status-LED
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockStatusLight

use aqm_core::{AqiCategory, StatusLight, StatusLightError, scale_brightness, status_color};
use rgb::RGB8;

// ============================================================================
// Mock Status Light
// ============================================================================

#[derive(Default)]
pub struct MockStatusLight {
    pub last_color: Option<RGB8>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl MockStatusLight {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatusLight for MockStatusLight {
    fn write(&mut self, color: RGB8) -> Result<(), StatusLightError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(StatusLightError::WriteFailed);
        }

        self.last_color = Some(color);
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Tests: MockStatusLight
// ============================================================================

#[test]
fn test_mock_status_light_write() {
    let mut mock = MockStatusLight::new();
    let color = RGB8 { r: 0, g: 10, b: 0 };

    assert_eq!(mock.write_count, 0);
    assert_eq!(mock.last_color, None);

    mock.write(color).unwrap();

    assert_eq!(mock.write_count, 1);
    assert_eq!(mock.last_color, Some(color));
}

#[test]
fn test_mock_status_light_recovers_after_fail() {
    let mut mock = MockStatusLight::new();
    mock.fail_next_write = true;

    // Erster Write schlägt fehl
    let result1 = mock.write(RGB8 { r: 10, g: 0, b: 0 });
    assert_eq!(result1, Err(StatusLightError::WriteFailed));
    assert_eq!(mock.last_color, None);

    // Zweiter Write klappt
    let result2 = mock.write(RGB8 { r: 0, g: 10, b: 0 });
    assert!(result2.is_ok());
    assert_eq!(mock.write_count, 1);
    assert_eq!(mock.last_color, Some(RGB8 { r: 0, g: 10, b: 0 }));
}

// ============================================================================
// Tests: status_color()
// ============================================================================

#[test]
fn test_status_color_per_category() {
    let cases = [
        (AqiCategory::Good, RGB8 { r: 0, g: 255, b: 0 }),
        (AqiCategory::Moderate, RGB8 { r: 255, g: 255, b: 0 }),
        (AqiCategory::UnhealthySensitive, RGB8 { r: 255, g: 128, b: 0 }),
        (AqiCategory::Unhealthy, RGB8 { r: 255, g: 0, b: 0 }),
        (AqiCategory::VeryUnhealthy, RGB8 { r: 127, g: 0, b: 255 }),
        (AqiCategory::Hazardous, RGB8 { r: 128, g: 0, b: 0 }),
    ];
    for (category, expected) in cases {
        assert_eq!(status_color(Some(category), 255), expected);
    }
}

#[test]
fn test_status_color_is_dimmed() {
    let color = status_color(Some(AqiCategory::Unhealthy), 10);
    assert_eq!(color, RGB8 { r: 10, g: 0, b: 0 });
    assert_eq!(color, scale_brightness(AqiCategory::Unhealthy.color(), 10));
}

#[test]
fn test_status_light_follows_category_changes() {
    let mut mock = MockStatusLight::new();

    for aqi in [20.0, 80.0, 320.0] {
        let color = status_color(Some(AqiCategory::from_aqi(aqi)), 10);
        mock.write(color).unwrap();
    }

    assert_eq!(mock.write_count, 3);
    assert_eq!(mock.last_color, Some(RGB8 { r: 5, g: 0, b: 0 }));
}

#[test]
fn test_status_light_off_without_data() {
    let mut mock = MockStatusLight::new();
    mock.write(status_color(None, 10)).unwrap();
    assert_eq!(mock.last_color, Some(RGB8::default()));
}
