//! PM2.5 → Air Quality Index (EPA, Stand 2012)
//!
//! Stückweise lineare Interpolation über die Breakpoint-Tabelle.
//! Oberhalb von 350.4 µg/m³ wird mit der Steigung 350.4→500 µg/m³ /
//! 400→500 AQI weiter extrapoliert statt bei 500 zu kappen.

use rgb::RGB8;

/// Ein Breakpoint-Segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AqiBreakpoint {
    pub low_concentration: f32,
    pub high_concentration: f32,
    pub low_index: f32,
    pub high_index: f32,
}

impl AqiBreakpoint {
    const fn new(low_c: f32, high_c: f32, low_i: f32, high_i: f32) -> Self {
        Self {
            low_concentration: low_c,
            high_concentration: high_c,
            low_index: low_i,
            high_index: high_i,
        }
    }

    fn interpolate(&self, concentration: f32) -> f32 {
        self.low_index
            + (self.high_index - self.low_index) * (concentration - self.low_concentration)
                / (self.high_concentration - self.low_concentration)
    }
}

/// EPA PM2.5 Breakpoints (µg/m³ → AQI)
pub const AQI_BREAKPOINTS: [AqiBreakpoint; 6] = [
    AqiBreakpoint::new(0.0, 12.0, 0.0, 50.0),
    AqiBreakpoint::new(12.0, 35.4, 50.0, 100.0),
    AqiBreakpoint::new(35.4, 55.4, 100.0, 150.0),
    AqiBreakpoint::new(55.4, 150.4, 150.0, 200.0),
    AqiBreakpoint::new(150.4, 250.4, 200.0, 300.0),
    AqiBreakpoint::new(250.4, 350.4, 300.0, 400.0),
];

/// Segment für Konzentrationen über der Tabelle, ohne Obergrenze
pub const AQI_EXTRAPOLATION: AqiBreakpoint = AqiBreakpoint::new(350.4, 500.0, 400.0, 500.0);

/// Berechnet den AQI für eine (gemittelte) PM2.5-Konzentration
///
/// Werte unter 0 landen im ersten Segment und ergeben einen negativen Index.
///
/// ```
/// use aqm_core::aqi;
/// assert!((aqi(12.0) - 50.0).abs() < 1e-3);
/// assert!(aqi(600.0) > 500.0);
/// ```
pub fn aqi(avg_pm2_5: f32) -> f32 {
    let segment = AQI_BREAKPOINTS
        .iter()
        .find(|bp| avg_pm2_5 <= bp.high_concentration)
        .unwrap_or(&AQI_EXTRAPOLATION);
    segment.interpolate(avg_pm2_5)
}

/// Grobe Einstufung des AQI
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    /// Kategorie nach den Grenzen 50/100/150/200/300 (jeweils inklusive)
    pub fn from_aqi(aqi: f32) -> Self {
        if aqi <= 50.0 {
            AqiCategory::Good
        } else if aqi <= 100.0 {
            AqiCategory::Moderate
        } else if aqi <= 150.0 {
            AqiCategory::UnhealthySensitive
        } else if aqi <= 200.0 {
            AqiCategory::Unhealthy
        } else if aqi <= 300.0 {
            AqiCategory::VeryUnhealthy
        } else {
            AqiCategory::Hazardous
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// CSS-Klasse der Web-Oberfläche
    pub fn css_class(self) -> &'static str {
        match self {
            AqiCategory::Good => "aqi-green",
            AqiCategory::Moderate => "aqi-yellow",
            AqiCategory::UnhealthySensitive => "aqi-orange",
            AqiCategory::Unhealthy => "aqi-red",
            AqiCategory::VeryUnhealthy => "aqi-purple",
            AqiCategory::Hazardous => "aqi-maroon",
        }
    }

    /// EPA-Farbe in voller Helligkeit
    pub fn color(self) -> RGB8 {
        match self {
            AqiCategory::Good => RGB8::new(0x00, 0xFF, 0x00),
            AqiCategory::Moderate => RGB8::new(0xFF, 0xFF, 0x00),
            AqiCategory::UnhealthySensitive => RGB8::new(0xFF, 0x80, 0x00),
            AqiCategory::Unhealthy => RGB8::new(0xFF, 0x00, 0x00),
            AqiCategory::VeryUnhealthy => RGB8::new(0x7F, 0x00, 0xFF),
            AqiCategory::Hazardous => RGB8::new(0x80, 0x00, 0x00),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AqiCategory {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_aqi_breakpoints() {
        assert_close(aqi(0.0), 0.0);
        assert_close(aqi(12.0), 50.0);
        assert_close(aqi(35.4), 100.0);
        assert_close(aqi(55.4), 150.0);
        assert_close(aqi(150.4), 200.0);
        assert_close(aqi(250.4), 300.0);
        assert_close(aqi(350.4), 400.0);
        assert_close(aqi(500.0), 500.0);
    }

    #[test]
    fn test_aqi_interpolates_inside_segment() {
        assert_close(aqi(6.0), 25.0);
        assert_close(aqi(45.4), 125.0);
    }

    #[test]
    fn test_aqi_extrapolates_above_table() {
        let at_600 = aqi(600.0);
        assert!(at_600 > 500.0);
        assert!(aqi(700.0) > at_600);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(AqiCategory::from_aqi(0.0), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(50.0), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(50.1), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_aqi(100.0), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_aqi(150.0), AqiCategory::UnhealthySensitive);
        assert_eq!(AqiCategory::from_aqi(200.0), AqiCategory::Unhealthy);
        assert_eq!(AqiCategory::from_aqi(300.0), AqiCategory::VeryUnhealthy);
        assert_eq!(AqiCategory::from_aqi(300.1), AqiCategory::Hazardous);
    }

    #[test]
    fn test_category_colors() {
        assert_eq!(AqiCategory::Good.color(), RGB8::new(0, 0xFF, 0));
        assert_eq!(AqiCategory::Hazardous.css_class(), "aqi-maroon");
    }
}
