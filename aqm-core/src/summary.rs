//! Zusammenfassung eines Messzyklus
//!
//! Wird vom Sensor-Task einmal pro Zyklus berechnet und über den
//! PubSub-Channel an Web, MQTT und Status-LED verteilt.

use crate::aqi::{AqiCategory, aqi};
use crate::average::AveragingWindow;
use crate::reading::SensorReading;
use crate::traits::EnvironmentReading;

/// Mittelwert und AQI für ein Zeitfenster
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowedAqi {
    /// `None` solange kein Messwert im Fenster liegt
    pub average_pm2_5: Option<f32>,
    pub aqi: Option<f32>,
}

impl WindowedAqi {
    pub fn from_average(average_pm2_5: Option<f32>) -> Self {
        Self {
            average_pm2_5,
            aqi: average_pm2_5.map(aqi),
        }
    }

    pub fn category(&self) -> Option<AqiCategory> {
        self.aqi.map(AqiCategory::from_aqi)
    }
}

/// Die vier Standard-Fenster
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AirQualitySummary {
    pub current: WindowedAqi,
    pub ten_minutes: WindowedAqi,
    pub one_hour: WindowedAqi,
    pub one_day: WindowedAqi,
}

impl AirQualitySummary {
    pub fn window(&self, window: AveragingWindow) -> &WindowedAqi {
        match window {
            AveragingWindow::Current => &self.current,
            AveragingWindow::TenMinutes => &self.ten_minutes,
            AveragingWindow::OneHour => &self.one_hour,
            AveragingWindow::OneDay => &self.one_day,
        }
    }

    /// AQI für Anzeige und Status-LED
    ///
    /// 10-Minuten-Wert, sonst der aktuelle Wert.
    pub fn display_aqi(&self) -> Option<f32> {
        self.ten_minutes.aqi.or(self.current.aqi)
    }

    pub fn display_category(&self) -> Option<AqiCategory> {
        self.display_aqi().map(AqiCategory::from_aqi)
    }
}

/// Nachricht des Sensor-Tasks nach einem erfolgreichen Decode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirQualityUpdate {
    pub reading: SensorReading,
    pub summary: AirQualitySummary,
    pub history_count: usize,
    pub uptime_secs: u64,
    pub environment: Option<EnvironmentReading>,
}

impl AirQualityUpdate {
    pub fn display_category(&self) -> Option<AqiCategory> {
        self.summary.display_category()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AirQualityUpdate {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "AirQualityUpdate {{ pm2.5: {}, aqi: {}, history: {}, uptime: {}s }}",
            self.reading.pm2_5,
            self.summary.display_aqi(),
            self.history_count,
            self.uptime_secs
        )
    }
}
