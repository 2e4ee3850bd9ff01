// WebSocket-Protokoll-Definitionen
// Definiert die JSON-Nachrichten vom ESP32 an den Browser

use serde::Serialize;

use crate::{AirQualityUpdate, AqiCategory};

/// CSS-Klasse solange noch kein AQI vorliegt
pub const NO_DATA_CSS_CLASS: &str = "aqi-none";

/// Server → Client Nachrichten
/// Status-Updates und Fehler vom ESP32 an den Browser
///
/// Der Browser sendet selbst keine Kommandos, nur Ping/Close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum WsServerMessage {
    #[serde(rename = "status")]
    Status {
        sensor: &'static str,
        /// Anzeige-AQI (10 Minuten, sonst aktuell)
        aqi: Option<f32>,
        category: Option<AqiCategory>,
        label: &'static str,
        css_class: &'static str,
        pm1_0: u32,
        pm2_5: u32,
        pm10: u32,
        average_10min: Option<f32>,
        average_1hour: Option<f32>,
        average_24hour: Option<f32>,
        history_count: usize,
        uptime_secs: u64,
        timestamp_ms: u64,
    },
    #[serde(rename = "error")]
    Error { message: &'static str },
}

impl WsServerMessage {
    /// Status-Nachricht aus einem Messzyklus
    pub fn status(sensor: &'static str, update: &AirQualityUpdate, timestamp_ms: u64) -> Self {
        let summary = &update.summary;
        let category = update.display_category();

        WsServerMessage::Status {
            sensor,
            aqi: summary.display_aqi(),
            category,
            label: category.map_or("No data", AqiCategory::label),
            css_class: category.map_or(NO_DATA_CSS_CLASS, AqiCategory::css_class),
            pm1_0: update.reading.pm1_0,
            pm2_5: update.reading.pm2_5,
            pm10: update.reading.pm10,
            average_10min: summary.ten_minutes.average_pm2_5,
            average_1hour: summary.one_hour.average_pm2_5,
            average_24hour: summary.one_day.average_pm2_5,
            history_count: update.history_count,
            uptime_secs: update.uptime_secs,
            timestamp_ms,
        }
    }
}
