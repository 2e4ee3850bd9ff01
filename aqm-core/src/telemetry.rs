//! JSON-Telemetrie (nur mit Feature `serde`)
//!
//! Aufbau entspricht dem Upload-Format des Geräts, damit bestehende
//! Empfänger unverändert weiterlaufen. Serialisierung z.B. mit
//! `serde_json_core::to_slice`.

use serde::Serialize;

use crate::summary::AirQualityUpdate;
use crate::traits::EnvironmentReading;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TelemetryPayload<'a> {
    pub sensor_id: &'a str,
    pub uptime: u64,
    pub timestamp_ms: u64,
    pub mass_density: MassDensity,
    pub particle_count: ParticleCount,
    pub sensor_status: StatusFields,
    pub air_quality_index: AirQualityIndex,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<EnvironmentReading>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MassDensity {
    pub pm1p0: u32,
    pub pm2p5: u32,
    pub pm10: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParticleCount {
    #[serde(rename = "0p5um")]
    pub um0p5: u16,
    #[serde(rename = "1p0um")]
    pub um1p0: u16,
    #[serde(rename = "2p5um")]
    pub um2p5: u16,
    #[serde(rename = "5p0um")]
    pub um5p0: u16,
    #[serde(rename = "7p5um")]
    pub um7p5: u16,
    #[serde(rename = "10um")]
    pub um10: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusFields {
    // Schreibweise wie im bestehenden Upload-Format
    #[serde(rename = "partical_detector")]
    pub particle_detector: u8,
    pub laser: u8,
    pub fan: u8,
}

/// `null` für Fenster ohne Messwerte
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AirQualityIndex {
    pub average_pm2p5_current: Option<f32>,
    pub average_pm2p5_10min: Option<f32>,
    pub average_pm2p5_1hour: Option<f32>,
    pub average_pm2p5_24hour: Option<f32>,
    pub aqi_current: Option<f32>,
    pub aqi_10min: Option<f32>,
    pub aqi_1hour: Option<f32>,
    pub aqi_24hour: Option<f32>,
}

impl<'a> TelemetryPayload<'a> {
    pub fn new(sensor_id: &'a str, update: &AirQualityUpdate, timestamp_ms: u64) -> Self {
        let reading = &update.reading;
        let summary = &update.summary;
        Self {
            sensor_id,
            uptime: update.uptime_secs,
            timestamp_ms,
            mass_density: MassDensity {
                pm1p0: reading.pm1_0,
                pm2p5: reading.pm2_5,
                pm10: reading.pm10,
            },
            particle_count: ParticleCount {
                um0p5: reading.count_0_5um,
                um1p0: reading.count_1_0um,
                um2p5: reading.count_2_5um,
                um5p0: reading.count_5_0um,
                um7p5: reading.count_7_5um,
                um10: reading.count_10um,
            },
            sensor_status: StatusFields {
                particle_detector: reading.status.particle_detector(),
                laser: reading.status.laser(),
                fan: reading.status.fan(),
            },
            air_quality_index: AirQualityIndex {
                average_pm2p5_current: summary.current.average_pm2_5,
                average_pm2p5_10min: summary.ten_minutes.average_pm2_5,
                average_pm2p5_1hour: summary.one_hour.average_pm2_5,
                average_pm2p5_24hour: summary.one_day.average_pm2_5,
                aqi_current: summary.current.aqi,
                aqi_10min: summary.ten_minutes.aqi,
                aqi_1hour: summary.one_hour.aqi,
                aqi_24hour: summary.one_day.aqi,
            },
            environment: update.environment,
        }
    }
}
