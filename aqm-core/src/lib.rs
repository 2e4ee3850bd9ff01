//! AQM Core - Sensor-Protokoll und Luftqualitäts-Statistik
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Decoder für den Panasonic SN-GCJA5 (UART), PM2.5-Verlauf,
//! gleitende Mittelwerte und AQI-Berechnung.

#![cfg_attr(not(test), no_std)]

pub mod aqi;
pub mod average;
pub mod frame;
pub mod history;
pub mod logic;
pub mod monitor;
pub mod reading;
pub mod receiver;
pub mod summary;
#[cfg(feature = "serde")]
pub mod telemetry;
pub mod traits;

// Re-exports für einfachen Zugriff
pub use aqi::{AQI_BREAKPOINTS, AqiBreakpoint, AqiCategory, aqi};
pub use average::{AveragingWindow, average_pm2_5};
pub use frame::{DecoderConfig, FRAME_LEN, FrameError, RawFrame, decode, decode_with};
pub use history::{HistoryBuffer, history_capacity};
pub use logic::{scale_brightness, status_color};
pub use monitor::AirQualityMonitor;
pub use reading::{SensorReading, SensorStatus};
pub use summary::{AirQualitySummary, AirQualityUpdate, WindowedAqi};
#[cfg(feature = "serde")]
pub use telemetry::TelemetryPayload;
pub use traits::{ByteSource, CoSensor, EnvironmentReading, NoCoSensor, StatusLight, StatusLightError};
