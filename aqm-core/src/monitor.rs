//! Luftqualitäts-Monitor
//!
//! Besitzt den aktuellen Messwert und den PM2.5-Verlauf. Wird einmal beim
//! Start erzeugt und per Referenz an den Sensor-Task übergeben, es gibt
//! keine globale Instanz.
//!
//! Kein interner Zustand wird von außen verändert: nur `poll()` bzw.
//! `ingest()` schreiben, alle anderen Methoden lesen.

use crate::aqi::{AqiCategory, aqi};
use crate::average::{AveragingWindow, average_pm2_5};
use crate::frame::{DecoderConfig, FrameError, RawFrame, decode_with};
use crate::history::HistoryBuffer;
use crate::reading::SensorReading;
use crate::receiver;
use crate::summary::{AirQualitySummary, WindowedAqi};
use crate::traits::ByteSource;

/// Decoder + Verlauf + Auswertung
///
/// `N` ist die Anzahl der Verlaufs-Slots (siehe `history_capacity`).
#[derive(Debug, Clone)]
pub struct AirQualityMonitor<const N: usize> {
    current: Option<SensorReading>,
    history: HistoryBuffer<N>,
    sampling_interval_secs: u32,
    config: DecoderConfig,
}

impl<const N: usize> AirQualityMonitor<N> {
    pub const fn new(sampling_interval_secs: u32, config: DecoderConfig) -> Self {
        Self {
            current: None,
            history: HistoryBuffer::new(),
            sampling_interval_secs,
            config,
        }
    }

    /// Liest und dekodiert ein Frame aus `source`
    ///
    /// Bei `InvalidFraming` werden alle anstehenden Bytes verworfen, damit
    /// sich der Empfang wieder auf den Sende-Zyklus des Sensors einphast.
    /// Bei Fehlern bleibt der bisherige Messwert unverändert.
    pub fn poll<S: ByteSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<SensorReading, FrameError> {
        let frame = receiver::receive(source)?;
        match self.ingest(&frame) {
            Err(err @ FrameError::InvalidFraming { .. }) => {
                receiver::drain(source);
                Err(err)
            }
            result => result,
        }
    }

    /// Dekodiert ein bereits empfangenes Frame und nimmt PM2.5 in den Verlauf auf
    pub fn ingest(&mut self, frame: &RawFrame) -> Result<SensorReading, FrameError> {
        let reading = decode_with(frame, self.config)?;
        self.current = Some(reading);
        self.history.push(reading.pm2_5);
        Ok(reading)
    }

    pub fn current_reading(&self) -> Option<&SensorReading> {
        self.current.as_ref()
    }

    /// PM2.5-Mittel über die letzten `window_secs` Sekunden
    ///
    /// `None` wenn noch kein Messwert vorliegt.
    pub fn average_pm2_5(&self, window_secs: u32) -> Option<f32> {
        average_pm2_5(&self.history, window_secs, self.sampling_interval_secs)
    }

    pub fn average_for(&self, window: AveragingWindow) -> Option<f32> {
        self.average_pm2_5(window.seconds(self.sampling_interval_secs))
    }

    pub fn aqi(&self, avg_pm2_5: f32) -> f32 {
        aqi(avg_pm2_5)
    }

    pub fn severity_category(&self, aqi: f32) -> AqiCategory {
        AqiCategory::from_aqi(aqi)
    }

    pub fn status_particle_detector(&self) -> Option<u8> {
        self.current.map(|r| r.status.particle_detector())
    }

    pub fn status_laser(&self) -> Option<u8> {
        self.current.map(|r| r.status.laser())
    }

    pub fn status_fan(&self) -> Option<u8> {
        self.current.map(|r| r.status.fan())
    }

    pub fn history_count(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &HistoryBuffer<N> {
        &self.history
    }

    pub fn sampling_interval_secs(&self) -> u32 {
        self.sampling_interval_secs
    }

    /// Mittelwerte und AQI für alle Standard-Fenster
    pub fn summary(&self) -> AirQualitySummary {
        let windowed = |window: AveragingWindow| WindowedAqi::from_average(self.average_for(window));
        AirQualitySummary {
            current: windowed(AveragingWindow::Current),
            ten_minutes: windowed(AveragingWindow::TenMinutes),
            one_hour: windowed(AveragingWindow::OneHour),
            one_day: windowed(AveragingWindow::OneDay),
        }
    }
}
