//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

/// Nicht-blockierende Byte-Quelle (z.B. UART RX)
///
/// # Implementierungen
/// - **Production:** UartByteSource (ESP32 UART1)
/// - **Testing:** MockByteSource (in-memory Queue)
pub trait ByteSource {
    /// Anzahl der sofort lesbaren Bytes
    fn available(&mut self) -> usize;

    /// Liest bis zu `buf.len()` Bytes ohne zu warten
    ///
    /// Gibt die Anzahl der tatsächlich gelesenen Bytes zurück (0 = nichts da).
    fn read(&mut self, buf: &mut [u8]) -> usize;
}

/// Fehler-Typ für Status-LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLightError {
    /// Peripheral konnte nicht konfiguriert werden
    InitFailed,
    WriteFailed,
}

/// Trait für die RGB Status-LED
///
/// # Implementierungen
/// - **Production:** RmtStatusLight (ESP32 RMT Peripheral, WS2812)
/// - **Testing:** MockStatusLight (in-memory Mock)
pub trait StatusLight: Send {
    /// Schreibt eine RGB-Farbe auf die LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `StatusLightError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), StatusLightError>;
}

/// Messwerte eines optionalen Umwelt-Sensors (Temperatur/Feuchte/Druck)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnvironmentReading {
    pub temperature_c: f32,
    pub humidity_percent: f32,
    pub pressure_hpa: f32,
}

/// Optionaler Zusatz-Sensor
///
/// Boards ohne Zusatz-Sensor nutzen `NoCoSensor`. Der Monitor selbst kennt
/// diesen Trait nicht, nur die Telemetrie der Anwendung.
pub trait CoSensor {
    fn read_environment(&mut self) -> Option<EnvironmentReading>;
}

/// Kein Zusatz-Sensor vorhanden
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCoSensor;

impl CoSensor for NoCoSensor {
    fn read_environment(&mut self) -> Option<EnvironmentReading> {
        None
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusLightError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            StatusLightError::InitFailed => defmt::write!(fmt, "InitFailed"),
            StatusLightError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
        }
    }
}
