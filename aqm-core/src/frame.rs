//! UART-Frame des Panasonic SN-GCJA5
//!
//! Der Sensor sendet jede Sekunde ein 32-Byte-Frame (9600 Baud, 8E1).
//! Alle Mehrbyte-Felder sind Little-Endian.
//!
//! ```text
//! Offset  Breite  Feld
//!  0      1       STX (0x02)
//!  1..=4  4       PM1.0 Massendichte
//!  5..=8  4       PM2.5 Massendichte
//!  9..=12 4       PM10  Massendichte
//! 13..=18 2+2+2   Partikelzahl 0.5 / 1.0 / 2.5 µm
//! 21..=26 2+2+2   Partikelzahl 5.0 / 7.5 / 10 µm
//! 29      1       Status-Byte
//! 30      1       FCC (XOR über 1..=29)
//! 31      1       ETX (0x03)
//! ```
//!
//! Über UART sind die Massendichten NICHT mit 1000 skaliert (anders als
//! beim I2C-Interface derselben Sensorfamilie). Obwohl 4 Bytes übertragen
//! werden, ist der Wertebereich faktisch 16 Bit.

use core::fmt;

use crate::reading::{SensorReading, SensorStatus};

/// Länge eines Frames in Bytes
pub const FRAME_LEN: usize = 32;

/// Start-Marker (STX)
pub const START_MARKER: u8 = 0x02;

/// Stop-Marker (ETX)
pub const STOP_MARKER: u8 = 0x03;

/// Offset des Status-Bytes
pub const STATUS_OFFSET: usize = 29;

/// Offset der Frame-Check-Summe
pub const CHECKSUM_OFFSET: usize = 30;

/// Ein vollständig empfangenes, noch nicht validiertes Frame
pub type RawFrame = [u8; FRAME_LEN];

/// Fehler beim Empfangen oder Dekodieren eines Frames
///
/// Kein Fehler ist fatal: der Aufrufer versucht es im nächsten Zyklus erneut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// Weniger als `FRAME_LEN` Bytes verfügbar, nichts wurde gelesen
    IncompleteFrame { available: usize },
    /// Start- oder Stop-Marker fehlt, Byte-Ausrichtung ist verrutscht
    InvalidFraming { start: u8, stop: u8 },
    /// Prüfsumme stimmt nicht (nur mit `DecoderConfig::verify_checksum`)
    ChecksumMismatch { expected: u8, actual: u8 },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::IncompleteFrame { available } => {
                write!(f, "incomplete frame: {available} of {FRAME_LEN} bytes available")
            }
            FrameError::InvalidFraming { start, stop } => {
                write!(f, "invalid framing: start=0x{start:02X}, stop=0x{stop:02X}")
            }
            FrameError::ChecksumMismatch { expected, actual } => {
                write!(f, "checksum mismatch: expected 0x{expected:02X}, got 0x{actual:02X}")
            }
        }
    }
}

/// Decoder-Optionen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecoderConfig {
    /// FCC-Byte prüfen. Standard: aus, korrekt gerahmte Frames werden
    /// ungeprüft übernommen.
    pub verify_checksum: bool,
}

impl DecoderConfig {
    pub const DEFAULT: Self = Self {
        verify_checksum: false,
    };
}

/// XOR über die Nutzdaten (Bytes 1..=29)
pub fn checksum(frame: &RawFrame) -> u8 {
    frame[1..CHECKSUM_OFFSET].iter().fold(0, |acc, byte| acc ^ byte)
}

/// Dekodiert ein Frame mit Standard-Optionen
pub fn decode(frame: &RawFrame) -> Result<SensorReading, FrameError> {
    decode_with(frame, DecoderConfig::DEFAULT)
}

/// Dekodiert ein Frame
///
/// # Fehlerbehandlung
/// - `InvalidFraming` wenn Byte 0 != `0x02` oder Byte 31 != `0x03`
/// - `ChecksumMismatch` nur wenn `config.verify_checksum` gesetzt ist
pub fn decode_with(frame: &RawFrame, config: DecoderConfig) -> Result<SensorReading, FrameError> {
    let start = frame[0];
    let stop = frame[FRAME_LEN - 1];
    if start != START_MARKER || stop != STOP_MARKER {
        return Err(FrameError::InvalidFraming { start, stop });
    }

    if config.verify_checksum {
        let expected = checksum(frame);
        let actual = frame[CHECKSUM_OFFSET];
        if expected != actual {
            return Err(FrameError::ChecksumMismatch { expected, actual });
        }
    }

    Ok(SensorReading {
        pm1_0: read_u32(frame, 1),
        pm2_5: read_u32(frame, 5),
        pm10: read_u32(frame, 9),
        count_0_5um: read_u16(frame, 13),
        count_1_0um: read_u16(frame, 15),
        count_2_5um: read_u16(frame, 17),
        count_5_0um: read_u16(frame, 21),
        count_7_5um: read_u16(frame, 23),
        count_10um: read_u16(frame, 25),
        status: SensorStatus::new(frame[STATUS_OFFSET]),
    })
}

fn read_u32(frame: &RawFrame, offset: usize) -> u32 {
    u32::from_le_bytes([
        frame[offset],
        frame[offset + 1],
        frame[offset + 2],
        frame[offset + 3],
    ])
}

fn read_u16(frame: &RawFrame, offset: usize) -> u16 {
    u16::from_le_bytes([frame[offset], frame[offset + 1]])
}

#[cfg(feature = "defmt")]
impl defmt::Format for FrameError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            FrameError::IncompleteFrame { available } => {
                defmt::write!(fmt, "IncompleteFrame {{ available: {} }}", available)
            }
            FrameError::InvalidFraming { start, stop } => {
                defmt::write!(
                    fmt,
                    "InvalidFraming {{ start: {=u8:#x}, stop: {=u8:#x} }}",
                    start,
                    stop
                )
            }
            FrameError::ChecksumMismatch { expected, actual } => {
                defmt::write!(
                    fmt,
                    "ChecksumMismatch {{ expected: {=u8:#x}, actual: {=u8:#x} }}",
                    expected,
                    actual
                )
            }
        }
    }
}
