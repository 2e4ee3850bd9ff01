//! Dekodierte Sensor-Messwerte
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Status-Byte des Sensors (Offset 29)
///
/// Drei gepackte 2-Bit-Felder:
/// - Bits 5–4: Partikel-Detektor
/// - Bits 3–2: Laser
/// - Bits 1–0: Lüfter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SensorStatus(u8);

impl SensorStatus {
    pub const DETECTOR_MASK: u8 = 0x30;
    pub const LASER_MASK: u8 = 0x0C;
    pub const FAN_MASK: u8 = 0x03;

    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn particle_detector(self) -> u8 {
        (self.0 & Self::DETECTOR_MASK) >> 4
    }

    pub const fn laser(self) -> u8 {
        (self.0 & Self::LASER_MASK) >> 2
    }

    pub const fn fan(self) -> u8 {
        self.0 & Self::FAN_MASK
    }
}

/// Eine dekodierte Messung
///
/// Wird bei jedem erfolgreichen Decode neu erzeugt und danach nicht mehr
/// verändert. Massendichten in µg/m³, unskaliert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SensorReading {
    pub pm1_0: u32,
    pub pm2_5: u32,
    pub pm10: u32,
    /// Partikel ≥ 0.5 µm
    pub count_0_5um: u16,
    /// Partikel ≥ 1.0 µm
    pub count_1_0um: u16,
    /// Partikel ≥ 2.5 µm
    pub count_2_5um: u16,
    /// Partikel ≥ 5.0 µm
    pub count_5_0um: u16,
    /// Partikel ≥ 7.5 µm
    pub count_7_5um: u16,
    /// Partikel ≥ 10 µm
    pub count_10um: u16,
    pub status: SensorStatus,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for SensorStatus {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "SensorStatus {{ detector: {}, laser: {}, fan: {} }}",
            self.particle_detector(),
            self.laser(),
            self.fan()
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorReading {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "SensorReading {{ pm1.0: {}, pm2.5: {}, pm10: {}, {} }}",
            self.pm1_0,
            self.pm2_5,
            self.pm10,
            self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bit_splitting() {
        // 0b0010_0111: Detektor=2, Laser=1, Lüfter=3
        let status = SensorStatus::new(0x27);
        assert_eq!(status.particle_detector(), 2);
        assert_eq!(status.laser(), 1);
        assert_eq!(status.fan(), 3);
    }

    #[test]
    fn test_status_ignores_upper_bits() {
        let status = SensorStatus::new(0xC0);
        assert_eq!(status.particle_detector(), 0);
        assert_eq!(status.laser(), 0);
        assert_eq!(status.fan(), 0);
        assert_eq!(status.raw(), 0xC0);
    }
}
