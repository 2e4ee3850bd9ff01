// Status-LED über RMT (WS2812/Neopixel)
//
// Implementiert aqm_core::StatusLight für die Onboard-LED des ESP32-C6.

use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use crate::{StatusLight, StatusLightError};

// Buffer-Größe für 1 LED (3 Farben * 8 Bits + 1 Reset)
pub const LED_BUFFER_SIZE: usize = 25;

/// WS2812 Status-LED am RMT Kanal 0
///
/// Der Puffer muss länger leben als der Writer, daher wird er im Task
/// erstellt und hier nur geliehen.
pub struct RmtStatusLight<'a> {
    led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
}

impl<'a> RmtStatusLight<'a> {
    /// Initialisiert RMT und den SmartLED Adapter
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(1) Macro)
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; LED_BUFFER_SIZE],
    ) -> Result<Self, StatusLightError> {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| StatusLightError::InitFailed)?;

        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Ok(Self { led })
    }
}

impl StatusLight for RmtStatusLight<'_> {
    fn write(&mut self, color: RGB8) -> Result<(), StatusLightError> {
        self.led
            .write([color].into_iter())
            .map_err(|_| StatusLightError::WriteFailed)
    }
}
