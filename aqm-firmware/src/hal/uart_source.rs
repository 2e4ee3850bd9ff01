// UART Byte-Quelle für den SN-GCJA5
//
// Der Sensor sendet nur (TX → unser RX), ein TX-Pin wird nicht benötigt.
// Bytes aus dem Hardware-FIFO werden in eine Queue übernommen, damit
// `available()` eine exakte Anzahl liefern kann.

use defmt::warn;
use esp_hal::Blocking;
use esp_hal::gpio::interconnect::PeripheralInput;
use esp_hal::uart::{Config, DataBits, Parity, StopBits, Uart};
use heapless::Deque;

use crate::ByteSource;
use crate::config::{SENSOR_BAUDRATE, UART_PENDING_BUFFER_SIZE};

/// Fehler beim Einrichten der UART
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum UartSetupError {
    InvalidConfig,
}

/// Nicht-blockierende `ByteSource` über UART1
pub struct UartByteSource<'d> {
    uart: Uart<'d, Blocking>,
    pending: Deque<u8, UART_PENDING_BUFFER_SIZE>,
    rx_errors: u32,
}

impl<'d> UartByteSource<'d> {
    /// UART mit 9600 Baud, 8E1 (laut Datenblatt)
    pub fn new(
        uart: esp_hal::peripherals::UART1<'d>,
        rx: impl PeripheralInput<'d>,
    ) -> Result<Self, UartSetupError> {
        let config = Config::default()
            .with_baudrate(SENSOR_BAUDRATE)
            .with_data_bits(DataBits::_8)
            .with_parity(Parity::Even)
            .with_stop_bits(StopBits::_1);

        let uart = Uart::new(uart, config)
            .map_err(|_| UartSetupError::InvalidConfig)?
            .with_rx(rx);

        Ok(Self {
            uart,
            pending: Deque::new(),
            rx_errors: 0,
        })
    }

    /// Anzahl der bisherigen Empfangsfehler (Parity, FIFO-Overflow)
    pub fn rx_errors(&self) -> u32 {
        self.rx_errors
    }

    /// Übernimmt alle im FIFO liegenden Bytes in die Queue
    ///
    /// Ist die Queue voll, wird das älteste Byte verworfen.
    fn pump(&mut self) {
        let mut chunk = [0u8; 32];
        loop {
            match self.uart.read_buffered(&mut chunk) {
                Ok(0) => break,
                Ok(n) => {
                    for &byte in &chunk[..n] {
                        if self.pending.is_full() {
                            self.pending.pop_front();
                        }
                        // Platz wurde oben geschaffen
                        let _ = self.pending.push_back(byte);
                    }
                }
                Err(_) => {
                    self.rx_errors = self.rx_errors.wrapping_add(1);
                    warn!("UART: RX error ({} total)", self.rx_errors);
                    break;
                }
            }
        }
    }
}

impl ByteSource for UartByteSource<'_> {
    fn available(&mut self) -> usize {
        self.pump();
        self.pending.len()
    }

    fn read(&mut self, buf: &mut [u8]) -> usize {
        let mut n = 0;
        for slot in buf.iter_mut() {
            match self.pending.pop_front() {
                Some(byte) => {
                    *slot = byte;
                    n += 1;
                }
                None => break,
            }
        }
        n
    }
}
