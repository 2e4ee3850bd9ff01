// Sensor Task - Liest den SN-GCJA5 und verteilt die Messzyklen
use defmt::{error, info, warn};
use embassy_time::{Duration, Instant, Timer};
use static_cell::ConstStaticCell;

use aqm_core::receiver;

use crate::config::{
    SAMPLING_INTERVAL_SECS, SENSOR_FRAME_TIMEOUT_MS, SENSOR_POLL_INTERVAL_MS, SENSOR_WARM_UP_SECS,
    VERIFY_CHECKSUM,
};
use crate::hal::UartByteSource;
use crate::{
    AirQualityMonitor, AirQualityUpdate, ByteSource, CoSensor, DecoderConfig, FrameError, Monitor,
    NoCoSensor, UpdatePublisher, store_latest_update,
};

/// Der einzige Monitor, statisch allokiert (~34 KB Verlauf, zu groß für den Stack)
static MONITOR: ConstStaticCell<Monitor> = ConstStaticCell::new(AirQualityMonitor::new(
    SAMPLING_INTERVAL_SECS,
    DecoderConfig {
        verify_checksum: VERIFY_CHECKSUM,
    },
));

/// Aufwärmphase des Sensors
///
/// Explizite Startphase vor der ersten Messung, der Monitor selbst wartet nie.
pub async fn wait_for_warm_up() {
    info!(
        "Sensor: Waiting {}s for sensor to power up and stabilize",
        SENSOR_WARM_UP_SECS
    );
    Timer::after(Duration::from_secs(SENSOR_WARM_UP_SECS)).await;
    info!("Sensor: Warm-up finished");
}

/// Ein Messzyklus: wartet bis zu `SENSOR_FRAME_TIMEOUT_MS` auf ein gültiges Frame
///
/// Zu Beginn werden veraltete Bytes verworfen. Danach wird im Abstand von
/// `SENSOR_POLL_INTERVAL_MS` gepollt; nach einem `InvalidFraming` hat der
/// Monitor den Rest bereits verworfen, das nächste Frame kommt ausgerichtet.
async fn measure<S: ByteSource, const N: usize>(
    monitor: &mut AirQualityMonitor<N>,
    source: &mut S,
) -> Result<(), FrameError> {
    let stale = receiver::drain(source);
    if stale > 0 {
        info!("Sensor: Discarded {} stale bytes", stale);
    }

    let deadline = Instant::now() + Duration::from_millis(SENSOR_FRAME_TIMEOUT_MS);
    let mut last_error = FrameError::IncompleteFrame { available: 0 };

    while Instant::now() < deadline {
        match monitor.poll(source) {
            Ok(reading) => {
                info!("Sensor: {}", reading);
                return Ok(());
            }
            Err(e @ FrameError::IncompleteFrame { .. }) => last_error = e,
            Err(e) => {
                warn!("Sensor: {}, resynchronizing", e);
                last_error = e;
            }
        }
        Timer::after(Duration::from_millis(SENSOR_POLL_INTERVAL_MS)).await;
    }

    Err(last_error)
}

/// Sensor Logic - ohne Hardware-Initialisierung
///
/// # Trait-basierte Abstraktion
/// - `S: ByteSource` - UART oder Mock
/// - `C: CoSensor` - optionaler Umwelt-Sensor (`NoCoSensor` wenn keiner verbaut ist)
pub async fn sensor_logic<S: ByteSource, C: CoSensor, const N: usize>(
    monitor: &mut AirQualityMonitor<N>,
    mut source: S,
    mut co_sensor: C,
    publisher: UpdatePublisher,
) {
    wait_for_warm_up().await;

    let boot = Instant::now();
    loop {
        let cycle_start = Instant::now();

        match measure(monitor, &mut source).await {
            Ok(()) => {
                if let Some(&reading) = monitor.current_reading() {
                    let update = AirQualityUpdate {
                        reading,
                        summary: monitor.summary(),
                        history_count: monitor.history_count(),
                        uptime_secs: boot.elapsed().as_secs(),
                        environment: co_sensor.read_environment(),
                    };
                    info!("Sensor: Publishing {}", update);
                    store_latest_update(update);
                    publisher.publish_immediate(update);
                }
            }
            Err(e) => {
                error!("Sensor: No valid frame this cycle ({})", e);
            }
        }

        let next = cycle_start + Duration::from_secs(u64::from(SAMPLING_INTERVAL_SECS));
        Timer::at(next).await;
    }
}

/// Sensor Task - Embassy Task
///
/// Übernimmt UART1 mit dem RX-Pin und ruft `sensor_logic()` auf.
#[embassy_executor::task]
pub async fn sensor_task(
    uart: esp_hal::peripherals::UART1<'static>,
    rx_pin: esp_hal::peripherals::GPIO4<'static>,
    publisher: UpdatePublisher,
) {
    let source = match UartByteSource::new(uart, rx_pin) {
        Ok(source) => source,
        Err(e) => {
            error!("Sensor: UART setup failed: {}", e);
            return;
        }
    };

    let monitor = MONITOR.take();
    sensor_logic(monitor, source, NoCoSensor, publisher).await;
}
