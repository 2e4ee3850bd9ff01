// Status-LED Task - zeigt die AQI-Kategorie als Farbe
use defmt::{error, info};
use esp_hal_smartled::smart_led_buffer;

use crate::config::{RMT_CLOCK_MHZ, STATUS_LED_BRIGHTNESS};
use crate::hal::RmtStatusLight;
use crate::{StatusLight, UpdateSubscriber};
use aqm_core::status_color;

/// Status-LED Logic - testbar ohne Hardware
///
/// Bis zur ersten Messung bleibt die LED aus. Danach wird bei jedem Update
/// die Farbe der Anzeige-Kategorie (10-Minuten-AQI) geschrieben.
pub async fn status_light_logic<L: StatusLight>(mut light: L, mut subscriber: UpdateSubscriber) {
    if let Err(e) = light.write(status_color(None, STATUS_LED_BRIGHTNESS)) {
        error!("Status LED: Failed to clear ({})", e);
    }

    let mut shown = None;
    loop {
        let update = subscriber.next_message_pure().await;
        let category = update.display_category();
        if category == shown {
            continue;
        }

        match light.write(status_color(category, STATUS_LED_BRIGHTNESS)) {
            Ok(()) => {
                info!("Status LED: {}", category);
                shown = category;
            }
            Err(e) => error!("Status LED: Failed to write ({})", e),
        }
    }
}

/// Status-LED Task - Embassy Task
///
/// Initialisiert RMT + SmartLED und ruft `status_light_logic()` auf.
#[embassy_executor::task]
pub async fn status_light_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    subscriber: UpdateSubscriber,
) {
    // Buffer für SmartLED Daten erstellen (1 LED)
    let mut rmt_buffer = smart_led_buffer!(1);

    match RmtStatusLight::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer) {
        Ok(light) => status_light_logic(light, subscriber).await,
        Err(e) => error!("Status LED: RMT setup failed ({})", e),
    }
}
