// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;
pub mod web;

// Re-exports von aqm-core
pub use aqm_core::{
    AirQualityMonitor, AirQualityUpdate, AqiCategory, ByteSource, CoSensor, DecoderConfig,
    FrameError, NoCoSensor, StatusLight, StatusLightError, TelemetryPayload,
};

use core::cell::Cell;

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};
use embassy_sync::pubsub::{PubSubChannel, Publisher, Subscriber};

use crate::config::HISTORY_CAPACITY;

/// Der Monitor mit 24h-Verlauf
pub type Monitor = AirQualityMonitor<HISTORY_CAPACITY>;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Statt:  Publisher<'static, NoopRawMutex, AirQualityUpdate, 2, 10, 1>
// Nutze:  UpdatePublisher

/// PubSubChannel für Messzyklus-Broadcasts
/// - 2: Nachrichten-Kapazität im Queue
/// - 10: Maximale Anzahl Subscribers (MQTT + Status-LED + bis zu 8 WebSockets)
/// - 1: Publisher (Sensor-Task)
pub type UpdateChannel = PubSubChannel<NoopRawMutex, AirQualityUpdate, 2, 10, 1>;

/// Publisher für Messzyklus-Broadcasts (Sensor-Task)
pub type UpdatePublisher = Publisher<'static, NoopRawMutex, AirQualityUpdate, 2, 10, 1>;

/// Subscriber für Messzyklus-Broadcasts
pub type UpdateSubscriber = Subscriber<'static, NoopRawMutex, AirQualityUpdate, 2, 10, 1>;

// ============================================================================
// Letzter Messzyklus
// ============================================================================

/// Letztes Update für neu verbundene WebSocket-Clients
static LATEST_UPDATE: Mutex<CriticalSectionRawMutex, Cell<Option<AirQualityUpdate>>> =
    Mutex::new(Cell::new(None));

/// Merkt sich das Update (Sensor-Task, vor dem Publish)
pub fn store_latest_update(update: AirQualityUpdate) {
    LATEST_UPDATE.lock(|latest| latest.set(Some(update)));
}

/// Letztes Update, `None` vor der ersten Messung
pub fn latest_update() -> Option<AirQualityUpdate> {
    LATEST_UPDATE.lock(Cell::get)
}
