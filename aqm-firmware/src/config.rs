// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use aqm_core::history_capacity;

// ============================================================================
// Sensor Konfiguration (Panasonic SN-GCJA5, UART)
// ============================================================================

/// GPIO-Pin für UART RX (TX des Sensors)
pub const SENSOR_RX_GPIO_PIN: u8 = 4;

/// UART Baudrate laut Datenblatt (8 Datenbits, Even Parity, 1 Stopbit)
pub const SENSOR_BAUDRATE: u32 = 9600;

/// Aufwärmzeit nach dem Einschalten in Sekunden
/// Der Sensor braucht ~28 s bis die Messwerte stabil sind
pub const SENSOR_WARM_UP_SECS: u64 = 28;

/// Abtastintervall in Sekunden
/// Jeder Zyklus liest ein Frame und schreibt einen Wert in den Verlauf
pub const SAMPLING_INTERVAL_SECS: u32 = 10;

/// Aufbewahrungsdauer des PM2.5-Verlaufs (24h für den Tages-AQI)
pub const HISTORY_RETENTION_SECS: u32 = 24 * 60 * 60;

/// Anzahl der Verlaufs-Slots (8640 × 4 Bytes ≈ 34 KB)
pub const HISTORY_CAPACITY: usize = history_capacity(HISTORY_RETENTION_SECS, SAMPLING_INTERVAL_SECS);

/// FCC-Prüfsumme der Frames verifizieren
pub const VERIFY_CHECKSUM: bool = false;

/// Puffer für bereits empfangene, noch nicht gelesene UART-Bytes
/// Reicht für vier Frames
pub const UART_PENDING_BUFFER_SIZE: usize = 128;

/// Poll-Intervall innerhalb eines Zyklus in Millisekunden
/// Der Sensor sendet jede Sekunde ein Frame (~37 ms auf der Leitung)
pub const SENSOR_POLL_INTERVAL_MS: u64 = 100;

/// Maximale Wartezeit auf ein gültiges Frame pro Zyklus in Millisekunden
pub const SENSOR_FRAME_TIMEOUT_MS: u64 = 2500;

/// Sensor-Name in Telemetrie und Web-Oberfläche
/// Wird zur Build-Zeit aus der Environment Variable SENSOR_NAME geladen
pub const SENSOR_NAME: &str = env!(
    "SENSOR_NAME",
    "Sensor-Name nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

// ============================================================================
// Status-LED Konfiguration
// ============================================================================

/// GPIO-Pin für die RGB LED (WS2812/Neopixel)
pub const LED_GPIO_PIN: u8 = 8;

/// Helligkeits-Level für die Status-LED (0-255)
/// Wert ist gedimmt für Augenschonung
pub const STATUS_LED_BRIGHTNESS: u8 = 10;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_SSID geladen
pub const WIFI_SSID: &str = env!(
    "WIFI_SSID",
    "WiFi SSID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// WiFi Passwort
/// Wird zur Build-Zeit aus der Environment Variable WIFI_PASSWORD geladen
pub const WIFI_PASSWORD: &str = env!(
    "WIFI_PASSWORD",
    "WiFi Password nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Wartezeit nach fehlgeschlagenem Verbindungsversuch
pub const WIFI_RETRY_DELAY_SECS: u64 = 5;

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

// ============================================================================
// MQTT Konfiguration (Telemetrie)
// ============================================================================

/// MQTT Broker Hostname oder IP-Adresse
/// Wird zur Build-Zeit aus der Environment Variable MQTT_BROKER geladen
pub const MQTT_BROKER: &str = env!(
    "MQTT_BROKER",
    "MQTT Broker nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// MQTT Broker Port
/// Standard: 1883 (unverschlüsselt), 8883 (TLS)
pub const MQTT_PORT: u16 = 1883;

/// MQTT Client ID
/// Wird zur Build-Zeit aus der Environment Variable MQTT_CLIENT_ID geladen
pub const MQTT_CLIENT_ID: &str = env!(
    "MQTT_CLIENT_ID",
    "MQTT Client ID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// MQTT Topic für das Telemetrie-JSON
/// Wird zur Build-Zeit aus der Environment Variable MQTT_TOPIC_TELEMETRY geladen
pub const MQTT_TOPIC_TELEMETRY: &str = env!(
    "MQTT_TOPIC_TELEMETRY",
    "MQTT Topic Telemetry nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// MQTT Reconnect Delay in Sekunden
pub const MQTT_RECONNECT_DELAY_SECS: u64 = 5;

/// MQTT Buffer-Größe in Bytes
/// Muss das komplette Telemetrie-JSON (~600 Bytes) fassen
pub const MQTT_BUFFER_SIZE: usize = 1024;

/// DNS Query Timeout in Sekunden
pub const DNS_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// HTTP Server Konfiguration
// ============================================================================

/// Anzahl paralleler HTTP-Server-Tasks
pub const HTTP_TASK_POOL_SIZE: usize = 4;

/// HTTP Buffer-Größe in Bytes
pub const HTTP_BUFFER_SIZE: usize = 1024;

/// TCP RX Buffer-Größe in Bytes
pub const TCP_RX_BUFFER_SIZE: usize = 1024;

/// TCP TX Buffer-Größe in Bytes
pub const TCP_TX_BUFFER_SIZE: usize = 1024;

/// WebSocket Message Buffer-Größe in Bytes
/// Der Browser sendet nur Ping/Close, 128 Bytes reichen
pub const WEBSOCKET_BUFFER_SIZE: usize = 128;

/// JSON Serialisierungs-Buffer für WebSocket Status-Updates (~400 Bytes)
pub const JSON_STATUS_BUFFER_SIZE: usize = 512;
