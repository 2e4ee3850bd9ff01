// Build-Script: Wird vor dem Kompilieren ausgeführt
// Backt die .env-Konfiguration ein und konfiguriert den Linker für ESP32-C6

/// Variablen die als `env!()` in `src/config.rs` gelesen werden
const BAKED_ENV_VARS: [&str; 6] = [
    "WIFI_SSID",
    "WIFI_PASSWORD",
    "MQTT_BROKER",
    "MQTT_CLIENT_ID",
    "MQTT_TOPIC_TELEMETRY",
    "SENSOR_NAME",
];

fn main() {
    // Lade .env file
    // Fehler ignorieren wenn .env nicht existiert (dann müssen ENV vars gesetzt sein)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  .env file nicht gefunden: {}", e);
        eprintln!("   Setze {} als Environment-Variablen", BAKED_ENV_VARS.join(", "));
    }

    // Werte werden zur Compile-Zeit in den Code eingebacken
    for name in BAKED_ENV_VARS {
        println!("cargo:rerun-if-env-changed={}", name);
        if let Ok(value) = std::env::var(name) {
            println!("cargo:rustc-env={}={}", name, value);
        }
    }
    println!("cargo:rerun-if-changed=.env");

    // defmt.x - defmt Logging-Support
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // linkall.x - ESP32 Memory-Layout, muss als LETZTES kommen
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}
