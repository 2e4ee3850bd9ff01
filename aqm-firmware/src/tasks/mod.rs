// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Der Sensor-Task published jeden Messzyklus, Status-LED, MQTT und WebSockets abonnieren.

pub mod http;
pub mod mqtt;
pub mod sensor;
pub mod status_light;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use http::http_server_task;
pub use mqtt::mqtt_task;
pub use sensor::sensor_task;
pub use status_light::status_light_task;
pub use wifi::{connection_task, dhcp_task, net_task, wait_for_network};
