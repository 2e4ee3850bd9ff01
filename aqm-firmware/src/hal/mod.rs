// Hardware Abstraction Layer (HAL) Module
//
// Kapselt Hardware-Zugriffe hinter den Traits aus aqm-core
// (StatusLight, ByteSource), damit die Logik ohne Hardware testbar bleibt.

pub mod status_light;
pub mod uart_source;

pub use status_light::RmtStatusLight;
pub use uart_source::UartByteSource;
