// Web-Modul für HTTP Server und WebSocket
// Organisiert alle Web-bezogenen Komponenten

pub mod protocol;

// Statische Dateien zur Compile-Zeit einbinden
// Die Dateien werden direkt ins Binary eingebettet
pub const INDEX_HTML: &str = include_str!("index.html");
pub const STYLE_CSS: &str = include_str!("style.css");
