// HTTP Server Task - Serviert Web-Oberfläche und WebSocket
use core::future::pending;
use defmt::{info, warn};
use embassy_futures::select::{Either, select};
use embassy_net::Stack;
use embassy_time::{Duration, Instant};
use picoserve::{io::embedded_io_async, response::IntoResponse, response::ws, routing::get};

use crate::config::*;
use crate::web::{INDEX_HTML, STYLE_CSS, protocol::WsServerMessage};
use crate::{AirQualityUpdate, UpdateChannel, UpdateSubscriber, latest_update};

/// Response-Enum für WebSocket-Endpoint
/// Ermöglicht Rückgabe von entweder WebSocket-Upgrade oder HTTP-Fehler
enum WebSocketResponse {
    Upgrade(
        ws::UpgradedWebSocket<ws::UnspecifiedProtocol, ws::CallbackNotUsingState<WebSocketHandler>>,
    ),
    ServiceUnavailable,
}

impl IntoResponse for WebSocketResponse {
    async fn write_to<
        R: embedded_io_async::Read,
        W: picoserve::response::ResponseWriter<Error = R::Error>,
    >(
        self,
        connection: picoserve::response::Connection<'_, R>,
        response_writer: W,
    ) -> Result<picoserve::ResponseSent, W::Error> {
        match self {
            WebSocketResponse::Upgrade(ws) => ws.write_to(connection, response_writer).await,
            WebSocketResponse::ServiceUnavailable => {
                picoserve::response::Response::new(
                    picoserve::response::StatusCode::new(503),
                    "Service Unavailable: Too many WebSocket connections",
                )
                .with_header("Retry-After", "5")
                .write_to(connection, response_writer)
                .await
            }
        }
    }
}

/// HTTP Server Task - läuft parallel zu anderen Tasks
///
/// - Serviert index.html auf GET / und GET /index.html
/// - Serviert style.css auf GET /style.css
/// - WebSocket-Endpoint auf /ws, pusht jeden Messzyklus als JSON
/// - Alle anderen Pfade beantwortet der Router mit 404
///
/// **Task Pool:** Diese Task wird `HTTP_TASK_POOL_SIZE`x gespawnt, damit
/// Seite, Stylesheet und WebSocket gleichzeitig bedient werden können.
#[embassy_executor::task(pool_size = 4)]
pub async fn http_server_task(
    task_id: usize,
    stack: &'static Stack<'static>,
    update_channel: &'static UpdateChannel,
) {
    info!("HTTP: Server task {} starting on port 80...", task_id);

    let app = picoserve::Router::new()
        .route("/", get(serve_html))
        .route("/index.html", get(serve_html))
        .route("/style.css", get(serve_css))
        .route(
            "/ws",
            get(
                move |upgrade: picoserve::response::WebSocketUpgrade| async move {
                    info!("HTTP: WebSocket upgrade requested");

                    // Jede WebSocket-Connection belegt einen Subscriber-Slot.
                    // Sind alle belegt, bekommt der Client HTTP 503 statt Panic.
                    match update_channel.subscriber() {
                        Ok(subscriber) => {
                            let handler = WebSocketHandler { subscriber };
                            WebSocketResponse::Upgrade(upgrade.on_upgrade(handler))
                        }
                        Err(_) => {
                            warn!("HTTP: No subscriber slots available, sending HTTP 503");
                            WebSocketResponse::ServiceUnavailable
                        }
                    }
                },
            ),
        );

    // Server-Konfiguration
    let config = picoserve::Config::new(picoserve::Timeouts {
        start_read_request: Some(Duration::from_secs(5)),
        read_request: Some(Duration::from_secs(1)),
        write: Some(Duration::from_secs(1)),
        persistent_start_read_request: Some(Duration::from_secs(5)),
    })
    .keep_connection_alive();

    let mut http_buffer = [0u8; HTTP_BUFFER_SIZE];
    let mut rx_buffer = [0u8; TCP_RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TCP_TX_BUFFER_SIZE];

    let server = picoserve::Server::new(&app, &config, &mut http_buffer);

    // task_id ermöglicht mehrere concurrent Server-Instanzen auf Port 80
    let _ = server
        .listen_and_serve(task_id, *stack, 80, &mut rx_buffer, &mut tx_buffer)
        .await;

    info!("HTTP: Server task {} ended", task_id);
}

async fn serve_html() -> impl IntoResponse {
    picoserve::response::Response::new(picoserve::response::StatusCode::OK, INDEX_HTML)
        .with_header("Content-Type", "text/html; charset=utf-8")
}

async fn serve_css() -> impl IntoResponse {
    picoserve::response::Response::new(picoserve::response::StatusCode::OK, STYLE_CSS)
        .with_header("Content-Type", "text/css")
}

/// WebSocket-Handler State
struct WebSocketHandler {
    subscriber: UpdateSubscriber,
}

impl ws::WebSocketCallback for WebSocketHandler {
    async fn run<R: embedded_io_async::Read, W: embedded_io_async::Write<Error = R::Error>>(
        mut self,
        mut rx: ws::SocketRx<R>,
        mut tx: ws::SocketTx<W>,
    ) -> Result<(), W::Error> {
        info!("HTTP: WebSocket connection established");

        let mut buffer = [0u8; WEBSOCKET_BUFFER_SIZE];

        // Neue Subscriber sehen erst den nächsten Zyklus, daher sofort den letzten senden
        if let Some(update) = latest_update() {
            send_status(&mut tx, &update).await?;
        }

        let close_reason = loop {
            match select(
                rx.next_message(&mut buffer, pending()),
                self.subscriber.next_message_pure(),
            )
            .await
            {
                Either::First(ws_result) => match ws_result?.ignore_never_b() {
                    Ok(ws::Message::Text(data)) => {
                        info!("HTTP: Ignoring text message ({} bytes)", data.len());
                        send_message(
                            &mut tx,
                            &WsServerMessage::Error {
                                message: "Commands are not supported",
                            },
                        )
                        .await?;
                    }
                    Ok(ws::Message::Binary(data)) => {
                        info!("HTTP: Ignoring binary message ({} bytes)", data.len());
                    }
                    Ok(ws::Message::Ping(data)) => tx.send_pong(data).await?,
                    Ok(ws::Message::Pong(_)) => {}
                    Ok(ws::Message::Close(_)) => {
                        info!("HTTP: WebSocket close received");
                        break None;
                    }
                    Err(error) => {
                        warn!("HTTP: WebSocket error");
                        break Some((error.code(), "WebSocket Error"));
                    }
                },
                Either::Second(update) => send_status(&mut tx, &update).await?,
            }
        };

        info!("HTTP: WebSocket connection closed");
        tx.close(close_reason).await
    }
}

async fn send_status<W: embedded_io_async::Write>(
    tx: &mut ws::SocketTx<W>,
    update: &AirQualityUpdate,
) -> Result<(), W::Error> {
    let status = WsServerMessage::status(SENSOR_NAME, update, Instant::now().as_millis());
    send_message(tx, &status).await
}

/// Serialisiert eine Nachricht und sendet sie als Text-Frame
///
/// Passt die Nachricht nicht in den Buffer, wird sie verworfen.
async fn send_message<W: embedded_io_async::Write>(
    tx: &mut ws::SocketTx<W>,
    message: &WsServerMessage,
) -> Result<(), W::Error> {
    let mut json_buffer = [0u8; JSON_STATUS_BUFFER_SIZE];
    match serde_json_core::to_slice(message, &mut json_buffer) {
        Ok(n) => {
            if let Ok(json_str) = core::str::from_utf8(&json_buffer[..n]) {
                tx.send_text(json_str).await?;
            }
        }
        Err(_) => warn!("HTTP: Status message exceeds {} bytes", JSON_STATUS_BUFFER_SIZE),
    }
    Ok(())
}
