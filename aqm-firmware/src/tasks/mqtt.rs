// MQTT Task - Published Telemetrie-JSON an den MQTT Broker
use defmt::{Debug2Format, error, info, warn};
use embassy_net::{IpAddress, Stack, dns::DnsQueryType, tcp::TcpSocket};
use embassy_time::{Duration, Instant, Timer, with_timeout};

use rust_mqtt::client::client::MqttClient;
use rust_mqtt::client::client_config::{ClientConfig, MqttVersion};
use rust_mqtt::packet::v5::publish_packet::QualityOfService;
use rust_mqtt::utils::rng_generator::CountingRng;
use rust_mqtt::utils::types::EncodedString;

use crate::config::*;
use crate::tasks::wifi::wait_for_network;
use crate::{AirQualityUpdate, TelemetryPayload, UpdateSubscriber};

/// MQTT Task - läuft parallel zu anderen Tasks
///
/// - Wartet auf Netzwerk-Verbindung
/// - Verbindet sich mit MQTT Broker
/// - Published pro Messzyklus das Telemetrie-JSON auf `MQTT_TOPIC_TELEMETRY`
/// - Automatisches Reconnect bei Fehlern
#[embassy_executor::task]
pub async fn mqtt_task(stack: &'static Stack<'static>, mut subscriber: UpdateSubscriber) {
    info!("MQTT: Task started, waiting for network...");
    wait_for_network(stack).await;
    info!("MQTT: Network ready");

    loop {
        match mqtt_connect_and_publish(stack, &mut subscriber).await {
            Ok(_) => warn!("MQTT: Connection closed normally"),
            Err(e) => error!("MQTT: Error: {}", e),
        }
        info!("MQTT: Reconnecting in {}s...", MQTT_RECONNECT_DELAY_SECS);
        Timer::after(Duration::from_secs(MQTT_RECONNECT_DELAY_SECS)).await;
    }
}

/// Verbindet mit dem Broker und published Messzyklen
///
/// Bei jedem Fehler wird die Funktion beendet und der Haupt-Loop
/// startet automatisch einen Reconnect-Versuch.
async fn mqtt_connect_and_publish(
    stack: &'static Stack<'static>,
    subscriber: &mut UpdateSubscriber,
) -> Result<(), MqttError> {
    info!("MQTT: Resolving '{}'...", MQTT_BROKER);
    let broker_ip = resolve_hostname(stack, MQTT_BROKER).await?;
    info!("MQTT: Resolved to {}", Debug2Format(&broker_ip));

    let mut rx_buffer = [0u8; 4096];
    let mut tx_buffer = [0u8; 4096];
    let mut socket = TcpSocket::new(*stack, &mut rx_buffer, &mut tx_buffer);
    socket.set_timeout(Some(Duration::from_secs(10)));

    socket
        .connect((broker_ip, MQTT_PORT))
        .await
        .map_err(|_| MqttError::ConnectionFailed)?;
    info!("MQTT: TCP connected");

    let rng = CountingRng(20000);
    let mut config = ClientConfig::<5, _>::new(MqttVersion::MQTTv5, rng);
    config.client_id = EncodedString {
        string: MQTT_CLIENT_ID,
        len: MQTT_CLIENT_ID.len() as u16,
    };
    // Keep-Alive deutlich über dem Abtastintervall
    config.keep_alive = 60;
    config.max_packet_size = MQTT_BUFFER_SIZE as u32;

    let mut send_buffer = [0u8; MQTT_BUFFER_SIZE];
    let mut recv_buffer = [0u8; MQTT_BUFFER_SIZE];

    let mut client = MqttClient::<_, 5, _>::new(
        socket,
        &mut send_buffer,
        MQTT_BUFFER_SIZE,
        &mut recv_buffer,
        MQTT_BUFFER_SIZE,
        config,
    );

    client
        .connect_to_broker()
        .await
        .map_err(|_| MqttError::ProtocolError)?;
    info!("MQTT: Connected to broker");

    let mut payload_buffer = [0u8; MQTT_BUFFER_SIZE];
    loop {
        let update = subscriber.next_message_pure().await;
        let payload = encode_telemetry(&update, &mut payload_buffer)?;

        client
            .send_message(
                MQTT_TOPIC_TELEMETRY,
                payload,
                QualityOfService::QoS0,
                false,
            )
            .await
            .map_err(|_| MqttError::PublishFailed)?;

        info!(
            "MQTT: Published {} bytes to '{}'",
            payload.len(),
            MQTT_TOPIC_TELEMETRY
        );
    }
}

/// Serialisiert einen Messzyklus als Telemetrie-JSON
fn encode_telemetry<'b>(
    update: &AirQualityUpdate,
    buffer: &'b mut [u8],
) -> Result<&'b [u8], MqttError> {
    let payload = TelemetryPayload::new(SENSOR_NAME, update, Instant::now().as_millis());
    let n = serde_json_core::to_slice(&payload, buffer).map_err(|_| MqttError::EncodeFailed)?;
    Ok(&buffer[..n])
}

/// Löst Hostname zu IPv4-Adresse auf
async fn resolve_hostname(
    stack: &'static Stack<'static>,
    hostname: &str,
) -> Result<embassy_net::Ipv4Address, MqttError> {
    let result = with_timeout(
        Duration::from_secs(DNS_TIMEOUT_SECS),
        stack.dns_query(hostname, DnsQueryType::A),
    )
    .await;

    match result {
        Ok(Ok(addrs)) => addrs
            .iter()
            .find_map(|addr| match addr {
                IpAddress::Ipv4(ipv4) => Some(*ipv4),
            })
            .ok_or(MqttError::DnsResolutionFailed),
        Ok(Err(_)) => Err(MqttError::DnsResolutionFailed),
        Err(_) => Err(MqttError::DnsTimeout),
    }
}

/// MQTT Fehler-Typen
#[derive(Debug)]
enum MqttError {
    DnsResolutionFailed,
    DnsTimeout,
    ConnectionFailed,
    ProtocolError,
    EncodeFailed,
    PublishFailed,
}

impl defmt::Format for MqttError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            MqttError::DnsResolutionFailed => defmt::write!(fmt, "DNS failed"),
            MqttError::DnsTimeout => defmt::write!(fmt, "DNS timeout"),
            MqttError::ConnectionFailed => defmt::write!(fmt, "Connection failed"),
            MqttError::ProtocolError => defmt::write!(fmt, "Protocol error"),
            MqttError::EncodeFailed => defmt::write!(fmt, "Telemetry encoding failed"),
            MqttError::PublishFailed => defmt::write!(fmt, "Publish failed"),
        }
    }
}
