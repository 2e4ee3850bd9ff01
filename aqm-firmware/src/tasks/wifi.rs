// WiFi Tasks - Verbindung zum Access Point, Netzwerk-Stack, DHCP
use defmt::{Debug2Format, error, info, warn};
use embassy_net::{Runner, Stack};
use embassy_time::{Duration, Timer};
use esp_radio::wifi::{ClientConfig, ModeConfig, WifiController, WifiDevice, WifiEvent};

use crate::config::{WIFI_PASSWORD, WIFI_RETRY_DELAY_SECS, WIFI_SSID};

/// WiFi Connection Task
///
/// Konfiguriert den Station-Modus, verbindet mit dem Access Point und
/// verbindet nach einem Disconnect automatisch neu.
#[embassy_executor::task]
pub async fn connection_task(mut controller: WifiController<'static>) {
    info!("WiFi: Starting connection task");

    loop {
        if matches!(controller.is_started(), Ok(false)) {
            if let Err(e) = start_station(&mut controller).await {
                error!("WiFi: {}", e);
                retry_delay().await;
                continue;
            }
            info!("WiFi: Started successfully");
        }

        info!("WiFi: Connecting to '{}'...", WIFI_SSID);
        if let Err(e) = controller.connect_async().await {
            error!("WiFi: Connection failed: {}", Debug2Format(&e));
            retry_delay().await;
            continue;
        }
        info!("WiFi: Connected");

        controller.wait_for_event(WifiEvent::StaDisconnected).await;
        warn!("WiFi: Disconnected from AP, will retry...");
        Timer::after(Duration::from_secs(2)).await;
    }
}

async fn start_station(controller: &mut WifiController<'static>) -> Result<(), &'static str> {
    let client_config = ModeConfig::Client(
        ClientConfig::default()
            .with_ssid(WIFI_SSID.into())
            .with_password(WIFI_PASSWORD.into()),
    );

    controller
        .set_config(&client_config)
        .map_err(|_| "Failed to set configuration")?;
    controller
        .start_async()
        .await
        .map_err(|_| "Failed to start")
}

async fn retry_delay() {
    Timer::after(Duration::from_secs(WIFI_RETRY_DELAY_SECS)).await;
}

/// Network Task
///
/// Prozessiert Pakete des embassy-net Stacks
#[embassy_executor::task]
pub async fn net_task(mut runner: Runner<'static, WifiDevice<'static>>) -> ! {
    runner.run().await
}

/// DHCP Monitor Task
///
/// Loggt die Netzwerk-Konfiguration sobald eine IP-Adresse da ist
#[embassy_executor::task]
pub async fn dhcp_task(stack: &'static Stack<'static>) {
    wait_for_network(stack).await;

    if let Some(config) = stack.config_v4() {
        info!("WiFi: Got IP address!");
        info!("  IP:      {}", Debug2Format(&config.address.address()));
        info!("  Gateway: {}", Debug2Format(&config.gateway));
        info!("  DNS:     {}", Debug2Format(&config.dns_servers));
    }
}

/// Wartet bis Link up ist und DHCP eine IPv4-Konfiguration geliefert hat
///
/// Wird von MQTT und HTTP vor dem ersten Socket genutzt.
pub async fn wait_for_network(stack: &'static Stack<'static>) {
    while !(stack.is_link_up() && stack.config_v4().is_some()) {
        Timer::after(Duration::from_millis(500)).await;
    }
}
