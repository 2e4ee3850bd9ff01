//! Integration Tests für Decoder, Verlauf und AQI
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockByteSource

use std::collections::VecDeque;

use aqm_core::{
    AirQualityMonitor, AirQualityUpdate, AqiCategory, ByteSource, DecoderConfig, FRAME_LEN,
    FrameError, RawFrame, TelemetryPayload, aqi,
};

// ============================================================================
// Mock Byte Source
// ============================================================================

#[derive(Default)]
pub struct MockByteSource {
    pub pending: VecDeque<u8>,
    pub read_calls: usize,
}

impl MockByteSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, bytes: &[u8]) {
        self.pending.extend(bytes.iter().copied());
    }
}

impl ByteSource for MockByteSource {
    fn available(&mut self) -> usize {
        self.pending.len()
    }

    fn read(&mut self, buf: &mut [u8]) -> usize {
        self.read_calls += 1;
        let mut n = 0;
        for slot in buf.iter_mut() {
            match self.pending.pop_front() {
                Some(byte) => {
                    *slot = byte;
                    n += 1;
                }
                None => break,
            }
        }
        n
    }
}

fn frame(pm1_0: u32, pm2_5: u32, pm10: u32, status: u8) -> RawFrame {
    let mut frame = [0u8; FRAME_LEN];
    frame[0] = 0x02;
    frame[1..5].copy_from_slice(&pm1_0.to_le_bytes());
    frame[5..9].copy_from_slice(&pm2_5.to_le_bytes());
    frame[9..13].copy_from_slice(&pm10.to_le_bytes());
    frame[13..15].copy_from_slice(&512u16.to_le_bytes());
    frame[25..27].copy_from_slice(&3u16.to_le_bytes());
    frame[29] = status;
    frame[31] = 0x03;
    frame
}

type Monitor = AirQualityMonitor<6>;

fn monitor() -> Monitor {
    AirQualityMonitor::new(10, DecoderConfig::default())
}

// ============================================================================
// Tests: Frame Receiver
// ============================================================================

#[test]
fn test_incomplete_frame_consumes_nothing() {
    let mut source = MockByteSource::new();
    source.feed(&frame(1, 2, 3, 0)[..20]);
    let mut monitor = monitor();

    let result = monitor.poll(&mut source);

    assert_eq!(result, Err(FrameError::IncompleteFrame { available: 20 }));
    assert_eq!(source.pending.len(), 20);
    assert_eq!(source.read_calls, 0);
    assert!(monitor.current_reading().is_none());
}

#[test]
fn test_extra_bytes_stay_for_next_poll() {
    let mut source = MockByteSource::new();
    source.feed(&frame(1, 10, 3, 0));
    source.feed(&frame(1, 20, 3, 0));
    let mut monitor = monitor();

    assert_eq!(monitor.poll(&mut source).unwrap().pm2_5, 10);
    assert_eq!(source.pending.len(), FRAME_LEN);
    assert_eq!(monitor.poll(&mut source).unwrap().pm2_5, 20);
    assert!(source.pending.is_empty());
}

// ============================================================================
// Tests: Frame Decoder
// ============================================================================

#[test]
fn test_poll_decodes_fields() {
    let mut source = MockByteSource::new();
    source.feed(&frame(1, 42, 5, 0x27));
    let mut monitor = monitor();

    let reading = monitor.poll(&mut source).unwrap();

    assert_eq!(reading.pm1_0, 1);
    assert_eq!(reading.pm2_5, 42);
    assert_eq!(reading.pm10, 5);
    assert_eq!(reading.count_0_5um, 512);
    assert_eq!(reading.count_10um, 3);
    assert_eq!(monitor.status_particle_detector(), Some(2));
    assert_eq!(monitor.status_laser(), Some(1));
    assert_eq!(monitor.status_fan(), Some(3));
    assert_eq!(monitor.history_count(), 1);
}

#[test]
fn test_invalid_framing_drains_source() {
    let mut source = MockByteSource::new();
    // Um 3 Bytes verschoben: Start-Marker steht nicht an Offset 0
    source.feed(&[0xAA, 0xBB, 0xCC]);
    source.feed(&frame(1, 42, 5, 0));
    source.feed(&frame(1, 43, 5, 0));
    let mut monitor = monitor();

    let result = monitor.poll(&mut source);

    assert!(matches!(
        result,
        Err(FrameError::InvalidFraming { start: 0xAA, .. })
    ));
    assert!(source.pending.is_empty());
    assert!(monitor.current_reading().is_none());
    assert_eq!(monitor.history_count(), 0);
}

#[test]
fn test_invalid_framing_keeps_previous_reading() {
    let mut source = MockByteSource::new();
    let mut monitor = monitor();
    source.feed(&frame(1, 42, 5, 0));
    monitor.poll(&mut source).unwrap();

    let mut bad = frame(9, 99, 9, 0);
    bad[31] = 0x00;
    source.feed(&bad);
    assert!(monitor.poll(&mut source).is_err());

    assert_eq!(monitor.current_reading().map(|r| r.pm2_5), Some(42));
    assert_eq!(monitor.history_count(), 1);
}

#[test]
fn test_resync_after_drain() {
    let mut source = MockByteSource::new();
    let mut monitor = monitor();
    source.feed(&[0x00; 7]);
    source.feed(&frame(1, 42, 5, 0));
    assert!(monitor.poll(&mut source).is_err());

    // Nächster Zyklus: Sensor sendet sauber ausgerichtet
    source.feed(&frame(1, 17, 5, 0));
    assert_eq!(monitor.poll(&mut source).unwrap().pm2_5, 17);
}

#[test]
fn test_checksum_mismatch_does_not_drain() {
    let mut source = MockByteSource::new();
    let mut monitor: Monitor = AirQualityMonitor::new(
        10,
        DecoderConfig {
            verify_checksum: true,
        },
    );
    let mut corrupted = frame(1, 42, 5, 0);
    corrupted[30] = 0xFF;
    source.feed(&corrupted);
    source.feed(&frame(1, 42, 5, 0)[..4]);

    assert!(matches!(
        monitor.poll(&mut source),
        Err(FrameError::ChecksumMismatch { actual: 0xFF, .. })
    ));
    assert_eq!(source.pending.len(), 4);
}

// ============================================================================
// Tests: History + Averaging
// ============================================================================

#[test]
fn test_history_count_never_exceeds_capacity() {
    let mut monitor = monitor();
    for pm in 0..20u32 {
        let mut source = MockByteSource::new();
        source.feed(&frame(0, pm, 0, 0));
        monitor.poll(&mut source).unwrap();
        assert!(monitor.history_count() <= 6);
    }
    assert_eq!(monitor.history_count(), 6);

    // Die letzten 6 Werte: 14..=19
    let newest_first: Vec<u32> = monitor.history().snapshot().collect();
    assert_eq!(newest_first, vec![19, 18, 17, 16, 15, 14]);
}

#[test]
fn test_average_windows() {
    let mut monitor = monitor();
    for pm in [10, 20, 30] {
        let mut source = MockByteSource::new();
        source.feed(&frame(0, pm, 0, 0));
        monitor.poll(&mut source).unwrap();
    }

    assert_eq!(monitor.average_pm2_5(30), Some(20.0));
    assert_eq!(monitor.average_pm2_5(5), Some(30.0));
}

#[test]
fn test_average_empty_history_is_none() {
    let monitor = monitor();
    assert_eq!(monitor.average_pm2_5(600), None);
}

#[test]
fn test_queries_are_idempotent() {
    let mut monitor = monitor();
    let mut source = MockByteSource::new();
    source.feed(&frame(0, 40, 0, 0));
    monitor.poll(&mut source).unwrap();

    let first = monitor.average_pm2_5(600);
    let second = monitor.average_pm2_5(600);
    assert_eq!(first, second);
    assert_eq!(monitor.aqi(40.0), monitor.aqi(40.0));
    assert_eq!(monitor.summary(), monitor.summary());
}

// ============================================================================
// Tests: AQI
// ============================================================================

#[test]
fn test_aqi_table() {
    let expected = [
        (0.0, 0.0),
        (12.0, 50.0),
        (35.4, 100.0),
        (55.4, 150.0),
        (150.4, 200.0),
        (250.4, 300.0),
        (350.4, 400.0),
        (500.0, 500.0),
    ];
    for (concentration, index) in expected {
        let actual = aqi(concentration);
        assert!(
            (actual - index).abs() < 1e-3,
            "aqi({concentration}) = {actual}, expected {index}"
        );
    }
}

#[test]
fn test_aqi_strictly_increasing_beyond_table() {
    let mut previous = aqi(500.0);
    for concentration in [550.0, 600.0, 800.0, 1000.0] {
        let current = aqi(concentration);
        assert!(current > previous);
        previous = current;
    }
}

#[test]
fn test_severity_category() {
    let monitor = monitor();
    assert_eq!(monitor.severity_category(42.0), AqiCategory::Good);
    assert_eq!(monitor.severity_category(99.0), AqiCategory::Moderate);
    assert_eq!(monitor.severity_category(120.0), AqiCategory::UnhealthySensitive);
    assert_eq!(monitor.severity_category(180.0), AqiCategory::Unhealthy);
    assert_eq!(monitor.severity_category(250.0), AqiCategory::VeryUnhealthy);
    assert_eq!(monitor.severity_category(450.0), AqiCategory::Hazardous);
}

// ============================================================================
// Tests: Telemetry
// ============================================================================

fn update_for(pm2_5: u32) -> AirQualityUpdate {
    let mut monitor = monitor();
    let mut source = MockByteSource::new();
    source.feed(&frame(3, pm2_5, 7, 0x15));
    let reading = monitor.poll(&mut source).unwrap();
    AirQualityUpdate {
        reading,
        summary: monitor.summary(),
        history_count: monitor.history_count(),
        uptime_secs: 120,
        environment: None,
    }
}

#[test]
fn test_telemetry_payload_fields() {
    let update = update_for(12);
    let payload = TelemetryPayload::new("kitchen", &update, 120_000);

    assert_eq!(payload.mass_density.pm2p5, 12);
    assert_eq!(payload.sensor_status.particle_detector, 1);
    assert_eq!(payload.sensor_status.laser, 1);
    assert_eq!(payload.sensor_status.fan, 1);
    assert_eq!(payload.air_quality_index.average_pm2p5_10min, Some(12.0));
}

#[test]
fn test_telemetry_payload_json() {
    let update = update_for(12);
    let payload = TelemetryPayload::new("kitchen", &update, 120_000);

    let mut buffer = [0u8; 1024];
    let n = serde_json_core::to_slice(&payload, &mut buffer).unwrap();
    let json = core::str::from_utf8(&buffer[..n]).unwrap();

    assert!(json.starts_with(r#"{"sensor_id":"kitchen","uptime":120,"#));
    assert!(json.contains(r#""mass_density":{"pm1p0":3,"pm2p5":12,"pm10":7}"#));
    assert!(json.contains(r#""0p5um":512"#));
    assert!(json.contains(r#""partical_detector":1"#));
    assert!(json.contains(r#""aqi_10min":"#));
    assert!(!json.contains("environment"));
}
