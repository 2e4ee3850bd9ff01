//! Gleitende Mittelwerte über den PM2.5-Verlauf
//!
//! Annahme: jedes Abtastintervall hat einen Messwert geliefert. Lücken durch
//! fehlgeschlagene Decodes werden nicht erkannt. Für die 24h-AQI ist das
//! hinreichend genau.

use crate::history::HistoryBuffer;

/// Standard-Zeitfenster der Telemetrie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AveragingWindow {
    /// Ein Abtastintervall (= der letzte Messwert)
    Current,
    TenMinutes,
    OneHour,
    OneDay,
}

impl AveragingWindow {
    pub const ALL: [AveragingWindow; 4] = [
        AveragingWindow::Current,
        AveragingWindow::TenMinutes,
        AveragingWindow::OneHour,
        AveragingWindow::OneDay,
    ];

    /// Fensterlänge in Sekunden
    pub const fn seconds(self, sampling_interval_secs: u32) -> u32 {
        match self {
            AveragingWindow::Current => sampling_interval_secs,
            AveragingWindow::TenMinutes => 10 * 60,
            AveragingWindow::OneHour => 60 * 60,
            AveragingWindow::OneDay => 24 * 60 * 60,
        }
    }
}

/// Mittelwert der neuesten Werte innerhalb von `window_secs`
///
/// Ab dem neuesten Wert rückwärts werden Werte aufsummiert, solange
/// `anzahl * sampling_interval_secs < window_secs` gilt und der Puffer
/// nicht erschöpft ist.
///
/// Gibt `None` zurück wenn kein Wert in das Fenster fällt (leerer Verlauf
/// oder `window_secs == 0`).
pub fn average_pm2_5<const N: usize>(
    history: &HistoryBuffer<N>,
    window_secs: u32,
    sampling_interval_secs: u32,
) -> Option<f32> {
    let interval = u64::from(sampling_interval_secs);
    let window = u64::from(window_secs);

    let mut count: u64 = 0;
    let mut sum: u64 = 0;
    for value in history.snapshot() {
        if count * interval >= window {
            break;
        }
        sum += u64::from(value);
        count += 1;
    }

    if count == 0 {
        None
    } else {
        Some(sum as f32 / count as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(values: &[u32]) -> HistoryBuffer<8> {
        let mut history = HistoryBuffer::new();
        for &value in values {
            history.push(value);
        }
        history
    }

    #[test]
    fn test_average_full_window() {
        let history = history_of(&[10, 20, 30]);
        assert_eq!(average_pm2_5(&history, 30, 10), Some(20.0));
    }

    #[test]
    fn test_average_shorter_than_interval_takes_latest() {
        let history = history_of(&[10, 20, 30]);
        assert_eq!(average_pm2_5(&history, 5, 10), Some(30.0));
        assert_eq!(average_pm2_5(&history, 10, 10), Some(30.0));
    }

    #[test]
    fn test_average_boundary_is_exclusive() {
        let history = history_of(&[10, 20, 30]);
        // 2 * 10 < 20 ist falsch → nur zwei Werte
        assert_eq!(average_pm2_5(&history, 20, 10), Some(25.0));
        assert_eq!(average_pm2_5(&history, 21, 10), Some(20.0));
    }

    #[test]
    fn test_average_window_larger_than_history() {
        let history = history_of(&[10, 20, 30]);
        assert_eq!(average_pm2_5(&history, 86_400, 10), Some(20.0));
    }

    #[test]
    fn test_average_empty_is_none() {
        let history: HistoryBuffer<8> = HistoryBuffer::new();
        assert_eq!(average_pm2_5(&history, 600, 10), None);
    }

    #[test]
    fn test_average_zero_window_is_none() {
        let history = history_of(&[10]);
        assert_eq!(average_pm2_5(&history, 0, 10), None);
    }

    #[test]
    fn test_window_seconds() {
        assert_eq!(AveragingWindow::Current.seconds(10), 10);
        assert_eq!(AveragingWindow::TenMinutes.seconds(10), 600);
        assert_eq!(AveragingWindow::OneDay.seconds(10), 86_400);
    }
}
