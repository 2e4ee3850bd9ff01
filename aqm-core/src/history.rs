//! Ringpuffer für PM2.5-Verlauf
//!
//! Zwei Phasen:
//! 1. **Füllen:** `len < N`, es wird angehängt, Cursor = `len - 1`
//! 2. **Umlaufen:** Cursor rückt zyklisch vor und überschreibt den ältesten Wert
//!
//! Der Puffer wird also nicht ab dem ersten Push zyklisch beschrieben,
//! sondern erst wenn er voll ist.

/// Anzahl Slots um `retention_secs` bei gegebenem Abtastintervall abzudecken
///
/// Rundet auf, liefert mindestens 1.
pub const fn history_capacity(retention_secs: u32, sampling_interval_secs: u32) -> usize {
    if sampling_interval_secs == 0 {
        return 1;
    }
    let slots = retention_secs.div_ceil(sampling_interval_secs) as usize;
    if slots == 0 { 1 } else { slots }
}

/// Fester Ringpuffer mit `N` Slots, ohne Heap
#[derive(Debug, Clone)]
pub struct HistoryBuffer<const N: usize> {
    slots: [u32; N],
    len: usize,
    cursor: usize,
}

impl<const N: usize> HistoryBuffer<N> {
    pub const fn new() -> Self {
        const { assert!(N > 0, "HistoryBuffer needs at least one slot") };
        Self {
            slots: [0; N],
            len: 0,
            cursor: 0,
        }
    }

    /// Fügt einen Wert ein, O(1)
    pub fn push(&mut self, value: u32) {
        if self.len < N {
            self.slots[self.len] = value;
            self.len += 1;
            self.cursor = self.len - 1;
        } else {
            self.cursor = (self.cursor + 1) % N;
            self.slots[self.cursor] = value;
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Neuester Wert
    pub fn latest(&self) -> Option<u32> {
        if self.is_empty() {
            None
        } else {
            Some(self.slots[self.cursor])
        }
    }

    /// Iteriert vom neuesten zum ältesten Wert
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            slots: &self.slots[..self.len],
            index: self.cursor,
            remaining: self.len,
        }
    }
}

impl<const N: usize> Default for HistoryBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator über den Verlauf, neuester Wert zuerst
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    slots: &'a [u32],
    index: usize,
    remaining: usize,
}

impl Iterator for Snapshot<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.slots[self.index];
        self.remaining -= 1;
        self.index = if self.index == 0 {
            self.slots.len() - 1
        } else {
            self.index - 1
        };
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Snapshot<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<const N: usize>(history: &HistoryBuffer<N>) -> [Option<u32>; 8] {
        let mut out = [None; 8];
        for (slot, value) in out.iter_mut().zip(history.snapshot()) {
            *slot = Some(value);
        }
        out
    }

    #[test]
    fn test_empty_history() {
        let history: HistoryBuffer<4> = HistoryBuffer::new();
        assert!(history.is_empty());
        assert_eq!(history.latest(), None);
        assert_eq!(history.snapshot().count(), 0);
    }

    #[test]
    fn test_fill_phase_appends() {
        let mut history: HistoryBuffer<4> = HistoryBuffer::new();
        history.push(1);
        history.push(2);
        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor, 1);
        assert_eq!(collect(&history)[..3], [Some(2), Some(1), None]);
    }

    #[test]
    fn test_wrap_overwrites_oldest() {
        let mut history: HistoryBuffer<3> = HistoryBuffer::new();
        for value in 1..=4 {
            history.push(value);
        }
        assert_eq!(history.len(), 3);
        assert!(history.is_full());
        assert_eq!(history.cursor, 0);
        assert_eq!(collect(&history)[..4], [Some(4), Some(3), Some(2), None]);
    }

    #[test]
    fn test_many_wraps_keep_last_values() {
        let mut history: HistoryBuffer<3> = HistoryBuffer::new();
        for value in 1..=11 {
            history.push(value);
        }
        assert_eq!(history.latest(), Some(11));
        assert_eq!(collect(&history)[..3], [Some(11), Some(10), Some(9)]);
    }

    #[test]
    fn test_history_capacity() {
        assert_eq!(history_capacity(86_400, 10), 8_640);
        assert_eq!(history_capacity(25, 10), 3);
        assert_eq!(history_capacity(0, 10), 1);
        assert_eq!(history_capacity(60, 0), 1);
    }
}
