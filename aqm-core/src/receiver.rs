//! Frame-Empfang aus einer `ByteSource`
//!
//! Kennt keine Feld-Semantik, sammelt nur genau `FRAME_LEN` Bytes.

use crate::frame::{FRAME_LEN, FrameError, RawFrame};
use crate::traits::ByteSource;

/// Versucht ein komplettes Frame zu lesen
///
/// Blockiert nie: sind weniger als `FRAME_LEN` Bytes da, wird nichts
/// konsumiert und `IncompleteFrame` zurückgegeben. Überzählige Bytes
/// bleiben für den nächsten Aufruf in der Quelle.
pub fn receive<S: ByteSource + ?Sized>(source: &mut S) -> Result<RawFrame, FrameError> {
    let available = source.available();
    if available < FRAME_LEN {
        return Err(FrameError::IncompleteFrame { available });
    }

    let mut frame = [0u8; FRAME_LEN];
    let read = source.read(&mut frame);
    if read < FRAME_LEN {
        return Err(FrameError::IncompleteFrame { available: read });
    }

    Ok(frame)
}

/// Verwirft alle aktuell verfügbaren Bytes (Resync nach `InvalidFraming`)
///
/// Gibt die Anzahl der verworfenen Bytes zurück.
pub fn drain<S: ByteSource + ?Sized>(source: &mut S) -> usize {
    let mut scratch = [0u8; FRAME_LEN];
    let mut discarded = 0;

    while source.available() > 0 {
        let n = source.read(&mut scratch);
        if n == 0 {
            break;
        }
        discarded += n;
    }

    discarded
}
