//! Timed playback of a pad sequence.

use crate::{Epoch, Pad, TimerQueue, Timing};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// A visual/audio cue for one pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// Light the pad and play its tone.
    Activate(Pad),
    /// Switch the pad's light off.
    Deactivate(Pad),
}

/// One cue at an offset from the start of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackStep {
    /// Offset from the moment playback was requested.
    pub offset: Duration,
    /// What happens at that offset.
    pub cue: Cue,
}

/// Computes the cue plan for a sequence.
///
/// Pad `i` lights at `(i + 1) * step` and goes dark `light` later.
/// Offsets are exact multiples of the cadence, so the sequence keeps its
/// order however coarse the driving tick is.
pub fn plan_playback(sequence: &[Pad], timing: &Timing) -> Vec<PlaybackStep> {
    sequence
        .iter()
        .enumerate()
        .flat_map(|(index, &pad)| {
            let on = timing.step() * (index as u32 + 1);
            [
                PlaybackStep {
                    offset: on,
                    cue: Cue::Activate(pad),
                },
                PlaybackStep {
                    offset: on + timing.light(),
                    cue: Cue::Deactivate(pad),
                },
            ]
        })
        .collect()
}

/// Enqueues the playback of `sequence` and returns its span.
///
/// The call never blocks. Completion is not signalled; the caller schedules
/// its own follow-up after the returned span plus a settle delay.
#[instrument(skip(queue, timing), fields(len = sequence.len()))]
pub fn play_sequence<T>(
    queue: &mut TimerQueue<T>,
    epoch: Epoch,
    sequence: &[Pad],
    timing: &Timing,
) -> Duration
where
    T: From<Cue>,
{
    for step in plan_playback(sequence, timing) {
        queue.schedule(step.offset, epoch, T::from(step.cue));
    }
    let span = timing.step() * sequence.len() as u32;
    debug!(?span, "Playback scheduled");
    span
}
