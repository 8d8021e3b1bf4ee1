//! Session state shared between pipeline stages
//!
//! Every stored signal remembers which upstream artifact it was computed
//! from, so a caller can tell when, say, the noisy signal predates the
//! current base signal.

use serde::Serialize;

use crate::domain::{Frequency, Signal};

/// The six user-triggered pipeline stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Generate,
    AddNoise,
    Spectrum,
    Shift,
    Demodulate,
    LowPass,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Generate,
        Stage::AddNoise,
        Stage::Spectrum,
        Stage::Shift,
        Stage::Demodulate,
        Stage::LowPass,
    ];

    /// Short button label
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Generate => "generate",
            Stage::AddNoise => "noise",
            Stage::Spectrum => "spectrum",
            Stage::Shift => "shift",
            Stage::Demodulate => "demod",
            Stage::LowPass => "lpf",
        }
    }
}

/// A stored signal plus its lineage
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub samples: Signal,
    /// Unique id assigned when the artifact was produced
    pub generation: u64,
    /// Generation of the artifact this one was computed from (0 for roots)
    pub source: u64,
}

/// Everything a stage may read or write
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    signal: Option<Artifact>,
    noisy: Option<Artifact>,
    shifted: Option<Artifact>,
    carrier: Option<Frequency>,
    last_view: Option<Stage>,
    next_generation: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signal(&self) -> Option<&Signal> {
        self.signal.as_ref().map(|a| &a.samples)
    }

    pub fn noisy(&self) -> Option<&Signal> {
        self.noisy.as_ref().map(|a| &a.samples)
    }

    pub fn shifted(&self) -> Option<&Signal> {
        self.shifted.as_ref().map(|a| &a.samples)
    }

    pub fn carrier(&self) -> Option<Frequency> {
        self.carrier
    }

    /// The stage whose plot was drawn most recently
    pub fn last_view(&self) -> Option<Stage> {
        self.last_view
    }

    /// True if the noisy signal was derived from an older base signal
    pub fn noisy_is_stale(&self) -> bool {
        match (&self.signal, &self.noisy) {
            (Some(signal), Some(noisy)) => noisy.source != signal.generation,
            _ => false,
        }
    }

    /// True if the stored shifted signal was derived from an older noisy signal
    pub fn shifted_is_stale(&self) -> bool {
        match (&self.noisy, &self.shifted) {
            (Some(noisy), Some(shifted)) => shifted.source != noisy.generation,
            _ => false,
        }
    }

    /// Furthest point reached along `Empty → HasSignal → HasNoisySignal → HasShiftedSignal`
    pub fn progress(&self) -> Progress {
        if self.shifted.is_some() {
            Progress::HasShiftedSignal
        } else if self.noisy.is_some() {
            Progress::HasNoisySignal
        } else if self.signal.is_some() {
            Progress::HasSignal
        } else {
            Progress::Empty
        }
    }

    pub(crate) fn with_signal(&self, samples: Signal) -> Self {
        let mut next = self.clone();
        let generation = next.bump();
        next.signal = Some(Artifact {
            samples,
            generation,
            source: 0,
        });
        next.last_view = Some(Stage::Generate);
        next
    }

    pub(crate) fn with_noisy(&self, samples: Signal) -> Self {
        let mut next = self.clone();
        let source = next.signal.as_ref().map_or(0, |a| a.generation);
        let generation = next.bump();
        next.noisy = Some(Artifact {
            samples,
            generation,
            source,
        });
        next.last_view = Some(Stage::AddNoise);
        next
    }

    pub(crate) fn with_shifted(&self, samples: Signal, carrier: Frequency) -> Self {
        let mut next = self.clone();
        let source = next.noisy.as_ref().map_or(0, |a| a.generation);
        let generation = next.bump();
        next.shifted = Some(Artifact {
            samples,
            generation,
            source,
        });
        next.carrier = Some(carrier);
        next.last_view = Some(Stage::Shift);
        next
    }

    pub(crate) fn with_view(&self, stage: Stage) -> Self {
        let mut next = self.clone();
        next.last_view = Some(stage);
        next
    }

    fn bump(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }
}

/// Coarse position in the stage state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Progress {
    Empty,
    HasSignal,
    HasNoisySignal,
    HasShiftedSignal,
}
