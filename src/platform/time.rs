//! Fixed-step frame clock
//!
//! Converts `requestAnimationFrame` timestamps into whole simulation ticks so
//! per-tick speeds mean the same thing on 60 Hz and 144 Hz displays.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest gap (seconds) credited in one frame, e.g. after a hidden tab
const MAX_FRAME_DT: f32 = 0.1;

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
    /// Last host timestamp (ms); `None` until the first frame
    last_time: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a host timestamp (ms) and get the number of ticks to run.
    ///
    /// The first frame always runs exactly one tick.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let dt = match self.last_time {
            Some(last) => (((now_ms - last) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT),
            None => SIM_DT,
        };
        self.last_time = Some(now_ms);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        // Drop whatever the substep cap left behind
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }

        substeps
    }

    /// Forget the last timestamp (e.g. when a hidden tab becomes visible)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_time = None;
    }
}
