/// An in-flight animated scroll from one offset to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothScroll {
    from: usize,
    to: usize,
    started_ms: u64,
    duration_ms: u64,
}

impl SmoothScroll {
    pub const fn new(from: usize, to: usize, started_ms: u64, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            started_ms,
            duration_ms,
        }
    }

    /// Requested destination offset.
    pub const fn target(&self) -> usize {
        self.to
    }

    pub const fn is_finished(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.started_ms) >= self.duration_ms
    }

    /// Offset at `now_ms` on an ease-in-out curve.
    pub fn position_at(&self, now_ms: u64) -> usize {
        if self.is_finished(now_ms) {
            return self.to;
        }
        let elapsed = now_ms.saturating_sub(self.started_ms);
        // Interpolating row offsets; precision loss is irrelevant here.
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        {
            let t = elapsed as f64 / self.duration_ms as f64;
            let eased = if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            };
            let from = self.from as f64;
            let to = self.to as f64;
            (to - from).mul_add(eased, from).round().max(0.0) as usize
        }
    }
}
