//! Fade-in shapes for celebratory sounds

use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

/// Gain curve applied while a sound fades in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FadeCurve {
    #[default]
    Linear,
    /// Rises quickly, settles gently at full volume
    Sine,
    /// Smoothstep: gentle at both ends
    SCurve,
}

impl FadeCurve {
    pub fn name(&self) -> &'static str {
        match self {
            FadeCurve::Linear => "Linear",
            FadeCurve::Sine => "Sine",
            FadeCurve::SCurve => "SCurve",
        }
    }

    /// Gain at fade progress `t`, both in `0.0..=1.0`
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            FadeCurve::Linear => t,
            FadeCurve::Sine => (t * FRAC_PI_2).sin(),
            FadeCurve::SCurve => t * t * (3.0 - 2.0 * t),
        }
    }

    /// Gains for an `steps`-step ramp, ending at exactly 1.0
    pub fn ramp(&self, steps: u32) -> Vec<f32> {
        let steps = steps.max(1);
        (1..=steps)
            .map(|i| {
                if i == steps {
                    1.0
                } else {
                    self.evaluate(i as f32 / steps as f32)
                }
            })
            .collect()
    }
}
