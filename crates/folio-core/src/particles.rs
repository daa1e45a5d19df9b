//! Randomized styling for the decorative background particles.

use crate::constants::{
    PARTICLE_COUNT_DESKTOP, PARTICLE_COUNT_MOBILE, PARTICLE_MOBILE_BREAKPOINT_PX,
};
use rand::Rng;

/// Number of particles to generate for a viewport of the given CSS width.
#[inline]
pub fn particle_count(viewport_width: f64) -> usize {
    if viewport_width < PARTICLE_MOBILE_BREAKPOINT_PX {
        PARTICLE_COUNT_MOBILE
    } else {
        PARTICLE_COUNT_DESKTOP
    }
}

/// Style parameters for one particle. Written once, never mutated.
///
/// Ranges (half-open):
/// - `size_px` 2..6, `left_pct`/`top_pct` 0..100
/// - `hue` 180..240 (cyan to blue), `saturation` 70..100, `lightness` 50..70
/// - `opacity` 0.2..0.7, `duration_sec` 10..30, `delay_sec` 0..5
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleStyle {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub hue: u32,
    pub saturation: u32,
    pub lightness: u32,
    pub opacity: f64,
    pub duration_sec: f64,
    pub delay_sec: f64,
}

impl ParticleStyle {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_px: rng.gen_range(2.0..6.0),
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            hue: rng.gen_range(180..240),
            saturation: rng.gen_range(70..100),
            lightness: rng.gen_range(50..70),
            opacity: rng.gen_range(0.2..0.7),
            duration_sec: rng.gen_range(10.0..30.0),
            delay_sec: rng.gen_range(0.0..5.0),
        }
    }

    /// Inline `style` attribute value.
    pub fn css_text(&self) -> String {
        format!(
            "position: absolute; \
             width: {size}px; height: {size}px; \
             background-color: hsl({h}, {s}%, {l}%); \
             border-radius: 50%; \
             left: {left}%; top: {top}%; \
             opacity: {opacity}; \
             filter: blur({blur}px); \
             animation: float {dur}s infinite ease-in-out; \
             animation-delay: {delay}s;",
            size = self.size_px,
            h = self.hue,
            s = self.saturation,
            l = self.lightness,
            left = self.left_pct,
            top = self.top_pct,
            opacity = self.opacity,
            blur = self.size_px / 2.0,
            dur = self.duration_sec,
            delay = self.delay_sec,
        )
    }
}

/// The shared `float` keyframes. The intermediate stops drift by a random
/// offset in -10..10 px on each axis.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatKeyframes {
    pub offsets: [[f64; 2]; 3],
}

impl FloatKeyframes {
    const SCALES: [f64; 3] = [1.1, 0.9, 1.05];
    const STOPS: [u32; 3] = [25, 50, 75];

    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut offsets = [[0.0; 2]; 3];
        for o in offsets.iter_mut() {
            o[0] = rng.gen_range(-10.0..10.0);
            o[1] = rng.gen_range(-10.0..10.0);
        }
        Self { offsets }
    }

    pub fn css(&self) -> String {
        let mut out = String::from("@keyframes float {\n");
        out.push_str("    0%, 100% { transform: translate(0, 0) scale(1); }\n");
        for ((stop, [dx, dy]), scale) in Self::STOPS
            .iter()
            .zip(self.offsets.iter())
            .zip(Self::SCALES.iter())
        {
            out.push_str(&format!(
                "    {stop}% {{ transform: translate({dx}px, {dy}px) scale({scale}); }}\n"
            ));
        }
        out.push('}');
        out
    }
}
