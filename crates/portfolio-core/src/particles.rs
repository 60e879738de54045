//! Decorative particle bursts.
//!
//! Particles sit evenly around a circle; only their distance and glyph are
//! random. None of this feeds back into page state.

use std::f64::consts::TAU;
use std::time::Duration;

use rand::Rng;

/// Shape of a burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstSpec {
    pub count: usize,
    /// Minimum travel distance in pixels
    pub base_distance: f64,
    /// Random extra distance, uniform in `[0, jitter)`
    pub jitter: f64,
    pub glyphs: &'static [&'static str],
    pub lifetime: Duration,
}

/// Burst shown after a successful submission.
pub const CELEBRATION: BurstSpec = BurstSpec {
    count: 12,
    base_distance: 100.0,
    jitter: 100.0,
    glyphs: &["🎉", "🎊", "✨", "🌟", "💫", "🎈"],
    lifetime: Duration::from_millis(2000),
};

/// Burst when the fun-fact card is clicked.
pub const FUN_FACT: BurstSpec = BurstSpec {
    count: 6,
    base_distance: 50.0,
    jitter: 30.0,
    glyphs: &["🌸", "✨", "💫", "🌺", "🌟", "💖"],
    lifetime: Duration::from_millis(1000),
};

/// One placed particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub glyph: &'static str,
    /// Radians
    pub angle: f64,
    /// Pixels
    pub distance: f64,
}

impl Particle {
    /// Offset from the burst origin.
    pub fn offset(&self) -> (f64, f64) {
        (self.angle.cos() * self.distance, self.angle.sin() * self.distance)
    }

    /// Inline style carrying the end offset the burst keyframes read.
    pub fn style(&self) -> String {
        let (x, y) = self.offset();
        format!("--burst-x: {:.1}px; --burst-y: {:.1}px;", x, y)
    }
}

/// Place `shape.count` particles at angles `TAU * i / count`.
pub fn burst<R: Rng + ?Sized>(shape: &BurstSpec, rng: &mut R) -> Vec<Particle> {
    (0..shape.count)
        .map(|i| {
            let angle = TAU * i as f64 / shape.count as f64;
            let extra = if shape.jitter > 0.0 {
                rng.random_range(0.0..shape.jitter)
            } else {
                0.0
            };
            let glyph = if shape.glyphs.is_empty() {
                "✨"
            } else {
                shape.glyphs[rng.random_range(0..shape.glyphs.len())]
            };
            Particle {
                glyph,
                angle,
                distance: shape.base_distance + extra,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn celebration_geometry() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = burst(&CELEBRATION, &mut rng);
        assert_eq!(particles.len(), 12);
        for (i, p) in particles.iter().enumerate() {
            let expected = TAU * i as f64 / 12.0;
            assert!((p.angle - expected).abs() < 1e-12);
            assert!(p.distance >= 100.0 && p.distance < 200.0);
            assert!(CELEBRATION.glyphs.contains(&p.glyph));
        }
    }

    #[test]
    fn offset_points_along_angle() {
        let p = Particle {
            glyph: "✨",
            angle: 0.0,
            distance: 50.0,
        };
        let (x, y) = p.offset();
        assert!((x - 50.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
        assert_eq!(p.style(), "--burst-x: 50.0px; --burst-y: 0.0px;");
    }

    #[test]
    fn style_points_down_at_quarter_turn() {
        let p = Particle {
            glyph: "🎉",
            angle: TAU / 4.0,
            distance: 100.0,
        };
        assert_eq!(p.style(), "--burst-x: 0.0px; --burst-y: 100.0px;");
    }

    #[test]
    fn zero_jitter_is_exact() {
        let shape = BurstSpec {
            jitter: 0.0,
            ..FUN_FACT
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert!(burst(&shape, &mut rng).iter().all(|p| p.distance == 50.0));
    }
}
