//! Particle Burst Component

use dioxus::prelude::*;
use portfolio_core::Particle;

/// Renders placed particles. Each one animates outward along its angle
/// using the custom properties in its inline style.
#[component]
pub fn ParticleBurst(
    particles: Vec<Particle>,
    /// Extra class on the container (`celebration`, `fact-burst`)
    #[props(default)]
    class: Option<String>,
) -> Element {
    let class = match class.as_deref() {
        Some(extra) => format!("particle-burst {}", extra),
        None => "particle-burst".to_string(),
    };

    rsx! {
        div { class: "{class}", "aria-hidden": "true",
            for (i, particle) in particles.iter().enumerate() {
                span {
                    key: "{i}",
                    class: "burst-particle",
                    style: "{particle.style()}",
                    "{particle.glyph}"
                }
            }
        }
    }
}
