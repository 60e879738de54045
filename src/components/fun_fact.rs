//! Fun fact card; clicking it sends out a small burst.

use dioxus::prelude::*;
use portfolio_core::particles::{self, FUN_FACT};
use portfolio_core::Particle;

use crate::components::ParticleBurst;

#[component]
pub fn FunFactCard() -> Element {
    let mut burst: Signal<Option<(u64, Vec<Particle>)>> = use_signal(|| None);
    let mut bursts = use_signal(|| 0u64);

    let on_click = move |_| {
        let id = bursts() + 1;
        bursts.set(id);
        burst.set(Some((id, particles::burst(&FUN_FACT, &mut rand::rng()))));

        spawn(async move {
            tokio::time::sleep(FUN_FACT.lifetime).await;
            // A newer click owns the burst now
            if burst.peek().as_ref().map(|(b, _)| *b) == Some(id) {
                burst.set(None);
            }
        });
    };

    rsx! {
        div { class: "contact-card fun-fact hover-lift", onclick: on_click,
            h3 { "🌈 Fun Fact" }
            p {
                "I once spent a whole weekend building a tiny game just to see whether "
                "I could make a pixel cat chase a laser pointer. It could."
            }
            if let Some((id, particles)) = burst() {
                ParticleBurst { key: "{id}", particles, class: "fact-burst".to_string() }
            }
        }
    }
}
