use dioxus::prelude::*;
use services::particle_field;

use crate::context::AppContext;

#[component]
pub fn ParticleField() -> Element {
    let ctx = use_context::<AppContext>();
    let particles = use_hook(|| particle_field(ctx.particle_seed()));

    rsx! {
        div { class: "particles", aria_hidden: "true",
            for (index, particle) in particles.iter().enumerate() {
                div { key: "{index}", class: "particle", style: "{particle.style()}" }
            }
        }
    }
}
