use std::time::Duration;

use leptos::prelude::*;

use super::reveal::{use_reveal_state, Reveal, RevealItem, SectionHeading};
use crate::content::{EXPERIENCE, EXPERIENCE_QUOTE};
use crate::reveal::{Stagger, Variant};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 px-6 bg-slate-800/30">
            <div class="container mx-auto max-w-4xl">
                <Reveal>
                    <SectionHeading title="Experience" />

                    <RevealItem
                        index=1
                        variant=Variant::RISE_FAR
                        class="relative bg-white/70 dark:bg-slate-900/60 backdrop-blur-sm border border-blue-500/20 rounded-2xl p-8 shadow-2xl hover:shadow-blue-500/10 transition-all duration-300"
                    >
                        <div class="mb-6">
                            <div class="flex items-center gap-3 mb-2">
                                <span class="text-blue-400 text-2xl">"🏢"</span>
                                <h3 class="text-2xl font-bold">{EXPERIENCE.position}</h3>
                            </div>
                            <p class="text-xl text-purple-400 font-semibold mb-3">
                                {EXPERIENCE.company}
                            </p>
                            <div class="flex flex-wrap gap-6 text-gray-500 dark:text-gray-400">
                                <span>"📅 " {EXPERIENCE.duration}</span>
                                <span>"📍 " {EXPERIENCE.location}</span>
                            </div>
                        </div>
                        <h4 class="text-lg font-semibold mb-4">"Key Contributions"</h4>
                        <Contributions />
                    </RevealItem>

                    <RevealItem index=2 class="text-center mt-12">
                        <p class="text-lg text-gray-500 dark:text-gray-400 italic">
                            "\"" {EXPERIENCE_QUOTE} "\""
                        </p>
                    </RevealItem>
                </Reveal>
            </div>
        </section>
    }
}

/// Contribution bullets slide in one by one, 100ms apart, after the card.
#[component]
fn Contributions() -> impl IntoView {
    let state = use_reveal_state();
    let stagger = Stagger::new(Duration::from_millis(500), Duration::from_millis(100));
    let variant = Variant::new(-20, 0, Duration::from_millis(600));
    view! {
        <ul class="space-y-3">
            {EXPERIENCE
                .contributions
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let delay = stagger.delay_for(i);
                    let style = move || variant.style(state.get(), delay);
                    view! {
                        <li class="flex items-start gap-3 text-gray-600 dark:text-gray-300" style=style>
                            <span class="text-green-400">"✔"</span>
                            <span>{*item}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
