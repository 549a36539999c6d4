use std::time::Duration;

use leptos::prelude::*;

use super::reveal::{use_reveal_state, Reveal, RevealItem, SectionHeading};
use crate::content::{skills_in, Skill, SkillCategory, SKILLS};
use crate::reveal::{Ease, RevealState, Stagger, Variant};

#[component]
pub fn Skills() -> impl IntoView {
    let bubbles_index = SkillCategory::ALL.len() + 1;
    view! {
        <section id="skills" class="py-20 px-6 bg-slate-800/30">
            <div class="container mx-auto max-w-6xl">
                <Reveal stagger=Stagger::TIGHT>
                    <SectionHeading
                        title="Technical Skills"
                        lead="A comprehensive overview of my technical expertise across various domains of software development."
                    />
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                        {SkillCategory::ALL
                            .into_iter()
                            .enumerate()
                            .map(|(i, category)| {
                                let index = i + 1;
                                view! {
                                    <RevealItem index variant=Variant::POP>
                                        <CategoryCard category />
                                    </RevealItem>
                                }
                            })
                            .collect_view()}
                    </div>
                    <RevealItem index=bubbles_index class="mt-16 text-center">
                        <h3 class="text-2xl font-bold mb-8">"Interactive Skills"</h3>
                        <SkillBubbles />
                    </RevealItem>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(category: SkillCategory) -> impl IntoView {
    let title_class = format!(
        "text-xl font-bold mb-6 text-center bg-gradient-to-r {} bg-clip-text text-transparent",
        category.gradient()
    );
    view! {
        <div class="h-full bg-white/70 dark:bg-slate-900/60 backdrop-blur-sm border border-blue-500/20 rounded-2xl p-6 transition-all duration-300 hover:scale-105 hover:border-blue-500/40">
            <h3 class=title_class>{category.label()}</h3>
            <div class="space-y-4">
                {skills_in(category)
                    .enumerate()
                    .map(|(i, skill)| view! { <SkillBar skill order=i /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Level bar that fills to the skill's level once the section is revealed.
#[component]
fn SkillBar(skill: &'static Skill, order: usize) -> impl IntoView {
    let state = use_reveal_state();
    let delay = Stagger::CARDS.delay_for(order);
    let bar_class = format!(
        "h-full bg-gradient-to-r {} rounded-full transition-[width] duration-[1500ms] ease-out",
        skill.gradient
    );
    let width = skill.bar_width();
    let label = width.clone();
    let style = move || match state.get() {
        RevealState::Hidden => "width: 0%;".to_string(),
        RevealState::Visible => format!(
            "width: {width}; transition-delay: {}ms;",
            delay.as_millis()
        ),
    };
    view! {
        <div class="space-y-2">
            <div class="flex justify-between items-center">
                <span class="font-medium">{skill.name}</span>
                <span class="text-gray-400 text-sm">{label}</span>
            </div>
            <div class="h-2 bg-slate-300 dark:bg-slate-700 rounded-full overflow-hidden">
                <div class=bar_class style=style />
            </div>
        </div>
    }
}

#[component]
fn SkillBubbles() -> impl IntoView {
    let state = use_reveal_state();
    let stagger = Stagger::new(Duration::from_millis(300), Duration::from_millis(50));
    let variant = Variant::new(0, 0, Duration::from_millis(500)).eased(Ease::Linear);
    view! {
        <div class="flex flex-wrap justify-center gap-4">
            {SKILLS
                .iter()
                .enumerate()
                .map(|(i, skill)| {
                    let delay = stagger.delay_for(i);
                    let class = format!(
                        "px-6 py-3 bg-gradient-to-r {} rounded-full text-white font-semibold cursor-pointer shadow-lg hover:shadow-xl hover:scale-125 hover:-rotate-6 transition-transform duration-300",
                        skill.gradient
                    );
                    view! {
                        <div style=move || variant.style(state.get(), delay)>
                            <div class=class>{skill.name}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
