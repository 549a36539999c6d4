use leptos::prelude::*;

use super::reveal::{Reveal, RevealItem, SectionHeading};
use crate::content::{Project, PROJECTS};
use crate::reveal::{Threshold, Variant};

#[component]
pub fn Projects() -> impl IntoView {
    let (selected, set_selected) = signal(None::<usize>);

    view! {
        <section id="projects" class="py-20 px-6">
            <div class="container mx-auto max-w-6xl">
                <Reveal threshold=Threshold::LOOSE>
                    <SectionHeading
                        title="Featured Projects"
                        lead="A showcase of my recent work, demonstrating expertise in full-stack development and modern web technologies."
                    />
                    <div class="grid md:grid-cols-2 gap-8">
                        {PROJECTS
                            .iter()
                            .enumerate()
                            .map(|(i, project)| {
                                let index = i + 1;
                                view! {
                                    <RevealItem index variant=Variant::RISE_FAR>
                                        <ProjectCard project on_open=move || set_selected.set(Some(i)) />
                                    </RevealItem>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
            {move || {
                selected
                    .get()
                    .and_then(|i| PROJECTS.get(i))
                    .map(|project| {
                        view! { <ProjectModal project on_close=move || set_selected.set(None) /> }
                    })
            }}
        </section>
    }
}

#[component]
fn ProjectCard<F>(project: &'static Project, on_open: F) -> impl IntoView
where
    F: Fn() + Send + Sync + 'static,
{
    let overlay_class = format!(
        "absolute inset-0 bg-gradient-to-br {} opacity-5 group-hover:opacity-10 transition-opacity duration-300",
        project.gradient,
    );
    let icon_class = format!(
        "inline-flex p-4 rounded-xl bg-gradient-to-r {} text-white text-3xl mb-6 shadow-lg",
        project.gradient,
    );
    view! {
        <div
            class="group relative h-full bg-white/70 dark:bg-slate-900/60 backdrop-blur-sm border border-blue-500/20 rounded-2xl p-8 cursor-pointer overflow-hidden transition-all duration-300 hover:scale-105 hover:-translate-y-2 hover:shadow-2xl hover:shadow-blue-500/20"
            on:click=move |_| on_open()
        >
            <div class=overlay_class />
            <div class="relative z-10">
                <div class=icon_class>{project.icon}</div>
                <h3 class="text-2xl font-bold mb-4 group-hover:text-blue-400 transition-colors">
                    {project.title}
                </h3>
                <p class="text-gray-600 dark:text-gray-300 mb-6 leading-relaxed">
                    {project.description}
                </p>
                <TechBadges technologies=project.technologies />
                <span class="text-blue-400 font-semibold">"View details →"</span>
            </div>
        </div>
    }
}

#[component]
fn TechBadges(technologies: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2 mb-6">
            {technologies
                .iter()
                .map(|tech| {
                    view! {
                        <span class="px-3 py-1 bg-blue-600/20 text-blue-400 rounded-full text-sm font-medium border border-blue-500/30">
                            {*tech}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Detail overlay. Closes on backdrop click or the close button; clicks inside
/// the panel do not propagate to the backdrop.
#[component]
fn ProjectModal<F>(project: &'static Project, on_close: F) -> impl IntoView
where
    F: Fn() + Clone + Send + Sync + 'static,
{
    let close_backdrop = on_close.clone();
    let icon_class = format!(
        "p-3 rounded-xl bg-gradient-to-r {} text-white text-2xl",
        project.gradient,
    );
    view! {
        <div
            class="fixed inset-0 bg-black/80 backdrop-blur-sm z-50 flex items-center justify-center p-6"
            role="dialog"
            aria-modal="true"
            on:click=move |_| close_backdrop()
        >
            <div
                class="bg-white dark:bg-slate-900 border border-blue-500/30 rounded-2xl p-8 max-w-2xl w-full max-h-[90vh] overflow-y-auto"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="flex items-start justify-between mb-6">
                    <div class="flex items-center gap-4">
                        <div class=icon_class>{project.icon}</div>
                        <h3 class="text-2xl font-bold">{project.title}</h3>
                    </div>
                    <button
                        class="text-gray-400 hover:text-white text-2xl transition-colors"
                        aria-label="Close"
                        on:click=move |_| on_close()
                    >
                        "×"
                    </button>
                </div>
                <p class="text-gray-600 dark:text-gray-300 mb-6 leading-relaxed">
                    {project.long_description}
                </p>
                <h4 class="text-lg font-semibold mb-4">"Key Features"</h4>
                <ul class="grid md:grid-cols-2 gap-2 mb-6">
                    {project
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <li class="flex items-center gap-2 text-gray-600 dark:text-gray-300">
                                    <span class="w-2 h-2 bg-blue-400 rounded-full" />
                                    {*feature}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <h4 class="text-lg font-semibold mb-4">"Technologies Used"</h4>
                <TechBadges technologies=project.technologies />
            </div>
        </div>
    }
}
