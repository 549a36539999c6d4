use leptos::prelude::*;

use super::reveal::{Reveal, RevealItem, SectionHeading};
use crate::content::{EDUCATION, EDUCATION_PHILOSOPHY};
use crate::reveal::Variant;

#[component]
pub fn Education() -> impl IntoView {
    let philosophy_index = EDUCATION.len() + 1;
    view! {
        <section id="education" class="py-20 px-6">
            <div class="container mx-auto max-w-4xl">
                <Reveal>
                    <SectionHeading title="Education" />
                    <div class="relative">
                        // timeline spine
                        <div class="absolute left-8 top-0 bottom-0 w-0.5 bg-gradient-to-b from-blue-500 via-purple-500 to-pink-500" />
                        <div class="space-y-12">
                            {EDUCATION
                                .iter()
                                .enumerate()
                                .map(|(i, edu)| {
                                    let index = i + 1;
                                    view! {
                                        <RevealItem index variant=Variant::FROM_LEFT class="relative flex items-start gap-8">
                                            <div class="relative z-10 flex-shrink-0 w-16 h-16 bg-gradient-to-r from-blue-500 to-purple-600 rounded-full flex items-center justify-center text-2xl shadow-lg">
                                                {edu.icon}
                                            </div>
                                            <div class="flex-1 bg-white/70 dark:bg-slate-900/60 backdrop-blur-sm border border-blue-500/20 rounded-2xl p-6 shadow-xl hover:shadow-2xl hover:shadow-blue-500/10 transition-all duration-300">
                                                <h3 class="text-xl font-bold mb-2">{edu.degree}</h3>
                                                <p class="text-lg text-blue-400 font-semibold mb-3">
                                                    {edu.institution}
                                                </p>
                                                <div class="flex flex-wrap gap-4 text-gray-500 dark:text-gray-400">
                                                    <span>"📅 " {edu.duration}</span>
                                                    <span>"📍 " {edu.location}</span>
                                                </div>
                                            </div>
                                        </RevealItem>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <RevealItem index=philosophy_index class="mt-16 text-center">
                        <div class="bg-gradient-to-r from-blue-600/20 to-purple-600/20 border border-blue-500/30 rounded-2xl p-8 backdrop-blur-sm">
                            <div class="text-5xl mb-4">"🎓"</div>
                            <h3 class="text-2xl font-bold mb-4">"Educational Philosophy"</h3>
                            <p class="text-gray-600 dark:text-gray-300 leading-relaxed max-w-2xl mx-auto">
                                "\"" {EDUCATION_PHILOSOPHY} "\""
                            </p>
                        </div>
                    </RevealItem>
                </Reveal>
            </div>
        </section>
    }
}
