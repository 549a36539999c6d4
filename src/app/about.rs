use leptos::prelude::*;

use super::reveal::{Reveal, RevealItem, Underline};
use crate::content::{ABOUT_STATS, PROFILE};
use crate::reveal::Variant;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 px-6">
            <div class="container mx-auto max-w-6xl">
                <Reveal class="grid lg:grid-cols-2 gap-12 items-center">
                    <RevealItem index=0 variant=Variant::FROM_LEFT class="relative">
                        <div class="relative w-full max-w-md mx-auto">
                            <div class="relative z-10 rounded-2xl overflow-hidden shadow-2xl transition-transform duration-300 hover:scale-105">
                                <div class="aspect-square bg-gradient-to-br from-blue-500 to-purple-700 p-1 rounded-2xl">
                                    <div class="w-full h-full rounded-xl overflow-hidden relative">
                                        <img
                                            src=PROFILE.photo
                                            alt="My Profile"
                                            class="w-full h-full object-contain scale-110"
                                        />
                                        <div class="absolute inset-0 bg-gradient-to-t from-black/50 to-transparent" />
                                    </div>
                                </div>
                            </div>
                            <div class="absolute -top-4 -right-4 w-20 h-20 bg-blue-500/20 rounded-full backdrop-blur-sm border border-blue-500/30 animate-pulse" />
                            <div class="absolute -bottom-4 -left-4 w-16 h-16 bg-purple-500/20 rounded-full backdrop-blur-sm border border-purple-500/30 animate-pulse" />
                        </div>
                    </RevealItem>

                    <RevealItem index=1 variant=Variant::FROM_RIGHT class="space-y-6">
                        <div>
                            <h2 class="text-4xl md:text-5xl font-bold mb-4 bg-gradient-to-r from-blue-400 to-purple-500 bg-clip-text text-transparent">
                                "About Me"
                            </h2>
                            <Underline />
                        </div>
                        <p class="text-lg text-gray-600 dark:text-gray-300 leading-relaxed">
                            "Full stack Developer skilled in building responsive, cross-platform web applications using "
                            <Hl color="text-blue-400">"React.js"</Hl>
                            ", "
                            <Hl color="text-blue-400">"Next.js"</Hl>
                            ", "
                            <Hl color="text-blue-400">"JavaScript"</Hl>
                            " and "
                            <Hl color="text-purple-400">"Node.js"</Hl>
                            ". Experienced with "
                            <Hl color="text-purple-400">"HTML5"</Hl>
                            ", "
                            <Hl color="text-purple-400">"CSS3"</Hl>
                            " and "
                            <Hl color="text-green-400">"Git"</Hl>
                            " version control."
                        </p>
                        <p class="text-lg text-gray-600 dark:text-gray-300 leading-relaxed">
                            "Proven ability to collaborate in "
                            <Hl color="text-yellow-400">"Agile teams"</Hl>
                            ", contribute to enterprise-level solutions, and ensure exceptional user experiences through clean UI and performance optimization."
                        </p>
                        <div class="grid grid-cols-2 gap-6 pt-8">
                            {ABOUT_STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="text-center p-4 bg-slate-800/50 rounded-lg backdrop-blur-sm border border-blue-500/20">
                                            <div class="text-3xl font-bold text-blue-400 mb-2">
                                                {stat.value}
                                            </div>
                                            <div class="text-gray-400">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </RevealItem>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Hl(color: &'static str, children: Children) -> impl IntoView {
    let class = format!("{color} font-semibold");
    view! { <span class=class>{children()}</span> }
}
