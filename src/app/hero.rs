use leptos::prelude::*;

use super::reveal::{Reveal, RevealItem};
use crate::content::PROFILE;
use crate::reveal::Stagger;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="min-h-screen flex items-center justify-center relative px-6 pt-20">
            <Reveal eager=true stagger=Stagger::HERO class="text-center max-w-4xl mx-auto">
                <RevealItem index=0 class="mb-8 relative">
                    <div class="w-48 h-48 mx-auto rounded-full bg-gradient-to-r from-blue-500 to-purple-600 p-1 shadow-2xl transition-transform duration-300 hover:scale-110">
                        <div class="w-full h-full rounded-full bg-slate-800 flex items-center justify-center text-6xl font-bold text-white">
                            {PROFILE.initials}
                        </div>
                    </div>
                    <div class="absolute inset-0 w-48 h-48 mx-auto rounded-full border-2 border-dashed border-blue-500/30 animate-[spin_20s_linear_infinite]" />
                </RevealItem>

                <RevealItem index=1>
                    <h1 class="text-5xl md:text-7xl font-bold mb-4 bg-gradient-to-r from-blue-400 via-purple-500 to-pink-500 bg-clip-text text-transparent">
                        {PROFILE.name}
                    </h1>
                </RevealItem>

                <RevealItem index=2>
                    <h2 class="text-2xl md:text-3xl text-gray-600 dark:text-gray-300 mb-6 font-light">
                        {PROFILE.title}
                    </h2>
                </RevealItem>

                <RevealItem
                    index=3
                    class="flex flex-wrap justify-center gap-6 mb-8 text-gray-500 dark:text-gray-400"
                >
                    <div class="flex items-center gap-2">
                        <span class="text-blue-400">"📍"</span>
                        <span>{PROFILE.location}</span>
                    </div>
                    <div class="flex items-center gap-2">
                        <span class="text-blue-400">"📞"</span>
                        <span>{PROFILE.phone}</span>
                    </div>
                    <div class="flex items-center gap-2">
                        <span class="text-blue-400">"✉"</span>
                        <span>{PROFILE.email}</span>
                    </div>
                </RevealItem>

                <RevealItem index=4 class="flex flex-col sm:flex-row gap-4 justify-center mb-8">
                    <a
                        href=PROFILE.resume
                        download=""
                        class="px-8 py-4 bg-gradient-to-r from-blue-600 to-purple-600 text-white rounded-lg font-semibold flex items-center gap-2 justify-center shadow-lg hover:shadow-blue-500/25 hover:scale-105 hover:-translate-y-0.5 active:scale-95 transition-all duration-300"
                    >
                        "⬇ Download Resume"
                    </a>
                    <a
                        href="#contact"
                        class="px-8 py-4 border-2 border-blue-500 rounded-lg font-semibold flex items-center gap-2 justify-center hover:bg-blue-500/10 hover:scale-105 hover:-translate-y-0.5 active:scale-95 transition-all duration-300"
                    >
                        "✉ Contact Me"
                    </a>
                </RevealItem>

                <RevealItem index=5 class="flex justify-center gap-6">
                    <a
                        href=PROFILE.linkedin
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="LinkedIn Profile"
                        class="p-3 bg-blue-600/20 rounded-full text-2xl hover:bg-blue-600/40 hover:scale-125 hover:rotate-12 active:scale-90 transition-all duration-300"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                    <a
                        href=PROFILE.github
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="GitHub Profile"
                        class="p-3 bg-gray-600/20 rounded-full text-2xl hover:bg-gray-600/40 hover:scale-125 hover:-rotate-12 active:scale-90 transition-all duration-300"
                    >
                        <i class="devicon-github-original"></i>
                    </a>
                </RevealItem>

                <a
                    href="#about"
                    aria-label="Scroll to about"
                    class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce"
                >
                    <div class="w-6 h-10 border-2 border-blue-400 rounded-full flex justify-center">
                        <div class="w-1 h-3 bg-blue-400 rounded-full mt-2" />
                    </div>
                </a>
            </Reveal>
        </section>
    }
}
