use leptos::prelude::*;

use crate::content::{FOOTER_LINKS, PROFILE};

#[component]
pub fn Footer() -> impl IntoView {
    let year = env!("BUILD_YEAR");
    view! {
        <footer class="relative z-10 border-t border-blue-500/20 bg-white/60 dark:bg-slate-900/60 backdrop-blur-sm">
            <div class="container mx-auto max-w-6xl px-6 py-12">
                <div class="grid md:grid-cols-3 gap-8">
                    <div class="space-y-4">
                        <h3 class="text-2xl font-bold bg-gradient-to-r from-blue-400 to-purple-500 bg-clip-text text-transparent">
                            {PROFILE.name}
                        </h3>
                        <p class="text-gray-600 dark:text-gray-400 leading-relaxed">{PROFILE.tagline}</p>
                        <div class="flex gap-4">
                            <a
                                href=PROFILE.github
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="GitHub Profile"
                                class="text-2xl hover:text-blue-400 hover:scale-125 transition-all"
                            >
                                <i class="devicon-github-original"></i>
                            </a>
                            <a
                                href=PROFILE.linkedin
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="LinkedIn Profile"
                                class="text-2xl hover:text-blue-400 hover:scale-125 transition-all"
                            >
                                <i class="devicon-linkedin-plain"></i>
                            </a>
                            <a
                                href=PROFILE.mailto()
                                aria-label="Email"
                                class="text-2xl hover:text-blue-400 hover:scale-125 transition-all"
                            >
                                "✉"
                            </a>
                        </div>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold mb-4">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {FOOTER_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <a
                                                href=link.href
                                                class="text-gray-600 dark:text-gray-400 hover:text-blue-400 hover:translate-x-1 inline-block transition-all"
                                            >
                                                {link.label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold mb-4">"Contact Info"</h4>
                        <ul class="space-y-2 text-gray-600 dark:text-gray-400">
                            <li>{PROFILE.location}</li>
                            <li>
                                <a href=PROFILE.tel() class="hover:text-blue-400 transition-colors">
                                    {PROFILE.phone}
                                </a>
                            </li>
                            <li>
                                <a href=PROFILE.mailto() class="hover:text-blue-400 transition-colors">
                                    {PROFILE.email}
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>
                <div class="mt-12 pt-8 border-t border-blue-500/20 flex flex-col md:flex-row items-center justify-between gap-4">
                    <p class="text-gray-500 text-sm">
                        "© " {year} " " {PROFILE.name} ". Built with Rust and Leptos."
                    </p>
                    <a
                        href="#home"
                        aria-label="Back to top"
                        class="p-3 rounded-full bg-gradient-to-r from-blue-600 to-purple-600 text-white hover:scale-110 hover:-translate-y-1 active:scale-90 transition-all"
                    >
                        "↑"
                    </a>
                </div>
            </div>
        </footer>
    }
}
