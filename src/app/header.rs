use leptos::{either::Either, prelude::*};

use crate::content::{NAV_LINKS, PROFILE};
use crate::theme::Theme;

#[component]
pub fn Header(theme: Signal<Theme>, set_theme: WriteSignal<Theme>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let toggle_theme = move |_| {
        let next = theme.get_untracked().toggled();
        log::debug!("switching theme to {next:?}");
        set_theme.set(next);
    };

    view! {
        <header class="fixed top-0 inset-x-0 z-50 bg-white/80 dark:bg-slate-900/80 backdrop-blur-md border-b border-blue-500/20 shadow-lg">
            <nav class="container mx-auto max-w-6xl px-6 py-4 flex items-center justify-between">
                <a
                    href="#home"
                    class="text-2xl font-bold bg-gradient-to-r from-blue-400 to-purple-500 bg-clip-text text-transparent hover:scale-110 transition-transform"
                >
                    {PROFILE.initials}
                </a>
                <div class="hidden md:flex items-center gap-8">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="relative font-medium hover:text-blue-400 transition-colors group"
                                >
                                    {link.label}
                                    <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-blue-400 transition-all duration-300 group-hover:w-full" />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex items-center gap-4">
                    <button
                        type="button"
                        on:click=toggle_theme
                        aria-label=move || theme.get().toggle_label()
                        class="p-2 rounded-full bg-slate-200 dark:bg-slate-800 hover:scale-110 hover:rotate-12 active:scale-90 transition-all"
                    >
                        {move || theme.get().toggle_icon()}
                    </button>
                    <button
                        type="button"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        aria-label="Toggle menu"
                        class="md:hidden p-2 rounded-lg hover:bg-slate-200 dark:hover:bg-slate-800 transition-colors"
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </nav>
            {move || {
                if menu_open.get() {
                    Either::Left(
                        view! {
                            <div class="md:hidden border-t border-blue-500/20 px-6 py-4 flex flex-col gap-4">
                                {NAV_LINKS
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                on:click=move |_| set_menu_open.set(false)
                                                class="font-medium hover:text-blue-400 hover:translate-x-2 transition-all"
                                            >
                                                {link.label}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        },
                    )
                } else {
                    Either::Right(())
                }
            }}
        </header>
    }
}
