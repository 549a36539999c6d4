mod about;
mod certifications;
mod contact;
mod education;
mod experience;
mod footer;
mod header;
mod hero;
mod homepage;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

use crate::content::PROFILE;
use crate::theme::Theme;

use footer::Footer;
use header::Header;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

/// Theme signal pair. Persisted to local storage in the browser, plain
/// in-memory default on the server.
fn use_theme() -> (Signal<Theme>, WriteSignal<Theme>) {
    #[cfg(feature = "hydrate")]
    {
        // hydrate with the server's default first, then pick up the stored value
        let (theme, set_theme, _) = use_local_storage_with_options::<Theme, JsonSerdeWasmCodec>(
            crate::theme::STORAGE_KEY,
            UseStorageOptions::default().delay_during_hydration(true),
        );
        (theme, set_theme)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let (theme, set_theme) = signal(Theme::default());
        (theme.into(), set_theme)
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let (theme, set_theme) = use_theme();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.tagline />

        <Router>
            <div class=move || theme.get().root_class()>
                <Header theme set_theme />
                <main class="relative z-10">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
