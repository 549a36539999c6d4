use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::reveal::{RevealState, Stagger, Threshold, Variant};

#[derive(Debug, Clone, Copy)]
struct RevealContext {
    state: ReadSignal<RevealState>,
    stagger: Stagger,
}

/// Root of a revealed section.
///
/// Watches its own element and flips to visible the first time the visible
/// fraction reaches `threshold`, then disconnects the observer. With `eager`
/// it starts visible and never observes. Children read the flag through
/// [`RevealItem`].
#[component]
pub fn Reveal(
    #[prop(optional)] threshold: Threshold,
    #[prop(optional)] stagger: Stagger,
    #[prop(optional)] eager: bool,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let root = NodeRef::<html::Div>::new();
    let initial = if eager {
        RevealState::Visible
    } else {
        RevealState::Hidden
    };
    let (state, set_state) = signal(initial);

    if !eager {
        let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
            root,
            move |entries, _| {
                let ratio = entries
                    .iter()
                    .filter(|e| e.is_intersecting())
                    .map(|e| e.intersection_ratio())
                    .fold(0.0, f64::max);
                let current = state.get_untracked();
                let next = current.observe(ratio, threshold);
                if next != current {
                    set_state.set(next);
                }
            },
            UseIntersectionObserverOptions::default().thresholds(vec![threshold.value()]),
        );
        Effect::new(move |_| {
            if state.get().is_visible() {
                stop();
            }
        });
    }

    provide_context(RevealContext { state, stagger });

    view! {
        <div node_ref=root class=class>
            {children()}
        </div>
    }
}

/// One staggered child of a [`Reveal`]. `index` is its position among its
/// revealed siblings.
#[component]
pub fn RevealItem(
    #[prop(optional)] index: usize,
    #[prop(optional)] variant: Variant,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let RevealContext { state, stagger } = expect_context::<RevealContext>();
    let delay = stagger.delay_for(index);
    view! {
        <div class=class style=move || variant.style(state.get(), delay)>
            {children()}
        </div>
    }
}

/// The gradient underline under every section heading. Grows from zero width
/// once the surrounding section is revealed.
#[component]
pub fn Underline(#[prop(optional)] centered: bool) -> impl IntoView {
    let RevealContext { state, .. } = expect_context::<RevealContext>();
    let base = if centered {
        "h-1 bg-gradient-to-r from-blue-500 to-purple-500 rounded-full mx-auto mb-6 transition-all duration-1000 delay-500"
    } else {
        "h-1 bg-gradient-to-r from-blue-500 to-purple-500 rounded-full mb-8 transition-all duration-1000 delay-500"
    };
    view! {
        <div
            class=base
            style=move || {
                if state.get().is_visible() { "width: 6rem;" } else { "width: 0;" }
            }
        />
    }
}

/// Reveal flag of the enclosing [`Reveal`], for children that run their own
/// follow-up transitions.
pub fn use_reveal_state() -> ReadSignal<RevealState> {
    expect_context::<RevealContext>().state
}

/// Centered section heading with underline and optional lead paragraph.
#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] lead: Option<&'static str>,
) -> impl IntoView {
    view! {
        <RevealItem index=0 class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold mb-4 bg-gradient-to-r from-blue-400 to-purple-500 bg-clip-text text-transparent">
                {title}
            </h2>
            <Underline centered=true />
            {lead
                .map(|lead| {
                    view! {
                        <p class="text-xl text-gray-600 dark:text-gray-300 max-w-2xl mx-auto">
                            {lead}
                        </p>
                    }
                })}
        </RevealItem>
    }
}
