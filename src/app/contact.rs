use leptos::{either::Either, prelude::*};

use super::reveal::{Reveal, RevealItem, SectionHeading};
use crate::contact::{ContactForm, ContactStatus, Resolution, RESET_AFTER};
use crate::content::PROFILE;

#[server]
pub async fn send_message(
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<(), ServerFnError> {
    use crate::contact::mailer::{Mailer, GLOBAL_MAILER};

    let form = ContactForm {
        name,
        email,
        subject,
        message,
    };
    if let Err(e) = form.validate() {
        tracing::warn!(error = %e, "rejected contact form");
        return Err(ServerFnError::new(e));
    }
    let mailer = match &*GLOBAL_MAILER {
        Ok(mailer) => mailer,
        Err(e) => {
            tracing::error!(error = %e, "contact form submitted but mailer is not configured");
            return Err(ServerFnError::new(e));
        }
    };
    match mailer.send(&form).await {
        Ok(()) => {
            tracing::info!(from = %form.email, subject = %form.subject, "contact message sent");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "contact message failed");
            Err(ServerFnError::new(e))
        }
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 px-6">
            <div class="container mx-auto max-w-6xl">
                <Reveal>
                    <SectionHeading
                        title="Get In Touch"
                        lead="Ready to create something amazing together? Let's discuss your next project and turn your ideas into reality."
                    />
                    <div class="grid lg:grid-cols-2 gap-12">
                        <RevealItem index=1 class="space-y-8">
                            <ContactInfo />
                        </RevealItem>
                        <RevealItem index=2>
                            <MessageForm />
                        </RevealItem>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let cards = [
        ("✉", "Email", PROFILE.email, PROFILE.mailto(), "from-blue-500 to-cyan-500"),
        ("📞", "Phone", PROFILE.phone, PROFILE.tel(), "from-green-500 to-emerald-500"),
        ("📍", "Location", PROFILE.location, "#".to_string(), "from-purple-500 to-pink-500"),
    ];
    view! {
        <div>
            <h3 class="text-2xl font-bold mb-6">"Let's Connect"</h3>
            <p class="text-gray-600 dark:text-gray-300 leading-relaxed mb-8">
                "I'm always excited to work on new projects and collaborate with amazing people. Whether you have a project in mind or just want to say hello, feel free to reach out!"
            </p>
        </div>
        <div class="space-y-4">
            {cards
                .into_iter()
                .map(|(icon, label, value, href, color)| {
                    let icon_class = format!(
                        "p-3 rounded-lg bg-gradient-to-r {color} text-white text-xl shadow-lg transition-transform hover:rotate-6 hover:scale-110"
                    );
                    view! {
                        <a
                            href=href
                            class="flex items-center gap-4 p-4 bg-white/70 dark:bg-slate-900/60 backdrop-blur-sm border border-blue-500/20 rounded-xl hover:border-blue-500/40 hover:scale-105 hover:translate-x-2 active:scale-95 transition-all duration-300 group"
                        >
                            <div class=icon_class>{icon}</div>
                            <div>
                                <h4 class="font-semibold group-hover:text-blue-400 transition-colors">
                                    {label}
                                </h4>
                                <p class="text-gray-500 dark:text-gray-400">{value}</p>
                            </div>
                        </a>
                    }
                })
                .collect_view()}
        </div>
        <div class="pt-8">
            <h4 class="text-lg font-semibold mb-4">"Follow Me"</h4>
            <div class="flex gap-4">
                <a
                    href=PROFILE.github
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="GitHub Profile"
                    class="p-3 bg-gray-700 hover:bg-gray-600 text-white text-2xl rounded-xl hover:scale-125 hover:rotate-6 active:scale-90 transition-all"
                >
                    <i class="devicon-github-original"></i>
                </a>
                <a
                    href=PROFILE.linkedin
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="LinkedIn Profile"
                    class="p-3 bg-blue-600 hover:bg-blue-700 text-white text-2xl rounded-xl hover:scale-125 hover:-rotate-6 active:scale-90 transition-all"
                >
                    <i class="devicon-linkedin-plain"></i>
                </a>
            </div>
        </div>
    }
}

/// Contact form bound to [`ContactStatus`].
///
/// Fields are cleared on a successful send and kept on failure. Whatever the
/// outcome, the banner is dropped [`RESET_AFTER`] later unless a newer send is
/// still in flight.
#[component]
fn MessageForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(ContactStatus::Idle);
    let send = ServerAction::<SendMessage>::new();

    let current_form = move || ContactForm {
        name: name.get_untracked(),
        email: email.get_untracked(),
        subject: subject.get_untracked(),
        message: message.get_untracked(),
    };
    let set_form = move |form: ContactForm| {
        name.set(form.name);
        email.set(form.email);
        subject.set(form.subject);
        message.set(form.message);
    };

    Effect::watch(
        move || send.value().get(),
        move |result, _, _| {
            let Some(result) = result else {
                return;
            };
            if let Err(e) = result {
                log::warn!("contact form failed: {e}");
            }
            let Resolution {
                status: next,
                form,
                arm_reset,
            } = status.get_untracked().resolve(current_form(), result);
            set_form(form);
            status.set(next);
            if arm_reset {
                set_timeout(move || status.update(|s| *s = s.reset()), RESET_AFTER);
            }
        },
        false,
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(next) = status.get_untracked().submit() else {
            return;
        };
        status.set(next);
        let ContactForm {
            name,
            email,
            subject,
            message,
        } = current_form();
        send.dispatch(SendMessage {
            name,
            email,
            subject,
            message,
        });
    };

    let input_class = "w-full px-4 py-3 bg-white dark:bg-slate-800 border border-gray-300 dark:border-gray-600 rounded-lg placeholder-gray-400 focus:border-blue-500 focus:ring-1 focus:ring-blue-500 focus:scale-[1.02] transition-all duration-200";
    let label_class = "text-sm font-medium text-gray-600 dark:text-gray-300";

    view! {
        <form
            on:submit=on_submit
            class="bg-white/70 dark:bg-slate-900/60 backdrop-blur-sm border border-blue-500/20 rounded-2xl p-8 space-y-6"
        >
            <h3 class="text-2xl font-bold mb-6">"Send Message"</h3>
            <div class="grid md:grid-cols-2 gap-4">
                <div class="space-y-2">
                    <label for="contact_name" class=label_class>
                        "Your Name"
                    </label>
                    <input
                        id="contact_name"
                        type="text"
                        name="name"
                        required
                        placeholder="John Doe"
                        class=input_class
                        bind:value=name
                    />
                </div>
                <div class="space-y-2">
                    <label for="contact_email" class=label_class>
                        "Your Email"
                    </label>
                    <input
                        id="contact_email"
                        type="email"
                        name="email"
                        required
                        placeholder="john@example.com"
                        class=input_class
                        bind:value=email
                    />
                </div>
            </div>
            <div class="space-y-2">
                <label for="contact_subject" class=label_class>
                    "Subject"
                </label>
                <input
                    id="contact_subject"
                    type="text"
                    name="subject"
                    required
                    placeholder="Project Discussion"
                    class=input_class
                    bind:value=subject
                />
            </div>
            <div class="space-y-2">
                <label for="contact_message" class=label_class>
                    "Message"
                </label>
                <textarea
                    id="contact_message"
                    name="message"
                    required
                    rows="5"
                    placeholder="Tell me about your project..."
                    class=format!("{input_class} resize-none")
                    bind:value=message
                ></textarea>
            </div>
            <button
                type="submit"
                disabled=move || {
                    let blank = ContactForm {
                        name: name.get(),
                        email: email.get(),
                        subject: subject.get(),
                        message: message.get(),
                    }
                        .is_empty();
                    blank || status.get().is_sending()
                }
                class="w-full px-6 py-4 bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 text-white font-semibold rounded-lg hover:scale-105 active:scale-95 transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed flex items-center justify-center gap-2"
            >
                {move || {
                    if status.get().is_sending() {
                        Either::Left(
                            view! {
                                <div class="w-5 h-5 border-2 border-white border-t-transparent rounded-full animate-spin" />
                                <span>"Sending..."</span>
                            },
                        )
                    } else {
                        Either::Right(view! { <span>"➤ Send Message"</span> })
                    }
                }}
            </button>
            {move || {
                let current = status.get();
                current
                    .banner()
                    .map(|text| {
                        let (class, icon) = if current == ContactStatus::Success {
                            (
                                "flex items-center gap-2 p-4 bg-green-600/20 border border-green-500/30 rounded-lg text-green-400",
                                "✔",
                            )
                        } else {
                            (
                                "flex items-center gap-2 p-4 bg-red-600/20 border border-red-500/30 rounded-lg text-red-400",
                                "⚠",
                            )
                        };
                        view! {
                            <div class=class role="status">
                                <span>{icon}</span>
                                <span>{text}</span>
                            </div>
                        }
                    })
            }}
        </form>
    }
}
