use leptos::prelude::*;

use super::reveal::{Reveal, RevealItem, SectionHeading};
use crate::content::{
    featured_certification, other_certifications, Certification, CERTIFICATION_STATS,
};
use crate::reveal::{Stagger, Variant};

#[component]
pub fn Certifications() -> impl IntoView {
    let stats_index = other_certifications().count() + 2;
    view! {
        <section id="certifications" class="py-20 px-6 bg-slate-800/30">
            <div class="container mx-auto max-w-6xl">
                <Reveal stagger=Stagger::CARDS>
                    <SectionHeading
                        title="Certifications"
                        lead="Professional certifications and achievements that validate my expertise and commitment to continuous learning."
                    />
                    {featured_certification()
                        .map(|cert| {
                            view! {
                                <RevealItem index=1 variant=Variant::RISE_FAR class="mb-12">
                                    <FeaturedCard cert />
                                </RevealItem>
                            }
                        })}
                    <div class="grid md:grid-cols-3 gap-8">
                        {other_certifications()
                            .enumerate()
                            .map(|(i, cert)| {
                                let index = i + 2;
                                view! {
                                    <RevealItem index variant=Variant::RISE_FAR>
                                        <CertCard cert />
                                    </RevealItem>
                                }
                            })
                            .collect_view()}
                    </div>
                    <RevealItem index=stats_index class="mt-16 grid grid-cols-2 md:grid-cols-4 gap-6">
                        {CERTIFICATION_STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="text-center p-6 bg-white/70 dark:bg-slate-900/60 backdrop-blur-sm border border-blue-500/20 rounded-xl hover:scale-105 transition-transform duration-300">
                                        <div class="text-3xl font-bold text-blue-400 mb-2">
                                            {stat.value}
                                        </div>
                                        <div class="text-gray-400 text-sm">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </RevealItem>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn FeaturedCard(cert: &'static Certification) -> impl IntoView {
    let icon_class = format!(
        "p-6 rounded-2xl bg-gradient-to-r {} text-white text-5xl shadow-2xl",
        cert.gradient
    );
    view! {
        <div class="relative bg-gradient-to-r from-yellow-500/10 to-orange-500/10 border-2 border-yellow-500/30 rounded-2xl p-8 overflow-hidden">
            <div class="absolute top-4 right-4 px-3 py-1 bg-yellow-500 text-black text-sm font-bold rounded-full animate-pulse">
                "FEATURED"
            </div>
            <div class="flex flex-col md:flex-row items-center gap-8">
                <div class=icon_class>{cert.icon}</div>
                <div class="flex-1 text-center md:text-left">
                    <h3 class="text-3xl font-bold mb-2">{cert.title}</h3>
                    <p class="text-xl text-yellow-400 font-semibold mb-4">{cert.provider}</p>
                    <p class="text-gray-600 dark:text-gray-300 leading-relaxed mb-6">
                        {cert.description}
                    </p>
                    <SkillTags skills=cert.skills tag_class="px-3 py-1 bg-yellow-500/20 text-yellow-400 rounded-full text-sm font-medium border border-yellow-500/30" />
                </div>
            </div>
        </div>
    }
}

#[component]
fn CertCard(cert: &'static Certification) -> impl IntoView {
    let overlay_class = format!(
        "absolute inset-0 bg-gradient-to-br {} opacity-5 group-hover:opacity-10 transition-opacity duration-300",
        cert.gradient
    );
    let icon_class = format!(
        "inline-flex p-4 rounded-xl bg-gradient-to-r {} text-white text-3xl mb-6 shadow-lg",
        cert.gradient
    );
    view! {
        <div class="group relative h-full bg-white/70 dark:bg-slate-900/60 backdrop-blur-sm border border-blue-500/20 rounded-2xl p-6 overflow-hidden transition-all duration-300 hover:scale-105 hover:-translate-y-1 hover:shadow-2xl hover:shadow-blue-500/20">
            <div class=overlay_class />
            <div class="relative z-10">
                <div class=icon_class>{cert.icon}</div>
                <h3 class="text-xl font-bold mb-2 group-hover:text-blue-400 transition-colors">
                    {cert.title}
                </h3>
                <p class="text-blue-400 font-semibold mb-4">{cert.provider}</p>
                <p class="text-gray-600 dark:text-gray-300 text-sm leading-relaxed mb-4">
                    {cert.description}
                </p>
                <SkillTags skills=cert.skills tag_class="px-2 py-1 bg-blue-600/20 text-blue-400 rounded text-xs font-medium" />
            </div>
        </div>
    }
}

#[component]
fn SkillTags(skills: &'static [&'static str], tag_class: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2 justify-center md:justify-start">
            {skills
                .iter()
                .map(|skill| view! { <span class=tag_class>{*skill}</span> })
                .collect_view()}
        </div>
    }
}
