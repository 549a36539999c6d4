use leptos::prelude::*;
use leptos_meta::Title;

use super::about::About;
use super::certifications::Certifications;
use super::contact::Contact;
use super::education::Education;
use super::experience::Experience;
use super::hero::Hero;
use super::projects::Projects;
use super::skills::Skills;

/// The whole portfolio lives on one page; sections are linked by anchor.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Experience />
        <Projects />
        <Skills />
        <Education />
        <Certifications />
        <Contact />
    }
}
