use leptos::{html, prelude::*};
use leptos_meta::Title;

use super::hero::Hero;
use super::reveal::use_reveal;
use crate::interactions::dom;
use crate::interactions::tenure::{employment_start, Tenure};

/// Renders the single-page portfolio.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <div class="max-w-6xl mx-auto page-content">
            <SkillsSection />
            <ExperienceSection />
            <EducationSection />
            <ContactSection />
        </div>
        <footer class="footer text-center text-sm py-8">
            <p>"Ashwin Kumar. Built with Rust and Leptos."</p>
        </footer>
    }
}

#[component]
fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="section">
            <h2 class="section-title text-xl font-bold my-8">"Skills"</h2>
            <div class="skills-grid grid grid-cols-2 sm:grid-cols-4 gap-4">
                <SkillItem name="Java" icon="devicon-java-plain" />
                <SkillItem name="Spring Boot" icon="devicon-spring-plain" />
                <SkillItem name="Python" icon="devicon-python-plain" />
                <SkillItem name="JavaScript" icon="devicon-javascript-plain" />
                <SkillItem name="React" icon="devicon-react-original" />
                <SkillItem name="PostgreSQL" icon="devicon-postgresql-plain" />
                <SkillItem name="Docker" icon="devicon-docker-plain" />
                <SkillItem name="Git" icon="devicon-git-plain" />
            </div>
        </section>
    }
}

/// Reveal-on-scroll tile; hovering swings the icon out and back.
#[component]
fn SkillItem(name: &'static str, icon: &'static str) -> impl IntoView {
    let item_ref = NodeRef::<html::Div>::new();
    let icon_ref = NodeRef::<html::I>::new();
    let revealed = use_reveal(item_ref);

    let swing = move |_| {
        if let Some(icon) = icon_ref.get_untracked() {
            dom::set_style(&icon, "transform", "scale(1.2) rotate(10deg)");
        }
    };
    let rest = move |_| {
        if let Some(icon) = icon_ref.get_untracked() {
            dom::set_style(&icon, "transform", "scale(1) rotate(0)");
        }
    };

    view! {
        <div
            node_ref=item_ref
            class="skill-item"
            class:fade-in=move || revealed.get()
            on:mouseenter=swing
            on:mouseleave=rest
        >
            <i node_ref=icon_ref class=icon></i>
            <span>{name}</span>
        </div>
    }
}

#[component]
fn ExperienceSection() -> impl IntoView {
    let (tenure, set_tenure) = signal(String::new());
    // filled on load so it reflects the visitor's current date
    Effect::new(move |_| {
        set_tenure.set(Tenure::since(employment_start()).to_string());
    });

    view! {
        <section id="experience" class="section">
            <h2 class="section-title text-xl font-bold my-8">"Experience"</h2>
            <ExperienceItem role="Software Engineer" org="eMudhra" period="Jun 2022 - Present">
                <p class="mb-2 leading-relaxed">
                    "Building PKI and digital-signature services: certificate "
                    "lifecycle APIs, signing workflows, and the hardening that "
                    "keeps them audit-ready."
                </p>
                <p class="tenure-line">
                    "Time on the team: " <span id="emudhra-expirence-date">{tenure}</span>
                </p>
            </ExperienceItem>
            <ExperienceItem
                role="Software Engineering Intern"
                org="Trustline Labs"
                period="Jan 2022 - Jun 2022"
            >
                <p class="mb-2 leading-relaxed">
                    "Automated integration-test rigs for payment reconciliation "
                    "jobs and cut the nightly run from hours to minutes."
                </p>
            </ExperienceItem>
        </section>
    }
}

/// Timeline entry that fades in when scrolled into view.
#[component]
fn ExperienceItem(
    role: &'static str,
    org: &'static str,
    period: &'static str,
    children: Children,
) -> impl IntoView {
    let item_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(item_ref);

    view! {
        <div node_ref=item_ref class="experience-item" class:fade-in=move || revealed.get()>
            <h3 class="font-bold">{role}</h3>
            <h4>{org}</h4>
            <span class="period text-sm">{period}</span>
            <div class="details mt-2">{children()}</div>
        </div>
    }
}

#[component]
fn EducationSection() -> impl IntoView {
    view! {
        <section id="education" class="section">
            <h2 class="section-title text-xl font-bold my-8">"Education"</h2>
            <EducationItem
                degree="B.E. Computer Science"
                school="Visvesvaraya Technological University"
                period="2018 - 2022"
            />
            <EducationItem
                degree="Pre-University, Science"
                school="National Public PU College, Bengaluru"
                period="2016 - 2018"
            />
        </section>
    }
}

#[component]
fn EducationItem(
    degree: &'static str,
    school: &'static str,
    period: &'static str,
) -> impl IntoView {
    let item_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(item_ref);

    view! {
        <div node_ref=item_ref class="education-item" class:fade-in=move || revealed.get()>
            <h3 class="font-bold">{degree}</h3>
            <h4>{school}</h4>
            <span class="period text-sm">{period}</span>
        </div>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="section">
            <h2 class="section-title text-xl font-bold my-8">"Contact"</h2>
            <div class="contact-grid flex flex-col sm:flex-row gap-4">
                <ContactItem icon="fas fa-envelope" label="Email" value="hello@ashwinkumar.dev" />
                <ContactItem icon="fas fa-location-dot" label="Location" value="Bengaluru, India" />
            </div>
            <div class="social-links flex gap-3 mt-6 text-2xl">
                <SocialLink
                    href="https://github.com/ashwinkumar-dev"
                    icon="devicon-github-plain"
                    label="GitHub Profile"
                />
                <SocialLink
                    href="https://linkedin.com/in/ashwinkumar-dev"
                    icon="devicon-linkedin-plain"
                    label="LinkedIn Profile"
                />
            </div>
        </section>
    }
}

#[component]
fn ContactItem(icon: &'static str, label: &'static str, value: &'static str) -> impl IntoView {
    let item_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(item_ref);

    view! {
        <div node_ref=item_ref class="contact-item" class:fade-in=move || revealed.get()>
            <i class=icon></i>
            <div>
                <h3 class="font-bold">{label}</h3>
                <p>{value}</p>
            </div>
        </div>
    }
}

/// Icon link that lifts and recolors on hover, the colors resolved from the
/// page's custom properties.
#[component]
fn SocialLink(href: &'static str, icon: &'static str, label: &'static str) -> impl IntoView {
    let link_ref = NodeRef::<html::A>::new();

    let lift = move |_| {
        if let Some(link) = link_ref.get_untracked() {
            dom::set_style(&link, "transform", "translateY(-5px)");
            if let Some(color) = dom::css_variable("--secondary-color") {
                dom::set_style(&link, "color", &color);
            }
        }
    };
    let settle = move |_| {
        if let Some(link) = link_ref.get_untracked() {
            dom::set_style(&link, "transform", "translateY(0)");
            if let Some(color) = dom::css_variable("--text-color") {
                dom::set_style(&link, "color", &color);
            }
        }
    };

    view! {
        <a
            node_ref=link_ref
            href=href
            target="_blank"
            rel="noopener noreferrer"
            aria-label=label
            on:mouseenter=lift
            on:mouseleave=settle
        >
            <i class=icon></i>
        </a>
    }
}
