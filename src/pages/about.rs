use yew::prelude::*;

use crate::components::animated_section::{AnimatedSection, Direction};
use crate::components::button::{ButtonSize, ButtonVariant, LinkButton};
use crate::components::icon::{Icon, IconView};
use crate::pages::shared::{stagger, CtaBanner, PageHero};
use crate::Route;

struct Value {
    icon: Icon,
    title: &'static str,
    description: &'static str,
}

const VALUES: &[Value] = &[
    Value {
        icon: Icon::Target,
        title: "Excellence",
        description: "We strive for excellence in everything we do, delivering quality that exceeds expectations.",
    },
    Value {
        icon: Icon::Heart,
        title: "Passion",
        description: "We are passionate about technology and helping businesses succeed in the digital world.",
    },
    Value {
        icon: Icon::Users,
        title: "Collaboration",
        description: "We believe in working closely with our clients to understand their needs and goals.",
    },
    Value {
        icon: Icon::Award,
        title: "Innovation",
        description: "We stay at the forefront of technology to bring innovative solutions to our clients.",
    },
];

// (year, title, description)
const TIMELINE: &[(&str, &str, &str)] = &[
    ("2014", "Founded", "Started as a small web development studio"),
    ("2016", "Growth", "Expanded team and added app development services"),
    ("2018", "Expansion", "Opened new office and launched digital marketing division"),
    ("2020", "Innovation", "Introduced AI-powered solutions and automation"),
    ("2022", "Global", "Extended services to international markets"),
    ("2024", "Today", "Serving 200+ clients worldwide"),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <PageHero
                tag="About Us"
                title="We're a Team of Digital"
                accent="Innovators"
                lead="Since 2014, we've been helping businesses transform their digital presence and achieve remarkable growth through innovative technology solutions."
            />

            <section class="section">
                <div class="container grid-2">
                    <AnimatedSection direction={Direction::Left}>
                        <div class="card">
                            <div class="icon-badge"><IconView icon={Icon::Target} /></div>
                            <h2>{"Our Mission"}</h2>
                            <p class="muted">
                                {"To empower businesses with cutting-edge digital solutions that drive growth, enhance efficiency, and create lasting value. We believe in building partnerships that go beyond projects to create meaningful impact."}
                            </p>
                        </div>
                    </AnimatedSection>
                    <AnimatedSection direction={Direction::Right}>
                        <div class="card">
                            <div class="icon-badge"><IconView icon={Icon::Eye} /></div>
                            <h2>{"Our Vision"}</h2>
                            <p class="muted">
                                {"To be the leading digital agency that businesses trust for their digital transformation journey. We aim to set new standards in creativity, technology, and client success."}
                            </p>
                        </div>
                    </AnimatedSection>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <AnimatedSection class="text-center narrow about-head">
                        <span class="section-tag">{"Our Values"}</span>
                        <h2 class="heading-lg">{"What Drives Us Forward"}</h2>
                        <p class="lead">{"Our core values shape everything we do and how we work with our clients."}</p>
                    </AnimatedSection>
                    <div class="grid-4">
                        { for VALUES.iter().enumerate().map(|(i, value)| html! {
                            <AnimatedSection delay={stagger(i, 0.1)}>
                                <div class="card text-center">
                                    <div class="icon-badge centered"><IconView icon={value.icon} /></div>
                                    <h3>{ value.title }</h3>
                                    <p class="muted">{ value.description }</p>
                                </div>
                            </AnimatedSection>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <AnimatedSection class="text-center narrow about-head">
                        <span class="section-tag">{"Our Journey"}</span>
                        <h2 class="heading-lg">{"A Decade of Excellence"}</h2>
                        <p class="lead">{"From humble beginnings to serving clients worldwide, here's our story."}</p>
                    </AnimatedSection>
                    <div class="timeline">
                        { for TIMELINE.iter().enumerate().map(|(i, (year, title, description))| {
                            let side = if i % 2 == 0 { "left" } else { "right" };
                            html! {
                                <AnimatedSection delay={stagger(i, 0.1)} class={classes!("timeline-row", side)}>
                                    <div class="card timeline-card">
                                        <div class="timeline-year">{ *year }</div>
                                        <h3>{ *title }</h3>
                                        <p class="muted">{ *description }</p>
                                    </div>
                                    <div class="timeline-dot"></div>
                                </AnimatedSection>
                            }
                        }) }
                    </div>
                </div>
            </section>

            <CtaBanner
                title="Want to Work With Us?"
                text="Let's discuss how we can help transform your business."
                button="Get in Touch"
            >
                <LinkButton to={Route::Team} variant={ButtonVariant::Outline} size={ButtonSize::Lg} class="cta-outline">
                    {"Meet Our Team"}
                </LinkButton>
            </CtaBanner>

            <style>
                {r#"
                .about-head { margin-bottom: 3rem; }
                .icon-badge.centered { margin-left: auto; margin-right: auto; }
                .timeline { position: relative; max-width: 56rem; margin: 0 auto; }
                .timeline::before {
                    content: "";
                    position: absolute;
                    left: 50%;
                    top: 0;
                    bottom: 0;
                    width: 2px;
                    background: var(--border);
                }
                .timeline-row { position: relative; display: flex; margin-bottom: 2rem; }
                .timeline-row.left { justify-content: flex-start; }
                .timeline-row.right { justify-content: flex-end; }
                .timeline-card { width: calc(50% - 2rem); }
                .timeline-year { color: var(--accent); font-size: 1.5rem; font-weight: 700; }
                .timeline-dot {
                    position: absolute;
                    left: 50%;
                    top: 2rem;
                    width: 14px;
                    height: 14px;
                    margin-left: -7px;
                    border-radius: 50%;
                    background: var(--accent);
                }
                .btn.cta-outline { border-color: #000; color: #000; }
                @media (max-width: 768px) {
                    .timeline::before, .timeline-dot { display: none; }
                    .timeline-card { width: 100%; }
                }
                "#}
            </style>
        </div>
    }
}
