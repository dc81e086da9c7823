use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_section::{AnimatedSection, Direction};
use crate::components::button::{ButtonSize, ButtonVariant, LinkButton};
use crate::components::icon::{Icon, IconView};
use crate::config;
use crate::content::blog::recent_posts;
use crate::content::portfolio::featured_portfolio;
use crate::content::services::featured_services;
use crate::content::testimonials::TESTIMONIALS;
use crate::pages::shared::{stagger, CtaBanner, ServiceCard, TestimonialCard};
use crate::utils::format_date;
use crate::Route;

const STATS: &[(&str, &str)] = &[
    ("10+", "Years Experience"),
    ("500+", "Projects Delivered"),
    ("200+", "Happy Clients"),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <section class="home-hero">
                <div class="home-hero-glow"></div>
                <div class="container">
                    <AnimatedSection class="home-hero-inner">
                        <p class="home-hello">
                            {"Hiya, we're "}<span class="accent">{ config::SITE_NAME }</span>{" 👋"}
                        </p>
                        <h1 class="heading-xl">
                            {"A digital agency "}
                            <span class="accent">{"transforming"}</span>
                            {" businesses through design & technology"}
                        </h1>
                        <p class="lead home-lead">
                            {"We craft stunning websites, powerful applications, and winning marketing strategies that propel your business into the future."}
                        </p>
                        <div class="home-actions">
                            <LinkButton to={Route::Portfolio} size={ButtonSize::Lg}>
                                {"View our work"}<IconView icon={Icon::ArrowRight} />
                            </LinkButton>
                            <LinkButton to={Route::About} size={ButtonSize::Lg} variant={ButtonVariant::Outline}>
                                {"Meet the team"}
                            </LinkButton>
                        </div>
                    </AnimatedSection>
                </div>
            </section>

            <section class="section alt">
                <div class="container">
                    <AnimatedSection class="section-head split">
                        <div>
                            <span class="eyebrow">{"Our Work"}</span>
                            <h2 class="heading-lg">{"Selected projects"}</h2>
                        </div>
                        <LinkButton to={Route::Portfolio} variant={ButtonVariant::Ghost}>
                            {"View all projects"}<IconView icon={Icon::ArrowRight} />
                        </LinkButton>
                    </AnimatedSection>
                    <div class="grid-2">
                        { for featured_portfolio().take(4).enumerate().map(|(i, item)| html! {
                            <AnimatedSection delay={stagger(i, 0.1)}>
                                <Link<Route> to={Route::Portfolio} classes="work-tile">
                                    <div class="work-tile-inner" data-cursor-hover="true">
                                        <img src={item.image} alt={item.title} loading="lazy" />
                                        <div class="work-tile-caption">
                                            <span class="accent small">{ item.category }</span>
                                            <h3>{ item.title }</h3>
                                        </div>
                                    </div>
                                </Link<Route>>
                            </AnimatedSection>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <AnimatedSection class="text-center narrow section-head">
                        <span class="eyebrow">{"Our Expertise"}</span>
                        <h2 class="heading-lg">{"Services we offer"}</h2>
                        <p class="lead">
                            {"From web development to digital marketing, we offer comprehensive solutions to help your business thrive."}
                        </p>
                    </AnimatedSection>
                    <div class="grid-4">
                        { for featured_services().enumerate().map(|(i, service)| html! {
                            <AnimatedSection delay={stagger(i, 0.1)}>
                                <ServiceCard {service} />
                            </AnimatedSection>
                        }) }
                    </div>
                    <AnimatedSection class="text-center more-row">
                        <LinkButton to={Route::Services} variant={ButtonVariant::Outline}>
                            {"View all services"}<IconView icon={Icon::ArrowRight} />
                        </LinkButton>
                    </AnimatedSection>
                </div>
            </section>

            <section class="section alt">
                <div class="container grid-2 about-split">
                    <AnimatedSection direction={Direction::Left}>
                        <span class="eyebrow">{"About Us"}</span>
                        <h2 class="heading-lg">{"We're passionate about digital excellence"}</h2>
                        <p class="lead">
                            {"Founded with a vision to transform businesses through technology, we've been helping brands establish their digital presence and achieve remarkable growth."}
                        </p>
                        <div class="stat-row">
                            { for STATS.iter().map(|(value, label)| html! {
                                <div>
                                    <div class="stat-value">{ *value }</div>
                                    <div class="muted small">{ *label }</div>
                                </div>
                            }) }
                        </div>
                        <LinkButton to={Route::About}>
                            {"Learn more about us"}<IconView icon={Icon::ArrowRight} />
                        </LinkButton>
                    </AnimatedSection>
                    <AnimatedSection direction={Direction::Right}>
                        <div class="about-image">
                            <img src="https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=600&q=80" alt="Our team at work" loading="lazy" />
                            <div class="rating-badge">
                                <IconView icon={Icon::Star} class="accent" />
                                <div>
                                    <strong>{"4.9/5"}</strong>
                                    <div class="muted small">{"Client Rating"}</div>
                                </div>
                            </div>
                        </div>
                    </AnimatedSection>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <AnimatedSection class="text-center narrow section-head">
                        <span class="eyebrow">{"Testimonials"}</span>
                        <h2 class="heading-lg">{"What our clients say"}</h2>
                    </AnimatedSection>
                    <div class="grid-3">
                        { for TESTIMONIALS.iter().take(3).enumerate().map(|(i, testimonial)| html! {
                            <AnimatedSection delay={stagger(i, 0.1)}>
                                <TestimonialCard {testimonial} />
                            </AnimatedSection>
                        }) }
                    </div>
                    <AnimatedSection class="text-center more-row">
                        <LinkButton to={Route::Testimonials} variant={ButtonVariant::Outline}>
                            {"View all testimonials"}<IconView icon={Icon::ArrowRight} />
                        </LinkButton>
                    </AnimatedSection>
                </div>
            </section>

            <section class="section alt">
                <div class="container">
                    <AnimatedSection class="section-head split">
                        <div>
                            <span class="eyebrow">{"From the Blog"}</span>
                            <h2 class="heading-lg">{"Latest insights"}</h2>
                        </div>
                        <LinkButton to={Route::Blog} variant={ButtonVariant::Ghost}>
                            {"Read the blog"}<IconView icon={Icon::ArrowRight} />
                        </LinkButton>
                    </AnimatedSection>
                    <div class="grid-3">
                        { for recent_posts(3).iter().enumerate().map(|(i, post)| html! {
                            <AnimatedSection delay={stagger(i, 0.1)}>
                                <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }} classes="card-link">
                                    <div class="card">
                                        <span class="pill">{ post.category }</span>
                                        <h3>{ post.title }</h3>
                                        <p class="muted">{ post.excerpt }</p>
                                        <span class="muted small">{ format_date(post.date) }{" · "}{ post.read_time }</span>
                                    </div>
                                </Link<Route>>
                            </AnimatedSection>
                        }) }
                    </div>
                </div>
            </section>

            <CtaBanner
                title="Let's work together"
                text="Have a project in mind? Get in touch and let's discuss how we can help transform your business."
                button="Start a project"
            />

            <style>
                {r#"
                .home-hero {
                    position: relative;
                    min-height: calc(100vh - 90px);
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                }
                .home-hero-glow {
                    position: absolute;
                    top: 10%;
                    right: 5%;
                    width: 32rem;
                    height: 32rem;
                    border-radius: 50%;
                    background: rgba(250, 255, 1, 0.15);
                    filter: blur(100px);
                    pointer-events: none;
                }
                .home-hero-inner { max-width: 64rem; }
                .home-hello { font-size: 1.5rem; color: var(--foreground-muted); margin-bottom: 1.5rem; }
                .home-lead { max-width: 48rem; margin-bottom: 3rem; }
                .home-actions { display: flex; flex-wrap: wrap; gap: 1rem; }
                .section.alt { background: #111111; }
                .section-head { margin-bottom: 3rem; }
                .section-head.split { display: flex; align-items: flex-end; justify-content: space-between; gap: 1rem; flex-wrap: wrap; }
                .eyebrow { display: block; color: var(--accent); font-weight: 500; margin-bottom: 0.5rem; }
                .more-row { margin-top: 3rem; }
                .work-tile { display: block; text-decoration: none; }
                .work-tile-inner { position: relative; aspect-ratio: 4 / 3; border-radius: 20px; overflow: hidden; }
                .work-tile img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.7s; }
                .work-tile:hover img { transform: scale(1.05); }
                .work-tile-caption {
                    position: absolute;
                    inset: auto 0 0 0;
                    padding: 1.5rem;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.85), transparent);
                }
                .work-tile-caption h3 { margin: 0.25rem 0 0; font-size: 1.5rem; }
                .about-split { align-items: center; gap: 4rem; }
                .stat-row { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; margin: 2rem 0; }
                .stat-value { font-size: 2.25rem; font-weight: 700; color: var(--accent); }
                .about-image { position: relative; }
                .about-image img { width: 100%; aspect-ratio: 1; object-fit: cover; border-radius: 20px; }
                .rating-badge {
                    position: absolute;
                    left: -1.5rem;
                    bottom: -1.5rem;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem 1.5rem;
                    border-radius: 16px;
                    background: #1a1a1a;
                    border: 1px solid var(--border);
                    font-size: 1.25rem;
                }
                "#}
            </style>
        </div>
    }
}
