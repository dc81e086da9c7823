use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::button::{ButtonSize, LinkButton};
use crate::components::icon::{Icon, IconView};
use crate::content::services::Service;
use crate::content::testimonials::{stars, Testimonial};
use crate::Route;

/// Stagger for cards in a grid, in seconds.
pub fn stagger(index: usize, step: f64) -> f64 {
    index as f64 * step
}

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub tag: AttrValue,
    pub title: AttrValue,
    pub accent: AttrValue,
    pub lead: AttrValue,
    #[prop_or_default]
    pub icon: Option<Icon>,
}

/// Heading block at the top of every inner page.
#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    html! {
        <section class="page-hero">
            <div class="page-hero-glow"></div>
            <div class="container">
                <AnimatedSection class="text-center narrow">
                    <span class="section-tag">
                        if let Some(icon) = props.icon {
                            <IconView {icon} />
                        }
                        { props.tag.clone() }
                    </span>
                    <h1 class="heading-xl">
                        { props.title.clone() }{" "}
                        <span class="accent">{ props.accent.clone() }</span>
                    </h1>
                    <p class="lead">{ props.lead.clone() }</p>
                </AnimatedSection>
            </div>
            <style>
                {r#"
                .page-hero {
                    position: relative;
                    padding: 6rem 0 4rem;
                    overflow: hidden;
                }
                .page-hero-glow {
                    position: absolute;
                    top: 2rem;
                    right: 10%;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 50%;
                    background: rgba(250, 255, 1, 0.12);
                    filter: blur(80px);
                    pointer-events: none;
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaBannerProps {
    pub title: AttrValue,
    pub text: AttrValue,
    pub button: AttrValue,
    #[prop_or(Route::Contact)]
    pub to: Route,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CtaBanner)]
pub fn cta_banner(props: &CtaBannerProps) -> Html {
    html! {
        <section class="section">
            <div class="container">
                <AnimatedSection>
                    <div class="cta-banner">
                        <h2 class="heading-lg">{ props.title.clone() }</h2>
                        <p>{ props.text.clone() }</p>
                        <div class="cta-actions">
                            <LinkButton to={props.to.clone()} size={ButtonSize::Lg} class="cta-dark">
                                { props.button.clone() }
                                <IconView icon={Icon::ArrowRight} />
                            </LinkButton>
                            { for props.children.iter() }
                        </div>
                    </div>
                </AnimatedSection>
            </div>
            <style>
                {r#"
                .cta-banner {
                    border-radius: 32px;
                    background: var(--accent);
                    color: #000;
                    padding: 4rem 2rem;
                    text-align: center;
                }
                .cta-banner p {
                    color: rgba(0, 0, 0, 0.7);
                    font-size: 1.15rem;
                    max-width: 40rem;
                    margin: 0 auto 2rem;
                }
                .cta-actions { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; }
                .btn.cta-dark { background: #000; color: #fff; }
                .btn.cta-dark:hover { background: rgba(0, 0, 0, 0.8); }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: &'static Service,
    #[prop_or_default]
    pub show_features: bool,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = props.service;
    html! {
        <Link<Route> to={Route::ServiceDetail { slug: service.slug.to_string() }} classes="card-link">
            <div class="card service-card">
                <div class="icon-badge"><IconView icon={service.icon} /></div>
                <h3>{ service.title }</h3>
                <p class="muted">{ service.short_description }</p>
                if props.show_features {
                    <ul class="feature-list">
                        { for service.features.iter().take(4).map(|feature| html! {
                            <li><IconView icon={Icon::Check} class="accent" />{ *feature }</li>
                        }) }
                    </ul>
                }
                <span class="card-more">
                    {"Learn More"}
                    <IconView icon={Icon::ArrowRight} />
                </span>
            </div>
            <style>
                {r#"
                .card-link { text-decoration: none; display: block; height: 100%; }
                .service-card h3 { font-size: 1.25rem; margin: 0 0 0.75rem; transition: color 0.2s; }
                .service-card:hover h3 { color: var(--accent); }
                .feature-list { list-style: none; padding: 0; margin: 0 0 1.5rem; }
                .feature-list li { display: flex; align-items: center; gap: 0.6rem; color: var(--foreground-muted); font-size: 0.9rem; margin-bottom: 0.5rem; }
                .feature-list .accent { font-size: 0.8rem; flex-shrink: 0; }
                .card-more { display: inline-flex; align-items: center; gap: 0.5rem; color: var(--accent); font-weight: 500; }
                "#}
            </style>
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
pub struct StarRatingProps {
    pub rating: u8,
}

#[function_component(StarRating)]
pub fn star_rating(props: &StarRatingProps) -> Html {
    html! {
        <div class="stars" aria-label={format!("{} out of 5 stars", props.rating)}>
            { for stars(props.rating).map(|filled| html! {
                <IconView icon={Icon::Star} class={classes!((!filled).then(|| "empty"))} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub testimonial: &'static Testimonial,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = props.testimonial;
    let initial = t.name.chars().next().map(String::from).unwrap_or_default();
    html! {
        <div class="card testimonial-card">
            <div class="testimonial-top">
                <StarRating rating={t.rating} />
                <IconView icon={Icon::Quote} class="testimonial-quote" />
            </div>
            <p class="testimonial-content">{ format!("\"{}\"", t.content) }</p>
            <div class="testimonial-author">
                <div class="avatar">{ initial }</div>
                <div>
                    <div class="author-name">{ t.name }</div>
                    <div class="muted small">{ format!("{}, {}", t.role, t.company) }</div>
                </div>
            </div>
            <style>
                {r#"
                .testimonial-top { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1.5rem; }
                .testimonial-quote { color: rgba(250, 255, 1, 0.3); font-size: 1.75rem; }
                .testimonial-content { font-size: 1.05rem; line-height: 1.7; margin: 0 0 1.5rem; }
                .testimonial-author { display: flex; align-items: center; gap: 1rem; padding-top: 1.5rem; border-top: 1px solid var(--border); }
                .avatar {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    background: rgba(250, 255, 1, 0.2);
                    color: var(--accent);
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                }
                .author-name { font-weight: 600; }
                .small { font-size: 0.875rem; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_scales_with_index() {
        assert_eq!(stagger(0, 0.1), 0.0);
        assert!((stagger(3, 0.1) - 0.3).abs() < 1e-9);
    }
}
