use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_section::{AnimatedSection, Direction};
use crate::components::button::{ButtonSize, LinkButton};
use crate::components::icon::{Icon, IconView};
use crate::content::services::{get_service_by_slug, related_services};
use crate::pages::shared::{stagger, CtaBanner, ServiceCard};
use crate::Route;

const PROCESS: &[(&str, &str, &str)] = &[
    ("01", "Discovery", "Understanding your needs and goals"),
    ("02", "Planning", "Creating a detailed project roadmap"),
    ("03", "Execution", "Building with precision and care"),
    ("04", "Delivery", "Launch and ongoing support"),
];

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub slug: String,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    let Some(service) = get_service_by_slug(&props.slug) else {
        log::info!("Unknown service '{}', redirecting to listing", props.slug);
        return html! { <Redirect<Route> to={Route::Services} /> };
    };
    let lower = service.title.to_lowercase();

    html! {
        <div class="service-detail-page">
            <section class="page-hero detail-hero">
                <div class="container grid-2 detail-hero-grid">
                    <AnimatedSection direction={Direction::Left}>
                        <Link<Route> to={Route::Services} classes="back-link">
                            <IconView icon={Icon::ArrowLeft} />{"Back to Services"}
                        </Link<Route>>
                        if service.featured {
                            <span class="section-tag">
                                <IconView icon={Icon::Sparkles} />{"Featured Service"}
                            </span>
                        }
                        <h1 class="heading-xl">{ service.title }</h1>
                        <p class="lead">{ service.description }</p>
                        <LinkButton to={Route::Contact} size={ButtonSize::Lg}>
                            {"Get Started"}<IconView icon={Icon::ArrowRight} />
                        </LinkButton>
                    </AnimatedSection>
                    <AnimatedSection direction={Direction::Right}>
                        <div class="detail-visual">
                            <div class="detail-visual-icon"><IconView icon={service.icon} /></div>
                            <p class="muted">{ service.short_description }</p>
                        </div>
                    </AnimatedSection>
                </div>
            </section>

            <section class="section">
                <div class="container grid-2">
                    <AnimatedSection direction={Direction::Left}>
                        <span class="section-tag">{"What We Offer"}</span>
                        <h2 class="heading-lg">{"Key Features"}</h2>
                        <p class="muted">
                            { format!("Our {} service includes everything you need to succeed in today's competitive market.", lower) }
                        </p>
                        <div class="detail-list">
                            { for service.features.iter().map(|feature| html! {
                                <div class="detail-item">
                                    <IconView icon={Icon::CheckCircle} class="accent" />
                                    <span>{ *feature }</span>
                                </div>
                            }) }
                        </div>
                    </AnimatedSection>
                    <AnimatedSection direction={Direction::Right}>
                        <span class="section-tag">{"Why Choose Us"}</span>
                        <h2 class="heading-lg">{"Benefits"}</h2>
                        <p class="muted">
                            { format!("Partnering with us for {} brings numerous advantages to your business.", lower) }
                        </p>
                        <div class="detail-list">
                            { for service.benefits.iter().enumerate().map(|(i, benefit)| html! {
                                <div class="detail-item">
                                    <span class="benefit-index">{ i + 1 }</span>
                                    <span>{ *benefit }</span>
                                </div>
                            }) }
                        </div>
                    </AnimatedSection>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <AnimatedSection class="text-center narrow detail-head">
                        <span class="section-tag">{"Our Process"}</span>
                        <h2 class="heading-lg">{"How We Work"}</h2>
                        <p class="lead">{"A streamlined process that ensures quality delivery and client satisfaction."}</p>
                    </AnimatedSection>
                    <div class="grid-4">
                        { for PROCESS.iter().enumerate().map(|(i, (step, title, desc))| html! {
                            <AnimatedSection delay={stagger(i, 0.1)}>
                                <div class="card">
                                    <div class="process-step">{ *step }</div>
                                    <h3>{ *title }</h3>
                                    <p class="muted">{ *desc }</p>
                                </div>
                            </AnimatedSection>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <AnimatedSection class="text-center narrow detail-head">
                        <h2 class="heading-lg">{"Related Services"}</h2>
                        <p class="lead">{"Explore other services that might complement your needs."}</p>
                    </AnimatedSection>
                    <div class="grid-3">
                        { for related_services(service, 3).into_iter().enumerate().map(|(i, service)| html! {
                            <AnimatedSection delay={stagger(i, 0.1)}>
                                <ServiceCard {service} />
                            </AnimatedSection>
                        }) }
                    </div>
                </div>
            </section>

            <CtaBanner
                title="Ready to Get Started?"
                text={format!("Let's discuss how our {} service can help your business grow.", lower)}
                button="Contact Us"
            />

            <style>
                {r#"
                .back-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: var(--foreground-muted);
                    text-decoration: none;
                    margin-bottom: 2rem;
                }
                .back-link:hover { color: var(--accent); }
                .detail-hero-grid { align-items: center; gap: 4rem; }
                .detail-visual {
                    aspect-ratio: 1;
                    border-radius: 32px;
                    background: var(--card-bg);
                    border: 1px solid var(--border);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    padding: 2rem;
                    text-align: center;
                }
                .detail-visual-icon {
                    width: 8rem;
                    height: 8rem;
                    border-radius: 32px;
                    background: var(--accent);
                    color: #000;
                    font-size: 3.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .detail-head { margin-bottom: 3rem; }
                .detail-list { display: flex; flex-direction: column; gap: 1rem; margin-top: 2rem; }
                .detail-item {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem 1.25rem;
                    border-radius: 16px;
                    background: var(--card-bg);
                    border: 1px solid var(--border);
                }
                .benefit-index {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    background: rgba(250, 255, 1, 0.15);
                    color: var(--accent);
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                }
                .process-step { font-size: 2.5rem; font-weight: 800; color: rgba(250, 255, 1, 0.3); }
                "#}
            </style>
        </div>
    }
}
