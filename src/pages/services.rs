use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::content::services::SERVICES;
use crate::pages::shared::{stagger, CtaBanner, PageHero, ServiceCard};

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <PageHero
                tag="Our Services"
                title="Comprehensive"
                accent="Digital Solutions"
                lead="From web development to digital marketing, we offer a complete suite of services to help your business succeed in the digital landscape."
            />
            <section class="section">
                <div class="container grid-3">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <AnimatedSection delay={stagger(i, 0.1)}>
                            <ServiceCard {service} show_features=true />
                        </AnimatedSection>
                    }) }
                </div>
            </section>
            <CtaBanner
                title="Need a Custom Solution?"
                text="Don't see exactly what you need? We offer custom solutions tailored to your specific business requirements."
                button="Contact Us"
            />
        </div>
    }
}
