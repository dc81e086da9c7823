use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::content::testimonials::TESTIMONIALS;
use crate::pages::shared::{stagger, CtaBanner, PageHero, TestimonialCard};

const STATS: &[(&str, &str)] = &[
    ("200+", "Happy Clients"),
    ("4.9", "Average Rating"),
    ("98%", "Satisfaction Rate"),
    ("150+", "5-Star Reviews"),
];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <div class="testimonials-page">
            <PageHero
                tag="Testimonials"
                title="What Our"
                accent="Clients Say"
                lead="Don't just take our word for it. Here's what our clients have to say about their experience working with us."
            />
            <section class="section stats-band">
                <div class="container grid-4">
                    { for STATS.iter().enumerate().map(|(i, (value, label))| html! {
                        <AnimatedSection delay={stagger(i, 0.1)} class="text-center">
                            <div class="stat-big">{ *value }</div>
                            <div class="muted">{ *label }</div>
                        </AnimatedSection>
                    }) }
                </div>
            </section>
            <section class="section">
                <div class="container grid-3">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, testimonial)| html! {
                        <AnimatedSection delay={stagger(i, 0.1)}>
                            <TestimonialCard {testimonial} />
                        </AnimatedSection>
                    }) }
                </div>
            </section>
            <CtaBanner
                title="Ready to Join Our Happy Clients?"
                text="Let's discuss how we can help your business achieve similar success."
                button="Start Your Project"
            />
            <style>
                {r#"
                .stats-band { padding: 3rem 0; border-top: 1px solid var(--border); border-bottom: 1px solid var(--border); }
                .stat-big { font-size: 2.75rem; font-weight: 700; color: var(--accent); }
                "#}
            </style>
        </div>
    }
}
