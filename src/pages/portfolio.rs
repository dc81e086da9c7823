use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::icon::{Icon, IconView};
use crate::content::portfolio::{portfolio_in_category, PortfolioItem, ALL_CATEGORIES, CATEGORIES};
use crate::pages::shared::{stagger, CtaBanner, PageHero};

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static PortfolioItem,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    html! {
        <div class="card project-card">
            <div class="project-image">
                <img src={project.image} alt={project.title} loading="lazy" />
                if let Some(link) = project.link {
                    <a href={link} target="_blank" rel="noopener noreferrer" class="project-external" aria-label="Open project">
                        <IconView icon={Icon::ExternalLink} />
                    </a>
                }
            </div>
            <span class="pill accent-pill">{ project.category }</span>
            <h3>{ project.title }</h3>
            <p class="muted">{ project.description }</p>
            <div class="project-tech">
                { for project.technologies.iter().map(|tech| html! { <span class="pill">{ *tech }</span> }) }
            </div>
        </div>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let active = use_state(|| ALL_CATEGORIES);
    let projects = portfolio_in_category(*active);

    html! {
        <div class="portfolio-page">
            <PageHero
                tag="Our Work"
                title="Our"
                accent="Portfolio"
                lead="Explore our latest projects and see how we've helped businesses achieve their digital goals."
            />
            <section class="section portfolio-section">
                <div class="container">
                    <div class="filter-bar">
                        { for CATEGORIES.iter().map(|&(slug, label)| {
                            let onclick = {
                                let active = active.clone();
                                Callback::from(move |_: MouseEvent| active.set(slug))
                            };
                            html! {
                                <button
                                    class={classes!("filter-button", (*active == slug).then(|| "active"))}
                                    {onclick}
                                >
                                    { label }
                                </button>
                            }
                        }) }
                    </div>
                    if projects.is_empty() {
                        <p class="muted text-center">{"No projects found in this category."}</p>
                    } else {
                        <div class="grid-3">
                            { for projects.into_iter().enumerate().map(|(i, project)| html! {
                                <AnimatedSection key={project.id} delay={stagger(i, 0.05)}>
                                    <ProjectCard {project} />
                                </AnimatedSection>
                            }) }
                        </div>
                    }
                </div>
            </section>
            <CtaBanner
                title="Have a Project in Mind?"
                text="Let's work together to bring your vision to life."
                button="Start Your Project"
            />
            <style>
                {r#"
                .portfolio-section { padding-top: 0; }
                .project-card { padding: 0 0 1.75rem; overflow: hidden; }
                .project-card > :not(.project-image) { margin-left: 1.75rem; margin-right: 1.75rem; }
                .project-image { position: relative; aspect-ratio: 16 / 10; margin-bottom: 1.25rem; }
                .project-image img { width: 100%; height: 100%; object-fit: cover; }
                .project-external {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: rgba(0, 0, 0, 0.6);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .accent-pill { color: var(--accent); background: rgba(250, 255, 1, 0.1); }
                .project-card h3 { margin: 0.75rem 0 0.5rem; }
                .project-tech { display: flex; flex-wrap: wrap; gap: 0.5rem; }
                "#}
            </style>
        </div>
    }
}
