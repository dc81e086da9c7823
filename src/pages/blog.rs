use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::icon::{Icon, IconView};
use crate::content::blog::{BlogPost, BLOG_POSTS};
use crate::pages::shared::{stagger, PageHero};
use crate::utils::{format_date, truncate_text};
use crate::Route;

const EXCERPT_CHARS: usize = 120;

pub fn post_route(post: &BlogPost) -> Route {
    Route::BlogPost {
        slug: post.slug.to_string(),
    }
}

#[derive(Properties, PartialEq)]
pub struct PostMetaProps {
    pub post: &'static BlogPost,
}

/// Author, date and read time line.
#[function_component(PostMeta)]
pub fn post_meta(props: &PostMetaProps) -> Html {
    let post = props.post;
    html! {
        <div class="post-meta">
            <span><IconView icon={Icon::User} />{ post.author }</span>
            <span><IconView icon={Icon::Calendar} />{ format_date(post.date) }</span>
            <span><IconView icon={Icon::Clock} />{ post.read_time }</span>
        </div>
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    let Some((featured, others)) = BLOG_POSTS.split_first() else {
        return html! {};
    };

    html! {
        <div class="blog-list-page">
            <PageHero
                tag="Our Blog"
                title="Insights &"
                accent="Updates"
                lead="Stay updated with the latest trends, tips, and insights from our team of experts."
            />
            <section class="section blog-list-section">
                <div class="container">
                    <AnimatedSection>
                        <Link<Route> to={post_route(featured)} classes="card-link">
                            <div class="card featured-post">
                                <img src={featured.image} alt={featured.title} loading="lazy" />
                                <div class="featured-post-body">
                                    <span class="pill accent-pill">{"Featured"}</span>
                                    <h2>{ featured.title }</h2>
                                    <p class="muted">{ featured.excerpt }</p>
                                    <PostMeta post={featured} />
                                </div>
                            </div>
                        </Link<Route>>
                    </AnimatedSection>
                    <div class="grid-3 blog-grid">
                        { for others.iter().enumerate().map(|(i, post)| html! {
                            <AnimatedSection delay={stagger(i, 0.1)}>
                                <Link<Route> to={post_route(post)} classes="card-link">
                                    <div class="card blog-card">
                                        <img src={post.image} alt={post.title} loading="lazy" />
                                        <span class="pill">{ post.category }</span>
                                        <h3>{ post.title }</h3>
                                        <p class="muted">{ truncate_text(post.excerpt, EXCERPT_CHARS) }</p>
                                        <div class="post-meta">
                                            <span>{ format_date(post.date) }</span>
                                            <span>{ post.read_time }</span>
                                        </div>
                                    </div>
                                </Link<Route>>
                            </AnimatedSection>
                        }) }
                    </div>
                </div>
            </section>
            <style>
                {r#"
                .blog-list-section { padding-top: 0; }
                .accent-pill { color: var(--accent); background: rgba(250, 255, 1, 0.1); }
                .featured-post { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; padding: 0; overflow: hidden; }
                .featured-post img { width: 100%; height: 100%; min-height: 18rem; object-fit: cover; }
                .featured-post-body { padding: 2.5rem 2.5rem 2.5rem 0; }
                .featured-post h2 { font-size: 2rem; margin: 1rem 0; }
                .blog-grid { margin-top: 3rem; }
                .blog-card img { width: 100%; aspect-ratio: 16 / 9; object-fit: cover; border-radius: 16px; margin-bottom: 1rem; }
                .blog-card h3 { margin: 0.75rem 0 0.5rem; }
                .post-meta { display: flex; flex-wrap: wrap; gap: 1.25rem; color: var(--foreground-muted); font-size: 0.875rem; }
                .post-meta span { display: inline-flex; align-items: center; gap: 0.4rem; }
                @media (max-width: 768px) {
                    .featured-post { grid-template-columns: 1fr; }
                    .featured-post-body { padding: 0 1.5rem 1.5rem; }
                }
                "#}
            </style>
        </div>
    }
}
