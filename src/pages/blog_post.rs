use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::icon::{Icon, IconView};
use crate::content::blog::{get_blog_post_by_slug, parse_body, related_posts, Block};
use crate::pages::blog::{post_route, PostMeta};
use crate::pages::shared::stagger;
use crate::Route;

fn render_block(block: Block<'_>) -> Html {
    match block {
        Block::Title(text) => html! { <h1>{ text }</h1> },
        Block::Heading(text) => html! { <h2>{ text }</h2> },
        Block::Paragraph(text) => html! { <p>{ text }</p> },
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub slug: String,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostProps) -> Html {
    let Some(post) = get_blog_post_by_slug(&props.slug) else {
        log::info!("Unknown post '{}', redirecting to blog", props.slug);
        return html! { <Redirect<Route> to={Route::Blog} /> };
    };
    let related = related_posts(post, 2);

    html! {
        <div class="blog-post-page">
            <article class="blog-post-container">
                <Link<Route> to={Route::Blog} classes="back-link">
                    <IconView icon={Icon::ArrowLeft} />{"Back to Blog"}
                </Link<Route>>
                <header class="blog-header">
                    <span class="pill accent-pill">{ post.category }</span>
                    <h1 class="heading-lg">{ post.title }</h1>
                    <PostMeta {post} />
                </header>
                <img class="blog-hero-image" src={post.image} alt={post.title} />
                <div class="blog-content">
                    { for parse_body(post.content).into_iter().map(render_block) }
                </div>
                <div class="blog-tags">
                    { for post.tags.iter().map(|tag| html! { <span class="pill">{ *tag }</span> }) }
                </div>
            </article>

            if !related.is_empty() {
                <section class="section related-posts">
                    <div class="blog-post-container">
                        <h2>{"Related Articles"}</h2>
                        <div class="grid-2">
                            { for related.into_iter().enumerate().map(|(i, related)| html! {
                                <AnimatedSection delay={stagger(i, 0.1)}>
                                    <Link<Route> to={post_route(related)} classes="card-link">
                                        <div class="card">
                                            <span class="pill">{ related.category }</span>
                                            <h3>{ related.title }</h3>
                                            <p class="muted">{ related.excerpt }</p>
                                        </div>
                                    </Link<Route>>
                                </AnimatedSection>
                            }) }
                        </div>
                    </div>
                </section>
            }

            <style>
                {r#"
                .blog-post-container { max-width: 48rem; margin: 0 auto; padding: 4rem 1.5rem 0; }
                .back-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: var(--foreground-muted);
                    text-decoration: none;
                    margin-bottom: 2rem;
                }
                .back-link:hover { color: var(--accent); }
                .accent-pill { color: var(--accent); background: rgba(250, 255, 1, 0.1); }
                .blog-header h1 { margin: 1rem 0 1.5rem; }
                .post-meta { display: flex; flex-wrap: wrap; gap: 1.25rem; color: var(--foreground-muted); font-size: 0.875rem; }
                .post-meta span { display: inline-flex; align-items: center; gap: 0.4rem; }
                .blog-hero-image { width: 100%; aspect-ratio: 16 / 9; object-fit: cover; border-radius: 24px; margin: 2.5rem 0; }
                .blog-content { line-height: 1.8; color: rgba(255, 255, 255, 0.85); font-size: 1.1rem; }
                .blog-content h1 { font-size: 2rem; margin: 2.5rem 0 1rem; color: #fff; }
                .blog-content h2 { font-size: 1.5rem; margin: 2rem 0 0.75rem; color: #fff; }
                .blog-content p { margin: 0 0 1.25rem; }
                .blog-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; padding: 2rem 0; margin-top: 2rem; border-top: 1px solid var(--border); }
                .related-posts h2 { margin-bottom: 2rem; }
                "#}
            </style>
        </div>
    }
}
