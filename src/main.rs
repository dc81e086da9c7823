use log::{info, Level};
use yew::prelude::*;
use yew::suspense::Suspense;
use yew_router::prelude::*;

mod config;
mod utils;
mod content {
    pub mod blog;
    pub mod faq;
    pub mod portfolio;
    pub mod services;
    pub mod site;
    pub mod team;
    pub mod testimonials;
}
mod components {
    pub mod animated_section;
    pub mod back_to_top;
    pub mod button;
    pub mod cursor;
    pub mod cursor_state;
    pub mod dom;
    pub mod fields;
    pub mod footer;
    pub mod header;
    pub mod icon;
    pub mod layout;
    pub mod nav_state;
    pub mod page_loader;
    pub mod whatsapp_button;
}
mod contact {
    pub mod form;
    pub mod mailer;
}
mod pages {
    pub mod about;
    pub mod blog;
    pub mod blog_post;
    pub mod contact;
    pub mod faq;
    pub mod home;
    pub mod not_found;
    pub mod portfolio;
    pub mod service_detail;
    pub mod services;
    pub mod shared;
    pub mod team;
    pub mod testimonials;
}

use components::dom::scroll_to_top;
use components::layout::Layout;
use components::page_loader::PageLoader;
use pages::{
    about::About,
    blog::Blog,
    blog_post::BlogPostPage,
    contact::ContactPage,
    faq::Faq,
    home::Home,
    not_found::NotFound,
    portfolio::Portfolio,
    service_detail::ServiceDetail,
    services::Services,
    team::Team,
    testimonials::Testimonials,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/services/:slug")]
    ServiceDetail { slug: String },
    #[at("/portfolio")]
    Portfolio,
    #[at("/testimonials")]
    Testimonials,
    #[at("/team")]
    Team,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/contact")]
    Contact,
    #[at("/faq")]
    Faq,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Maps any path to a route. Unmatched paths land on `NotFound`.
pub fn resolve(path: &str) -> Route {
    Route::recognize(path)
        .or_else(Route::not_found_route)
        .unwrap_or(Route::NotFound)
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::ServiceDetail { slug } => {
            info!("Rendering Service page for {}", slug);
            html! { <ServiceDetail {slug} /> }
        }
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        }
        Route::Testimonials => {
            info!("Rendering Testimonials page");
            html! { <Testimonials /> }
        }
        Route::Team => {
            info!("Rendering Team page");
            html! { <Team /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        Route::BlogPost { slug } => {
            info!("Rendering Blog post {}", slug);
            html! { <BlogPostPage {slug} /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        }
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

/// Jumps back to the top whenever the path changes.
#[function_component(ScrollToTop)]
fn scroll_to_top_on_navigate() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    use_effect_with_deps(
        |_| {
            scroll_to_top();
            || ()
        },
        path,
    );

    html! {}
}

#[function_component(App)]
pub fn app() -> Html {
    let fallback = html! { <PageLoader /> };
    html! {
        <BrowserRouter>
            <ScrollToTop />
            <Layout>
                <Suspense {fallback}>
                    <Switch<Route> render={switch} />
                </Suspense>
            </Layout>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_path_resolves() {
        for path in ["/", "/nope", "/services/a/b", "/FAQ"] {
            let _ = resolve(path);
        }
        assert_eq!(resolve("/definitely/not/here"), Route::NotFound);
    }

    #[test]
    fn static_paths() {
        assert_eq!(resolve("/"), Route::Home);
        assert_eq!(resolve("/about"), Route::About);
        assert_eq!(resolve("/services"), Route::Services);
        assert_eq!(resolve("/portfolio"), Route::Portfolio);
        assert_eq!(resolve("/testimonials"), Route::Testimonials);
        assert_eq!(resolve("/team"), Route::Team);
        assert_eq!(resolve("/blog"), Route::Blog);
        assert_eq!(resolve("/contact"), Route::Contact);
        assert_eq!(resolve("/faq"), Route::Faq);
        assert_eq!(resolve("/404"), Route::NotFound);
    }

    #[test]
    fn slug_paths_capture_the_slug() {
        assert_eq!(
            resolve("/services/web-development"),
            Route::ServiceDetail { slug: "web-development".into() }
        );
        assert_eq!(
            resolve("/blog/future-of-web-development"),
            Route::BlogPost { slug: "future-of-web-development".into() }
        );
    }

    #[test]
    fn near_misses_are_not_found() {
        assert_eq!(resolve("/service"), Route::NotFound);
        assert_eq!(resolve("/servicesx"), Route::NotFound);
    }

    #[test]
    fn routes_round_trip_through_their_paths() {
        let routes = [
            Route::Home,
            Route::Contact,
            Route::ServiceDetail { slug: "video-editing".into() },
            Route::BlogPost { slug: "some-post".into() },
        ];
        for route in routes {
            assert_eq!(resolve(&route.to_path()), route);
        }
    }
}
