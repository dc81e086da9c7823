use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant, LinkButton};
use crate::components::icon::{Icon, IconView};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let navigator = use_navigator();
    let go_back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.back();
        }
    });

    html! {
        <div class="not-found-page">
            <div class="not-found-code">{"404"}</div>
            <h1 class="heading-lg">{"Page Not Found"}</h1>
            <p class="lead">{"Sorry, the page you're looking for doesn't exist or has been moved."}</p>
            <div class="not-found-actions">
                <LinkButton to={Route::Home} size={ButtonSize::Lg}>
                    <IconView icon={Icon::Home} />{"Go to Homepage"}
                </LinkButton>
                <Button variant={ButtonVariant::Outline} size={ButtonSize::Lg} onclick={go_back}>
                    <IconView icon={Icon::ArrowLeft} />{"Go Back"}
                </Button>
            </div>
            <style>
                {r#"
                .not-found-page {
                    min-height: 70vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 4rem 1.5rem;
                }
                .not-found-code {
                    font-size: clamp(6rem, 18vw, 10rem);
                    font-weight: 800;
                    line-height: 1;
                    color: var(--accent);
                    margin-bottom: 1rem;
                }
                .not-found-actions { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; margin-top: 1rem; }
                "#}
            </style>
        </div>
    }
}
