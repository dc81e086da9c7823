use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::dom::{scroll_y, smooth_scroll_to_top};
use crate::components::icon::{Icon, IconView};

const SHOW_AFTER: f64 = 500.0;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_event_with_window("scroll", move |_: Event| {
            let show = scroll_y() > SHOW_AFTER;
            if *visible != show {
                visible.set(show);
            }
        });
    }

    let onclick = Callback::from(|_: MouseEvent| smooth_scroll_to_top());

    html! {
        <>
            if *visible {
                <button class="back-to-top" {onclick} aria-label="Back to top">
                    <IconView icon={Icon::ArrowUp} />
                </button>
            }
            <style>
                {r#"
                .back-to-top {
                    position: fixed;
                    bottom: 1.5rem;
                    left: 1.5rem;
                    z-index: 50;
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    background: #1a1a1a;
                    border: 1px solid #2a2a2a;
                    color: #fff;
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.3);
                    animation: pop-in 0.2s ease-out;
                    transition: transform 0.2s, background 0.2s;
                }
                .back-to-top:hover { transform: scale(1.1); background: #2a2a2a; }
                @keyframes pop-in {
                    from { transform: scale(0); opacity: 0; }
                    to { transform: scale(1); opacity: 1; }
                }
                "#}
            </style>
        </>
    }
}
