use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::config;
use crate::utils::whatsapp_link;

#[function_component(WhatsAppButton)]
pub fn whatsapp_button() -> Html {
    let href = whatsapp_link(
        config::CONTACT_WHATSAPP,
        Some("Hi! I'd like to know more about your services."),
    );

    html! {
        <>
            <a class="whatsapp-fab" {href} target="_blank" rel="noopener noreferrer" aria-label="Chat on WhatsApp">
                <IconView icon={Icon::WhatsApp} />
            </a>
            <style>
                {r#"
                .whatsapp-fab {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 50;
                    width: 56px;
                    height: 56px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: #25D366;
                    color: #fff;
                    font-size: 1.75rem;
                    box-shadow: 0 10px 25px rgba(37, 211, 102, 0.4);
                    transition: transform 0.2s;
                }
                .whatsapp-fab:hover { transform: scale(1.1); }
                "#}
            </style>
        </>
    }
}
