use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::config;
use crate::content::site::FOOTER_COLUMNS;
use crate::utils::{email_link, phone_link};
use crate::{resolve, Route};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home} classes="footer-logo">
                        <img src={config::LOGO} alt={config::SITE_NAME} />
                    </Link<Route>>
                    <p>{ config::SITE_DESCRIPTION }</p>
                    <div class="footer-social">
                        { for config::SOCIAL_LINKS.iter().map(|s| html! {
                            <a href={s.href} target="_blank" rel="noopener noreferrer" aria-label={s.label}>
                                <i class={s.icon_class}></i>
                            </a>
                        }) }
                    </div>
                </div>

                { for FOOTER_COLUMNS.iter().map(|column| html! {
                    <div class="footer-column">
                        <h3>{ column.title }</h3>
                        <ul>
                            { for column.links.iter().map(|link| html! {
                                <li>
                                    <Link<Route> to={resolve(link.href)} classes="footer-link">
                                        { link.label }
                                    </Link<Route>>
                                </li>
                            }) }
                        </ul>
                    </div>
                }) }

                <div class="footer-column">
                    <h3>{"Get in Touch"}</h3>
                    <ul class="footer-contact">
                        <li>
                            <IconView icon={Icon::Mail} />
                            <a href={email_link(config::CONTACT_EMAIL, None)}>{ config::CONTACT_EMAIL }</a>
                        </li>
                        <li>
                            <IconView icon={Icon::Phone} />
                            <a href={phone_link(config::CONTACT_PHONE)}>{ config::CONTACT_PHONE }</a>
                        </li>
                        <li>
                            <IconView icon={Icon::MapPin} />
                            <span>{ config::CONTACT_ADDRESS }</span>
                        </li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{ format!("© {} {}. All rights reserved.", year, config::SITE_NAME) }</p>
            </div>
            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    background: #0a0a0a;
                    padding: 4rem 1.5rem 2rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                .footer-grid {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr repeat(4, 1fr);
                    gap: 2.5rem;
                }
                .footer-logo img { height: 64px; width: auto; }
                .footer-brand p { margin: 1rem 0; line-height: 1.6; }
                .footer-social { display: flex; gap: 0.75rem; }
                .footer-social a {
                    width: 40px;
                    height: 40px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.05);
                    color: rgba(255, 255, 255, 0.7);
                    transition: all 0.2s;
                }
                .footer-social a:hover { background: #faff01; color: #000; }
                .footer-column h3 { color: #fff; font-size: 1rem; margin-bottom: 1rem; }
                .footer-column ul { list-style: none; padding: 0; margin: 0; }
                .footer-column li { margin-bottom: 0.6rem; }
                .footer-link, .footer-contact a { color: rgba(255, 255, 255, 0.6); text-decoration: none; }
                .footer-link:hover, .footer-contact a:hover { color: #faff01; }
                .footer-contact li { display: flex; gap: 0.6rem; align-items: baseline; }
                .footer-contact i { color: #faff01; }
                .footer-bottom {
                    max-width: 1280px;
                    margin: 3rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    text-align: center;
                    font-size: 0.875rem;
                }
                @media (max-width: 1024px) {
                    .footer-grid { grid-template-columns: 1fr 1fr; }
                }
                @media (max-width: 640px) {
                    .footer-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </footer>
    }
}
