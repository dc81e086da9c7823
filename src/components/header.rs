use web_sys::Event;
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::*;

use crate::components::button::{ButtonSize, LinkButton};
use crate::components::dom::{scroll_y, BodyStyle, ScrollLock};
use crate::components::icon::{Icon, IconView};
use crate::components::nav_state::{is_active, NavAction, NavigationState};
use crate::config;
use crate::content::site::{NavItem, NAVIGATION};
use crate::{resolve, Route};

#[derive(Properties, PartialEq)]
struct NavEntryProps {
    item: &'static NavItem,
    path: AttrValue,
    open: bool,
    dispatch: UseReducerDispatcher<NavigationState>,
}

#[function_component(DesktopNavEntry)]
fn desktop_nav_entry(props: &NavEntryProps) -> Html {
    let item = props.item;
    let active = is_active(item, &props.path);

    if !item.has_children() {
        return html! {
            <div class="nav-entry">
                <Link<Route> to={resolve(item.href)} classes={classes!("nav-link", active.then(|| "active"))}>
                    { item.label }
                </Link<Route>>
            </div>
        };
    }

    // Trigger and panel share one hover region so moving between them keeps it open.
    let onmouseenter = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.dispatch(NavAction::OpenDropdown(item.label)))
    };
    let onmouseleave = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.dispatch(NavAction::CloseDropdown))
    };

    html! {
        <div class="nav-entry has-dropdown" {onmouseenter} {onmouseleave}>
            <button class={classes!("nav-link", "nav-trigger", active.then(|| "active"))} aria-expanded={props.open.to_string()}>
                { item.label }
                <IconView icon={Icon::ChevronDown} class={classes!("chevron", props.open.then(|| "rotated"))} />
            </button>
            if props.open {
                <div class="dropdown-panel">
                    <div class="dropdown-inner">
                        { for item.children.iter().map(|child| html! {
                            <Link<Route>
                                to={resolve(child.href)}
                                classes={classes!("dropdown-link", (*props.path == *child.href).then(|| "active"))}
                            >
                                { child.label }
                            </Link<Route>>
                        }) }
                    </div>
                </div>
            }
        </div>
    }
}

#[function_component(MobileNavEntry)]
fn mobile_nav_entry(props: &NavEntryProps) -> Html {
    let item = props.item;
    let active = is_active(item, &props.path);
    let close_menu = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.dispatch(NavAction::CloseMobileMenu))
    };

    if !item.has_children() {
        return html! {
            <div onclick={close_menu}>
                <Link<Route> to={resolve(item.href)} classes={classes!("mobile-link", active.then(|| "active"))}>
                    { item.label }
                </Link<Route>>
            </div>
        };
    }

    let toggle = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.dispatch(NavAction::ToggleDropdown(item.label)))
    };

    html! {
        <div>
            <button class={classes!("mobile-link", "mobile-trigger", active.then(|| "active"))} onclick={toggle}>
                { item.label }
                <IconView icon={Icon::ChevronDown} class={classes!("chevron", props.open.then(|| "rotated"))} />
            </button>
            if props.open {
                <div class="mobile-children">
                    { for item.children.iter().map(|child| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route>
                                to={resolve(child.href)}
                                classes={classes!("mobile-child", (*props.path == *child.href).then(|| "active"))}
                            >
                                { child.label }
                            </Link<Route>>
                        </div>
                    }) }
                </div>
            }
        </div>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let nav = use_reducer(NavigationState::default);
    let path: AttrValue = use_location()
        .map(|l| AttrValue::from(l.path().to_string()))
        .unwrap_or_else(|| AttrValue::from("/"));

    {
        let dispatch = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                dispatch.dispatch(NavAction::Scrolled(scroll_y()));
                || ()
            },
            (),
        );
    }

    {
        let dispatch = nav.dispatcher();
        use_event_with_window("scroll", move |_: Event| {
            dispatch.dispatch(NavAction::Scrolled(scroll_y()));
        });
    }

    {
        let dispatch = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                dispatch.dispatch(NavAction::RouteChanged);
                || ()
            },
            path.clone(),
        );
    }

    // Released on close, on navigation (which closes the menu) and on unmount.
    use_effect_with_deps(
        move |locked: &bool| {
            let lock = ScrollLock::hold_while(*locked, BodyStyle);
            move || drop(lock)
        },
        nav.scroll_locked(),
    );

    let open_menu = {
        let dispatch = nav.dispatcher();
        Callback::from(move |_: MouseEvent| dispatch.dispatch(NavAction::OpenMobileMenu))
    };
    let close_menu = {
        let dispatch = nav.dispatcher();
        Callback::from(move |_: MouseEvent| dispatch.dispatch(NavAction::CloseMobileMenu))
    };

    html! {
        <>
            <header class={classes!("site-header", nav.scrolled.then(|| "scrolled"))}>
                <nav class="header-inner">
                    <Link<Route> to={Route::Home} classes="header-logo">
                        <img src={config::LOGO} alt={config::SITE_NAME} />
                    </Link<Route>>

                    <div class="desktop-nav">
                        { for NAVIGATION.iter().map(|item| html! {
                            <DesktopNavEntry
                                key={item.label}
                                {item}
                                path={path.clone()}
                                open={nav.is_dropdown_open(item.label)}
                                dispatch={nav.dispatcher()}
                            />
                        }) }
                    </div>

                    <div class="desktop-cta">
                        <LinkButton to={Route::Contact} size={ButtonSize::Sm} class="cta-group">
                            {"Let's Talk"}
                            <IconView icon={Icon::ArrowRight} class="cta-arrow" />
                        </LinkButton>
                    </div>

                    <button class="burger-menu" onclick={open_menu} aria-label="Open menu">
                        <IconView icon={Icon::Menu} />
                    </button>
                </nav>
            </header>

            if nav.mobile_menu_open {
                <div class="mobile-overlay">
                    <div class="mobile-header">
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Home} classes="header-logo small">
                                <img src={config::LOGO} alt={config::SITE_NAME} />
                            </Link<Route>>
                        </div>
                        <button class="mobile-close" onclick={close_menu.clone()} aria-label="Close menu">
                            <IconView icon={Icon::Close} />
                        </button>
                    </div>
                    <nav class="mobile-nav">
                        { for NAVIGATION.iter().map(|item| html! {
                            <MobileNavEntry
                                key={item.label}
                                {item}
                                path={path.clone()}
                                open={nav.is_dropdown_open(item.label)}
                                dispatch={nav.dispatcher()}
                            />
                        }) }
                        <div class="mobile-cta" onclick={close_menu}>
                            <LinkButton to={Route::Contact} size={ButtonSize::Lg} class="full-width">
                                {"Let's Talk"}
                                <IconView icon={Icon::ArrowRight} />
                            </LinkButton>
                        </div>
                    </nav>
                </div>
            }

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1rem 0;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .site-header.scrolled {
                    padding: 0.75rem 0;
                    background: rgba(13, 13, 13, 0.95);
                    backdrop-filter: blur(24px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .header-inner {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .header-logo img {
                    height: 80px;
                    width: auto;
                    transition: height 0.3s ease;
                }
                .site-header.scrolled .header-logo img { height: 64px; }
                .header-logo.small img { height: 40px; }
                .desktop-nav {
                    display: flex;
                    align-items: center;
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(4px);
                    border-radius: 9999px;
                    padding: 0.375rem 0.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .nav-entry { position: relative; }
                .nav-link {
                    display: flex;
                    align-items: center;
                    gap: 0.375rem;
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                    background: none;
                    border: none;
                    transition: color 0.2s;
                }
                .nav-link:hover { color: #fff; }
                .nav-link.active { color: #faff01; }
                .chevron { font-size: 0.75rem; transition: transform 0.2s; }
                .chevron.rotated { transform: rotate(180deg); }
                .dropdown-panel {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    padding-top: 0.5rem;
                }
                .dropdown-inner {
                    padding: 0.5rem;
                    min-width: 200px;
                    border-radius: 12px;
                    background: #141414;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.4);
                }
                .dropdown-link {
                    display: block;
                    padding: 0.625rem 1rem;
                    border-radius: 8px;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.7);
                    text-decoration: none;
                }
                .dropdown-link:hover { color: #fff; background: rgba(255, 255, 255, 0.05); }
                .dropdown-link.active { color: #faff01; background: rgba(250, 255, 1, 0.1); }
                .cta-arrow { transition: transform 0.2s; }
                .cta-group:hover .cta-arrow { transform: translateX(4px); }
                .burger-menu {
                    display: none;
                    width: 48px;
                    height: 48px;
                    align-items: center;
                    justify-content: center;
                    border-radius: 12px;
                    border: none;
                    background: #faff01;
                    color: #000;
                    font-size: 1.25rem;
                }
                .mobile-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 99999;
                    background: #0D0D0D;
                }
                .mobile-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .mobile-close {
                    width: 48px;
                    height: 48px;
                    border-radius: 12px;
                    border: none;
                    background: rgba(255, 255, 255, 0.1);
                    color: #fff;
                    font-size: 1.25rem;
                }
                .mobile-nav {
                    padding: 1.5rem 1rem;
                    overflow-y: auto;
                    max-height: calc(100vh - 80px);
                }
                .mobile-link {
                    display: flex;
                    width: 100%;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem;
                    font-size: 1.125rem;
                    font-weight: 500;
                    color: #fff;
                    text-decoration: none;
                    background: none;
                    border: none;
                    border-radius: 12px;
                }
                .mobile-link.active { color: #faff01; background: rgba(250, 255, 1, 0.05); }
                .mobile-children {
                    margin: 0.25rem 0 0 1rem;
                    padding-left: 1rem;
                    border-left: 2px solid rgba(255, 255, 255, 0.1);
                }
                .mobile-child {
                    display: block;
                    padding: 0.75rem 0;
                    color: rgba(255, 255, 255, 0.6);
                    text-decoration: none;
                }
                .mobile-child.active { color: #faff01; }
                .mobile-cta {
                    margin-top: 2rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .full-width { width: 100%; }
                @media (max-width: 1024px) {
                    .desktop-nav, .desktop-cta { display: none; }
                    .burger-menu { display: flex; }
                }
                "#}
            </style>
        </>
    }
}
