use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::button::BUTTON_CSS;
use crate::components::cursor::CustomCursor;
use crate::components::fields::FIELD_CSS;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::whatsapp_button::WhatsAppButton;

const BASE_CSS: &str = r#"
:root {
    --background: #0D0D0D;
    --foreground: #ffffff;
    --foreground-muted: rgba(255, 255, 255, 0.6);
    --card-bg: rgba(255, 255, 255, 0.05);
    --border: rgba(255, 255, 255, 0.1);
    --accent: #faff01;
}
* { box-sizing: border-box; }
body {
    margin: 0;
    background: var(--background);
    color: var(--foreground);
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    -webkit-font-smoothing: antialiased;
}
a { color: inherit; }
.site-main { flex: 1; padding-top: 90px; }
.site-shell { min-height: 100vh; display: flex; flex-direction: column; }
.container { max-width: 1280px; margin: 0 auto; padding: 0 1.5rem; }
.section { padding: 6rem 0; }
.section-tag {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    background: rgba(250, 255, 1, 0.1);
    border: 1px solid rgba(250, 255, 1, 0.2);
    color: var(--accent);
    font-size: 0.875rem;
    font-weight: 500;
    margin-bottom: 1.5rem;
}
.heading-xl { font-size: clamp(2.5rem, 6vw, 4rem); font-weight: 700; line-height: 1.1; margin: 0 0 1.5rem; }
.heading-lg { font-size: clamp(2rem, 4vw, 3rem); font-weight: 700; line-height: 1.15; margin: 0 0 1rem; }
.accent { color: var(--accent); }
.muted { color: var(--foreground-muted); }
.lead { font-size: 1.25rem; color: var(--foreground-muted); line-height: 1.6; }
.text-center { text-align: center; }
.narrow { max-width: 48rem; margin-left: auto; margin-right: auto; }
.card {
    padding: 2rem;
    border-radius: 24px;
    background: var(--card-bg);
    border: 1px solid var(--border);
    transition: border-color 0.3s, transform 0.3s;
    height: 100%;
}
.card:hover { border-color: rgba(250, 255, 1, 0.4); transform: translateY(-4px); }
.grid-2, .grid-3, .grid-4 { display: grid; gap: 2rem; }
.grid-2 { grid-template-columns: repeat(2, 1fr); }
.grid-3 { grid-template-columns: repeat(3, 1fr); }
.grid-4 { grid-template-columns: repeat(4, 1fr); }
.icon-badge {
    width: 56px;
    height: 56px;
    border-radius: 16px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(250, 255, 1, 0.1);
    color: var(--accent);
    font-size: 1.5rem;
    margin-bottom: 1.25rem;
}
.pill {
    display: inline-block;
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.06);
    color: var(--foreground-muted);
    font-size: 0.8rem;
}
.filter-bar { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.75rem; margin-bottom: 3rem; }
.filter-button {
    padding: 0.6rem 1.25rem;
    border-radius: 9999px;
    border: 1px solid var(--border);
    background: var(--card-bg);
    color: var(--foreground-muted);
    font-weight: 500;
    transition: all 0.2s;
}
.filter-button.active { background: var(--accent); color: #000; border-color: var(--accent); }
.stars { color: var(--accent); display: flex; gap: 0.2rem; }
.stars .empty { color: rgba(255, 255, 255, 0.2); }
@media (max-width: 1024px) {
    .grid-3, .grid-4 { grid-template-columns: repeat(2, 1fr); }
}
@media (max-width: 640px) {
    .grid-2, .grid-3, .grid-4 { grid-template-columns: 1fr; }
}
"#;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // The site only ships a dark theme.
    use_effect_with_deps(
        |_| {
            if let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                root.set_class_name("dark");
            }
            || ()
        },
        (),
    );

    html! {
        <div class="site-shell">
            <style>{ BASE_CSS }{ BUTTON_CSS }{ FIELD_CSS }</style>
            <CustomCursor />
            <Header />
            <main class="site-main">
                { for props.children.iter() }
            </main>
            <Footer />
            <WhatsAppButton />
            <BackToTop />
        </div>
    }
}
