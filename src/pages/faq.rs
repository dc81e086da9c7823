use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::button::{ButtonSize, LinkButton};
use crate::components::icon::{Icon, IconView};
use crate::content::faq::{faq_categories, faqs_in_category, ALL_CATEGORIES};
use crate::pages::shared::{stagger, PageHero};
use crate::utils::slugify;
use crate::Route;

/// Opening an item closes whichever one was open; clicking the open item
/// closes it.
pub fn toggle_open(open: Option<&'static str>, id: &'static str) -> Option<&'static str> {
    if open == Some(id) {
        None
    } else {
        Some(id)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.open.to_string()}>
                <span class="question-text">{ props.question.clone() }</span>
                <IconView icon={Icon::ChevronDown} class="toggle-icon" />
            </button>
            if props.open {
                <div class="faq-answer">
                    <p>{ props.answer.clone() }</p>
                </div>
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<&'static str>);
    let active = use_state(|| ALL_CATEGORIES);

    let filter_button = |value: &'static str, label: &'static str| {
        let onclick = {
            let active = active.clone();
            Callback::from(move |_: MouseEvent| active.set(value))
        };
        html! {
            <button
                id={format!("faq-filter-{}", slugify(label))}
                class={classes!("filter-button", (*active == value).then(|| "active"))}
                {onclick}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="faq-page">
            <PageHero
                tag="FAQ"
                title="Frequently Asked"
                accent="Questions"
                lead="Find answers to common questions about our services and process."
            />
            <section class="section faq-section">
                <div class="faq-container">
                    <div class="filter-bar">
                        { filter_button(ALL_CATEGORIES, "All") }
                        { for faq_categories().into_iter().map(|category| filter_button(category, category)) }
                    </div>
                    { for faqs_in_category(*active).into_iter().enumerate().map(|(i, item)| {
                        let on_toggle = {
                            let open = open.clone();
                            Callback::from(move |_: ()| open.set(toggle_open(*open, item.id)))
                        };
                        html! {
                            <AnimatedSection key={item.id} delay={stagger(i, 0.05)}>
                                <FaqItem
                                    question={item.question}
                                    answer={item.answer}
                                    open={*open == Some(item.id)}
                                    {on_toggle}
                                />
                            </AnimatedSection>
                        }
                    }) }
                </div>
            </section>
            <section class="section">
                <AnimatedSection class="faq-container">
                    <div class="card text-center faq-contact">
                        <div class="icon-badge faq-contact-icon"><IconView icon={Icon::MessageCircle} /></div>
                        <h2>{"Still Have Questions?"}</h2>
                        <p class="muted">{"Can't find the answer you're looking for? Our team is here to help."}</p>
                        <LinkButton to={Route::Contact} size={ButtonSize::Lg}>
                            {"Contact Us"}<IconView icon={Icon::ArrowRight} />
                        </LinkButton>
                    </div>
                </AnimatedSection>
            </section>
            <style>
                {r#"
                .faq-section { padding-top: 0; }
                .faq-container { max-width: 48rem; margin: 0 auto; padding: 0 1.5rem; }
                .faq-item {
                    margin-bottom: 1rem;
                    border-radius: 16px;
                    background: var(--card-bg);
                    border: 1px solid var(--border);
                    overflow: hidden;
                    transition: border-color 0.2s;
                }
                .faq-item.open { border-color: rgba(250, 255, 1, 0.4); }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.05rem;
                    font-weight: 600;
                    text-align: left;
                }
                .toggle-icon { color: var(--foreground-muted); transition: transform 0.2s; flex-shrink: 0; }
                .faq-item.open .toggle-icon { transform: rotate(180deg); color: var(--accent); }
                .faq-answer { padding: 0 1.5rem 1.25rem; color: var(--foreground-muted); line-height: 1.7; }
                .faq-answer p { margin: 0; }
                .faq-contact-icon { margin: 0 auto 1.25rem; }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_most_one_item_is_open() {
        let open = toggle_open(None, "1");
        assert_eq!(open, Some("1"));
        let open = toggle_open(open, "2");
        assert_eq!(open, Some("2"));
        assert_eq!(toggle_open(open, "2"), None);
    }
}
