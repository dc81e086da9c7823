use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Something clickable that is drawn as a button. Implemented by the
/// native `<button>` and by the router link, so call sites pick the
/// element they need and both keep the same look.
pub trait ButtonLike {
    fn variant(&self) -> ButtonVariant;
    fn size(&self) -> ButtonSize;
    fn extra_classes(&self) -> Classes;

    fn button_classes(&self) -> Classes {
        let variant = match self.variant() {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        };
        let size = match self.size() {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
        };
        classes!("btn", variant, size, self.extra_classes())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub kind: ButtonType,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

impl ButtonLike for ButtonProps {
    fn variant(&self) -> ButtonVariant {
        self.variant
    }
    fn size(&self) -> ButtonSize {
        self.size
    }
    fn extra_classes(&self) -> Classes {
        self.class.clone()
    }
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let kind = match props.kind {
        ButtonType::Button => "button",
        ButtonType::Submit => "submit",
    };
    let onclick = props.onclick.clone().unwrap_or_default();

    html! {
        <button
            type={kind}
            class={props.button_classes()}
            disabled={props.disabled || props.loading}
            aria-label={props.aria_label.clone()}
            {onclick}
        >
            if props.loading {
                <span class="btn-spinner" aria-hidden="true"></span>
            }
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct LinkButtonProps {
    pub to: Route,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

impl ButtonLike for LinkButtonProps {
    fn variant(&self) -> ButtonVariant {
        self.variant
    }
    fn size(&self) -> ButtonSize {
        self.size
    }
    fn extra_classes(&self) -> Classes {
        self.class.clone()
    }
}

#[function_component(LinkButton)]
pub fn link_button(props: &LinkButtonProps) -> Html {
    html! {
        <Link<Route> to={props.to.clone()} classes={props.button_classes()}>
            { for props.children.iter() }
        </Link<Route>>
    }
}

pub const BUTTON_CSS: &str = r#"
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    border-radius: 9999px;
    font-weight: 600;
    text-decoration: none;
    border: none;
    transition: all 0.3s ease;
}
.btn:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}
.btn-primary {
    background: #faff01;
    color: #000;
    box-shadow: 0 10px 25px rgba(250, 255, 1, 0.25);
}
.btn-primary:hover {
    background: #e6eb00;
    box-shadow: 0 10px 25px rgba(250, 255, 1, 0.4);
    transform: translateY(-2px);
}
.btn-secondary {
    background: rgba(255, 255, 255, 0.05);
    color: #fff;
    border: 1px solid rgba(255, 255, 255, 0.1);
}
.btn-secondary:hover {
    border-color: #faff01;
}
.btn-outline {
    background: transparent;
    border: 2px solid #faff01;
    color: #faff01;
}
.btn-outline:hover {
    background: #faff01;
    color: #000;
}
.btn-ghost {
    background: transparent;
    color: rgba(255, 255, 255, 0.6);
}
.btn-ghost:hover {
    background: rgba(255, 255, 255, 0.05);
    color: #fff;
}
.btn-sm { padding: 0.5rem 1rem; font-size: 0.875rem; }
.btn-md { padding: 0.75rem 1.5rem; font-size: 1rem; }
.btn-lg { padding: 1rem 2rem; font-size: 1.125rem; }
.btn-spinner {
    width: 1.25rem;
    height: 1.25rem;
    border-radius: 50%;
    border: 3px solid rgba(0, 0, 0, 0.25);
    border-top-color: currentColor;
    animation: spin 0.8s linear infinite;
}
@keyframes spin {
    to { transform: rotate(360deg); }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_and_link_buttons_share_classes() {
        let native = ButtonProps {
            variant: ButtonVariant::Outline,
            size: ButtonSize::Lg,
            class: classes!("wide"),
            kind: ButtonType::Submit,
            loading: false,
            disabled: false,
            onclick: None,
            aria_label: None,
            children: Children::default(),
        };
        let link = LinkButtonProps {
            to: Route::Contact,
            variant: ButtonVariant::Outline,
            size: ButtonSize::Lg,
            class: classes!("wide"),
            children: Children::default(),
        };
        assert_eq!(native.button_classes(), link.button_classes());
        assert!(native.button_classes().contains("btn-outline"));
        assert!(native.button_classes().contains("btn-lg"));
    }
}
