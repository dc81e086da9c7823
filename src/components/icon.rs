use yew::prelude::*;

/// Every glyph the site renders. Mapped to Font Awesome classes through
/// `Icon::class`, so an unknown icon is a compile error instead of a
/// silent fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Globe,
    Smartphone,
    TrendingUp,
    Palette,
    Mail,
    Video,
    Users,
    Brain,
    Phone,
    MapPin,
    WhatsApp,
    ArrowRight,
    ArrowLeft,
    ArrowUp,
    ChevronDown,
    Menu,
    Close,
    Check,
    CheckCircle,
    AlertCircle,
    Send,
    Star,
    Quote,
    Sparkles,
    Calendar,
    Clock,
    Home,
    ExternalLink,
    User,
    Target,
    Eye,
    Heart,
    Award,
    MessageCircle,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Icon::Globe => "fa-solid fa-globe",
            Icon::Smartphone => "fa-solid fa-mobile-screen",
            Icon::TrendingUp => "fa-solid fa-arrow-trend-up",
            Icon::Palette => "fa-solid fa-palette",
            Icon::Mail => "fa-solid fa-envelope",
            Icon::Video => "fa-solid fa-video",
            Icon::Users => "fa-solid fa-users",
            Icon::Brain => "fa-solid fa-brain",
            Icon::Phone => "fa-solid fa-phone",
            Icon::MapPin => "fa-solid fa-location-dot",
            Icon::WhatsApp => "fa-brands fa-whatsapp",
            Icon::ArrowRight => "fa-solid fa-arrow-right",
            Icon::ArrowLeft => "fa-solid fa-arrow-left",
            Icon::ArrowUp => "fa-solid fa-arrow-up",
            Icon::ChevronDown => "fa-solid fa-chevron-down",
            Icon::Menu => "fa-solid fa-bars",
            Icon::Close => "fa-solid fa-xmark",
            Icon::Check => "fa-solid fa-check",
            Icon::CheckCircle => "fa-solid fa-circle-check",
            Icon::AlertCircle => "fa-solid fa-circle-exclamation",
            Icon::Send => "fa-solid fa-paper-plane",
            Icon::Star => "fa-solid fa-star",
            Icon::Quote => "fa-solid fa-quote-left",
            Icon::Sparkles => "fa-solid fa-wand-magic-sparkles",
            Icon::Calendar => "fa-regular fa-calendar",
            Icon::Clock => "fa-regular fa-clock",
            Icon::Home => "fa-solid fa-house",
            Icon::ExternalLink => "fa-solid fa-arrow-up-right-from-square",
            Icon::User => "fa-solid fa-user",
            Icon::Target => "fa-solid fa-bullseye",
            Icon::Eye => "fa-regular fa-eye",
            Icon::Heart => "fa-regular fa-heart",
            Icon::Award => "fa-solid fa-award",
            Icon::MessageCircle => "fa-regular fa-comment",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    html! {
        <i class={classes!(props.icon.class(), props.class.clone())} aria-hidden="true"></i>
    }
}
