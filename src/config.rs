pub const SITE_NAME: &str = "Yuvaog";
pub const SITE_DESCRIPTION: &str = "Professional digital agency offering web development, app development, digital marketing, UI/UX design, and more.";
pub const LOGO: &str = "/assets/yoglogo.png";

pub const CONTACT_EMAIL: &str = "info@yourdomain.com";
pub const CONTACT_PHONE: &str = "+1 234 567 8900";
pub const CONTACT_WHATSAPP: &str = "+1234567890";
pub const CONTACT_ADDRESS: &str = "123 Business Street, City, Country";

/// Recipient label sent along with every contact message.
pub const MAIL_RECIPIENT: &str = "Yuvaog Team";

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Contact submissions that have not resolved by then are reported as failed.
pub const SUBMIT_TIMEOUT_MS: u32 = 15_000;

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon_class: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Facebook", href: "https://facebook.com/youragency", icon_class: "fa-brands fa-facebook-f" },
    SocialLink { label: "Twitter", href: "https://twitter.com/youragency", icon_class: "fa-brands fa-x-twitter" },
    SocialLink { label: "Instagram", href: "https://instagram.com/youragency", icon_class: "fa-brands fa-instagram" },
    SocialLink { label: "LinkedIn", href: "https://linkedin.com/company/youragency", icon_class: "fa-brands fa-linkedin-in" },
    SocialLink { label: "YouTube", href: "https://youtube.com/@youragency", icon_class: "fa-brands fa-youtube" },
];

/// Credentials for the EmailJS relay, baked in at build time.
#[derive(Clone, Debug, PartialEq)]
pub struct EmailRelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailRelayConfig {
    pub fn from_env() -> Option<Self> {
        Self::from_parts(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    /// All three values must be present and non-empty.
    pub fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Option<Self> {
        let present = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(String::from);
        Some(Self {
            service_id: present(service_id)?,
            template_id: present(template_id)?,
            public_key: present(public_key)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_config_requires_every_value() {
        assert!(EmailRelayConfig::from_parts(Some("svc"), Some("tpl"), Some("key")).is_some());
        assert!(EmailRelayConfig::from_parts(None, Some("tpl"), Some("key")).is_none());
        assert!(EmailRelayConfig::from_parts(Some("svc"), None, Some("key")).is_none());
        assert!(EmailRelayConfig::from_parts(Some("svc"), Some("tpl"), Some("  ")).is_none());
    }
}
