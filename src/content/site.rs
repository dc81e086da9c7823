#[derive(Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub children: &'static [NavItem],
}

impl NavItem {
    const fn leaf(label: &'static str, href: &'static str) -> Self {
        Self { label, href, children: &[] }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

pub const SERVICE_LINKS: &[NavItem] = &[
    NavItem::leaf("AI Implementation", "/services/ai-implementation"),
    NavItem::leaf("Web Development", "/services/web-development"),
    NavItem::leaf("App Development", "/services/app-development"),
    NavItem::leaf("Digital Marketing", "/services/digital-marketing"),
    NavItem::leaf("UI/UX Design", "/services/ui-ux-design"),
    NavItem::leaf("Email Marketing", "/services/email-marketing"),
    NavItem::leaf("Video Editing", "/services/video-editing"),
    NavItem::leaf("Social Media", "/services/social-media-management"),
];

pub const NAVIGATION: &[NavItem] = &[
    NavItem::leaf("Home", "/"),
    NavItem::leaf("About", "/about"),
    NavItem {
        label: "Services",
        href: "/services",
        children: SERVICE_LINKS,
    },
    NavItem::leaf("Portfolio", "/portfolio"),
    NavItem::leaf("Blog", "/blog"),
    NavItem::leaf("Contact", "/contact"),
];

pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [NavItem],
}

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Services",
        links: &[
            NavItem::leaf("AI Implementation", "/services/ai-implementation"),
            NavItem::leaf("Web Development", "/services/web-development"),
            NavItem::leaf("App Development", "/services/app-development"),
            NavItem::leaf("Digital Marketing", "/services/digital-marketing"),
            NavItem::leaf("UI/UX Design", "/services/ui-ux-design"),
        ],
    },
    FooterColumn {
        title: "Company",
        links: &[
            NavItem::leaf("About Us", "/about"),
            NavItem::leaf("Our Team", "/team"),
            NavItem::leaf("Testimonials", "/testimonials"),
            NavItem::leaf("FAQ", "/faq"),
            NavItem::leaf("Contact", "/contact"),
        ],
    },
    FooterColumn {
        title: "Resources",
        links: &[
            NavItem::leaf("Blog", "/blog"),
            NavItem::leaf("Portfolio", "/portfolio"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{resolve, Route};
    use std::collections::HashSet;

    fn assert_unique_labels(items: &[NavItem]) {
        let mut seen = HashSet::new();
        for item in items {
            assert!(seen.insert(item.label), "duplicate label {}", item.label);
            assert_unique_labels(item.children);
        }
    }

    #[test]
    fn sibling_labels_are_unique() {
        assert_unique_labels(NAVIGATION);
    }

    #[test]
    fn nesting_is_one_level_deep() {
        for item in NAVIGATION {
            for child in item.children {
                assert!(!child.has_children());
            }
        }
    }

    #[test]
    fn every_link_resolves_to_a_page() {
        let nav = NAVIGATION.iter().flat_map(|i| std::iter::once(i).chain(i.children));
        let footer = FOOTER_COLUMNS.iter().flat_map(|c| c.links);
        for item in nav.chain(footer) {
            assert_ne!(resolve(item.href), Route::NotFound, "{} is unrouted", item.href);
        }
    }
}
