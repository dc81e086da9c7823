use crate::components::icon::Icon;

#[derive(Debug, PartialEq)]
pub struct Service {
    pub id: &'static str,
    pub slug: &'static str,
    pub title: &'static str,
    pub short_description: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub features: &'static [&'static str],
    pub benefits: &'static [&'static str],
    pub image: &'static str,
    pub featured: bool,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "1",
        slug: "ai-implementation",
        title: "AI Implementation",
        short_description: "Put machine learning and generative AI to work inside your business.",
        description: "We help companies adopt AI where it pays off: chat assistants trained on your own content, document automation, recommendation engines and analytics that surface what matters. From proof of concept to production, we handle data preparation, model selection and integration with the tools your team already uses.",
        icon: Icon::Brain,
        features: &[
            "AI chatbots and virtual assistants",
            "Workflow and document automation",
            "Custom model fine-tuning",
            "Predictive analytics",
            "Integration with existing systems",
        ],
        benefits: &[
            "Cut repetitive manual work",
            "Faster, data-driven decisions",
            "Around-the-clock customer support",
            "Scales with your business",
        ],
        image: "/assets/services/ai.jpg",
        featured: true,
    },
    Service {
        id: "2",
        slug: "web-development",
        title: "Web Development",
        short_description: "Fast, responsive websites and web applications built to convert.",
        description: "From marketing sites to complex web applications, we build for speed, accessibility and search visibility. Every project ships with a responsive layout, a content workflow your team can own and analytics from day one.",
        icon: Icon::Globe,
        features: &[
            "Custom website design and development",
            "E-commerce solutions",
            "Progressive web apps",
            "CMS integration",
            "Performance optimization",
        ],
        benefits: &[
            "Mobile-first responsive design",
            "SEO-friendly architecture",
            "Fast loading times",
            "Easy content management",
        ],
        image: "/assets/services/web.jpg",
        featured: true,
    },
    Service {
        id: "3",
        slug: "app-development",
        title: "App Development",
        short_description: "Native and cross-platform mobile apps your users will love.",
        description: "We design and build iOS and Android apps from first sketch to store release. Cross-platform frameworks keep budgets sensible while native modules cover the features that need them.",
        icon: Icon::Smartphone,
        features: &[
            "iOS and Android development",
            "Cross-platform apps",
            "App store deployment",
            "Push notifications",
            "Offline support",
        ],
        benefits: &[
            "One codebase, two platforms",
            "Polished native feel",
            "Secure by default",
            "Ongoing maintenance available",
        ],
        image: "/assets/services/app.jpg",
        featured: true,
    },
    Service {
        id: "4",
        slug: "digital-marketing",
        title: "Digital Marketing",
        short_description: "Data-driven campaigns that grow traffic, leads and revenue.",
        description: "Search, paid media and content working together. We plan campaigns around measurable goals, report on what moved the numbers and reinvest in the channels that perform.",
        icon: Icon::TrendingUp,
        features: &[
            "Search engine optimization",
            "Pay-per-click advertising",
            "Content marketing",
            "Conversion rate optimization",
            "Analytics and reporting",
        ],
        benefits: &[
            "More qualified traffic",
            "Lower acquisition cost",
            "Transparent monthly reports",
            "Measurable ROI",
        ],
        image: "/assets/services/marketing.jpg",
        featured: true,
    },
    Service {
        id: "5",
        slug: "ui-ux-design",
        title: "UI/UX Design",
        short_description: "Interfaces that are clear, beautiful and easy to use.",
        description: "Research-led design for websites and products. We interview users, map journeys, prototype quickly and hand developers a design system that keeps every screen consistent.",
        icon: Icon::Palette,
        features: &[
            "User research",
            "Wireframing and prototyping",
            "Visual design",
            "Design systems",
            "Usability testing",
        ],
        benefits: &[
            "Higher user satisfaction",
            "Fewer support requests",
            "Consistent brand experience",
            "Faster development handoff",
        ],
        image: "/assets/services/design.jpg",
        featured: false,
    },
    Service {
        id: "6",
        slug: "email-marketing",
        title: "Email Marketing",
        short_description: "Campaigns and automations that keep customers coming back.",
        description: "Newsletters, onboarding sequences and win-back flows designed, written and tested for deliverability. We segment your audience so every message lands with the right people.",
        icon: Icon::Mail,
        features: &[
            "Campaign strategy",
            "Template design",
            "Automation workflows",
            "List segmentation",
            "A/B testing",
        ],
        benefits: &[
            "Higher open and click rates",
            "Automated nurturing",
            "Better customer retention",
            "Clear performance tracking",
        ],
        image: "/assets/services/email.jpg",
        featured: false,
    },
    Service {
        id: "7",
        slug: "video-editing",
        title: "Video Editing",
        short_description: "Professional edits for brand films, ads and social clips.",
        description: "We turn raw footage into stories people finish watching. Colour grading, motion graphics, sound design and cut-downs for every platform are all handled in house.",
        icon: Icon::Video,
        features: &[
            "Brand and corporate videos",
            "Social media clips",
            "Motion graphics",
            "Color grading",
            "Subtitles and captions",
        ],
        benefits: &[
            "Stronger engagement",
            "Consistent visual identity",
            "Fast turnaround",
            "Formats for every platform",
        ],
        image: "/assets/services/video.jpg",
        featured: false,
    },
    Service {
        id: "8",
        slug: "social-media-management",
        title: "Social Media Management",
        short_description: "Consistent, on-brand social presence that builds community.",
        description: "Content calendars, community management and paid social handled by one team. We track what resonates and double down on it every month.",
        icon: Icon::Users,
        features: &[
            "Content calendar planning",
            "Post creation and scheduling",
            "Community management",
            "Paid social campaigns",
            "Monthly analytics",
        ],
        benefits: &[
            "Steady audience growth",
            "More time for your business",
            "Authentic engagement",
            "Data-backed strategy",
        ],
        image: "/assets/services/social.jpg",
        featured: false,
    },
];

pub fn get_service_by_slug(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.slug == slug)
}

pub fn featured_services() -> impl Iterator<Item = &'static Service> {
    SERVICES.iter().filter(|s| s.featured)
}

/// Other services to suggest from a detail page.
pub fn related_services(current: &Service, count: usize) -> Vec<&'static Service> {
    SERVICES
        .iter()
        .filter(|s| s.id != current.id)
        .take(count)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::site::SERVICE_LINKS;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<_> = SERVICES.iter().map(|s| s.slug).collect();
        assert_eq!(slugs.len(), SERVICES.len());
    }

    #[test]
    fn lookup_is_total() {
        assert_eq!(get_service_by_slug("web-development").unwrap().title, "Web Development");
        assert!(get_service_by_slug("flight-booking").is_none());
        assert!(get_service_by_slug("").is_none());
    }

    #[test]
    fn menu_links_point_at_real_services() {
        for link in SERVICE_LINKS {
            let slug = link.href.trim_start_matches("/services/");
            assert!(get_service_by_slug(slug).is_some(), "missing service {}", slug);
        }
    }

    #[test]
    fn related_excludes_current() {
        let current = get_service_by_slug("ai-implementation").unwrap();
        let related = related_services(current, 3);
        assert_eq!(related.len(), 3);
        assert!(related.iter().all(|s| s.id != current.id));
    }
}
