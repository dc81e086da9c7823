#[derive(Debug, PartialEq)]
pub struct PortfolioItem {
    pub id: &'static str,
    pub slug: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub category_slug: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub link: Option<&'static str>,
    pub featured: bool,
}

pub const PORTFOLIO: &[PortfolioItem] = &[
    PortfolioItem {
        id: "1",
        slug: "ecommerce-platform",
        title: "Modern E-commerce Platform",
        category: "Web Development",
        category_slug: "web-development",
        description: "A full-featured e-commerce platform with advanced product management, payment integration, and analytics dashboard.",
        image: "/assets/portfolio/ecommerce.jpg",
        technologies: &["React", "Node.js", "MongoDB", "Stripe"],
        link: Some("https://example.com"),
        featured: true,
    },
    PortfolioItem {
        id: "2",
        slug: "fitness-app",
        title: "Fitness Tracking App",
        category: "App Development",
        category_slug: "app-development",
        description: "A cross-platform fitness app with workout tracking, nutrition planning, and social features.",
        image: "/assets/portfolio/fitness-app.jpg",
        technologies: &["React Native", "Firebase", "Node.js"],
        link: Some("https://example.com"),
        featured: true,
    },
    PortfolioItem {
        id: "3",
        slug: "restaurant-branding",
        title: "Restaurant Brand Identity",
        category: "UI/UX Design",
        category_slug: "ui-ux-design",
        description: "Complete brand identity and UI design for a modern restaurant chain.",
        image: "/assets/portfolio/restaurant.jpg",
        technologies: &["Figma", "Adobe Creative Suite"],
        link: None,
        featured: true,
    },
    PortfolioItem {
        id: "4",
        slug: "saas-dashboard",
        title: "SaaS Analytics Dashboard",
        category: "Web Development",
        category_slug: "web-development",
        description: "A comprehensive analytics dashboard for a B2B SaaS company.",
        image: "/assets/portfolio/saas-dashboard.jpg",
        technologies: &["Vue.js", "D3.js", "Python", "PostgreSQL"],
        link: None,
        featured: false,
    },
    PortfolioItem {
        id: "5",
        slug: "travel-marketing",
        title: "Travel Agency Campaign",
        category: "Digital Marketing",
        category_slug: "digital-marketing",
        description: "Multi-channel digital marketing campaign that increased bookings by 150%.",
        image: "/assets/portfolio/travel-marketing.jpg",
        technologies: &["Google Ads", "Facebook Ads", "SEO"],
        link: None,
        featured: true,
    },
    PortfolioItem {
        id: "6",
        slug: "delivery-app",
        title: "Food Delivery App",
        category: "App Development",
        category_slug: "app-development",
        description: "On-demand food delivery app with real-time tracking and payment integration.",
        image: "/assets/portfolio/delivery-app.jpg",
        technologies: &["Flutter", "Firebase", "Google Maps"],
        link: None,
        featured: false,
    },
    PortfolioItem {
        id: "7",
        slug: "corporate-video",
        title: "Corporate Brand Video",
        category: "Video Editing",
        category_slug: "video-editing",
        description: "High-impact corporate video showcasing company culture and values.",
        image: "/assets/portfolio/corporate-video.jpg",
        technologies: &["Premiere Pro", "After Effects"],
        link: None,
        featured: false,
    },
    PortfolioItem {
        id: "8",
        slug: "social-media-campaign",
        title: "Social Media Growth",
        category: "Social Media",
        category_slug: "social-media-management",
        description: "Social media strategy that grew followers from 5K to 100K in 6 months.",
        image: "/assets/portfolio/social-campaign.jpg",
        technologies: &["Instagram", "TikTok", "Content Strategy"],
        link: None,
        featured: true,
    },
];

pub const ALL_CATEGORIES: &str = "all";

pub const CATEGORIES: &[(&str, &str)] = &[
    (ALL_CATEGORIES, "All Projects"),
    ("web-development", "Web Development"),
    ("app-development", "App Development"),
    ("ui-ux-design", "UI/UX Design"),
    ("digital-marketing", "Digital Marketing"),
    ("video-editing", "Video Editing"),
    ("social-media-management", "Social Media"),
];

pub fn get_portfolio_by_slug(slug: &str) -> Option<&'static PortfolioItem> {
    PORTFOLIO.iter().find(|item| item.slug == slug)
}

pub fn featured_portfolio() -> impl Iterator<Item = &'static PortfolioItem> {
    PORTFOLIO.iter().filter(|item| item.featured)
}

pub fn portfolio_in_category(category_slug: &str) -> Vec<&'static PortfolioItem> {
    PORTFOLIO
        .iter()
        .filter(|item| category_slug == ALL_CATEGORIES || item.category_slug == category_slug)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<_> = PORTFOLIO.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), PORTFOLIO.len());
    }

    #[test]
    fn category_filter() {
        assert_eq!(portfolio_in_category(ALL_CATEGORIES).len(), PORTFOLIO.len());
        let web = portfolio_in_category("web-development");
        assert_eq!(web.len(), 2);
        assert!(web.iter().all(|p| p.category_slug == "web-development"));
        assert!(portfolio_in_category("poster-design").is_empty());
    }

    #[test]
    fn every_item_category_is_listed() {
        for item in PORTFOLIO {
            assert!(CATEGORIES.iter().any(|(slug, _)| *slug == item.category_slug));
        }
    }

    #[test]
    fn lookup_by_slug() {
        assert_eq!(get_portfolio_by_slug("fitness-app").unwrap().id, "2");
        assert!(get_portfolio_by_slug("nope").is_none());
    }
}
