#[derive(Debug, PartialEq)]
pub struct FaqItem {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
}

pub const FAQ_ITEMS: &[FaqItem] = &[
    FaqItem {
        id: "1",
        question: "What services do you offer?",
        answer: "We offer a comprehensive range of digital services including AI implementation, web development, app development, digital marketing, UI/UX design, email marketing, video editing and social media management.",
        category: "General",
    },
    FaqItem {
        id: "2",
        question: "How long does a typical project take?",
        answer: "Project timelines vary depending on complexity. A simple website might take 2-4 weeks, while a complex web application could take 2-6 months. We provide detailed timelines during our initial consultation.",
        category: "General",
    },
    FaqItem {
        id: "4",
        question: "Do you offer ongoing support and maintenance?",
        answer: "Yes, we offer various support packages ranging from 1 month to 12 months. This includes bug fixes, security updates, content updates, and technical support.",
        category: "Support",
    },
    FaqItem {
        id: "5",
        question: "What technologies do you use?",
        answer: "We use modern technologies including React, Vue, Node.js, Python, TypeScript, Rust, React Native, Flutter, and various cloud services. We choose the best technology stack based on your project requirements.",
        category: "Technical",
    },
    FaqItem {
        id: "6",
        question: "Can you help with existing projects?",
        answer: "Absolutely! We can take over existing projects, perform code audits, fix bugs, add new features, or completely redesign and rebuild applications.",
        category: "General",
    },
    FaqItem {
        id: "7",
        question: "How do you handle project communication?",
        answer: "We use various tools like Slack, email, and project management platforms to keep you updated. You'll have regular meetings with your project manager and access to progress reports.",
        category: "Process",
    },
    FaqItem {
        id: "9",
        question: "Do you sign NDAs?",
        answer: "Yes, we're happy to sign Non-Disclosure Agreements before discussing your project details. We take confidentiality seriously.",
        category: "Legal",
    },
    FaqItem {
        id: "10",
        question: "Can you help with SEO?",
        answer: "Yes, SEO is a core part of our digital marketing services. We offer on-page optimization, technical SEO, content strategy, link building, and ongoing SEO maintenance.",
        category: "Services",
    },
];

pub const ALL_CATEGORIES: &str = "all";

/// Distinct categories in the order they first appear.
pub fn faq_categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = Vec::new();
    for item in FAQ_ITEMS {
        if !categories.contains(&item.category) {
            categories.push(item.category);
        }
    }
    categories
}

pub fn faqs_in_category(category: &str) -> Vec<&'static FaqItem> {
    FAQ_ITEMS
        .iter()
        .filter(|item| category == ALL_CATEGORIES || item.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = FAQ_ITEMS.iter().map(|f| f.id).collect();
        assert_eq!(ids.len(), FAQ_ITEMS.len());
    }

    #[test]
    fn categories_keep_first_seen_order() {
        assert_eq!(
            faq_categories(),
            vec!["General", "Support", "Technical", "Process", "Legal", "Services"]
        );
    }

    #[test]
    fn filter_by_category() {
        assert_eq!(faqs_in_category(ALL_CATEGORIES).len(), FAQ_ITEMS.len());
        assert_eq!(faqs_in_category("General").len(), 3);
        assert!(faqs_in_category("Pricing").is_empty());
    }
}
