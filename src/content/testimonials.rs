#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    pub image: &'static str,
    /// Stars out of five.
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "1",
        name: "Jennifer Lee",
        role: "Marketing Manager",
        company: "TechStart Inc.",
        content: "Working with this team was a game-changer for our business. They delivered a stunning website that exceeded our expectations and our online sales increased by 200%.",
        image: "/assets/testimonials/jennifer.jpg",
        rating: 5,
    },
    Testimonial {
        id: "2",
        name: "Mark Thompson",
        role: "CEO",
        company: "GrowthLabs",
        content: "Their digital marketing expertise helped us reach new audiences and triple our leads in just three months. Highly professional and results-driven.",
        image: "/assets/testimonials/mark.jpg",
        rating: 5,
    },
    Testimonial {
        id: "3",
        name: "Sophia Martinez",
        role: "Founder",
        company: "Bloom Boutique",
        content: "The app they built for us is beautiful and our customers love it. Communication was excellent from kickoff to launch.",
        image: "/assets/testimonials/sophia.jpg",
        rating: 5,
    },
    Testimonial {
        id: "4",
        name: "James Wilson",
        role: "Operations Director",
        company: "LogiCore",
        content: "The AI assistant they implemented handles most of our routine support questions. Our team finally has time for the hard problems.",
        image: "/assets/testimonials/james.jpg",
        rating: 5,
    },
    Testimonial {
        id: "5",
        name: "Olivia Brown",
        role: "Brand Manager",
        company: "Fresh Foods Co.",
        content: "Our social media presence has never been stronger. They understand our brand voice and create content that truly resonates.",
        image: "/assets/testimonials/olivia.jpg",
        rating: 4,
    },
    Testimonial {
        id: "6",
        name: "Daniel Garcia",
        role: "Product Lead",
        company: "FinEdge",
        content: "A thoughtful design process with real user research behind every decision. Our onboarding completion rate went up by 40%.",
        image: "/assets/testimonials/daniel.jpg",
        rating: 5,
    },
];

pub fn stars(rating: u8) -> impl Iterator<Item = bool> {
    (1..=5u8).map(move |i| i <= rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_are_out_of_five() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn stars_fill_up_to_rating() {
        assert_eq!(stars(4).collect::<Vec<_>>(), vec![true, true, true, true, false]);
    }
}
