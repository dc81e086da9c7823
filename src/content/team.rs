#[derive(Debug, Default, PartialEq)]
pub struct SocialLinks {
    pub linkedin: Option<&'static str>,
    pub twitter: Option<&'static str>,
    pub github: Option<&'static str>,
}

impl SocialLinks {
    /// `(label, font awesome class, href)` for each link that is set.
    pub fn entries(&self) -> Vec<(&'static str, &'static str, &'static str)> {
        [
            ("LinkedIn", "fa-brands fa-linkedin-in", self.linkedin),
            ("Twitter", "fa-brands fa-x-twitter", self.twitter),
            ("GitHub", "fa-brands fa-github", self.github),
        ]
        .into_iter()
        .filter_map(|(label, icon, href)| href.map(|href| (label, icon, href)))
        .collect()
    }
}

#[derive(Debug, PartialEq)]
pub struct TeamMember {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
    pub social: SocialLinks,
}

impl TeamMember {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        id: "1",
        name: "Alex Johnson",
        role: "CEO & Founder",
        bio: "Visionary leader with 15+ years of experience in digital transformation and business strategy.",
        image: "/assets/team/alex.jpg",
        social: SocialLinks {
            linkedin: Some("https://linkedin.com/in/alexjohnson"),
            twitter: Some("https://twitter.com/alexjohnson"),
            github: None,
        },
    },
    TeamMember {
        id: "2",
        name: "Sarah Williams",
        role: "CTO",
        bio: "Tech expert specializing in scalable architectures and cutting-edge development solutions.",
        image: "/assets/team/sarah.jpg",
        social: SocialLinks {
            linkedin: Some("https://linkedin.com/in/sarahwilliams"),
            twitter: None,
            github: Some("https://github.com/sarahwilliams"),
        },
    },
    TeamMember {
        id: "3",
        name: "Michael Chen",
        role: "Creative Director",
        bio: "Award-winning designer with a passion for creating beautiful and functional digital experiences.",
        image: "/assets/team/michael.jpg",
        social: SocialLinks {
            linkedin: Some("https://linkedin.com/in/michaelchen"),
            twitter: Some("https://twitter.com/michaelchen"),
            github: None,
        },
    },
    TeamMember {
        id: "4",
        name: "Emily Davis",
        role: "Marketing Director",
        bio: "Digital marketing strategist with expertise in SEO, content marketing, and growth hacking.",
        image: "/assets/team/emily.jpg",
        social: SocialLinks {
            linkedin: Some("https://linkedin.com/in/emilydavis"),
            twitter: Some("https://twitter.com/emilydavis"),
            github: None,
        },
    },
    TeamMember {
        id: "5",
        name: "David Miller",
        role: "Lead Developer",
        bio: "Full-stack developer with expertise in React, Node.js, and cloud technologies.",
        image: "/assets/team/david.jpg",
        social: SocialLinks {
            linkedin: Some("https://linkedin.com/in/davidmiller"),
            twitter: None,
            github: Some("https://github.com/davidmiller"),
        },
    },
    TeamMember {
        id: "6",
        name: "Jessica Brown",
        role: "UI/UX Designer",
        bio: "User experience specialist focused on creating intuitive and engaging digital products.",
        image: "/assets/team/jessica.jpg",
        social: SocialLinks {
            linkedin: Some("https://linkedin.com/in/jessicabrown"),
            twitter: None,
            github: None,
        },
    },
    TeamMember {
        id: "7",
        name: "Robert Taylor",
        role: "Project Manager",
        bio: "Experienced PM ensuring projects are delivered on time, on budget, and exceeding expectations.",
        image: "/assets/team/robert.jpg",
        social: SocialLinks {
            linkedin: Some("https://linkedin.com/in/roberttaylor"),
            twitter: None,
            github: None,
        },
    },
    TeamMember {
        id: "8",
        name: "Lisa Anderson",
        role: "Content Strategist",
        bio: "Content expert crafting compelling narratives that engage audiences and drive results.",
        image: "/assets/team/lisa.jpg",
        social: SocialLinks {
            linkedin: Some("https://linkedin.com/in/lisaanderson"),
            twitter: Some("https://twitter.com/lisaanderson"),
            github: None,
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_entries_skip_missing_links() {
        let sarah = TEAM.iter().find(|m| m.id == "2").unwrap();
        let labels: Vec<_> = sarah.social.entries().into_iter().map(|(l, _, _)| l).collect();
        assert_eq!(labels, vec!["LinkedIn", "GitHub"]);
        assert!(SocialLinks::default().entries().is_empty());
    }

    #[test]
    fn initials() {
        assert_eq!(TEAM[0].initials(), "AJ");
    }
}
