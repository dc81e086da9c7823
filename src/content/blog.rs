#[derive(Debug, PartialEq)]
pub struct BlogPost {
    pub id: &'static str,
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub content: &'static str,
    pub image: &'static str,
    pub author: &'static str,
    pub author_image: &'static str,
    /// ISO date, `YYYY-MM-DD`.
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: "1",
        slug: "future-of-web-development-2024",
        title: "The Future of Web Development in 2024",
        excerpt: "Explore the latest trends and technologies shaping the future of web development, from AI integration to new frameworks.",
        content: r#"
# The Future of Web Development in 2024

The web development landscape is constantly evolving, and 2024 brings exciting new possibilities for developers and businesses alike.

## AI-Powered Development

Artificial intelligence is revolutionizing how we build websites. From code completion to automated testing, AI tools are making developers more productive than ever.

## Modern Frameworks

React, Vue, and Svelte continue to dominate, but new players like Solid.js and Qwik are gaining traction with their innovative approaches to performance.

## The Rise of Edge Computing

Edge computing is changing how we think about server-side rendering and API responses, bringing content closer to users for faster experiences.

## Conclusion

Staying updated with these trends is crucial for any developer or business looking to stay competitive in the digital landscape.
"#,
        image: "/assets/blog/web-development.jpg",
        author: "Alex Johnson",
        author_image: "/assets/team/alex.jpg",
        date: "2024-01-15",
        read_time: "5 min read",
        category: "Web Development",
        tags: &["Web Development", "Technology", "Trends"],
    },
    BlogPost {
        id: "2",
        slug: "seo-best-practices-2024",
        title: "SEO Best Practices for 2024",
        excerpt: "Learn the latest SEO strategies to improve your website ranking and drive more organic traffic.",
        content: r#"
# SEO Best Practices for 2024

Search engine optimization continues to evolve, and staying ahead of the curve is essential for digital success.

## Core Web Vitals

Google's Core Web Vitals remain crucial ranking factors. Focus on LCP, FID, and CLS to improve your scores.

## Content Quality

High-quality, helpful content that answers user questions is more important than ever.

## Mobile-First Indexing

With mobile traffic dominating, ensuring your site is mobile-optimized is non-negotiable.
"#,
        image: "/assets/blog/seo.jpg",
        author: "Emily Davis",
        author_image: "/assets/team/emily.jpg",
        date: "2024-01-10",
        read_time: "7 min read",
        category: "Digital Marketing",
        tags: &["SEO", "Marketing", "Digital"],
    },
    BlogPost {
        id: "3",
        slug: "mobile-app-design-trends",
        title: "Mobile App Design Trends to Watch",
        excerpt: "Discover the latest mobile app design trends that are shaping user experiences in 2024.",
        content: r#"
# Mobile App Design Trends to Watch

Mobile app design is evolving rapidly, with new trends emerging that prioritize user experience and engagement.

## Minimalist Design

Less is more. Clean, minimalist interfaces are gaining popularity for their clarity and ease of use.

## Dark Mode

Dark mode isn't just a trend, it's becoming an expectation. Users appreciate the option for reduced eye strain.

## Micro-interactions

Subtle animations and feedback make apps feel more alive and responsive to user actions.
"#,
        image: "/assets/blog/mobile-design.jpg",
        author: "Michael Chen",
        author_image: "/assets/team/michael.jpg",
        date: "2024-01-05",
        read_time: "6 min read",
        category: "Design",
        tags: &["Design", "Mobile", "UX"],
    },
    BlogPost {
        id: "4",
        slug: "social-media-marketing-strategies",
        title: "Effective Social Media Marketing Strategies",
        excerpt: "Boost your social media presence with these proven marketing strategies for 2024.",
        content: r#"
# Effective Social Media Marketing Strategies

Social media continues to be a powerful tool for brand building and customer engagement.

## Video Content Dominance

Short-form video content on platforms like TikTok and Instagram Reels is driving engagement.

## Authentic Engagement

Users are craving authentic interactions. Focus on building genuine connections with your audience.

## Influencer Partnerships

Strategic influencer collaborations can amplify your reach and credibility.
"#,
        image: "/assets/blog/social-media.jpg",
        author: "Emily Davis",
        author_image: "/assets/team/emily.jpg",
        date: "2024-01-01",
        read_time: "5 min read",
        category: "Social Media",
        tags: &["Social Media", "Marketing", "Strategy"],
    },
];

pub fn get_blog_post_by_slug(slug: &str) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|post| post.slug == slug)
}

pub fn recent_posts(count: usize) -> &'static [BlogPost] {
    &BLOG_POSTS[..count.min(BLOG_POSTS.len())]
}

pub fn related_posts(post: &BlogPost, count: usize) -> Vec<&'static BlogPost> {
    BLOG_POSTS
        .iter()
        .filter(|p| p.id != post.id && p.category == post.category)
        .take(count)
        .collect()
}

/// A piece of a post body. Posts are written with `#` and `##` headings
/// and blank-line separated paragraphs.
#[derive(Debug, PartialEq)]
pub enum Block<'a> {
    Title(&'a str),
    Heading(&'a str),
    Paragraph(String),
}

fn flush<'a>(paragraph: &mut Vec<&'a str>, blocks: &mut Vec<Block<'a>>) {
    if !paragraph.is_empty() {
        blocks.push(Block::Paragraph(paragraph.join(" ")));
        paragraph.clear();
    }
}

pub fn parse_body(content: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for line in content.lines().map(str::trim) {
        if let Some(text) = line.strip_prefix("## ") {
            flush(&mut paragraph, &mut blocks);
            blocks.push(Block::Heading(text));
        } else if let Some(text) = line.strip_prefix("# ") {
            flush(&mut paragraph, &mut blocks);
            blocks.push(Block::Title(text));
        } else if line.is_empty() {
            flush(&mut paragraph, &mut blocks);
        } else {
            paragraph.push(line);
        }
    }
    flush(&mut paragraph, &mut blocks);
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<_> = BLOG_POSTS.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), BLOG_POSTS.len());
    }

    #[test]
    fn unknown_slug_is_none() {
        assert!(get_blog_post_by_slug("seo-best-practices-2024").is_some());
        assert!(get_blog_post_by_slug("seo-best-practices-2023").is_none());
    }

    #[test]
    fn recent_posts_is_clamped() {
        assert_eq!(recent_posts(3).len(), 3);
        assert_eq!(recent_posts(40).len(), BLOG_POSTS.len());
        assert_eq!(recent_posts(3)[0].id, "1");
    }

    #[test]
    fn related_posts_share_category() {
        let post = get_blog_post_by_slug("seo-best-practices-2024").unwrap();
        assert!(related_posts(post, 2).is_empty());
    }

    #[test]
    fn body_parsing() {
        let blocks = parse_body("\n# Title\n\nFirst line\nsecond line\n\n## Part\n\nMore.\n");
        assert_eq!(
            blocks,
            vec![
                Block::Title("Title"),
                Block::Paragraph("First line second line".to_string()),
                Block::Heading("Part"),
                Block::Paragraph("More.".to_string()),
            ]
        );
    }

    #[test]
    fn every_post_starts_with_its_title() {
        for post in BLOG_POSTS {
            assert_eq!(parse_body(post.content).first(), Some(&Block::Title(post.title)));
        }
    }
}
