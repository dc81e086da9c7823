use chrono::NaiveDate;

pub fn phone_link(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}

pub fn whatsapp_link(phone: &str, message: Option<&str>) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    let base = format!("https://wa.me/{}", digits.trim_start_matches('+'));
    match message {
        Some(text) => format!("{}?text={}", base, urlencoding::encode(text)),
        None => base,
    }
}

pub fn email_link(email: &str, subject: Option<&str>) -> String {
    match subject {
        Some(subject) => format!("mailto:{}?subject={}", email, urlencoding::encode(subject)),
        None => format!("mailto:{}", email),
    }
}

pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

/// `2024-01-15` becomes `January 15, 2024`. Unparseable input is returned as is.
pub fn format_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

pub fn slugify(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();
    let mut slug = String::with_capacity(cleaned.len());
    for word in cleaned.split_whitespace() {
        if !slug.is_empty() {
            slug.push('-');
        }
        slug.push_str(word);
    }
    while slug.contains("--") {
        slug = slug.replace("--", "-");
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_links_drop_spaces() {
        assert_eq!(phone_link("+1 234 567 8900"), "tel:+12345678900");
    }

    #[test]
    fn whatsapp_links_drop_plus_and_encode_text() {
        assert_eq!(whatsapp_link("+1 234 567", None), "https://wa.me/1234567");
        assert_eq!(
            whatsapp_link("+1234567890", Some("Hi there & more")),
            "https://wa.me/1234567890?text=Hi%20there%20%26%20more"
        );
    }

    #[test]
    fn email_links() {
        assert_eq!(email_link("a@b.co", None), "mailto:a@b.co");
        assert_eq!(email_link("a@b.co", Some("Hello you")), "mailto:a@b.co?subject=Hello%20you");
    }

    #[test]
    fn truncation() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("hello world again", 6), "hello...");
    }

    #[test]
    fn dates() {
        assert_eq!(format_date("2024-01-15"), "January 15, 2024");
        assert_eq!(format_date("2024-01-05"), "January 5, 2024");
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn slugs() {
        assert_eq!(slugify("UI/UX Design"), "uiux-design");
        assert_eq!(slugify("  Hello,  World -- again "), "hello-world-again");
    }
}
