const MAX_VISIBLE_LENGTH: usize = 200;

/// Strips credentials, query string and fragment from a URL before logging.
pub fn sanitize_url(raw: &str) -> String {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let Ok(mut url) = reqwest::Url::parse(trimmed) else {
        return truncate(trimmed);
    };

    if !url.username().is_empty() {
        let _ = url.set_username("[REDACTED]");
    }
    if url.password().is_some() {
        let _ = url.set_password(None);
    }
    if url.query().is_some() {
        url.set_query(Some("[REDACTED]"));
    }
    url.set_fragment(None);

    truncate(url.as_str())
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_VISIBLE_LENGTH {
        return text.to_string();
    }

    let visible: String = text.chars().take(MAX_VISIBLE_LENGTH).collect();
    format!("{}... ({} chars total)", visible, text.chars().count())
}
