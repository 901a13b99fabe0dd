//! Media URL helpers.

/// Resolve an image path returned by the backend into an absolute URL.
///
/// Absolute `http://`/`https://` URLs pass through untouched, relative paths
/// are joined onto the backend origin, and an empty path stays empty.
pub fn full_image_url(origin: &str, url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }

    let origin = origin.trim_end_matches('/');
    if url.starts_with('/') {
        format!("{}{}", origin, url)
    } else {
        format!("{}/{}", origin, url)
    }
}

/// Build a WhatsApp click-to-chat link for a phone number and message.
///
/// Everything that is not an ASCII digit is stripped from the number.
pub fn whatsapp_link(phone_number: &str, message: &str) -> String {
    let digits: String = phone_number.chars().filter(|c| c.is_ascii_digit()).collect();
    format!(
        "https://wa.me/{}?text={}",
        digits,
        urlencoding::encode(message)
    )
}
