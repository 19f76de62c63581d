use url::Url;
use urlencoding::encode;

/// Builds the `mailto:` URI the platform mail handler will open: subject
/// carries the sender's name, the body repeats all three fields.
pub fn compose(to: &str, name: &str, email: &str, message: &str) -> Url {
    let subject = format!("Portfolio Contact from {}", name);
    let body = format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        name, email, message
    );

    let raw = format!(
        "mailto:{}?subject={}&body={}",
        to,
        encode(&subject),
        encode(&body)
    );

    Url::parse(&raw).unwrap()
}
