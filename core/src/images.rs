use std::fmt;

use url::Url;

use crate::catalog::{PLACEHOLDER_IMAGE, REMOTE_IMAGE_HOSTS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageUrlError {
    Empty,
    Malformed { url: String },
    InsecureScheme { scheme: String },
    HostNotAllowed { host: String },
}

impl fmt::Display for ImageUrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageUrlError::Empty => write!(f, "image url is empty"),
            ImageUrlError::Malformed { url } => write!(f, "image url '{url}' is malformed"),
            ImageUrlError::InsecureScheme { scheme } => {
                write!(f, "image url scheme '{scheme}' is not https")
            }
            ImageUrlError::HostNotAllowed { host } => {
                write!(f, "image host '{host}' is not allowed")
            }
        }
    }
}

impl std::error::Error for ImageUrlError {}

pub fn validate_image_url(raw: &str, allowed_hosts: &[&str]) -> Result<Url, ImageUrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ImageUrlError::Empty);
    }
    let url = Url::parse(trimmed).map_err(|_| ImageUrlError::Malformed {
        url: trimmed.to_string(),
    })?;
    if url.scheme() != "https" {
        return Err(ImageUrlError::InsecureScheme {
            scheme: url.scheme().to_string(),
        });
    }
    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    if !allowed_hosts
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(&host))
    {
        return Err(ImageUrlError::HostNotAllowed { host });
    }
    Ok(url)
}

/// Picks the URL to render for an optional image, substituting the
/// placeholder when the candidate is missing or not fetchable.
pub fn resolve_image_src(candidate: Option<&str>) -> &str {
    match candidate {
        Some(raw) if validate_image_url(raw, REMOTE_IMAGE_HOSTS).is_ok() => raw.trim(),
        _ => PLACEHOLDER_IMAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOSTS: &[&str] = &["images.example.com"];

    #[test]
    fn rejects_foreign_and_insecure_urls() {
        assert_eq!(validate_image_url("   ", HOSTS), Err(ImageUrlError::Empty));
        assert!(matches!(
            validate_image_url("http://images.example.com/a.png", HOSTS),
            Err(ImageUrlError::InsecureScheme { .. })
        ));
        assert!(matches!(
            validate_image_url("https://elsewhere.net/a.png", HOSTS),
            Err(ImageUrlError::HostNotAllowed { .. })
        ));
        assert!(matches!(
            validate_image_url("not a url", HOSTS),
            Err(ImageUrlError::Malformed { .. })
        ));
        assert!(validate_image_url("https://IMAGES.example.com/a.png", HOSTS).is_ok());
    }

    #[test]
    fn missing_image_falls_back_to_placeholder() {
        assert_eq!(resolve_image_src(None), PLACEHOLDER_IMAGE);
        assert_eq!(
            resolve_image_src(Some("https://evil.invalid/x.png")),
            PLACEHOLDER_IMAGE
        );
    }
}
