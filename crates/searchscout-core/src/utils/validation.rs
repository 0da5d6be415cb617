//! Validation of user-entered site data.
//!
//! Runs before any mutation so invalid input never reaches storage.

use thiserror::Error;
use url::Url;

use crate::config::{MAX_NAME_LENGTH, PLACEHOLDER_TOKEN};

/// User-correctable input problem. The `Display` text is shown inline in
/// the editor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteValidationError {
    #[error("Name is required.")]
    EmptyName,

    #[error("Name must be 50 characters or less.")]
    NameTooLong,

    #[error("URL is required.")]
    EmptyUrl,

    #[error("Please enter a valid URL.")]
    InvalidUrl,

    #[error("URL must start with http:// or https://")]
    UnsupportedScheme,

    #[error("URL must contain %s placeholder for search term.")]
    MissingPlaceholder,

    #[error("URL should contain only one %s placeholder.")]
    MultiplePlaceholders,

    #[error("You can add at most 50 search sites.")]
    TooManySites,
}

/// Validate a site name and URL template.
///
/// Checks run in a fixed order and the first failure is reported.
///
/// # Examples
///
/// ```rust
/// use searchscout_core::utils::validation::{SiteValidationError, validate_site};
///
/// assert!(validate_site("Example", "https://example.com/?q=%s").is_ok());
/// assert_eq!(
///     validate_site("Example", "https://example.com/"),
///     Err(SiteValidationError::MissingPlaceholder)
/// );
/// ```
pub fn validate_site(name: &str, url: &str) -> Result<(), SiteValidationError> {
    validate_name(name)?;
    validate_url(url)
}

/// Validate a site name on its own.
pub fn validate_name(name: &str) -> Result<(), SiteValidationError> {
    if name.is_empty() {
        return Err(SiteValidationError::EmptyName);
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(SiteValidationError::NameTooLong);
    }
    Ok(())
}

/// Validate a URL template on its own.
pub fn validate_url(url: &str) -> Result<(), SiteValidationError> {
    if url.is_empty() {
        return Err(SiteValidationError::EmptyUrl);
    }

    let parsed = Url::parse(url).map_err(|_| SiteValidationError::InvalidUrl)?;
    // The parser normalises case, whitespace and slashes; the template must
    // literally start with the scheme it is stored with.
    if !matches!(parsed.scheme(), "http" | "https")
        || !(url.starts_with("http://") || url.starts_with("https://"))
    {
        return Err(SiteValidationError::UnsupportedScheme);
    }

    match url.matches(PLACEHOLDER_TOKEN).count() {
        0 => Err(SiteValidationError::MissingPlaceholder),
        1 => Ok(()),
        _ => Err(SiteValidationError::MultiplePlaceholders),
    }
}
