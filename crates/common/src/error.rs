//! Error types shared by the site.

use thiserror::Error;

/// Errors surfaced to visitors as an error page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    /// No route matched the requested path.
    #[error("page not found: {path}")]
    NotFound { path: String },

    /// Anything else that prevents a page from rendering.
    #[error("unexpected error: {message}")]
    Unknown { message: String },
}

impl SiteError {
    /// Build a not-found error for a path.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// HTTP-style status code shown on the error page.
    pub fn status(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Unknown { .. } => 500,
        }
    }

    /// Machine-readable status label rendered in the error page's code block.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Unknown { .. } => "error",
        }
    }

    /// Machine-readable message key rendered in the error page's code block.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "page_not_found",
            Self::Unknown { .. } => "unknown_error",
        }
    }

    /// Human-readable headline.
    pub fn headline(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "Page not found",
            Self::Unknown { .. } => "Something went wrong",
        }
    }
}

/// A stored theme string that is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme value: {0:?}")]
pub struct ParseThemeError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_labels() {
        let err = SiteError::not_found("/nope");
        assert_eq!(err.status(), 404);
        assert_eq!(err.code(), "not_found");
        assert_eq!(err.message_key(), "page_not_found");
        assert_eq!(err.to_string(), "page not found: /nope");
    }

    #[test]
    fn test_unknown_labels() {
        let err = SiteError::Unknown { message: "boom".into() };
        assert_eq!(err.status(), 500);
        assert_eq!(err.code(), "error");
        assert_eq!(err.message_key(), "unknown_error");
    }
}
