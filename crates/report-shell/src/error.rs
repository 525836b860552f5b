/// Text shown when a route error carries neither a status description nor a message.
pub const UNKNOWN_ERROR_TEXT: &str = "Unknown error";

/// Why a route failed to match or render.
///
/// Every variant maps to exactly one line of display text, see [`RouteError::display_text`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// A status code together with its description, e.g. `404 Not Found`.
    #[error("{text}")]
    Status { code: u16, text: String },

    /// A generic failure message without a status description.
    #[error("{0}")]
    Message(String),

    #[error("{}", UNKNOWN_ERROR_TEXT)]
    Unknown,
}

impl RouteError {
    pub fn status(code: u16, text: impl Into<String>) -> Self {
        match non_empty(text.into()) {
            Some(text) => RouteError::Status { code, text },
            None => RouteError::Unknown,
        }
    }

    pub fn message(text: impl Into<String>) -> Self {
        match non_empty(text.into()) {
            Some(text) => RouteError::Message(text),
            None => RouteError::Unknown,
        }
    }

    /// Builds an error from the loose fields a router usually hands out.
    ///
    /// A non-empty status description wins over the message; when neither is
    /// usable the error is [`RouteError::Unknown`]. The status code is not
    /// known in this form and defaults to 500.
    pub fn from_parts(status_text: Option<&str>, message: Option<&str>) -> Self {
        match status_text.map(|text| RouteError::status(500, text)) {
            Some(status @ RouteError::Status { .. }) => status,
            _ => message.map_or(RouteError::Unknown, RouteError::message),
        }
    }

    /// Picks the error to show when a boundary caught several at once.
    ///
    /// Status errors win over messages, messages over `Unknown`; within a
    /// kind the lowest status code, then the lexically smallest text, wins.
    /// The result does not depend on the order the errors arrive in.
    pub fn most_relevant(errors: impl IntoIterator<Item = RouteError>) -> Self {
        errors
            .into_iter()
            .min_by(|a, b| a.rank().cmp(&b.rank()).then_with(|| a.display_text().cmp(b.display_text())))
            .unwrap_or(RouteError::Unknown)
    }

    fn rank(&self) -> (u8, u16) {
        match self {
            RouteError::Status { code, .. } => (0, *code),
            RouteError::Message(_) => (1, 0),
            RouteError::Unknown => (2, 0),
        }
    }

    pub fn not_found() -> Self {
        RouteError::Status {
            code: 404,
            text: "Not Found".to_string(),
        }
    }

    pub fn code(&self) -> Option<u16> {
        match self {
            RouteError::Status { code, .. } => Some(*code),
            RouteError::Message(_) | RouteError::Unknown => None,
        }
    }

    pub fn display_text(&self) -> &str {
        match self {
            RouteError::Status { text, .. } => text,
            RouteError::Message(message) => message,
            RouteError::Unknown => UNKNOWN_ERROR_TEXT,
        }
    }
}

/// Errors thrown into an `ErrorBoundary` keep their variant when they are
/// already a `RouteError`; anything else becomes a message.
impl From<&leptos::error::Error> for RouteError {
    fn from(error: &leptos::error::Error) -> Self {
        match error.downcast_ref::<RouteError>() {
            Some(route_error) => route_error.clone(),
            None => RouteError::message(error.to_string()),
        }
    }
}

/// Whitespace-only text counts as absent.
fn non_empty(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_is_displayed() {
        let error = RouteError::from_parts(Some("Not Found"), None);
        assert_eq!(error.display_text(), "Not Found");
    }

    #[test]
    fn test_message_used_without_status_text() {
        let error = RouteError::from_parts(None, Some("Network failure"));
        assert_eq!(error, RouteError::Message("Network failure".to_string()));
        assert_eq!(error.display_text(), "Network failure");
    }

    #[test]
    fn test_status_text_wins_over_message() {
        let error = RouteError::from_parts(Some("Service Unavailable"), Some("upstream timed out"));
        assert_eq!(error.display_text(), "Service Unavailable");
    }

    #[test]
    fn test_empty_status_text_falls_through_to_message() {
        let error = RouteError::from_parts(Some(""), Some("Network failure"));
        assert_eq!(error.display_text(), "Network failure");

        let error = RouteError::from_parts(Some("   "), Some("Network failure"));
        assert_eq!(error.display_text(), "Network failure");
    }

    #[test]
    fn test_status_code_defaults_to_500() {
        let error = RouteError::from_parts(Some("Bad Gateway"), Some("upstream closed"));
        assert_eq!(error, RouteError::Status { code: 500, text: "Bad Gateway".to_string() });
    }

    #[test]
    fn test_most_relevant_prefers_status() {
        let errors = vec![
            RouteError::message("socket closed"),
            RouteError::Unknown,
            RouteError::status(503, "Service Unavailable"),
            RouteError::status(404, "Not Found"),
        ];
        assert_eq!(RouteError::most_relevant(errors.clone()), RouteError::not_found());

        let reversed: Vec<_> = errors.into_iter().rev().collect();
        assert_eq!(RouteError::most_relevant(reversed), RouteError::not_found());
    }

    #[test]
    fn test_most_relevant_is_order_independent_for_messages() {
        let a = vec![RouteError::message("timeout"), RouteError::message("reset")];
        let b = vec![RouteError::message("reset"), RouteError::message("timeout")];
        assert_eq!(RouteError::most_relevant(a), RouteError::most_relevant(b));
    }

    #[test]
    fn test_most_relevant_of_nothing_is_unknown() {
        assert_eq!(RouteError::most_relevant(Vec::new()), RouteError::Unknown);
    }

    #[test]
    fn test_neither_field_uses_fallback() {
        assert_eq!(RouteError::from_parts(None, None), RouteError::Unknown);
        assert_eq!(RouteError::from_parts(Some(""), Some("")), RouteError::Unknown);
        assert_eq!(RouteError::Unknown.display_text(), UNKNOWN_ERROR_TEXT);
    }

    #[test]
    fn test_empty_constructors_collapse_to_unknown() {
        assert_eq!(RouteError::status(500, ""), RouteError::Unknown);
        assert_eq!(RouteError::message(String::new()), RouteError::Unknown);
    }

    #[test]
    fn test_display_matches_display_text() {
        let errors = [
            RouteError::not_found(),
            RouteError::message("boom"),
            RouteError::Unknown,
        ];
        for error in errors {
            assert_eq!(error.to_string(), error.display_text());
        }
    }

    #[test]
    fn test_not_found() {
        let error = RouteError::not_found();
        assert_eq!(error.code(), Some(404));
        assert_eq!(error.display_text(), "Not Found");
        assert_eq!(RouteError::message("x").code(), None);
    }

    #[derive(Debug, thiserror::Error)]
    #[error("connection reset")]
    struct ConnectionReset;

    #[test]
    fn test_from_boundary_error_keeps_variant() {
        let caught = leptos::error::Error::from(RouteError::status(503, "Service Unavailable"));
        assert_eq!(
            RouteError::from(&caught),
            RouteError::Status { code: 503, text: "Service Unavailable".to_string() }
        );
    }

    #[test]
    fn test_from_foreign_boundary_error_is_message() {
        let caught = leptos::error::Error::from(ConnectionReset);
        assert_eq!(RouteError::from(&caught), RouteError::Message("connection reset".to_string()));
    }
}
