//! User-facing notices and the message text for every outcome.

use leetmetric_types::{InputError, LookupError, Username};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum NoticeKind {
    Fetched,
    LoadedFromCache,
    Duplicate,
    Rejected(InputError),
    Failed(LookupError),
}

/// Transient toast-style message shown after a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    #[serde(flatten)]
    pub kind: NoticeKind,
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn fetched(username: &Username) -> Self {
        Self {
            kind: NoticeKind::Fetched,
            level: NoticeLevel::Success,
            message: format!("Successfully fetched data for {}!", username),
        }
    }

    pub fn loaded_from_cache(username: &Username) -> Self {
        Self {
            kind: NoticeKind::LoadedFromCache,
            level: NoticeLevel::Success,
            message: format!("Loaded cached data for {}!", username),
        }
    }

    pub fn duplicate() -> Self {
        Self {
            kind: NoticeKind::Duplicate,
            level: NoticeLevel::Warning,
            message: "You're already viewing this user's data!".to_string(),
        }
    }

    pub fn rejected(err: InputError) -> Self {
        Self {
            kind: NoticeKind::Rejected(err),
            level: NoticeLevel::Error,
            message: input_message(err).to_string(),
        }
    }

    pub fn failed(err: LookupError) -> Self {
        Self {
            kind: NoticeKind::Failed(err),
            level: NoticeLevel::Error,
            message: lookup_message(err),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

pub fn input_message(err: InputError) -> &'static str {
    match err {
        InputError::EmptyInput => "Username cannot be empty!",
        InputError::InvalidFormat => {
            "Please enter a valid LeetCode username (3-25 characters, letters, numbers, underscores, hyphens)"
        }
    }
}

pub fn lookup_message(err: LookupError) -> String {
    match err {
        LookupError::UserNotFound => {
            "User not found. Please check the username and try again.".to_string()
        }
        LookupError::RateLimited => {
            "Too many requests. Please wait a moment and try again.".to_string()
        }
        LookupError::ServiceUnavailable => {
            "LeetCode API is temporarily unavailable. Please try again later.".to_string()
        }
        LookupError::UpstreamError(status) => format!(
            "Failed to fetch user data (HTTP {}). Please try again later.",
            status
        ),
        LookupError::Timeout => {
            "Request timed out. Please check your internet connection and try again.".to_string()
        }
        LookupError::NetworkError => {
            "Network error. Please check your internet connection.".to_string()
        }
        LookupError::InvalidResponse => {
            "Invalid data received from server. Please try again later.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_failure_has_a_distinct_message() {
        let errors = [
            LookupError::UserNotFound,
            LookupError::RateLimited,
            LookupError::ServiceUnavailable,
            LookupError::UpstreamError(500),
            LookupError::Timeout,
            LookupError::NetworkError,
            LookupError::InvalidResponse,
        ];
        let mut messages: HashSet<String> = errors.iter().map(|e| lookup_message(*e)).collect();
        messages.insert(input_message(InputError::EmptyInput).to_string());
        messages.insert(input_message(InputError::InvalidFormat).to_string());
        messages.insert(Notice::duplicate().message);

        assert_eq!(messages.len(), errors.len() + 3);
    }

    #[test]
    fn test_upstream_message_carries_status() {
        assert!(lookup_message(LookupError::UpstreamError(502)).contains("HTTP 502"));
    }

    #[test]
    fn test_notice_json_shape() {
        let json = serde_json::to_value(Notice::failed(LookupError::UserNotFound)).unwrap();
        assert_eq!(json["outcome"], "failed");
        assert_eq!(json["reason"]["kind"], "user_not_found");
        assert_eq!(json["level"], "error");

        let json = serde_json::to_value(Notice::fetched(&Username::new("abc"))).unwrap();
        assert_eq!(json["outcome"], "fetched");
        assert_eq!(json["message"], "Successfully fetched data for abc!");
    }
}
