//! Failure classification shared by the HTTP adapters.

use reqwest::StatusCode;

/// Longest body excerpt carried into a failure message, in characters.
const PREVIEW_LIMIT: usize = 160;

/// Transport-neutral failure class derived from a response or client error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum FailureClass {
    Unauthorized(String),
    Timeout(String),
    RateLimited(String),
    Rejected(String),
    Transport(String),
}

pub(super) fn classify_transport_error(error: &reqwest::Error) -> FailureClass {
    if error.is_timeout() {
        FailureClass::Timeout(error.to_string())
    } else {
        FailureClass::Transport(error.to_string())
    }
}

pub(super) fn classify_status(status: StatusCode, body: &[u8]) -> FailureClass {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), preview)
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => FailureClass::Unauthorized(message),
        StatusCode::TOO_MANY_REQUESTS => FailureClass::RateLimited(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            FailureClass::Timeout(message)
        }
        _ if status.is_client_error() => FailureClass::Rejected(message),
        _ => FailureClass::Transport(message),
    }
}

/// Single-line excerpt of an error response body.
///
/// `classify_status` appends this to the status code so a rejected login or
/// lead carries the endpoint's own explanation in its port error message.
/// Whitespace runs collapse to one space and the excerpt stops at
/// `PREVIEW_LIMIT` characters, marked with a trailing ellipsis.
fn body_preview(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let mut excerpt = String::new();
    let mut kept = 0;
    let mut truncated = false;
    for word in text.split_whitespace() {
        let separator = usize::from(kept > 0);
        let needed = separator + word.chars().count();
        if kept + needed > PREVIEW_LIMIT {
            let room = PREVIEW_LIMIT.saturating_sub(kept + separator);
            if separator == 1 && room > 0 {
                excerpt.push(' ');
            }
            excerpt.extend(word.chars().take(room));
            truncated = true;
            break;
        }
        if separator == 1 {
            excerpt.push(' ');
        }
        excerpt.push_str(word);
        kept += needed;
    }
    if truncated {
        excerpt.push_str("...");
    }
    excerpt
}
