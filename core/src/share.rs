use std::fmt;

use crate::preview::js_trim;

pub const COPY_FAILURE_MESSAGE: &str = "❌ Unable to copy link";

pub fn share_url(origin: &str, displayed_path: &str) -> String {
    format!("{origin}{}", js_trim(displayed_path))
}

pub fn copy_success_message(url: &str) -> String {
    format!("✅ Link copied: {url}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    Unavailable(String),
    Rejected(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(reason) => write!(f, "clipboard unavailable: {reason}"),
            ClipboardError::Rejected(reason) => write!(f, "clipboard write rejected: {reason}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

pub trait Notify {
    fn notify(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { url: String },
    Failed { url: String, error: ClipboardError },
}

/// Writes the share link to the clipboard and reports the result through
/// `notifier`. The failure cause is returned, never shown.
pub async fn copy_share_link<C, N>(
    clipboard: &C,
    notifier: &N,
    origin: &str,
    displayed_path: &str,
) -> CopyOutcome
where
    C: Clipboard + ?Sized,
    N: Notify + ?Sized,
{
    let url = share_url(origin, displayed_path);
    match clipboard.write_text(&url).await {
        Ok(()) => {
            notifier.notify(&copy_success_message(&url));
            CopyOutcome::Copied { url }
        }
        Err(error) => {
            notifier.notify(COPY_FAILURE_MESSAGE);
            CopyOutcome::Failed { url, error }
        }
    }
}
