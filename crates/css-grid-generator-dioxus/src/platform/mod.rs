//! Platform-specific functionality
//!
//! Access to host capabilities that only exist in the webview or browser.
//! Both the desktop webview and the web target expose the async clipboard
//! API, so a single script bridge covers them.

use dioxus::document;
use std::time::Duration;

/// Script run in the page; receives the text over the eval channel and
/// reports whether the write was accepted.
const WRITE_CLIPBOARD_JS: &str = r#"
const text = await dioxus.recv();
try {
    await navigator.clipboard.writeText(text);
    return true;
} catch (_) {
    return false;
}
"#;

/// Resolves after the number of milliseconds sent over the eval channel
const SLEEP_JS: &str = r#"
const ms = await dioxus.recv();
await new Promise((resolve) => setTimeout(resolve, ms));
return true;
"#;

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("Host script failed: {0}")]
    Eval(String),
    #[error("Clipboard write was rejected by the host")]
    ClipboardRejected,
}

/// Write `text` to the system clipboard.
///
/// Must be awaited inside a Dioxus task.
pub async fn write_clipboard(text: String) -> Result<(), PlatformError> {
    let eval = document::eval(WRITE_CLIPBOARD_JS);
    eval.send(text)
        .map_err(|e| PlatformError::Eval(format!("{e:?}")))?;

    let written: bool = eval
        .join()
        .await
        .map_err(|e| PlatformError::Eval(format!("{e:?}")))?;

    if written {
        Ok(())
    } else {
        Err(PlatformError::ClipboardRejected)
    }
}

/// Wait for `duration` using the page's timer, which both the webview and
/// the browser provide without an async runtime of our own.
pub async fn sleep(duration: Duration) -> Result<(), PlatformError> {
    let eval = document::eval(SLEEP_JS);
    let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
    eval.send(millis)
        .map_err(|e| PlatformError::Eval(format!("{e:?}")))?;

    let _: bool = eval
        .join()
        .await
        .map_err(|e| PlatformError::Eval(format!("{e:?}")))?;
    Ok(())
}
