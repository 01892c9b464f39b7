//! Interactive confirmation via the browser's `window.confirm`.

/// Ask the user to confirm `message`.
///
/// Returns `false` when no window is available (SSR) or the dialog cannot be
/// shown, so a missing browser never triggers a mutation.
pub fn ask(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
