//! Thin wrappers over window APIs used by pages.
//!
//! Each helper no-ops (or returns a neutral value) outside the browser so
//! pages can call them unconditionally.

/// Current instant as an ISO-8601 UTC string.
pub fn now_iso() -> String {
    #[cfg(feature = "csr")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Random username suffix in `0..100`.
pub fn random_suffix() -> u8 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let n = (js_sys::Math::random() * 100.0).floor() as u8;
        n
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}

/// `scheme://host[:port]` of the current page.
pub fn origin() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Ask the user to confirm a destructive action.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// Put `text` on the clipboard. Returns whether the write was started.
pub fn copy_to_clipboard(text: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Some(clipboard) = window.navigator().clipboard() {
                let _ = clipboard.write_text(text);
                return true;
            }
        }
        false
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        false
    }
}

/// Run `f` after `millis`, e.g. to clear a transient notice.
pub fn after(millis: u32, f: impl FnOnce() + 'static) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(millis).await;
            f();
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = millis;
        f();
    }
}
