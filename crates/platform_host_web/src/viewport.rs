//! Viewport queries against the browser window.

use platform_host::ViewportSize;

/// Returns the current browser viewport size, or [`ViewportSize::default`] off the browser.
pub fn viewport_size() -> ViewportSize {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let fallback = ViewportSize::default();
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(fallback.width);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(fallback.height);
            return ViewportSize::new(width, height);
        }
    }

    ViewportSize::default()
}
