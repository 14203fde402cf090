//! `setInterval`-backed timer adapter.

use std::time::Duration;

use platform_host::{IntervalCallback, IntervalHandle, IntervalScheduler};

#[derive(Debug, Clone, Copy, Default)]
/// Browser interval scheduler. Dropping the returned handle calls `clearInterval`.
///
/// Off the browser no timer primitive exists and [`IntervalScheduler::start`] fails.
pub struct WebIntervalScheduler;

impl IntervalScheduler for WebIntervalScheduler {
    fn start(
        &self,
        period: Duration,
        callback: IntervalCallback,
    ) -> Result<IntervalHandle, String> {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::{closure::Closure, JsCast};

            let window = web_sys::window().ok_or_else(|| "browser window unavailable".to_string())?;
            let closure = Closure::<dyn Fn()>::new(move || callback());
            let millis = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);
            let interval_id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    millis,
                )
                .map_err(|err| format!("setInterval failed: {err:?}"))?;

            return Ok(IntervalHandle::new(move || {
                if let Some(window) = web_sys::window() {
                    window.clear_interval_with_handle(interval_id);
                }
                // The JS side no longer references the closure once the interval is cleared.
                drop(closure);
            }));
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (period, callback);
            Err("interval timers are only available in the browser".to_string())
        }
    }
}
