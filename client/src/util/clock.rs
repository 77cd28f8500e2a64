//! Wall-clock helpers and the simulated network delay.
//!
//! Browser builds read time from `Date` and sleep with `gloo-timers`; SSR and
//! test builds fall back to `SystemTime` (UTC) and skip the delay entirely.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::time::Duration;

/// Current time in milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// Render a timestamp as `HH:MM` in the viewer's local time zone.
pub fn format_time(timestamp_ms: f64) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms));
        format_clock(date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let (hours, minutes) = utc_hours_minutes(timestamp_ms);
        format_clock(hours, minutes)
    }
}

/// Zero-padded `HH:MM`.
pub fn format_clock(hours: u32, minutes: u32) -> String {
    format!("{hours:02}:{minutes:02}")
}

#[cfg(not(feature = "hydrate"))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn utc_hours_minutes(timestamp_ms: f64) -> (u32, u32) {
    let total_minutes = (timestamp_ms.max(0.0) / 60_000.0) as u64;
    let minutes = (total_minutes % 60) as u32;
    let hours = ((total_minutes / 60) % 24) as u32;
    (hours, minutes)
}

/// Wait for `delay` in the browser; resolve immediately elsewhere.
pub async fn simulate_latency(delay: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(delay).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay;
    }
}
