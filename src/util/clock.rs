//! Display timestamps for outgoing messages.
//!
//! Timestamps are formatted by the sender and travel as plain strings; the
//! receiving side never parses them.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Source of the hour:minute string stamped onto outgoing messages.
pub trait Clock {
    fn display_time(&self) -> String;
}

/// Wall clock of the local machine.
///
/// In the browser this defers to `Date.toLocaleTimeString` with two-digit
/// hour and minute in the navigator's locale, so 12/24-hour style follows
/// the user's settings.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn display_time(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            browser_display_time()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            format_hour_minute(&chrono::Local::now().time())
        }
    }
}

/// Zero-padded `HH:MM`.
pub fn format_hour_minute(time: &impl chrono::Timelike) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

#[cfg(feature = "hydrate")]
fn browser_display_time() -> String {
    let locale = web_sys::window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_else(|| "en-US".to_owned());

    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &"hour".into(), &"2-digit".into());
    let _ = js_sys::Reflect::set(&options, &"minute".into(), &"2-digit".into());

    js_sys::Date::new_0()
        .to_locale_time_string_with_options(&locale, &options)
        .into()
}

/// Clock frozen at a fixed display string.
#[cfg(test)]
pub(crate) struct FixedClock(pub &'static str);

#[cfg(test)]
impl Clock for FixedClock {
    fn display_time(&self) -> String {
        self.0.to_owned()
    }
}
