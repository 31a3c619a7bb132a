//! Command strings for the host notification channel.
//!
//! The widget talks to its embedding application through a single status line
//! of the form `<epoch-millis>|<action>:<payload>`. The host strips everything
//! up to the first `|` (a freshness stamp, so repeated identical commands
//! still register as changes) and splits action from payload on the first `:`.

/// Action carried when the widget reports its viewport.
pub const LOCATION_ACTION: &str = "location";

pub fn format_command(epoch_millis: u64, action: &str, payload: &str) -> String {
    format!("{epoch_millis}|{action}:{payload}")
}
