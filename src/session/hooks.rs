//! Hidden elements that connect the page to the session endpoints.

use maud::{Markup, html};

use crate::endpoints;

/// The minimum time between two reports of the same kind of activity.
const ACTIVITY_THROTTLE: &str = "2s";

/// How often the page asks whether the session has expired.
const SESSION_POLL_INTERVAL: &str = "10s";

/// How long the reload warning is shown before the page reloads.
const RELOAD_DELAY: &str = "3s";

/// Report pointer movement and key presses, and poll for session expiry.
///
/// Rendered once per page load.
pub fn activity_hooks() -> Markup {
    html! {
        div
            id="pointer-activity"
            hx-post=(endpoints::ACTIVITY)
            hx-trigger={ "mousemove from:document throttle:" (ACTIVITY_THROTTLE) }
            hx-vals=r#"{"signal": "pointer_move"}"#
            hidden
        {}

        div
            id="key-activity"
            hx-post=(endpoints::ACTIVITY)
            hx-trigger={ "keydown from:document throttle:" (ACTIVITY_THROTTLE) }
            hx-vals=r#"{"signal": "key_press"}"#
            hidden
        {}

        div
            id="session-poll"
            hx-get=(endpoints::SESSION)
            hx-trigger={ "every " (SESSION_POLL_INTERVAL) }
            hidden
        {}
    }
}

/// Reload the page shortly after this element is swapped in.
pub fn reload_hook() -> Markup {
    html! {
        div
            hx-get=(endpoints::RELOAD)
            hx-trigger={ "load delay:" (RELOAD_DELAY) }
            hx-swap="none"
            hidden
        {}
    }
}
