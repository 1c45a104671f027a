//! Alerts for displaying warnings and error messages to users.
//!
//! Alerts are swapped into the alert container at the bottom of the page.

use maud::{Markup, html};

/// A message for the user, styled by its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// Something is about to happen that the user should know about.
    Warning {
        /// The headline.
        message: String,
        /// More information about what happened.
        details: String,
    },
    /// Something went wrong.
    Error {
        /// The headline.
        message: String,
        /// More information, ideally how to fix the problem.
        details: String,
    },
}

impl Alert {
    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Markup {
        let (style, message, details) = match self {
            Alert::Warning { message, details } => (
                "text-yellow-800 border-yellow-300 bg-yellow-50 \
                dark:bg-gray-800 dark:text-yellow-300 dark:border-yellow-800",
                message,
                details,
            ),
            Alert::Error { message, details } => (
                "text-red-800 border-red-300 bg-red-50 \
                dark:bg-gray-800 dark:text-red-400 dark:border-red-800",
                message,
                details,
            ),
        };

        html! {
            div
                role="alert"
                class={ "p-4 mb-4 text-sm border rounded-lg shadow " (style) }
            {
                p class="font-medium" { (message) }

                @if !details.is_empty() {
                    p class="mt-1" { (details) }
                }
            }
        }
    }
}
