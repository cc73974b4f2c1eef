//! Alert messages for telling the user how an operation went.
use maud::{Markup, html};

/// A dismissable message with a severity, a short `message`, and `details`
/// explaining what to do next.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// The operation succeeded.
    Success {
        /// The headline, e.g. "Car created".
        message: String,
        /// What happened or what to do next.
        details: String,
    },
    /// The operation failed.
    Error {
        /// The headline, e.g. "Could not save the car".
        message: String,
        /// What happened or what to do next.
        details: String,
    },
}

impl Alert {
    /// Create a success alert.
    pub fn success(message: &str, details: &str) -> Self {
        Self::Success {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Create an error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Self::Error {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Render the alert as a banner.
    pub fn into_html(self) -> Markup {
        let (container_style, message, details) = match self {
            Alert::Success { message, details } => (
                "p-4 text-sm rounded border border-green-300 bg-green-50 text-green-800 \
                dark:bg-gray-800 dark:text-green-400 dark:border-green-800",
                message,
                details,
            ),
            Alert::Error { message, details } => (
                "p-4 text-sm rounded border border-red-300 bg-red-50 text-red-800 \
                dark:bg-gray-800 dark:text-red-400 dark:border-red-800",
                message,
                details,
            ),
        };

        html! {
            div class=(container_style) role="alert"
            {
                p class="font-medium" { (message) }

                @if !details.is_empty()
                {
                    p { (details) }
                }
            }
        }
    }
}
