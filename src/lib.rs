//! # dashboard-ui
//!
//! Leptos component library for the Joint Standards Dashboard.
//!
//! The crate is mostly presentational: buttons, form controls, data display
//! widgets and layout chrome that map typed props to markup. The one piece
//! with real behavior is the login form, whose validation and submission
//! lifecycle lives in [`auth::LoginFormController`] on top of the plain
//! state model in [`state::login_form`].
//!
//! The controller never performs I/O. Hosts inject the authentication call
//! as a [`auth::LoginHandler`] and listen for the `login` event.

pub mod auth;
pub mod components;
pub mod state;
pub mod types;
pub mod util;

pub use auth::{LoginError, LoginErrorCode, LoginFormConfig, LoginFormController, LoginHandler};
pub use state::login_form::{Field, LoginFormData, LoginFormState};

/// Install the browser logger and panic hook.
///
/// Safe to call more than once; later calls are ignored. No-op outside the
/// `hydrate` build.
pub fn init_logging() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}
