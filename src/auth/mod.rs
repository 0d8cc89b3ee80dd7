//! Login form behavior and auth integration contracts.
//!
//! ARCHITECTURE
//! ============
//! `controller` drives the form state from `state::login_form` and calls the
//! injected login operation. `config` holds host options and `error` the
//! types a login operation reports back with. Nothing here performs I/O.

pub mod config;
pub mod controller;
pub mod error;

pub use config::LoginFormConfig;
pub use controller::{LoginFormController, LoginFuture, LoginHandler, login_handler};
pub use error::{LoginError, LoginErrorCode, LoginResponse, LoginUser};
