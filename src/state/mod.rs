//! Client-side state models.
//!
//! DESIGN
//! ======
//! State types are plain data with pure transitions so they can be unit
//! tested without a DOM and mirrored into Leptos signals by components.

pub mod login_form;
