//! Utility helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure predicates and class builders live here so components and the login
//! controller can share them and tests can run without a DOM.

pub mod classes;
pub mod validation;
