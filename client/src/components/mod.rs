//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome and shared dialogs while reading the
//! API client and session signal from Leptos context providers.

pub mod invite_guest_modal;
pub mod navbar;
pub mod protected_route;
