//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, submitting, messages)
//! and delegates validation and request building to `evonto`.

pub mod create_event;
pub mod event_details;
pub mod invitation_details;
pub mod landing;
pub mod login;
pub mod my_events;
pub mod register;
