//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so pages stay declarative and the pure parts stay testable natively.

pub mod auth;
pub mod browser;
pub mod storage;
pub mod time;
