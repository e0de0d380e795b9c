//! Reusable UI components.
//!
//! - [`toast`] - Copy confirmation overlay

pub mod toast;

pub use toast::{copied_message, render_toast};
