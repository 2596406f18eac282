//! Reusable UI pieces: the branding header, the loading indicator, and the
//! error page.

pub mod error_template;
pub mod header;
pub mod loader;
