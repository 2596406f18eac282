//! Browser half of PopMate.
//!
//! The server already wrote the `<head>`: title, description and the theme's
//! `--popmate-*` variables. Only the body is hydrated here.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Attaches the router to the server-rendered `<body>`.
///
/// After this the header's home link navigates client-side and route changes
/// show the `Suspense` loading overlay instead of a full page load.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::debug!("hydrating popmate");
    leptos::mount::hydrate_body(component);
}

#[cfg(test)]
mod tests {
    #[test]
    /// `console_log` may refuse a second logger when another test installed one
    /// first; the call itself must not panic.
    fn test_console_log_initialization() {
        let _ = console_log::init_with_level(log::Level::Debug);
    }
}
