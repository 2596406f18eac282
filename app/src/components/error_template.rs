//! This module defines the `error_template` component, which renders routing
//! errors such as unknown paths.
//!
//! On the server it also sets the HTTP status of the response from the first
//! [`AppError`] it finds.

use http::status::StatusCode;
use leptos::{
    html::{a, div, h1, p},
    prelude::*,
};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Message shown to visitors.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "お探しのページは見つかりませんでした",
        }
    }
}

/// Collects the [`AppError`]s out of a Leptos `Errors` map, skipping errors of
/// other types.
pub fn app_errors(errors: Errors) -> Vec<AppError> {
    errors
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<AppError>().cloned())
        .collect()
}

/// Renders an error page.
///
/// `outside_errors` is used during SSR; `errors` is the reactive map an error
/// boundary hands over on the client. With neither, the page renders without
/// an error list.
pub fn component(
    outside_errors: Option<Errors>,
    errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = outside_errors
        .or_else(|| errors.map(|signal| signal.get_untracked()))
        .map(app_errors)
        .unwrap_or_default();

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            tracing::debug!(status = %first.status_code(), "rendering error page");
            response.set_status(first.status_code());
        }
    }

    div().class("grid place-content-center px-4 py-16 h-full antialiased").child((
        h1().class("mb-6 text-2xl font-bold text-center text-primary-dark")
            .child(if errors.len() > 1 { "Errors" } else { "Error" }),
        errors
            .into_iter()
            .map(|error| {
                div().class("flex flex-col gap-1 justify-center items-center").child((
                    p().class("text-xl tracking-widest text-gray-500 uppercase")
                        .child(format!("{}| {error}", error.status_code().as_u16())),
                    p().class("text-gray-600").child(error.message()),
                ))
            })
            .collect_view(),
        div().class("mt-6 text-center").child(
            a().href("/")
                .class("duration-200 text-primary hover:text-primary-dark hover:underline")
                .child("トップページへ戻る"),
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml as _;

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFound.to_string(), "Not Found");
    }

    #[test]
    fn test_app_errors_keeps_only_app_errors() {
        let mut errors = Errors::default();
        errors.insert_with_default_key(AppError::NotFound);
        assert_eq!(app_errors(errors), vec![AppError::NotFound]);
    }

    #[test]
    fn test_renders_outside_errors() {
        let mut errors = Errors::default();
        errors.insert_with_default_key(AppError::NotFound);

        let html = component(Some(errors), None).to_html();
        assert!(html.contains("404| Not Found"));
        assert!(html.contains(AppError::NotFound.message()));
        assert!(html.contains("href=\"/\""));
    }

    #[test]
    fn test_renders_without_errors() {
        let html = component(None, None).to_html();
        assert!(html.contains(">Error</h1>"));
        assert!(!html.contains("404"));
    }
}
