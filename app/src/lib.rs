// Core application modules and components
use crate::components::{error_template, header, loader};
use crate::theme::ThemeTokens;
use crate::types::{IndicatorColor, IndicatorConfig, IndicatorSize};
use leptos::{
    html::{body, head, html, meta, style, title},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{FlatRoutes, Route, Router},
};
use std::sync::Arc;

pub mod components;
mod home;
pub mod theme;
pub mod types;

pub const DOCUMENT_LANG: &str = "ja";
pub const DOCUMENT_TITLE: &str = "ポップメイト - プライスポップ作成サービス";
pub const DOCUMENT_DESCRIPTION: &str =
    "スマレジの商品データを使って、プロ品質のプライスポップを簡単作成";
pub const STYLESHEET_HREF: &str = "/pkg/popmate.css";
pub const LOADING_CAPTION: &str = "読み込み中...";

/// Builds the `<html>` element: language, fixed metadata, the theme's CSS
/// variables, then `head_extras`. `children` go into `<body>` as they are.
///
/// The head is assembled before the body, so metadata is in place before any
/// page content is composed into the document.
pub fn document<H, C>(theme: &ThemeTokens, head_extras: H, children: C) -> impl IntoView + use<H, C>
where
    H: IntoView + 'static,
    C: IntoView + 'static,
{
    html().lang(DOCUMENT_LANG).child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            title().child(DOCUMENT_TITLE),
            meta().name("description").content(DOCUMENT_DESCRIPTION),
            style().id("popmate-theme").child(theme.to_css_variables()),
            head_extras,
        )),
        body()
            .class("min-h-screen antialiased text-gray-900 bg-background font-popmate")
            .child(children),
    ))
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // The server provides the theme it loaded at startup; static file fallbacks
    // render without that context and use the built-in palette.
    let theme = use_context::<Arc<ThemeTokens>>().unwrap_or_default();

    let html_comp = document(
        &theme,
        (
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href(STYLESHEET_HREF)
                    .build(),
            ),
        ),
        self::component,
    );

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <div class="flex flex-col min-h-screen">
                {header::component}
                <main class="container flex flex-col flex-1 gap-8 px-4 pt-10 pb-14 mx-auto max-w-4xl md:px-0">
                    <Suspense fallback=page_loading>
                        <FlatRoutes fallback=not_found>
                            <Route path=StaticSegment("") view=home::component/>
                        </FlatRoutes>
                    </Suspense>
                </main>
            </div>
        </Router>
    }
}

/// Full-screen indicator shown while a routed page is still resolving.
fn page_loading() -> impl IntoView {
    loader::component(
        IndicatorConfig::new()
            .size(IndicatorSize::Large)
            .color(IndicatorColor::Inverse)
            .caption(LOADING_CAPTION)
            .overlay(true),
    )
}

fn not_found() -> impl IntoView {
    let mut outside_errors = Errors::default();
    outside_errors.insert_with_default_key(error_template::AppError::NotFound);
    error_template::component(Some(outside_errors), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::{html::p, tachys::view::RenderHtml as _};

    #[test]
    fn test_shell_creation() {
        let options = LeptosOptions::builder().output_name("popmate").build();
        let owner = Owner::new();
        owner.with(|| {
            let shell_view = shell(options);
            // Building the view must not panic; rendering it needs a request context.
            drop(shell_view);
        });
    }

    #[test]
    fn test_component_function_signatures() {
        let _shell_fn: fn(LeptosOptions) -> _ = shell;
        let _component_fn: fn() -> _ = component;

        let options = LeptosOptions::builder().output_name("popmate").build();
        assert_eq!(options.output_name.as_ref(), "popmate");
    }

    #[test]
    fn test_document_sets_language_and_metadata() {
        let html = document(&ThemeTokens::default(), (), ()).to_html();
        assert!(html.starts_with("<html lang=\"ja\">"));
        assert!(html.contains(&format!("<title>{DOCUMENT_TITLE}</title>")));
        assert!(html.contains(&format!(
            "<meta name=\"description\" content=\"{DOCUMENT_DESCRIPTION}\">"
        )));
        assert!(html.contains("<meta charset=\"utf-8\">"));
    }

    #[test]
    fn test_document_embeds_theme_variables() {
        let theme = ThemeTokens {
            primary: "#123456".to_owned(),
            ..ThemeTokens::default()
        };
        let html = document(&theme, (), ()).to_html();
        assert!(html.contains("--popmate-primary:#123456;"));
    }

    #[test]
    fn test_document_keeps_children_unmodified() {
        let child = || p().class("price").child("¥198 税込");
        let child_html = child().to_html();

        let html = document(&ThemeTokens::default(), (), child()).to_html();
        let body_start = html.find("<body").unwrap();
        let head_end = html.find("</head>").unwrap();
        assert!(head_end < body_start);
        assert!(html.ends_with(&format!("{child_html}</body></html>")));
    }

    #[test]
    fn test_page_loading_is_full_screen_caption() {
        let html = page_loading().to_html();
        assert!(html.contains("fixed inset-0"));
        assert!(html.contains(LOADING_CAPTION));
        assert!(html.contains("border-white"));
    }

    #[test]
    fn test_not_found_page_content() {
        let html = not_found().to_html();
        assert!(html.contains("404| Not Found"));
    }
}
