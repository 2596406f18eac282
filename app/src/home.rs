//! This module defines the `home` component, the landing page served at `/`.

use leptos::{
    html::{div, h1, h2, li, ol, p, section, span},
    prelude::*,
};

pub const HEADLINE: &str = "プロ品質のプライスポップを、かんたんに。";

const STEPS: [(&str, &str); 3] = [
    ("商品を選ぶ", "スマレジに登録済みの商品データをそのまま使えます。"),
    ("デザインを選ぶ", "売り場に合わせたテンプレートから選択できます。"),
    ("印刷する", "価格や商品名が入ったポップをそのまま印刷できます。"),
];

/// Renders the landing page: a short pitch and the three steps of making a
/// price-pop.
pub fn component() -> impl IntoView {
    div().class("flex flex-col gap-10").child((
        section().class("flex flex-col gap-3 text-center").child((
            h1().class("text-2xl font-bold sm:text-4xl text-primary-dark").child(HEADLINE),
            p().class("text-gray-600").child(crate::DOCUMENT_DESCRIPTION),
        )),
        section().class("flex flex-col gap-4").child((
            h2().class("text-lg font-semibold text-gray-800").child("ご利用の流れ"),
            ol().class("grid grid-cols-1 gap-4 sm:grid-cols-3").child(
                STEPS
                    .into_iter()
                    .enumerate()
                    .map(|(index, (title, body))| {
                        li().class("flex flex-col gap-2 p-4 bg-white rounded-lg border border-primary-light").child((
                            span().class("text-sm font-bold text-secondary").child(format!("STEP {}", index + 1)),
                            p().class("font-semibold text-gray-800").child(title),
                            p().class("text-sm text-gray-600").child(body),
                        ))
                    })
                    .collect_view(),
            ),
        )),
    ))
}
