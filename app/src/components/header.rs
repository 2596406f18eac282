use leptos::prelude::*;

/// Fixed branding shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandingIdentity {
    pub logo_src: &'static str,
    pub logo_size: u32,
    pub name: &'static str,
    pub tagline: &'static str,
}

pub const BRANDING: BrandingIdentity = BrandingIdentity {
    logo_src: "/popmate_icon_blue.png",
    logo_size: 32,
    name: "PopMate",
    tagline: "ポップメイト",
};

/// Where the logo link points.
pub const ROOT_PATH: &str = "/";

/// The header only links home; it has no navigation menu or account controls.
pub fn component() -> impl IntoView {
    let BrandingIdentity {
        logo_src,
        logo_size,
        name,
        tagline,
    } = BRANDING;
    let logo_size = logo_size.to_string();

    view! {
        <header class="py-3 px-4 bg-gradient-to-r shadow-md md:px-6 from-primary to-primary-dark">
            <div class="container mx-auto max-w-5xl">
                <a href=ROOT_PATH class="flex flex-row gap-3 items-center w-fit">
                    <div class="flex justify-center items-center p-1 bg-white rounded-lg shadow-sm">
                        <img
                            src=logo_src
                            alt=name
                            width={logo_size.clone()}
                            height=logo_size
                            class="size-8"
                        />
                    </div>
                    <div class="flex flex-col leading-tight text-white">
                        <span class="text-lg font-bold tracking-wide">{name}</span>
                        <span class="text-xs opacity-90">{tagline}</span>
                    </div>
                </a>
            </div>
        </header>
    }
}
