//! Documentation and demo site for the form primitives.

mod catalog;
mod demo;
mod web_app;

pub use catalog::{site_catalog, SiteCatalog};
pub use web_app::{DocsHome, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
