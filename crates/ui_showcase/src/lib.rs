//! Browser gallery rendering every `agent_ui` primitive in every variant and size.

mod gallery;

pub use gallery::{token_label, ShowcaseApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <ShowcaseApp /> })
}
