//! Browser entry point.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::error_1(&format!("logger init failed: {err}").into());
        }
        leptos::mount::mount_to_body(storefront_client::app::App);
    }
}
