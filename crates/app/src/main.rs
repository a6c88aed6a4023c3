use client::ApiClient;
use dioxus::prelude::*;

mod browser;
mod components;
pub mod format_helpers;
mod modal;
mod routes;
mod session;

use modal::ModalHost;
use routes::Route;
use session::BrowserSession;

fn main() {
    dioxus::launch(App);
}

/// Backend client shared by every page.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

#[component]
fn App() -> Element {
    use_context_provider(BrowserSession::hydrate);
    use_context_provider(ModalHost::new);
    use_context_provider(ApiClient::from_config);

    use_hook(|| {
        tracing::info!(
            base_url = %client::config::portal_config().base_url(),
            "Hospital portal started"
        );
    });

    rsx! {
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
