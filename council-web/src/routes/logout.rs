use std::rc::Rc;

use leptos::logging::error;
use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::api::AuthClient;
use crate::GlobalState;

#[component]
pub fn Logout() -> impl IntoView {
    const ERROR_MESSAGE: &str = "Failed to log out. Try to refresh the page.";

    let state = use_context::<RwSignal<GlobalState>>()
        .expect("state to have been provided");
    let client = use_context::<Rc<dyn AuthClient>>()
        .expect("auth client to have been provided");

    let logout_error = create_rw_signal(None::<String>);
    let navigate = use_navigate();

    spawn_local(async move {
        match client.logout().await {
            Ok(()) => {
                state.update(|state| state.set_authenticated(false));
                navigate("/login", Default::default());
            }
            Err(err) => {
                error!("Error logging out: {}", err);
                logout_error.set(Some(ERROR_MESSAGE.to_string()));
            }
        }
    });

    view! {
        {move || if let Some(message) = logout_error.get() {
            view! { <div>{message}</div> }
        } else {
            view! { <div>"Logging out..."</div> }
        }}
    }
}
