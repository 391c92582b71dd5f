use std::rc::Rc;

use leptos::*;
use leptos_router::use_navigate;

use crate::api::AuthClient;
use crate::components::LoginForm;
use crate::GlobalState;

#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<RwSignal<GlobalState>>()
        .expect("state to have been provided");
    let client = use_context::<Rc<dyn AuthClient>>()
        .expect("auth client to have been provided");

    // default to the home page if no previous URL is set
    let redirect_url = create_read_slice(state, |state| {
        state.runtime.as_ref().map(|r| r.previous_url().clone())
    })
    .get_untracked()
    .unwrap_or_else(|| "/".to_string());

    let navigate = use_navigate();
    let on_authenticated = move |_| {
        state.update(|state| state.set_authenticated(true));
        navigate(&redirect_url, Default::default());
    };

    view! { <LoginForm client on_authenticated/> }
}
