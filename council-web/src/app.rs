use std::rc::Rc;

use leptos::logging::log;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{AuthClient, HttpAuthClient};
use crate::routes::{Console, Login, Logout};
use crate::{GlobalState, RunTime};

#[component]
pub fn App() -> impl IntoView {
    let state = create_rw_signal(GlobalState::default());
    provide_meta_context();
    provide_context(state);

    let client: Rc<dyn AuthClient> = Rc::new(HttpAuthClient::new());
    provide_context(Rc::clone(&client));

    // resolve the session status once before rendering protected routes
    let status_resolved = create_rw_signal(false);
    spawn_local(async move {
        match client.fetch_status().await {
            Ok(status) => state.update(|state| state.auth = Some(status)),
            Err(err) => log!("Error fetching auth status: {}", err),
        }
        status_resolved.set(true);
    });

    let authenticated =
        create_read_slice(state, |state| state.is_authenticated());

    let set_previous_url =
        create_write_slice(state, |state, previous_url: String| {
            state
                .runtime
                .get_or_insert_with(RunTime::new)
                .set_previous_url(previous_url);
        });

    view! {
        <Stylesheet id="council" href="/pkg/tailwind.css"/>
        <Link rel="shortcut icon" type_="image/ico" href="/favicon.ico"/>
        <div class="my-0 mx-auto px-8 max-w-7xl text-left">
            <Router>
                <main>
                    <Routes>
                        <Route
                            path="/"
                            view=move || {
                                if !status_resolved.get() {
                                    view! { <div>"Loading..."</div> }
                                        .into_view()
                                } else if authenticated.get() {
                                    view! { <Console/> }.into_view()
                                } else {
                                    // remember where the user was headed,
                                    // so login can return there
                                    let location = use_location();
                                    set_previous_url.set(
                                        location.pathname.get_untracked(),
                                    );
                                    view! { <Redirect path="/login"/> }
                                        .into_view()
                                }
                            }
                        />
                        <Route path="/login" view=|| view! { <Login/> }/>
                        <Route path="/logout" view=|| view! { <Logout/> }/>
                    </Routes>
                </main>
            </Router>
        </div>
    }
}
