use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::AuthClient;
use crate::components::buttons::FormButton;
use crate::vars::{APP_SUBTITLE, APP_TITLE, INVALID_PASSWORD};

/// Transient login state plus the submit behavior. State lives for the
/// lifetime of one mounted form and is never shared with other
/// components.
#[derive(Clone)]
pub struct LoginController {
    client: Rc<dyn AuthClient>,
    on_authenticated: Callback<()>,
    password: RwSignal<String>,
    error: RwSignal<Option<String>>,
    is_submitting: RwSignal<bool>,
}

impl LoginController {
    pub fn new(
        client: Rc<dyn AuthClient>,
        on_authenticated: Callback<()>,
    ) -> Self {
        Self {
            client,
            on_authenticated,
            password: create_rw_signal(String::new()),
            error: create_rw_signal(None::<String>),
            is_submitting: create_rw_signal(false),
        }
    }

    pub fn password(&self) -> RwSignal<String> {
        self.password
    }

    pub fn error(&self) -> RwSignal<Option<String>> {
        self.error
    }

    pub fn is_submitting(&self) -> RwSignal<bool> {
        self.is_submitting
    }

    // Returns false while a submission is outstanding. A blocked attempt
    // has no side effects; the in-flight call is not cancelled or queued
    // behind.
    fn try_begin(&self) -> bool {
        if self.is_submitting.get_untracked() {
            return false;
        }
        self.error.set(None);
        self.is_submitting.set(true);
        true
    }

    async fn run_login(&self, password: String) {
        match self.client.login(&password).await {
            Ok(()) => self.on_authenticated.call(()),
            // every failure cause collapses into the same fixed message
            Err(_) => self.error.set(Some(INVALID_PASSWORD.to_string())),
        }
        self.is_submitting.set(false);
    }

    pub fn handle_submit(&self, ev: SubmitEvent) {
        ev.prevent_default();
        // guard before the async hop, so a second submit event queued
        // ahead of the spawned task is still rejected
        if !self.try_begin() {
            return;
        }
        let controller = self.clone();
        let password = self.password.get_untracked();
        spawn_local(async move {
            controller.run_login(password).await;
        });
    }
}

#[component]
pub fn LoginForm(
    client: Rc<dyn AuthClient>,
    #[prop(into)] on_authenticated: Callback<()>,
) -> impl IntoView {
    let controller = LoginController::new(client, on_authenticated);
    let password = controller.password();
    let error = controller.error();
    let is_submitting = controller.is_submitting();

    let on_submit = {
        let controller = controller.clone();
        move |ev: SubmitEvent| controller.handle_submit(ev)
    };

    let submit_button = FormButton::new("Sign in", "Signing in...");

    view! {
        <div class="flex flex-col w-96 mx-auto mt-24">
            <div class="mb-2 text-2xl font-bold">{APP_TITLE}</div>
            <p class="mb-4 text-gray-500">{APP_SUBTITLE}</p>
            <form class="flex flex-col" on:submit=on_submit>
                <div class="flex flex-col mb-4">
                    <input type="password"
                        class="shadow appearance-none border rounded w-full \
                               py-2 px-3 text-gray-700 leading-tight \
                               focus:outline-none focus:shadow-outline"
                        placeholder="Password"
                        autofocus=true
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev))
                        }
                        disabled=move || is_submitting.get()
                    />
                </div>

                {move || if let Some(message) = error.get() {
                    view! {
                        <div class="mb-4 text-red-500">{message}</div>
                    }.into_view()
                } else {
                    view! { <div></div> }.into_view()
                }}

                {submit_button.render_view(is_submitting.into())}
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use futures::executor::block_on;

    use super::*;
    use crate::api::{AuthError, AuthFuture, AuthStatus};
    use crate::vars::INVALID_PASSWORD;

    struct StubClient {
        accept: Cell<bool>,
        passwords: RefCell<Vec<String>>,
    }

    impl StubClient {
        fn new(accept: bool) -> Rc<Self> {
            Rc::new(Self {
                accept: Cell::new(accept),
                passwords: RefCell::new(Vec::new()),
            })
        }
    }

    impl AuthClient for StubClient {
        fn login(&self, password: &str) -> AuthFuture<()> {
            self.passwords.borrow_mut().push(password.to_string());
            let accept = self.accept.get();
            Box::pin(async move {
                if accept {
                    Ok(())
                } else {
                    Err(AuthError::Unauthorized)
                }
            })
        }

        fn logout(&self) -> AuthFuture<()> {
            Box::pin(async { Ok(()) })
        }

        fn fetch_status(&self) -> AuthFuture<AuthStatus> {
            Box::pin(async {
                Ok(AuthStatus {
                    authenticated: false,
                    auth_required: true,
                })
            })
        }
    }

    fn with_runtime(f: impl FnOnce()) {
        let runtime = create_runtime();
        f();
        runtime.dispose();
    }

    fn counting_callback() -> (Callback<()>, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        (Callback::new(move |_| seen.set(seen.get() + 1)), calls)
    }

    // same guard-then-run sequence the submit event handler performs
    fn submit(controller: &LoginController, password: &str) {
        if controller.try_begin() {
            block_on(controller.run_login(password.to_string()));
        }
    }

    #[test]
    fn test_successful_submit_fires_callback_once() {
        with_runtime(|| {
            let client = StubClient::new(true);
            let (on_authenticated, calls) = counting_callback();
            let controller =
                LoginController::new(client.clone(), on_authenticated);

            submit(&controller, "secret123");

            assert_eq!(calls.get(), 1);
            assert_eq!(controller.error().get_untracked(), None);
            assert!(!controller.is_submitting().get_untracked());
            assert_eq!(*client.passwords.borrow(), ["secret123"]);
        });
    }

    #[test]
    fn test_failed_submit_shows_fixed_message() {
        with_runtime(|| {
            let client = StubClient::new(false);
            let (on_authenticated, calls) = counting_callback();
            let controller =
                LoginController::new(client.clone(), on_authenticated);

            submit(&controller, "wrong");

            assert_eq!(calls.get(), 0);
            assert_eq!(
                controller.error().get_untracked().as_deref(),
                Some(INVALID_PASSWORD)
            );
            assert!(!controller.is_submitting().get_untracked());
        });
    }

    #[test]
    fn test_empty_password_is_submitted_as_is() {
        with_runtime(|| {
            let client = StubClient::new(false);
            let (on_authenticated, _calls) = counting_callback();
            let controller =
                LoginController::new(client.clone(), on_authenticated);

            submit(&controller, "");

            assert_eq!(*client.passwords.borrow(), [""]);
            assert_eq!(
                controller.error().get_untracked().as_deref(),
                Some(INVALID_PASSWORD)
            );
        });
    }

    #[test]
    fn test_second_submit_is_blocked_while_outstanding() {
        with_runtime(|| {
            let client = StubClient::new(true);
            let (on_authenticated, calls) = counting_callback();
            let controller =
                LoginController::new(client.clone(), on_authenticated);

            controller.is_submitting().set(true);
            submit(&controller, "secret123");

            assert_eq!(calls.get(), 0);
            assert!(client.passwords.borrow().is_empty());
            // the blocked attempt must not release the in-flight guard
            assert!(controller.is_submitting().get_untracked());
        });
    }

    #[test]
    fn test_error_clears_at_start_of_next_attempt() {
        with_runtime(|| {
            let client = StubClient::new(false);
            let (on_authenticated, calls) = counting_callback();
            let controller =
                LoginController::new(client.clone(), on_authenticated);

            submit(&controller, "wrong");
            assert!(controller.error().get_untracked().is_some());

            client.accept.set(true);
            submit(&controller, "secret123");

            assert_eq!(calls.get(), 1);
            assert_eq!(controller.error().get_untracked(), None);
            assert!(!controller.is_submitting().get_untracked());
        });
    }
}
