use leptos::*;

use crate::vars::APP_TITLE;

#[component]
pub fn Console() -> impl IntoView {
    view! {
        <div class="py-8">
            <div class="mb-2 text-2xl font-bold">{APP_TITLE}</div>
            <p class="mb-4 text-gray-500">"You are signed in."</p>
            <a href="/logout" class="text-blue-600 hover:text-blue-700">
                "Sign out"
            </a>
        </div>
    }
}
