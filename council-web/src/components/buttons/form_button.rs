use leptos::*;

#[derive(Clone)]
pub struct FormButton {
    text: String,
    busy_text: String,
}

impl FormButton {
    pub fn new(text: &str, busy_text: &str) -> Self {
        Self {
            text: text.to_string(),
            busy_text: busy_text.to_string(),
        }
    }

    pub fn text(&self, is_busy: bool) -> String {
        if is_busy {
            self.busy_text.clone()
        } else {
            self.text.clone()
        }
    }

    pub fn button_class(is_disabled: bool) -> String {
        if is_disabled {
            "inline-block px-3 bg-gray-300 text-white font-bold py-2 rounded \
             cursor-not-allowed"
                .to_string()
        } else {
            "inline-block px-3 bg-blue-600 hover:bg-blue-700 text-white \
             font-bold py-2 rounded"
                .to_string()
        }
    }

    pub fn render_view(self, is_busy: Signal<bool>) -> impl IntoView {
        view! {
            <button
                type="submit"
                class=move || Self::button_class(is_busy.get())
                disabled=move || is_busy.get()
            >
                {move || self.text(is_busy.get())}
            </button>
        }
        .into_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_reflects_busy_state() {
        let button = FormButton::new("Sign in", "Signing in...");
        assert_eq!(button.text(false), "Sign in");
        assert_eq!(button.text(true), "Signing in...");
    }

    #[test]
    fn test_disabled_class_while_busy() {
        assert!(FormButton::button_class(true).contains("cursor-not-allowed"));
        assert!(FormButton::button_class(false).contains("bg-blue-600"));
    }
}
