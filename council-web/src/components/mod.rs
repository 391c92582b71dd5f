mod login_form;

pub mod buttons;

pub use login_form::LoginForm;
