mod console;
mod login;
mod logout;

pub use console::Console;
pub use login::Login;
pub use logout::Logout;
