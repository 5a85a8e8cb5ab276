//! Application views

mod library;
mod login;
mod signup;

pub use library::Library;
pub use login::Login;
pub use signup::SignUp;
