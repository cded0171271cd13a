//! Page components

mod index;
mod login;
mod object_detail;
mod signup;
mod theme_detail;
mod tour;

pub use index::Index;
pub use login::Login;
pub use object_detail::ObjectDetail;
pub use signup::Signup;
pub use theme_detail::ThemeDetail;
pub use tour::Tour;
