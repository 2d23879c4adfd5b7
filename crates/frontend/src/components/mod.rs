//! UI components

mod app;
mod banner;
mod login_form;
mod product_detail;
mod product_list;
mod spinner;

pub use app::ConsoleApp;
pub use banner::{StartupError, StatusBanner};
pub use login_form::LoginForm;
pub use product_detail::ProductDetail;
pub use product_list::ProductList;
pub use spinner::LoadingSpinner as Spinner;
