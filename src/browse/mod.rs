pub mod controller;
pub mod detail;
pub mod list;

pub use controller::ListController;
pub use detail::PostDetail;
pub use list::{reduce, ListEffect, ListEvent, ListState};
