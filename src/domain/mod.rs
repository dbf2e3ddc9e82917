pub mod page;
pub mod post;

pub use page::{Cursor, Page};
pub use post::{relative_time, Post};
