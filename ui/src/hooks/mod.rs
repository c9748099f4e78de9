pub mod use_fetch;
pub mod use_title;

pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_title::use_title;
