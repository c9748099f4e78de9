pub mod game;
pub mod not_found;
pub mod win;

pub use game::GamePage;
pub use not_found::NotFoundPage;
pub use win::WinPage;
