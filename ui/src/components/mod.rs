pub mod character_card;
pub mod game_board;

pub use character_card::CharacterCard;
pub use game_board::GameBoard;
