use yewdux::prelude::*;

use crate::game::GameResult;

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    /// Set when a game is won, read by the win page.
    pub last_result: Option<GameResult>,
}
