use client::Character;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::CharacterCard;
use crate::game::{Board, FlipOutcome, GameResult};

/// How long a mismatched pair stays face up.
const MISMATCH_DELAY_MS: u32 = 900;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub characters: Vec<Character>,
    pub on_won: Callback<GameResult>,
}

/// Deals `characters` once on mount. Give it a new `key` to deal again.
#[function_component]
pub fn GameBoard(props: &Props) -> Html {
    let board = {
        let characters = props.characters.clone();
        use_state(move || Board::deal(&mut rand::thread_rng(), &characters))
    };

    let on_flip = {
        let board = board.clone();
        let on_won = props.on_won.clone();

        Callback::from(move |index: usize| {
            let mut next = (*board).clone();
            match next.flip(index) {
                FlipOutcome::Ignored => return,
                FlipOutcome::Mismatched => {
                    let mut hidden = next.clone();
                    hidden.hide_mismatched();
                    let board = board.clone();
                    Timeout::new(MISMATCH_DELAY_MS, move || board.set(hidden))
                        .forget();
                }
                FlipOutcome::Won => {
                    tracing::info!(
                        moves = next.moves(),
                        pairs = next.pairs(),
                        "game won"
                    );
                    on_won.emit(next.result());
                }
                FlipOutcome::First | FlipOutcome::Matched => {}
            }
            board.set(next);
        })
    };

    html! {
        <div class="space-y-4">
            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                {format!("Moves: {}", board.moves())}
            </p>
            <div class="grid grid-cols-3 sm:grid-cols-4 gap-3">
                {board.cards().iter().enumerate().map(|(index, card)| {
                    html! {
                        <CharacterCard
                            key={index}
                            card={card.clone()}
                            {index}
                            on_flip={on_flip.clone()}
                        />
                    }
                }).collect::<Html>()}
            </div>
        </div>
    }
}
