use client::{MAX_CHARACTER_ID, Sample};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::GameBoard;
use crate::game::GameResult;
use crate::hooks::{use_fetch, use_title};
use crate::{Route, State, get_character_client};

/// Distinct characters per game; each is dealt as a pair.
const PAIR_COUNT: usize = 6;

fn draw_ids() -> Sample {
    Sample::draw(&mut rand::thread_rng(), PAIR_COUNT, 1, MAX_CHARACTER_ID)
}

#[function_component]
pub fn GamePage() -> Html {
    use_title("Character Match");
    let navigator = use_navigator().unwrap();
    let (_state, dispatch) = use_store::<State>();

    let ids = use_state(draw_ids);
    let sample = (*ids).clone();
    let characters = use_fetch((*ids).clone(), true, move || {
        let sample = sample.clone();
        async move {
            get_character_client()
                .characters(&sample)
                .await
                .map_err(|e| e.to_string())
        }
    });

    let on_new_game = {
        let ids = ids.clone();
        Callback::from(move |_: MouseEvent| ids.set(draw_ids()))
    };

    let on_won = Callback::from(move |result: GameResult| {
        dispatch.reduce_mut(|state| state.last_result = Some(result));
        navigator.push(&Route::Win);
    });

    html! {
        <div class="space-y-8">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-3xl font-bold text-neutral-900 dark:text-neutral-100">
                        {"Character Match"}
                    </h1>
                    <p class="text-lg text-neutral-600 dark:text-neutral-400 mt-2">
                        {"Find every pair of characters"}
                    </p>
                </div>
                <button
                    onclick={on_new_game}
                    disabled={characters.is_loading}
                    class="bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors disabled:opacity-50"
                >
                    {"New game"}
                </button>
            </div>

            {characters.render("characters", |list, is_loading, error| {
                // a new board is dealt only once the new characters arrive
                let deal_key = list
                    .iter()
                    .map(|character| character.id.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                html! {
                    <div class="space-y-4">
                        if is_loading {
                            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                                {"Dealing new cards..."}
                            </p>
                        }
                        if let Some(error) = error {
                            <div class="p-4 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                                <p class="text-sm text-red-700 dark:text-red-400">{error}</p>
                            </div>
                        }
                        <GameBoard
                            key={deal_key}
                            characters={list.clone()}
                            on_won={on_won.clone()}
                        />
                    </div>
                }
            })}
        </div>
    }
}
