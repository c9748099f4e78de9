use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_title;
use crate::{Route, State};

#[function_component]
pub fn WinPage() -> Html {
    use_title("You won!");
    let (state, _) = use_store::<State>();

    html! {
        <div class="max-w-xl mx-auto text-center space-y-6 py-12">
            if let Some(result) = state.last_result {
                <h1 class="text-4xl font-bold text-neutral-900 dark:text-white">
                    {"You won!"}
                </h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400">
                    {format!(
                        "All {} pairs matched in {} moves.",
                        result.pairs, result.moves
                    )}
                </p>
            } else {
                <h1 class="text-3xl font-bold text-neutral-900 dark:text-white">
                    {"Nothing won yet"}
                </h1>
                <p class="text-lg text-neutral-600 dark:text-neutral-400">
                    {"Finish a game to see your score here."}
                </p>
            }
            <Link<Route>
                to={Route::Game}
                classes="inline-block bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200 text-white px-4 py-2 rounded-md text-sm font-medium transition-colors"
            >
                {"Play again"}
            </Link<Route>>
        </div>
    }
}
