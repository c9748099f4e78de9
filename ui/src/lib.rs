use client::CharacterClient;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod game;
pub mod hooks;
pub mod logs;
pub mod pages;
pub mod state;

pub use state::State;

use pages::{GamePage, NotFoundPage, WinPage};

const DEFAULT_CHARACTER_API_URL: &str = "https://rickandmortyapi.com/api";

/// Base address of the character api, configurable at build time via
/// CHARACTER_API_URL (eg to point at the mock-api crate).
pub fn character_api_url() -> &'static str {
    option_env!("CHARACTER_API_URL").unwrap_or(DEFAULT_CHARACTER_API_URL)
}

pub fn get_character_client() -> CharacterClient {
    CharacterClient {
        address: character_api_url().to_string(),
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Game,
    #[at("/win")]
    Win,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    let page = match routes {
        Route::Game => html! { <GamePage /> },
        Route::Win => html! { <WinPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    };
    html! {
        <main class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            {page}
        </main>
    }
}
