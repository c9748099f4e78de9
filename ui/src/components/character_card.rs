use yew::prelude::*;

use crate::game::{Card, Face};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub card: Card,
    pub index: usize,
    pub on_flip: Callback<usize>,
}

#[function_component]
pub fn CharacterCard(props: &Props) -> Html {
    let onclick = {
        let index = props.index;
        props.on_flip.reform(move |_: MouseEvent| index)
    };
    let character = &props.card.character;

    let (border, opacity) = match props.card.face {
        Face::Hidden => ("border-neutral-300 dark:border-neutral-600", ""),
        Face::Revealed => ("border-neutral-900 dark:border-white", ""),
        Face::Matched => ("border-green-500 dark:border-green-400", "opacity-75"),
    };

    html! {
        <button
            {onclick}
            disabled={props.card.face != Face::Hidden}
            class={classes!(
                "aspect-square", "w-full", "rounded-lg", "border-2",
                "overflow-hidden", "bg-white", "dark:bg-neutral-800",
                "transition-colors", border, opacity
            )}
        >
            if props.card.face == Face::Hidden {
                <span class="text-3xl font-bold text-neutral-400 dark:text-neutral-500">
                    {"?"}
                </span>
            } else {
                <div class="flex flex-col h-full">
                    <img
                        src={character.image.clone()}
                        alt={character.name.clone()}
                        class="w-full flex-1 object-cover"
                    />
                    <p class="text-xs font-medium text-neutral-900 \
                              dark:text-neutral-100 truncate px-1 py-1">
                        {&character.name}
                    </p>
                </div>
            }
        </button>
    }
}
