//! Pokémon Card
//!
//! One grid card: sprite, name, headline stats, abilities. Clicking the
//! card opens the detail overlay.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Pokemon;

#[component]
pub fn PokemonCard(pokemon: Pokemon) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let sprite = pokemon.sprites.front_default.clone();
    let name = pokemon.name.clone();
    let hp = pokemon.stat("hp");
    let attack = pokemon.stat("attack");
    let defense = pokemon.stat("defense");
    let abilities: Vec<String> = pokemon
        .abilities
        .iter()
        .map(|a| a.ability.name.clone())
        .collect();

    let open_detail = {
        let pokemon = pokemon.clone();
        move |_| ctx.open_detail(pokemon.clone())
    };

    view! {
        <div class="pokemon-card" on:click=open_detail>
            {sprite.map(|src| view! { <img src=src alt=pokemon.name.clone()/> })}
            <h3>{name}</h3>
            <ul class="stat-list">
                <li>"HP: " {hp}</li>
                <li>"Attack: " {attack}</li>
                <li>"Defense: " {defense}</li>
            </ul>
            <ul class="ability-list">
                <li class="ability-heading">"Abilities:"</li>
                {abilities.into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
            </ul>
        </div>
    }
}
