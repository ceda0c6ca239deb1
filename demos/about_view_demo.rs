// Example demonstrating the About view composition without a live API:
// canned props plus an in-memory form fetcher, rendered to JSON.

use std::collections::HashMap;

use pokedex_about::{
    AboutProps, AboutTab, AppError, FormFetcher, FormSprites, HeldItemVersion, NamedApiResource,
    PokemonAbility, PokemonForm, PokemonHeldItem, PokemonSpecies,
};

struct CannedFetcher {
    forms: HashMap<u32, PokemonForm>,
}

impl FormFetcher for CannedFetcher {
    async fn fetch_form(&self, id: u32) -> Result<PokemonForm, AppError> {
        self.forms
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NetworkError(format!("no canned form with id {}", id)))
    }
}

fn resource(name: &str, url: &str) -> NamedApiResource {
    NamedApiResource {
        name: name.to_string(),
        url: url.to_string(),
    }
}

#[tokio::main]
async fn main() {
    let props = AboutProps {
        abilities: vec![
            PokemonAbility {
                is_hidden: false,
                slot: 1,
                ability: Some(resource("static", "https://pokeapi.co/api/v2/ability/9/")),
            },
            PokemonAbility {
                is_hidden: true,
                slot: 3,
                ability: Some(resource(
                    "lightning-rod",
                    "https://pokeapi.co/api/v2/ability/31/",
                )),
            },
        ],
        related_pokemon: Vec::new(),
        special_forms: vec![
            resource("pikachu", "https://pokeapi.co/api/v2/pokemon-form/25/"),
            resource(
                "pikachu-rock-star",
                "https://pokeapi.co/api/v2/pokemon-form/10080/",
            ),
        ],
        is_loading_related: false,
        species: Some(PokemonSpecies {
            generation: Some(resource(
                "generation-i",
                "https://pokeapi.co/api/v2/generation/1/",
            )),
        }),
        name: "pikachu".to_string(),
        held_items: vec![PokemonHeldItem {
            item: resource("light-ball", "https://pokeapi.co/api/v2/item/213/"),
            version_details: vec![HeldItemVersion {
                rarity: 50,
                version: resource("red", "https://pokeapi.co/api/v2/version/1/"),
            }],
        }],
    };

    let fetcher = CannedFetcher {
        forms: HashMap::from([(
            10080,
            PokemonForm {
                id: 10080,
                name: "pikachu-rock-star".to_string(),
                sprites: FormSprites {
                    front_default: Some(
                        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/10080.png"
                            .to_string(),
                    ),
                },
            },
        )]),
    };

    let mut tab = AboutTab::new(
        props,
        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/".to_string(),
    );

    if let Some(pass) = tab.start_sprite_load() {
        let result = pass.run(&fetcher).await;
        tab.finish_sprite_load(result);
    }

    let view = tab.render();
    match serde_json::to_string_pretty(&view) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize view: {}", e),
    }
}
