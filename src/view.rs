// view.rs
// Turns the About tab's props and sprite state into the serialized view
// body. Each section is independently gated on data availability; a section
// that would be empty is omitted rather than rendered blank.

use serde::Serialize;

use crate::about::AboutTab;
use crate::pokemon::{NamedApiResource, PokemonSpecies, RelatedPokemon};

#[derive(Debug, Default, Serialize, PartialEq)]
pub struct AboutView {
    pub abilities: Vec<AbilityCard>,
    pub related: Option<RelatedSection>,
    pub forms: Option<FormsSection>,
    pub held_items: Option<Vec<HeldItemCard>>,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct AbilityCard {
    pub name: String,
    pub hidden: bool,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RelatedSection {
    Loading,
    Ready {
        title: String,
        pokemon: Vec<RelatedPokemon>,
    },
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FormsSection {
    Loading,
    Ready { entries: Vec<FormEntry> },
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct FormEntry {
    pub image_url: String,
    pub display_name: String,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct HeldItemCard {
    pub name: String,
    pub rarities: Vec<ItemRarity>,
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct ItemRarity {
    pub version: String,
    pub rarity: u8,
}

impl std::fmt::Display for ItemRarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}%", self.version, self.rarity)
    }
}

/// API names use hyphens between words; the view shows spaces.
pub fn humanize(name: &str) -> String {
    name.replace('-', " ")
}

/// Display name for a form: the base creature's name is stripped, hyphens
/// become spaces, and an empty result (the default form) reads "Default".
pub fn form_display_name(form_name: &str, base_name: &str) -> String {
    let stripped = form_name.replace(base_name, "").replace('-', " ");
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        "Default".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Fallback image URL built from the configured base path and the form's
/// trailing URL segment, used when no sprite record was fetched.
pub fn fallback_sprite_url(image_base_url: &str, form: &NamedApiResource) -> String {
    format!("{}{}.png", image_base_url, form.trailing_segment().unwrap_or_default())
}

/// Section title for the related list: the species' generation number when
/// one is available, a generic title otherwise.
pub fn related_title(species: Option<&PokemonSpecies>) -> String {
    species
        .and_then(|s| s.generation.as_ref())
        .and_then(|generation| generation.trailing_segment())
        .map(|number| format!("Generation {} Pok\u{e9}mon", number))
        .unwrap_or_else(|| "Related Pok\u{e9}mon".to_string())
}

impl AboutTab {
    pub fn render(&self) -> AboutView {
        let abilities = self
            .props
            .abilities
            .iter()
            .map(|entry| AbilityCard {
                name: entry
                    .ability
                    .as_ref()
                    .map(|ability| humanize(&ability.name))
                    .unwrap_or_default(),
                hidden: entry.is_hidden,
            })
            .collect();

        let related = if self.props.is_loading_related {
            Some(RelatedSection::Loading)
        } else if !self.props.related_pokemon.is_empty() {
            Some(RelatedSection::Ready {
                title: related_title(self.props.species.as_ref()),
                pokemon: self.props.related_pokemon.clone(),
            })
        } else {
            None
        };

        // Forms are only worth showing when there is more than one of them.
        let forms = if self.props.special_forms.len() > 1 {
            if self.loading_sprites {
                Some(FormsSection::Loading)
            } else {
                let entries = self
                    .props
                    .special_forms
                    .iter()
                    .map(|form| FormEntry {
                        image_url: self
                            .form_sprites
                            .get(&form.name)
                            .and_then(|record| record.sprites.front_default.clone())
                            .unwrap_or_else(|| {
                                fallback_sprite_url(&self.image_base_url, form)
                            }),
                        display_name: form_display_name(&form.name, &self.props.name),
                    })
                    .collect();
                Some(FormsSection::Ready { entries })
            }
        } else {
            None
        };

        let held_items = if self.props.held_items.is_empty() {
            None
        } else {
            Some(
                self.props
                    .held_items
                    .iter()
                    .map(|held| HeldItemCard {
                        name: humanize(&held.item.name),
                        rarities: held
                            .version_details
                            .iter()
                            .map(|detail| ItemRarity {
                                version: detail.version.name.clone(),
                                rarity: detail.rarity,
                            })
                            .collect(),
                    })
                    .collect(),
            )
        };

        AboutView {
            abilities,
            related,
            forms,
            held_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::about::AboutProps;
    use crate::pokemon::{
        FormSprites, HeldItemVersion, PokemonAbility, PokemonForm, PokemonHeldItem,
    };

    fn resource(name: &str, url: &str) -> NamedApiResource {
        NamedApiResource {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    fn form_resource(name: &str, id: u32) -> NamedApiResource {
        resource(
            name,
            &format!("https://pokeapi.co/api/v2/pokemon-form/{}/", id),
        )
    }

    fn empty_props() -> AboutProps {
        AboutProps {
            abilities: Vec::new(),
            related_pokemon: Vec::new(),
            special_forms: Vec::new(),
            is_loading_related: false,
            species: None,
            name: "pikachu".to_string(),
            held_items: Vec::new(),
        }
    }

    fn tab(props: AboutProps) -> AboutTab {
        AboutTab::new(props, "https://img.example/pokemon/".to_string())
    }

    #[test]
    fn test_ability_cards_humanized_and_hidden_marked() {
        let mut props = empty_props();
        props.abilities = vec![
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
        ];

        let view = tab(props).render();
        assert_eq!(
            view.abilities,
            vec![
                AbilityCard {
                    name: "static".to_string(),
                    hidden: false,
                },
                AbilityCard {
                    name: "lightning rod".to_string(),
                    hidden: true,
                },
            ]
        );
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let view = tab(empty_props()).render();
        assert!(view.abilities.is_empty());
        assert_eq!(view.related, None);
        assert_eq!(view.forms, None);
        assert_eq!(view.held_items, None);
    }

    #[test]
    fn test_related_section_loading() {
        let mut props = empty_props();
        props.is_loading_related = true;

        let view = tab(props).render();
        assert_eq!(view.related, Some(RelatedSection::Loading));
    }

    #[test]
    fn test_related_title_uses_generation_number() {
        let mut props = empty_props();
        props.related_pokemon = vec![RelatedPokemon {
            name: "bulbasaur".to_string(),
            image: None,
        }];
        props.species = Some(PokemonSpecies {
            generation: Some(resource(
                "generation-i",
                "https://pokeapi.co/api/v2/generation/1/",
            )),
        });

        let view = tab(props).render();
        match view.related {
            Some(RelatedSection::Ready { title, pokemon }) => {
                assert_eq!(title, "Generation 1 Pok\u{e9}mon");
                assert_eq!(pokemon.len(), 1);
            }
            other => panic!("expected ready related section, got {:?}", other),
        }
    }

    #[test]
    fn test_related_title_falls_back_without_species() {
        let mut props = empty_props();
        props.related_pokemon = vec![RelatedPokemon {
            name: "bulbasaur".to_string(),
            image: None,
        }];

        let view = tab(props).render();
        match view.related {
            Some(RelatedSection::Ready { title, .. }) => {
                assert_eq!(title, "Related Pok\u{e9}mon");
            }
            other => panic!("expected ready related section, got {:?}", other),
        }
    }

    #[test]
    fn test_forms_section_hidden_for_single_form() {
        let mut props = empty_props();
        props.special_forms = vec![form_resource("pikachu", 25)];

        let view = tab(props).render();
        assert_eq!(view.forms, None);
    }

    #[test]
    fn test_forms_section_loading_while_sprites_load() {
        let mut props = empty_props();
        props.special_forms = vec![
            form_resource("pikachu", 25),
            form_resource("pikachu-rock-star", 10080),
        ];

        let mut tab = tab(props);
        tab.loading_sprites = true;
        assert_eq!(tab.render().forms, Some(FormsSection::Loading));
    }

    #[test]
    fn test_form_entries_prefer_fetched_sprite_over_fallback() {
        let mut props = empty_props();
        props.special_forms = vec![
            form_resource("pikachu", 25),
            form_resource("pikachu-rock-star", 10080),
        ];

        let mut tab = tab(props);
        tab.form_sprites.insert(
            "pikachu-rock-star".to_string(),
            PokemonForm {
                id: 10080,
                name: "pikachu-rock-star".to_string(),
                sprites: FormSprites {
                    front_default: Some("https://img.example/fetched/10080.png".to_string()),
                },
            },
        );

        match tab.render().forms {
            Some(FormsSection::Ready { entries }) => {
                assert_eq!(
                    entries,
                    vec![
                        FormEntry {
                            image_url: "https://img.example/pokemon/25.png".to_string(),
                            display_name: "Default".to_string(),
                        },
                        FormEntry {
                            image_url: "https://img.example/fetched/10080.png".to_string(),
                            display_name: "rock star".to_string(),
                        },
                    ]
                );
            }
            other => panic!("expected ready forms section, got {:?}", other),
        }
    }

    #[test]
    fn test_fetched_sprite_without_front_default_uses_fallback() {
        let mut props = empty_props();
        props.special_forms = vec![
            form_resource("pikachu", 25),
            form_resource("pikachu-belle", 10081),
        ];

        let mut tab = tab(props);
        tab.form_sprites.insert(
            "pikachu-belle".to_string(),
            PokemonForm {
                id: 10081,
                name: "pikachu-belle".to_string(),
                sprites: FormSprites {
                    front_default: None,
                },
            },
        );

        match tab.render().forms {
            Some(FormsSection::Ready { entries }) => {
                assert_eq!(
                    entries[1].image_url,
                    "https://img.example/pokemon/10081.png"
                );
            }
            other => panic!("expected ready forms section, got {:?}", other),
        }
    }

    #[test]
    fn test_held_items_humanized_with_rarities() {
        let mut props = empty_props();
        props.held_items = vec![PokemonHeldItem {
            item: resource("light-ball", "https://pokeapi.co/api/v2/item/213/"),
            version_details: vec![HeldItemVersion {
                rarity: 50,
                version: resource("red", "https://pokeapi.co/api/v2/version/1/"),
            }],
        }];

        let view = tab(props).render();
        let cards = view.held_items.expect("held items section");
        assert_eq!(cards[0].name, "light ball");
        assert_eq!(cards[0].rarities[0].to_string(), "red: 50%");
    }

    #[test]
    fn test_form_display_name_strips_base_and_hyphens() {
        assert_eq!(form_display_name("pikachu-rock-star", "pikachu"), "rock star");
        assert_eq!(form_display_name("pikachu", "pikachu"), "Default");
        assert_eq!(form_display_name("rock star", "pikachu"), "rock star");
    }

    #[test]
    fn test_fallback_sprite_url_is_deterministic() {
        let form = form_resource("pikachu-rock-star", 10080);
        assert_eq!(
            fallback_sprite_url("https://img.example/pokemon/", &form),
            "https://img.example/pokemon/10080.png"
        );
        assert_eq!(
            fallback_sprite_url("https://img.example/pokemon/", &form),
            fallback_sprite_url("https://img.example/pokemon/", &form),
        );
    }

    #[test]
    fn test_humanize_replaces_all_hyphens() {
        assert_eq!(humanize("king-s-rock"), "king s rock");
        assert_eq!(humanize("static"), "static");
    }
}
