// about.rs
// Render state and sprite loading for the "About" tab of a Pokemon detail
// page. The tab owns a name-keyed sprite mapping and a loading flag; both
// are reset whenever the special-form list changes.

use std::collections::HashMap;

use crate::client::FormFetcher;
use crate::pokemon::{
    NamedApiResource, PokemonAbility, PokemonForm, PokemonHeldItem, PokemonSpecies, RelatedPokemon,
};

/// Read-only inputs supplied by the parent detail view.
#[derive(Debug, Clone)]
pub struct AboutProps {
    pub abilities: Vec<PokemonAbility>,
    pub related_pokemon: Vec<RelatedPokemon>,
    pub special_forms: Vec<NamedApiResource>,
    pub is_loading_related: bool,
    pub species: Option<PokemonSpecies>,
    pub name: String,
    pub held_items: Vec<PokemonHeldItem>,
}

pub struct AboutTab {
    pub(crate) props: AboutProps,
    pub(crate) image_base_url: String,
    pub(crate) form_sprites: HashMap<String, PokemonForm>,
    pub(crate) loading_sprites: bool,
    pass_token: u64,
}

/// One sprite-loading pass over the special-form list. Holds the token of
/// the pass that created it; results from a pass whose token is no longer
/// current are discarded instead of overwriting newer state.
pub struct SpriteLoadPass {
    token: u64,
    forms: Vec<NamedApiResource>,
}

pub struct SpriteLoadResult {
    token: u64,
    sprites: HashMap<String, PokemonForm>,
}

impl AboutTab {
    pub fn new(props: AboutProps, image_base_url: String) -> Self {
        Self {
            props,
            image_base_url,
            form_sprites: HashMap::new(),
            loading_sprites: false,
            pass_token: 0,
        }
    }

    pub fn props(&self) -> &AboutProps {
        &self.props
    }

    pub fn is_loading_sprites(&self) -> bool {
        self.loading_sprites
    }

    /// Replaces the special-form list, discarding sprite state from the
    /// previous list. Callers should follow up with `start_sprite_load`.
    pub fn set_special_forms(&mut self, forms: Vec<NamedApiResource>) {
        self.props.special_forms = forms;
        self.form_sprites.clear();
        self.loading_sprites = false;
    }

    /// Begins a sprite-loading pass over the current special-form list.
    /// Returns `None` when the list has one entry or fewer; no fetch is
    /// attempted in that case and the forms section stays hidden. Starting
    /// a new pass invalidates any pass still in flight.
    pub fn start_sprite_load(&mut self) -> Option<SpriteLoadPass> {
        self.pass_token += 1;
        self.form_sprites.clear();

        if self.props.special_forms.len() <= 1 {
            self.loading_sprites = false;
            return None;
        }

        self.loading_sprites = true;
        Some(SpriteLoadPass {
            token: self.pass_token,
            forms: self.props.special_forms.clone(),
        })
    }

    /// Publishes the result of a completed pass. A result carrying a stale
    /// token is dropped so it cannot clobber a newer pass's state.
    pub fn finish_sprite_load(&mut self, result: SpriteLoadResult) {
        if result.token != self.pass_token {
            tracing::debug!(
                "Discarding stale sprite pass (token {}, current {})",
                result.token,
                self.pass_token
            );
            return;
        }

        self.form_sprites = result.sprites;
        self.loading_sprites = false;
    }
}

impl SpriteLoadPass {
    /// Fetches a sprite record per form, one at a time in input order. A
    /// failed fetch is logged with the form's name and skipped; the pass
    /// always runs to the end of the list.
    pub async fn run<F: FormFetcher>(self, fetcher: &F) -> SpriteLoadResult {
        let mut sprites = HashMap::new();

        for form in &self.forms {
            let Some(form_id) = form.trailing_id() else {
                tracing::warn!("No numeric id in form URL for {}: {}", form.name, form.url);
                continue;
            };

            match fetcher.fetch_form(form_id).await {
                Ok(form_data) => {
                    sprites.insert(form.name.clone(), form_data);
                }
                Err(e) => {
                    tracing::error!("Error loading form sprite for {}: {}", form.name, e);
                }
            }
        }

        SpriteLoadResult {
            token: self.token,
            sprites,
        }
    }
}
