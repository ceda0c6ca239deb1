mod about;
mod client;
mod config;
mod error;
mod pokemon;
mod view;

use about::{AboutProps, AboutTab};
use axum::{
    Json, Router, debug_handler,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use client::PokeApiClient;
use config::Config;
use error::AppError;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use view::AboutView;

struct AppState {
    client: PokeApiClient,
    config: Config,
}

fn load_config() -> Result<Config, AppError> {
    let config_str = include_str!("../config/config.toml");
    toml::from_str(config_str).map_err(|e| {
        tracing::error!("Failed to parse config.toml: {}", e);
        AppError::from(e)
    })
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format!(
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let client = match PokeApiClient::new(&config.pokeapi) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build PokeAPI client: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = Arc::new(AppState { client, config });

    let app = Router::new()
        .route("/pokemon/{id}/about", get(get_about_handler))
        .with_state(app_state);

    let listener = match tokio::net::TcpListener::bind("0.0.0.0:3000").await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind to address 0.0.0.0:3000: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

// Plays the parent detail view's role: fetch the Pokemon record, resolve
// the species for the generation title, then hand everything to the tab.
#[debug_handler]
async fn get_about_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> (StatusCode, Json<AboutView>) {
    let pokemon = match app_state.client.get_pokemon(id).await {
        Ok(pokemon) => pokemon,
        Err(e) => {
            tracing::error!("Failed to fetch Pokemon ID {}: {}", id, e);
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(AboutView::default()));
        }
    };

    let species = match &pokemon.species {
        Some(species_ref) => match app_state.client.get_species(&species_ref.url).await {
            Ok(species) => Some(species),
            Err(e) => {
                tracing::warn!("Failed to fetch species for {}: {}", pokemon.name, e);
                None
            }
        },
        None => None,
    };

    let props = AboutProps {
        abilities: pokemon.abilities,
        related_pokemon: Vec::new(),
        special_forms: pokemon.forms,
        is_loading_related: false,
        species,
        name: pokemon.name,
        held_items: pokemon.held_items,
    };

    let mut tab = AboutTab::new(props, app_state.config.sprites.image_base_url.clone());
    if let Some(pass) = tab.start_sprite_load() {
        let result = pass.run(&app_state.client).await;
        tab.finish_sprite_load(result);
    }

    (StatusCode::OK, Json(tab.render()))
}
