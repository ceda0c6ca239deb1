use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::PokeApiConfig;
use crate::error::AppError;
use crate::pokemon::{Pokemon, PokemonForm, PokemonSpecies};

/// Fetch capability for form sprite records. The About tab's sprite loader
/// takes this as an injected collaborator so tests can substitute a fake.
pub trait FormFetcher {
    fn fetch_form(&self, id: u32) -> impl Future<Output = Result<PokemonForm, AppError>> + Send;
}

/// Reqwest-backed client for the PokeAPI endpoints the About view needs.
pub struct PokeApiClient {
    http: reqwest::Client,
    api_url: String,
}

impl PokeApiClient {
    pub fn new(config: &PokeApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout as u64))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        tracing::debug!("Fetching from URL: {}", url);

        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to make HTTP request to {}: {}", url, e);
            AppError::from(e)
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_msg = format!("API request failed with status: {}", status);
            tracing::error!("{}", error_msg);
            return Err(AppError::NetworkError(error_msg));
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Failed to parse JSON response from {}: {}", url, e);
            AppError::ParseError(format!("JSON parsing failed: {}", e))
        })
    }

    pub async fn get_pokemon(&self, id: u32) -> Result<Pokemon, AppError> {
        let url = format!("{}/pokemon/{}", self.api_url, id);
        let pokemon: Pokemon = self.get_json(&url).await?;
        tracing::debug!(
            "Successfully fetched Pokemon: {} (ID: {})",
            pokemon.name,
            pokemon.id
        );
        Ok(pokemon)
    }

    /// Species records are reached through the URL carried on the Pokemon
    /// record rather than rebuilt from the base path.
    pub async fn get_species(&self, url: &str) -> Result<PokemonSpecies, AppError> {
        self.get_json(url).await
    }
}

impl FormFetcher for PokeApiClient {
    async fn fetch_form(&self, id: u32) -> Result<PokemonForm, AppError> {
        let url = format!("{}/pokemon-form/{}", self.api_url, id);
        self.get_json(&url).await
    }
}
