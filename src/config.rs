use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Config {
    pub pokeapi: PokeApiConfig,
    pub sprites: SpriteConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PokeApiConfig {
    pub api_url: String,
    pub timeout: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SpriteConfig {
    /// Base path for constructing fallback sprite URLs as `<base><id>.png`
    /// when no sprite record was fetched for a form.
    pub image_base_url: String,
}
