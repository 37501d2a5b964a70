use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProfileError>;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Invalid JSON profile: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML profile: {0}")]
    Toml(#[from] toml::de::Error),
}
