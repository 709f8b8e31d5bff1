use crate::{config::ConfigError, film::FilmError, maps::MapsError};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error in the `config` module")]
    Config(#[from] ConfigError),
    #[error("Error in the `film` module")]
    Film(#[from] FilmError),
    #[error("Error in the `maps` module")]
    Maps(#[from] MapsError),
}
