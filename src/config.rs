use std::env::{self, VarError};

use crate::errors::FavoritesError;
use crate::urls::UrlMode;

/// Returns the value of the named environment variable if it exists or panics.
pub fn get_variable(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| panic!("must define {} environment variable", name))
}

/// Reads the resolver mode from the named environment variable,
/// defaulting to [`UrlMode::Direct`] when it is unset.
pub fn get_url_mode(name: &str) -> Result<UrlMode, FavoritesError> {
    match env::var(name) {
        Ok(mode) => mode.parse(),
        Err(VarError::NotPresent) => Ok(UrlMode::default()),
        Err(VarError::NotUnicode(mode)) => Err(FavoritesError::UnknownUrlMode {
            mode: mode.to_string_lossy().into_owned(),
        }),
    }
}
