use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FavoritesError;

/// An external content source that favorited submissions come from.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Provider {
    Inkbunny,
    Furaffinity,
}

/// Path prefixes for one provider, relative to the API server.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ProviderConfig {
    /// Prefix for directly served images.
    pub image_path: &'static str,

    /// Prefix for directly served thumbnails.
    pub thumbnail_path: &'static str,

    /// Prefix for images served through signed access.
    pub signed_image_path: &'static str,

    /// Prefix for thumbnails served through signed access.
    pub signed_thumbnail_path: &'static str,
}

const INKBUNNY: ProviderConfig = ProviderConfig {
    image_path: "/img/inkbunny",
    thumbnail_path: "/img/inkbunny-thumbnails",
    signed_image_path: "/signed-url/hoya-inkbunny-pictures",
    signed_thumbnail_path: "/signed-url/hoya-inkbunny-thumbnails",
};

const FURAFFINITY: ProviderConfig = ProviderConfig {
    image_path: "/img/furaffinity",
    thumbnail_path: "/img/furaffinity-thumbnails",
    signed_image_path: "/signed-url/hoya-furaffinity-pictures",
    signed_thumbnail_path: "/signed-url/hoya-furaffinity-thumbnails",
};

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Inkbunny, Provider::Furaffinity];

    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Inkbunny => "inkbunny",
            Provider::Furaffinity => "furaffinity",
        }
    }

    /// Returns the path prefixes for this provider.
    pub fn config(self) -> &'static ProviderConfig {
        match self {
            Provider::Inkbunny => &INKBUNNY,
            Provider::Furaffinity => &FURAFFINITY,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = FavoritesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| FavoritesError::UnknownProvider { name: s.to_owned() })
    }
}

impl TryFrom<String> for Provider {
    type Error = FavoritesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Provider> for &'static str {
    fn from(p: Provider) -> Self {
        p.as_str()
    }
}
