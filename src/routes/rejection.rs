use serde::Serialize;
use warp::reject;

use crate::errors::FavoritesError;

#[derive(Debug)]
pub struct Rejection {
    pub(crate) context: Context,
    pub(crate) error: FavoritesError,
}

impl Rejection {
    pub fn new(context: Context, error: FavoritesError) -> Self {
        Rejection { context, error }
    }

    pub fn flatten(&self) -> FlattenedRejection {
        FlattenedRejection {
            context: self.context.clone(),
            message: format!("{}", self.error),
        }
    }
}

impl reject::Reject for Rejection {}

#[derive(Debug, Serialize)]
pub struct FlattenedRejection {
    #[serde(flatten)]
    pub(crate) context: Context,
    pub(crate) message: String,
}

/// What the request was trying to do when it failed.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "context", rename_all = "snake_case")]
pub enum Context {
    Image,
    Images,
    Provider { name: String },
}

impl Context {
    pub fn image() -> Context {
        Context::Image
    }

    pub fn images() -> Context {
        Context::Images
    }

    pub fn provider(name: String) -> Context {
        Context::Provider { name }
    }
}
