use std::sync::Arc;

use log::Logger;

use crate::image::ResolvedImage;
use crate::submission::SubmissionDetail;
use crate::urls::{UrlMode, Urls};

#[derive(Clone)]
pub struct Environment {
    pub logger: Arc<Logger>,
    pub urls: Arc<Urls>,
    pub config: Config,
}

impl Environment {
    pub fn new(logger: Arc<Logger>, urls: Arc<Urls>, config: Config) -> Self {
        Self {
            logger,
            urls,
            config,
        }
    }

    /// Resolves submissions in the configured mode.
    pub fn resolve_all(&self, submissions: Vec<SubmissionDetail>) -> Vec<ResolvedImage> {
        self.urls.resolve_all(self.config.url_mode, submissions)
    }

    pub fn resolve(&self, submission: SubmissionDetail) -> ResolvedImage {
        self.urls.resolve(self.config.url_mode, submission)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub(crate) url_mode: UrlMode,
}

impl Config {
    pub fn new(url_mode: UrlMode) -> Self {
        Self { url_mode }
    }
}
