use serde::Serialize;

use crate::urls::ProviderUrls;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SuccessResponse<'a> {
    Healthz {
        revision: Option<&'a str>,
        timestamp: Option<&'a str>,
        version: &'a str,
    },
    Providers {
        providers: Vec<ProviderUrls>,
    },
}
