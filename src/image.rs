use serde::Serialize;

use crate::submission::SubmissionDetail;

/// A submission resolved for display, in whichever shape the configured
/// [`UrlMode`](crate::urls::UrlMode) produces.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResolvedImage {
    Direct(ImageObject),
    Signed(SignedImageObject),
}

/// A submission with directly served URLs. Each list currently holds
/// exactly one URL.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImageObject {
    #[serde(flatten)]
    pub submission: SubmissionDetail,

    pub urls: Vec<String>,
    pub thumbnail_urls: Vec<String>,
}

/// A submission with signed URLs for clients and a direct URL for
/// server-local access.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignedImageObject {
    #[serde(flatten)]
    pub submission: SubmissionDetail,

    pub local_url: String,
    pub url: String,
    pub thumbnail_url: String,
}

impl ResolvedImage {
    pub fn submission(&self) -> &SubmissionDetail {
        match self {
            ResolvedImage::Direct(i) => &i.submission,
            ResolvedImage::Signed(i) => &i.submission,
        }
    }
}
