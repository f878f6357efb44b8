pub mod config;
pub mod environment;
pub mod errors;
pub mod image;
pub mod pool;
pub mod provider;
pub mod routes;
pub mod submission;
pub mod urls;

pub use image::{ImageObject, ResolvedImage, SignedImageObject};
pub use pool::{PoolDetail, PoolId};
pub use provider::{Provider, ProviderConfig};
pub use submission::{Lenient, SubmissionDetail};
pub use urls::{UrlMode, Urls};
