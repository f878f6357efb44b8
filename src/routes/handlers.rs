use std::time::{Duration, Instant};

use bytes::Bytes;
use log::debug;
use serde::de::DeserializeOwned;
use warp::{
    reject,
    reply::{json, with_header, Reply},
};

use crate::environment::Environment;
use crate::errors::FavoritesError;
use crate::provider::Provider;
use crate::routes::{
    rejection::{Context, Rejection},
    response::SuccessResponse,
};
use crate::submission::{Lenient, SubmissionDetail};

const SERVER_TIMING_HEADER: &str = "server-timing";
type RouteResult = Result<Box<dyn Reply>, reject::Rejection>;

macro_rules! timed {
    ($($expression:stmt);+) => {
        let start = Instant::now();

        let result = { $($expression)+ };

        Ok(Box::new(with_header(
            result,
            SERVER_TIMING_HEADER,
            format_server_timing(start.elapsed()),
        )) as Box<dyn Reply>)
    };
}

pub async fn images(environment: Environment, body: Bytes) -> RouteResult {
    timed! {
        let submissions: Vec<SubmissionDetail> = parse_submissions(&body)
            .map_err(|e| Rejection::new(Context::images(), e))?;

        debug!(environment.logger, "Resolving submissions..."; "count" => submissions.len());

        json(&environment.resolve_all(submissions))
    }
}

pub async fn image(environment: Environment, body: Bytes) -> RouteResult {
    timed! {
        let submission: SubmissionDetail = parse_submissions(&body)
            .map_err(|e| Rejection::new(Context::image(), e))?;

        debug!(
            environment.logger,
            "Resolving submission...";
            "provider" => %submission.provider,
            "file_id" => submission.file_id,
            "user_id" => ?submission.user_id.as_ref().and_then(Lenient::typed),
            "media_type" => ?submission.media_type().map(|m| m.essence_str().to_owned())
        );

        json(&environment.resolve(submission))
    }
}

pub async fn providers(environment: Environment) -> RouteResult {
    timed! {
        let providers = Provider::ALL
            .iter()
            .map(|p| environment.urls.provider(*p))
            .collect();

        json(&SuccessResponse::Providers { providers })
    }
}

pub async fn provider(environment: Environment, name: String) -> RouteResult {
    timed! {
        let provider: Provider = name
            .parse()
            .map_err(|e| Rejection::new(Context::provider(name.clone()), e))?;

        json(&environment.urls.provider(provider))
    }
}

fn parse_submissions<T: DeserializeOwned>(body: &[u8]) -> Result<T, FavoritesError> {
    serde_json::from_slice(body).map_err(|source| FavoritesError::MalformedSubmission { source })
}

fn format_server_timing(seconds: Duration) -> String {
    format!("handler;dur={}", seconds.as_secs_f64() * 1000.0)
}
