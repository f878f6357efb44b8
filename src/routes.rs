use std::sync::Arc;

use log::{error, Logger};
use warp::http::StatusCode;
use warp::reject;
use warp::reply::{json, with_status, Json, Reply, WithStatus};
use warp::Filter;

use crate::environment::Environment;
use crate::errors::FavoritesError;

pub mod admin;
mod handlers;
mod rejection;
mod response;

pub use internal::*;

/// The maximum request body to accept. A page of favorites is far
/// smaller than this.
const MAX_CONTENT_LENGTH: u64 = 16 * 1024 * 1024;

pub async fn format_rejection(
    logger: Arc<Logger>,
    rej: reject::Rejection,
) -> Result<WithStatus<Json>, reject::Rejection> {
    if let Some(r) = rej.find::<rejection::Rejection>() {
        let e = &r.error;
        error!(logger, "Favorites error"; "context" => ?r.context, "error" => ?r.error, "status" => %status_code_for(e), "message" => %r.error);
        let flattened = r.flatten();

        return Ok(with_status(json(&flattened), status_code_for(e)));
    }

    Err(rej)
}

fn status_code_for(e: &FavoritesError) -> StatusCode {
    use FavoritesError::*;

    match e {
        MalformedSubmission { .. } => StatusCode::BAD_REQUEST,
        UnknownProvider { .. } => StatusCode::NOT_FOUND,
        UnknownUrlMode { .. } | InvalidBaseUrl { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Combines every favorites route, rendering their errors as JSON.
pub fn make_api(
    environment: Environment,
) -> impl Filter<Extract = (impl Reply,), Error = reject::Rejection> + Clone {
    let logger = environment.logger.clone();

    make_images_route(environment.clone())
        .or(make_image_route(environment.clone()))
        .or(make_providers_route(environment.clone()))
        .or(make_provider_route(environment))
        .recover(move |r| format_rejection(logger.clone(), r))
}

mod internal {
    use warp::body::{bytes, content_length_limit};
    use warp::filters::BoxedFilter;
    use warp::path::end;
    use warp::Filter;
    use warp::Reply;
    use warp::{get as g, path as p, path::param as par, post};

    use super::{handlers, MAX_CONTENT_LENGTH};
    use crate::environment::Environment;

    type Route = BoxedFilter<(Box<dyn Reply>,)>;

    macro_rules! route_filter {
    ($route_variable:ident; $first:expr) => (let $route_variable = $route_variable.and($first););
    ($route_variable:ident; $first:expr, $($rest:expr),+) => (
        let $route_variable = $route_variable.and($first);
        route_filter!($route_variable; $($rest),+);
    )
}

    macro_rules! route {
    ($name:ident => $handler:ident, $route_variable:ident; $($filters:expr),+) => (
        pub fn $name(environment: Environment) -> Route {
            let r = environment.urls.favorites_path.clone();

            let $route_variable = warp::any()
                .map(move || environment.clone())
                .and(p(r));

            route_filter!($route_variable; $($filters),+);

            $route_variable.and_then(handlers::$handler)
                .boxed()
        }
    );
}

    route!(make_images_route => images, rt; p("images"), end(), post(), content_length_limit(MAX_CONTENT_LENGTH), bytes());
    route!(make_image_route => image, rt; p("image"), end(), post(), content_length_limit(MAX_CONTENT_LENGTH), bytes());
    route!(make_providers_route => providers, rt; p("providers"), end(), g());
    route!(make_provider_route => provider, rt; p("providers"), par::<String>(), end(), g());
}
