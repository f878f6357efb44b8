use std::error::Error;
use std::sync::Arc;

use futures::future::FutureExt;
use log::{info, initialize_logger};
use tokio::sync::mpsc;
use warp::Filter;

use favorites::config::{get_url_mode, get_variable};
use favorites::environment::{Config, Environment};
use favorites::routes;
use favorites::urls::Urls;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    let logger = initialize_logger();

    let main_port: u16 = get_variable("FAVORITES_PORT")
        .parse()
        .expect("parse FAVORITES_PORT as u16");
    let admin_port: u16 = get_variable("FAVORITES_ADMIN_PORT")
        .parse()
        .expect("parse FAVORITES_ADMIN_PORT as u16");

    let urls = Arc::new(Urls::try_new(
        &get_variable("FAVORITES_API_SERVER"),
        get_variable("FAVORITES_ROUTE_PREFIX"),
    )?);
    let config = Config::new(get_url_mode("FAVORITES_URL_MODE")?);

    info!(logger, "Starting..."; "main_port" => main_port, "admin_port" => admin_port, "api_server" => urls.base(), "url_mode" => ?config);
    let logger = Arc::new(logger);

    let environment = Environment::new(logger.clone(), urls, config);

    let (termination_sender, mut termination_receiver) = mpsc::channel::<()>(1);

    let terminate: routes::admin::TerminationFunctionWrapper<'static> = Arc::new(move || {
        let termination_sender = termination_sender.clone();

        async move {
            // a closed channel means shutdown is already under way
            let _ = termination_sender.send(()).await;
        }
        .boxed()
    });

    let should_terminate = async move {
        termination_receiver.recv().await;
    }
    .shared();

    let ctrlc = {
        let should_terminate = should_terminate.clone();
        let terminate = terminate.clone();

        let signal = tokio::signal::ctrl_c();

        async move {
            tokio::select! {
                _ = should_terminate => {},
                _ = signal => {
                    terminate().await;
                }
            }
        }
    };

    let main_server = {
        let should_terminate = should_terminate.clone();

        let routes = routes::make_api(environment.clone());

        let (_, main_server) =
            warp::serve(routes).bind_with_graceful_shutdown(([0, 0, 0, 0], main_port), async {
                should_terminate.await;
            });

        main_server
    };

    let admin_server = {
        let should_terminate = should_terminate.clone();

        let routes = routes::admin::make_healthz_route(environment.clone()).or(
            routes::admin::make_termination_route(environment.clone(), terminate),
        );

        let (_, admin_server) =
            warp::serve(routes).bind_with_graceful_shutdown(([0, 0, 0, 0], admin_port), async {
                should_terminate.await;
            });

        admin_server
    };

    tokio::join!(ctrlc, main_server, admin_server);

    info!(logger, "Exiting gracefully...");

    Ok(())
}
