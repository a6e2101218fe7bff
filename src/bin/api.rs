//! Lambda entry point for the simulators HTTP API

use finance_simulators::api::route;
use lambda_http::{run, service_fn, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(route)).await
}
