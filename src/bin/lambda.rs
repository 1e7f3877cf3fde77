//! Serverless HTTP entry point
//!
//! POST a JSON `DepositInput`, receive a JSON `CalculationResult`.
//! Malformed bodies get a 400; the engine itself never fails.

use deposit_calculator::DepositInput;
use lambda_http::{run, service_fn, Body, Error, Request, Response};

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let input: DepositInput = match serde_json::from_slice(event.body()) {
        Ok(input) => input,
        Err(err) => {
            let response = Response::builder()
                .status(400)
                .header("content-type", "application/json")
                .body(Body::from(format!("{{\"error\":\"{}\"}}", err)))?;
            return Ok(response);
        }
    };

    let result = input.calculate();

    let response = Response::builder()
        .status(200)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&result)?))?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
