//! JSON-over-HTTP API.

mod query;
mod response;
mod route;

use response::{error_response, json, status_for};
use route::Route;

use carreg::{CarPatch, CarService};
use hyper::{
    body,
    service::{make_service_fn, service_fn},
    Body, Request, Response, Server, StatusCode,
};
use serde::Deserialize;

use std::{convert::Infallible, future::Future, net::SocketAddr};

#[derive(Debug, Deserialize)]
struct AddCarsRequest {
    #[serde(rename = "regNums", default)]
    reg_nums: Vec<String>,
}

/// Serves the API on `addr` until `shutdown` resolves.
pub async fn serve(
    addr: SocketAddr,
    service: CarService,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<()> {
    let make_svc = make_service_fn(move |_conn| {
        let service = service.clone();
        async move {
            Ok::<_, Infallible>(service_fn(move |req| {
                let service = service.clone();
                async move { handle_request(req, service).await }
            }))
        }
    });

    let server = Server::try_bind(&addr)?.serve(make_svc);
    tracing::info!(%addr, "listening");

    server.with_graceful_shutdown(shutdown).await?;
    Ok(())
}

pub(crate) async fn handle_request(
    req: Request<Body>,
    service: CarService,
) -> Result<Response<Body>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = match Route::resolve(&method, &path) {
        Ok(route) => {
            tracing::info!(%method, %path, "request");
            handle_route(route, req, &service).await
        }
        Err(status) => error_response(status, "no_route", "no such route"),
    };

    tracing::debug!(%method, %path, status = %response.status(), "response");
    Ok(response)
}

async fn handle_route(route: Route, req: Request<Body>, service: &CarService) -> Response<Body> {
    match route {
        Route::AddCars => add_cars(req, service).await,
        Route::GetCar(id) => with_id(id, |id| async move {
            match service.get_car(id).await {
                Ok(car) => json(StatusCode::OK, &serde_json::json!({ "car": car })),
                Err(err) => from_error(&err),
            }
        })
        .await,
        Route::ListCars => list_cars(req, service).await,
        Route::EditCar(id) => with_id(id, |id| edit_car(id, req, service)).await,
        Route::DeleteCar(id) => with_id(id, |id| async move {
            match service.delete_car(id).await {
                Ok(()) => json(StatusCode::OK, &serde_json::json!({})),
                Err(err) => from_error(&err),
            }
        })
        .await,
    }
}

/// Parses the `{carId}` path segment before running `f`.
///
/// Ids are stored as `SERIAL`, so anything outside `i32` is rejected here.
async fn with_id<F, Fut>(raw: String, f: F) -> Response<Body>
where
    F: FnOnce(i64) -> Fut,
    Fut: Future<Output = Response<Body>>,
{
    match raw.parse::<i32>() {
        Ok(id) => f(id.into()).await,
        Err(_) => {
            tracing::warn!(car_id = %raw, "invalid car id");
            error_response(StatusCode::BAD_REQUEST, "invalid_car_id", "car id must be an integer")
        }
    }
}

async fn add_cars(req: Request<Body>, service: &CarService) -> Response<Body> {
    let payload: AddCarsRequest = match read_json(req).await {
        Ok(payload) => payload,
        Err(response) => return response,
    };

    match service.add_cars(&payload.reg_nums).await {
        Ok(_) => Response::builder()
            .status(StatusCode::CREATED)
            .body(Body::empty())
            .unwrap_or_default(),
        Err(err) => from_error(&err),
    }
}

async fn list_cars(req: Request<Body>, service: &CarService) -> Response<Body> {
    let listing = match query::Listing::parse(req.uri().query()) {
        Ok(listing) => listing,
        Err(message) => {
            return error_response(StatusCode::BAD_REQUEST, "invalid_query", &message)
        }
    };

    let filter = match service.build_filter(listing.fields()) {
        Ok(filter) => filter,
        Err(err) => return from_error(&err),
    };

    match service.list_cars(filter, listing.pagination).await {
        Ok(cars) => json(StatusCode::OK, &serde_json::json!({ "cars": cars })),
        Err(err) => from_error(&err),
    }
}

async fn edit_car(id: i64, req: Request<Body>, service: &CarService) -> Response<Body> {
    let patch: CarPatch = match read_json(req).await {
        Ok(patch) => patch,
        Err(response) => return response,
    };

    match service.edit_car(id, patch).await {
        Ok(()) => json(StatusCode::OK, &serde_json::json!({})),
        Err(err) => from_error(&err),
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(
    req: Request<Body>,
) -> Result<T, Response<Body>> {
    let bytes = body::to_bytes(req.into_body()).await.map_err(|error| {
        tracing::warn!(%error, "failed to read request body");
        error_response(StatusCode::BAD_REQUEST, "invalid_body", "invalid body")
    })?;

    serde_json::from_slice(&bytes).map_err(|error| {
        tracing::warn!(%error, "failed to decode request body");
        error_response(StatusCode::BAD_REQUEST, "invalid_json", &error.to_string())
    })
}

fn from_error(err: &carreg::Error) -> Response<Body> {
    let (status, code) = status_for(err);
    if status.is_server_error() {
        tracing::error!(error = %err, "request failed");
    } else {
        tracing::info!(error = %err, "request rejected");
    }
    error_response(status, code, &err.to_string())
}
