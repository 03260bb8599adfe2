use std::error::Error;

use log::{debug, error, info};
use reqwest::{Client, Response};
use serde::Serialize;

use crate::error::AuthError;
use crate::models::AuthResponse;

/// POST a JSON body and log the outcome. Transport failures are logged with
/// as much detail as reqwest exposes before being returned.
pub async fn post_json<T: Serialize + ?Sized>(
    client: &Client,
    url: &str,
    body: &T,
) -> Result<Response, AuthError> {
    info!("Sending POST request to {}", url);
    let start_time = std::time::Instant::now();

    match client.post(url).json(body).send().await {
        Ok(resp) => {
            info!(
                "Got response from {} after {:?} with status {}",
                url,
                start_time.elapsed(),
                resp.status()
            );
            debug!("Response headers: {:?}", resp.headers());
            Ok(resp)
        }
        Err(e) => {
            error!("Failed HTTP request to {}: {}", url, e);
            if let Some(source) = e.source() {
                error!("Error source: {:?}", source);
            }

            if e.is_timeout() {
                error!("Request timed out");
            }
            if e.is_connect() {
                error!("Connection error");
            }
            if e.is_body() {
                error!("Body error");
            }

            Err(AuthError::Http(e))
        }
    }
}

/// Read the body and map non-2xx statuses to [`AuthError::Status`].
pub async fn into_auth_response(resp: Response) -> Result<AuthResponse, AuthError> {
    let status = resp.status();
    let body = resp.text().await?;

    if status.is_success() {
        debug!("Auth response body: {}", body);
        Ok(AuthResponse {
            status: status.as_u16(),
            body,
        })
    } else {
        error!("Auth endpoint answered {}: {}", status, body);
        Err(AuthError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
