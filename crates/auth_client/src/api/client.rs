use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chat_core::config::{Config, ProxyAuth};
use log::info;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Proxy, Url};

use crate::api::{LOGIN_PATH, REGISTER_PATH};
use crate::client_trait::AuthApi;
use crate::error::AuthError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::utils::http_utils::{into_auth_response, post_json};

fn apply_proxy_auth(proxy: Proxy, auth: Option<&ProxyAuth>) -> Proxy {
    let Some(auth) = auth else {
        return proxy;
    };
    if auth.username.is_empty() {
        return proxy;
    }
    proxy.basic_auth(&auth.username, &auth.password)
}

/// HTTP client for the `/api/auth/*` endpoints.
///
/// With `with_credentials` on, the client keeps a cookie jar so a session
/// cookie set by login rides along on every later request made through the
/// same client.
#[derive(Debug, Clone)]
pub struct AuthClient {
    client: Arc<Client>,
    config: Config,
}

impl AuthClient {
    pub fn new(config: Config) -> Result<Self, AuthError> {
        Url::parse(&config.base_url).map_err(|_| AuthError::InvalidUrl(config.base_url.clone()))?;
        let client = Self::build_http_client(&config)?;
        Ok(Self {
            client: Arc::new(client),
            config,
        })
    }

    fn build_http_client(config: &Config) -> Result<Client, AuthError> {
        let mut builder = Client::builder()
            .default_headers(Self::get_default_headers())
            .cookie_store(config.with_credentials)
            .timeout(Duration::from_secs(config.request_timeout_secs));
        if !config.http_proxy.is_empty() {
            let mut proxy = Proxy::http(&config.http_proxy)?;
            proxy = apply_proxy_auth(proxy, config.http_proxy_auth.as_ref());
            builder = builder.proxy(proxy);
        }
        if !config.https_proxy.is_empty() {
            let mut proxy = Proxy::https(&config.https_proxy)?;
            proxy = apply_proxy_auth(proxy, config.https_proxy_auth.as_ref());
            builder = builder.proxy(proxy);
        }
        Ok(builder.build()?)
    }

    pub fn get_default_headers() -> HeaderMap {
        let mut header = HeaderMap::new();
        header.insert(ACCEPT, HeaderValue::from_static("application/json"));
        header
    }

    pub fn login_url(&self) -> String {
        self.config.endpoint(LOGIN_PATH)
    }

    pub fn register_url(&self) -> String {
        self.config.endpoint(REGISTER_PATH)
    }
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AuthError> {
        info!("Logging in as {}", request.email);
        let resp = post_json(&self.client, &self.login_url(), request).await?;
        into_auth_response(resp).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AuthError> {
        info!("Registering {}", request.email);
        let resp = post_json(&self.client, &self.register_url(), request).await?;
        into_auth_response(resp).await
    }
}
