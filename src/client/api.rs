//! Thin HTTP client for the marketplace API.
//!
//! Wraps a [`SessionStore`]: a successful login or registration stores
//! the returned session, and authenticated calls attach its bearer token.

use serde::de::DeserializeOwned;

use crate::client::session::decode_claims_unverified;
use crate::client::{ClientError, SessionStore};
use crate::models::{
    ApiResponse, AuthResponse, Claims, ErrorResponse, LoginRequest, OrderResponse,
    PaginatedResponse, PlaceOrderRequest, ProductResponse, RegisterRequest, Role,
};

pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionStore {
        &mut self.session
    }

    /// Register an account and store the returned session.
    pub async fn register(
        &mut self,
        email: &str,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<Claims, ClientError> {
        let body = RegisterRequest {
            email: email.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            role,
        };

        let response = self
            .http
            .post(self.url("/api/auth/register"))
            .json(&body)
            .send()
            .await?;

        self.store_session(parse(response).await?)
    }

    /// Log in and store the returned session.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Claims, ClientError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&body)
            .send()
            .await?;

        self.store_session(parse(response).await?)
    }

    /// Log out: purely client-side, the session is simply discarded.
    pub fn logout(&mut self) -> Result<(), ClientError> {
        self.session.clear_session()
    }

    /// Fetch one page of the public product catalog.
    pub async fn products(&self, page: u64) -> Result<Vec<ProductResponse>, ClientError> {
        let response = self
            .http
            .get(self.url("/api/products"))
            .query(&[("page", page)])
            .send()
            .await?;

        let page: PaginatedResponse<ProductResponse> = parse(response).await?;
        Ok(page.data)
    }

    /// Place an order for a product (requires a customer session).
    pub async fn place_order(
        &self,
        product_id: &str,
        quantity: i32,
    ) -> Result<OrderResponse, ClientError> {
        let body = PlaceOrderRequest {
            product_id: product_id.to_string(),
            quantity,
        };

        let response = self
            .bearer(self.http.post(self.url("/api/orders")))
            .json(&body)
            .send()
            .await?;

        let envelope: ApiResponse<OrderResponse> = parse(response).await?;
        envelope.data.ok_or(ClientError::Api {
            status: 200,
            message: "response carried no order".to_string(),
        })
    }

    /// Fetch the caller's own orders (requires a customer session).
    pub async fn my_orders(&self) -> Result<Vec<OrderResponse>, ClientError> {
        let response = self
            .bearer(self.http.get(self.url("/api/orders")))
            .send()
            .await?;

        let envelope: ApiResponse<Vec<OrderResponse>> = parse(response).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    fn store_session(&mut self, auth: AuthResponse) -> Result<Claims, ClientError> {
        let claim = decode_claims_unverified(&auth.token).ok_or(ClientError::MalformedToken)?;
        self.session.set_session(auth.token, claim.clone())?;
        Ok(claim)
    }

    fn bearer(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Decode a response body, turning error statuses into [`ClientError::Api`]
/// with the server's message when one is available.
async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();

    if !status.is_success() {
        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|e| e.message)
            .unwrap_or_else(|_| status.to_string());
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response.json::<T>().await?)
}
