//! # HTTP client wrapper
//!
//! [`ApiClient`] is the only way views reach the backend. It owns:
//!
//! - the base address (`.../api/v1`) every relative path is joined onto;
//! - a [`Transport`] that performs the actual exchange;
//! - the [`TokenStore`] holding the bearer token, attached as
//!   `Authorization: Bearer <token>` whenever one is stored;
//! - an optional unauthorized hook, fired after any 401 once the token has
//!   been cleared. The web build points it at a hard redirect to `/login`.
//!
//! Two calls are exempt from the global 401 path. `login` answers 401 for
//! bad credentials, which the form shows inline. `validate_session` is
//! driven by the route gates, which navigate on their own.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use store::TokenStore;
use tracing::{debug, info, warn};

use crate::error::fallback_message;
use crate::models::{
    Car, CarUpdate, Expense, ListQuery, MaybeEnveloped, NewCar, NewExpense, Page, ProfileUpdate,
    SignupRequest, TokenResponse, UserProfile,
};
use crate::transport::{HttpRequest, HttpResponse, Method, RequestBody, Transport};
use crate::ApiError;

/// How a 401 on a particular call is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OnUnauthorized {
    /// Clear the token, fire the hook, return [`ApiError::Unauthorized`].
    Global,
    /// Clear the token only; the caller decides where to go.
    ClearOnly,
    /// Treat like any other error status.
    Local,
}

#[derive(Clone)]
pub struct ApiClient<T: Transport, S: TokenStore> {
    base_url: String,
    transport: T,
    tokens: S,
    on_unauthorized: Option<Rc<dyn Fn()>>,
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    pub fn new(base_url: &str, transport: T, tokens: S) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            tokens,
            on_unauthorized: None,
        }
    }

    /// Run `hook` after any 401 has cleared the stored token.
    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Some(Rc::new(hook));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    /// Whether a token is stored. Says nothing about its validity.
    pub fn has_session(&self) -> bool {
        self.tokens.is_present()
    }

    /// Forget the session locally. The backend keeps no server-side session.
    pub fn logout(&self) {
        info!("Logging out");
        self.tokens.clear();
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        on_unauthorized: OnUnauthorized,
    ) -> Result<HttpResponse, ApiError> {
        debug!("{} {}", method.as_str(), path);

        let mut request = HttpRequest::new(method, self.url(path)).body(body);
        if let Some(token) = self.tokens.get() {
            request = request.header("Authorization", &format!("Bearer {token}"));
        }

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("{} {} failed: {}", method.as_str(), path, e);
                return Err(e);
            }
        };

        if response.is_success() {
            return Ok(response);
        }

        if response.status == 401 && on_unauthorized != OnUnauthorized::Local {
            warn!("{} {} rejected the session", method.as_str(), path);
            self.tokens.clear();
            if on_unauthorized == OnUnauthorized::Global {
                if let Some(hook) = &self.on_unauthorized {
                    hook();
                }
            }
            return Err(ApiError::Unauthorized);
        }

        let err = ApiError::from_body(response.status, &response.body);
        warn!(
            "{} {} returned {}: {}",
            method.as_str(),
            path,
            response.status,
            err
        );
        Err(err)
    }

    async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<R, ApiError> {
        let response = self
            .execute(method, path, body, OnUnauthorized::Global)
            .await?;
        decode(&response.body)
    }

    fn json<B: Serialize>(body: &B) -> Result<RequestBody, ApiError> {
        serde_json::to_value(body)
            .map(RequestBody::Json)
            .map_err(|e| ApiError::Serialize(e.to_string()))
    }

    // Auth

    /// Exchange credentials for a token and store it.
    ///
    /// The backend's login form names the email field `username`.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let body = RequestBody::Form(vec![
            ("username".to_string(), email.to_string()),
            ("password".to_string(), password.to_string()),
        ]);
        let response = self
            .execute(Method::Post, "/auth/login", body, OnUnauthorized::Local)
            .await
            .map_err(|e| match e {
                ApiError::Server { status: 401, message } if message == fallback_message(401) => {
                    ApiError::Server {
                        status: 401,
                        message: "Invalid email or password".to_string(),
                    }
                }
                other => other,
            })?;
        let token: TokenResponse = decode(&response.body)?;
        self.tokens
            .set(&token.access_token)
            .map_err(|e| ApiError::Server {
                status: 0,
                message: format!("Could not save session: {e}"),
            })?;
        info!("Logged in");
        Ok(())
    }

    /// Ask the backend whether the stored token is still accepted.
    ///
    /// A 401 clears the token without firing the unauthorized hook.
    pub async fn validate_session(&self) -> Result<(), ApiError> {
        self.execute(
            Method::Get,
            "/auth/validate",
            RequestBody::Empty,
            OnUnauthorized::ClearOnly,
        )
        .await
        .map(|_| ())
    }

    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        self.request(Method::Get, "/auth/me", RequestBody::Empty)
            .await
    }

    // Users

    pub async fn signup(&self, request: &SignupRequest) -> Result<UserProfile, ApiError> {
        self.request(Method::Post, "/users/signup", Self::json(request)?)
            .await
    }

    pub async fn update_profile(
        &self,
        uid: &str,
        update: &ProfileUpdate,
    ) -> Result<UserProfile, ApiError> {
        self.request(Method::Patch, &format!("/users/{uid}"), Self::json(update)?)
            .await
    }

    // Cars

    pub async fn my_cars(&self, query: &ListQuery) -> Result<Page<Car>, ApiError> {
        let path = format!("/cars/my_cars{}", query.to_query_string());
        self.request(Method::Get, &path, RequestBody::Empty).await
    }

    pub async fn create_car(&self, car: &NewCar) -> Result<Car, ApiError> {
        self.request(Method::Post, "/cars", Self::json(car)?).await
    }

    pub async fn get_car(&self, uid: &str) -> Result<Car, ApiError> {
        self.request(Method::Get, &format!("/cars/{uid}"), RequestBody::Empty)
            .await
    }

    pub async fn update_car(&self, uid: &str, update: &CarUpdate) -> Result<Car, ApiError> {
        self.request(Method::Patch, &format!("/cars/{uid}"), Self::json(update)?)
            .await
    }

    // Expenses

    pub async fn car_expenses(
        &self,
        car_uid: &str,
        query: &ListQuery,
    ) -> Result<Page<Expense>, ApiError> {
        let path = format!("/cars/{car_uid}/expenses{}", query.to_query_string());
        self.request(Method::Get, &path, RequestBody::Empty).await
    }

    pub async fn create_expense(
        &self,
        car_uid: &str,
        expense: &NewExpense,
    ) -> Result<Expense, ApiError> {
        self.request(
            Method::Post,
            &format!("/cars/{car_uid}/expenses"),
            Self::json(expense)?,
        )
        .await
    }

    pub async fn delete_expense(&self, car_uid: &str, expense_uid: &str) -> Result<(), ApiError> {
        self.execute(
            Method::Delete,
            &format!("/cars/{car_uid}/expenses/{expense_uid}"),
            RequestBody::Empty,
            OnUnauthorized::Global,
        )
        .await
        .map(|_| ())
    }
}

/// Decode a success body, accepting both bare and `{"result": ...}` shapes.
fn decode<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    serde_json::from_str::<MaybeEnveloped<R>>(body)
        .map(MaybeEnveloped::into_inner)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use store::MemoryTokenStore;

    use super::*;
    use crate::models::CarStatus;
    use crate::testing::{client, MockTransport, BASE_URL};

    const CAR: &str = r#"{"uid":"c1","make":"Lada","model":"Vesta","year":"2020",
        "vin":"XTA000000L0000001","status":"REPAIRING","date_purchased":"2024-02-01",
        "price_purchased":650000}"#;

    #[tokio::test]
    async fn test_login_posts_form_and_stores_token() {
        let transport =
            MockTransport::new().respond(200, r#"{"access_token":"tok-1","token_type":"bearer"}"#);
        let tokens = MemoryTokenStore::new();
        let api = client(&transport, &tokens);

        api.login("me@flip.io", "hunter22").await.unwrap();

        assert_eq!(tokens.get().as_deref(), Some("tok-1"));
        let sent = transport.requests();
        assert_eq!(sent[0].url, format!("{BASE_URL}/auth/login"));
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(
            sent[0].body,
            RequestBody::Form(vec![
                ("username".to_string(), "me@flip.io".to_string()),
                ("password".to_string(), "hunter22".to_string()),
            ])
        );
        assert!(sent[0].header_value("authorization").is_none());
    }

    #[tokio::test]
    async fn test_bad_credentials_do_not_fire_hook() {
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let transport = MockTransport::new().respond(401, "");
        let tokens = MemoryTokenStore::new();
        let api = client(&transport, &tokens).with_unauthorized_hook(move || {
            counter.set(counter.get() + 1);
        });

        let err = api.login("me@flip.io", "wrong-pass").await.unwrap_err();

        assert_eq!(err.to_string(), "Invalid email or password");
        assert_eq!(fired.get(), 0);
        assert!(tokens.get().is_none());
    }

    #[tokio::test]
    async fn test_bearer_attached_and_envelope_unwrapped() {
        let transport = MockTransport::new().respond(200, &format!(r#"{{"result":{CAR}}}"#));
        let tokens = MemoryTokenStore::with_token("tok-9");
        let api = client(&transport, &tokens);

        let car = api.get_car("c1").await.unwrap();

        assert_eq!(car.status, CarStatus::Repairing);
        let sent = transport.requests();
        assert_eq!(sent[0].url, format!("{BASE_URL}/cars/c1"));
        assert_eq!(sent[0].header_value("Authorization"), Some("Bearer tok-9"));
    }

    #[tokio::test]
    async fn test_401_clears_token_and_fires_hook() {
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let transport = MockTransport::new().respond(401, r#"{"detail":"Not authenticated"}"#);
        let tokens = MemoryTokenStore::with_token("stale");
        let api = client(&transport, &tokens).with_unauthorized_hook(move || {
            counter.set(counter.get() + 1);
        });

        let err = api.me().await.unwrap_err();

        assert_eq!(err, ApiError::Unauthorized);
        assert!(tokens.get().is_none());
        assert_eq!(fired.get(), 1);
    }

    #[tokio::test]
    async fn test_validate_session_clears_without_hook() {
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        let transport = MockTransport::new().respond(401, "");
        let tokens = MemoryTokenStore::with_token("stale");
        let api = client(&transport, &tokens).with_unauthorized_hook(move || {
            counter.set(counter.get() + 1);
        });

        assert!(api.validate_session().await.is_err());
        assert!(tokens.get().is_none());
        assert_eq!(fired.get(), 0);
    }

    #[tokio::test]
    async fn test_update_car_sends_editable_subset() {
        let transport = MockTransport::new().respond(200, CAR);
        let tokens = MemoryTokenStore::with_token("tok");
        let api = client(&transport, &tokens);
        let update = CarUpdate {
            price_purchased: Some(650_000),
            notes: Some("new clutch".to_string()),
            status: Some(CarStatus::Repairing),
            ..CarUpdate::default()
        };

        api.update_car("c1", &update).await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].method, Method::Patch);
        let RequestBody::Json(body) = &sent[0].body else {
            panic!("expected JSON body");
        };
        let obj = body.as_object().unwrap();
        assert_eq!(obj.len(), 11);
        assert!(!obj.contains_key("vin"));
        assert!(obj["avito_link"].is_null());
        assert_eq!(obj["notes"], "new clutch");
    }

    #[tokio::test]
    async fn test_validation_error_surfaces_as_list() {
        let transport = MockTransport::new().respond(
            422,
            r#"{"detail":[{"loc":["body","price_listed"],"msg":"Input should be a valid integer"}]}"#,
        );
        let tokens = MemoryTokenStore::with_token("tok");
        let api = client(&transport, &tokens);

        let err = api.update_car("c1", &CarUpdate::default()).await.unwrap_err();

        assert_eq!(
            err.display_lines(),
            vec!["1) Input should be a valid integer".to_string()]
        );
        assert_eq!(tokens.get().as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_list_query_and_delete() {
        let transport = MockTransport::new()
            .respond(
                200,
                r#"{"result":{"content":[],"total_pages":0,"page_number":1}}"#,
            )
            .respond(204, "");
        let tokens = MemoryTokenStore::with_token("tok");
        let api = client(&transport, &tokens);

        let page = api
            .car_expenses("c1", &ListQuery::new(50, "created_at"))
            .await
            .unwrap();
        assert!(page.content.is_empty());
        api.delete_expense("c1", "e7").await.unwrap();

        let sent = transport.requests();
        assert_eq!(
            sent[0].url,
            format!("{BASE_URL}/cars/c1/expenses?page=1&limit=50&sort_by=created_at&order=desc")
        );
        assert_eq!(sent[1].method, Method::Delete);
        assert_eq!(sent[1].url, format!("{BASE_URL}/cars/c1/expenses/e7"));
    }

    #[tokio::test]
    async fn test_car_refetch_after_expense_delete_has_new_totals() {
        let after = r#"{"uid":"c1","make":"Lada","model":"Vesta","year":"2020",
            "vin":"XTA000000L0000001","status":"REPAIRING","date_purchased":"2024-02-01",
            "price_purchased":650000,
            "stats":{"total_expenses":15000,"cost_basis":665000,"owners_stats":[]}}"#;
        let transport = MockTransport::new().respond(204, "").respond(200, after);
        let tokens = MemoryTokenStore::with_token("tok");
        let api = client(&transport, &tokens);

        api.delete_expense("c1", "e7").await.unwrap();
        let car = api.get_car("c1").await.unwrap();

        let stats = car.stats.unwrap();
        assert_eq!(stats.total_expenses, 15_000);
        assert_eq!(stats.cost_basis, 665_000);
        let sent = transport.requests();
        assert_eq!(sent[1].method, Method::Get);
        assert_eq!(sent[1].url, format!("{BASE_URL}/cars/c1"));
    }

    #[tokio::test]
    async fn test_network_failure_keeps_token() {
        let transport = MockTransport::new().fail_network();
        let tokens = MemoryTokenStore::with_token("tok");
        let api = client(&transport, &tokens);

        let err = api.my_cars(&ListQuery::default()).await.unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
        assert!(api.has_session());
        api.logout();
        assert!(!api.has_session());
        assert_eq!(transport.request_count(), 1);
    }
}
