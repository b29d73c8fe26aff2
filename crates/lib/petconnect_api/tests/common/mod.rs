//! Shared integration test harness: ephemeral Postgres, migrated schema,
//! and the real router driven through `tower::ServiceExt::oneshot`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use petconnect_api::config::ApiConfig;
use petconnect_api::services::google::GoogleConfig;
use petconnect_api::AppState;
use petconnect_core::db::LocalDbManager;

pub struct TestApp {
    pub app: Router,
    pub pool: sqlx::PgPool,
    db: LocalDbManager,
}

impl TestApp {
    /// Start an ephemeral Postgres, run migrations, build the router.
    pub async fn spawn() -> Self {
        let mut db = LocalDbManager::ephemeral()
            .await
            .expect("LocalDbManager::ephemeral");
        db.setup().await.expect("db setup");
        db.start().await.expect("db start");

        let pool = sqlx::PgPool::connect(&db.connection_url())
            .await
            .expect("connect to ephemeral PG");
        petconnect_api::migrate(&pool).await.expect("migrations");

        let state = AppState {
            pool: pool.clone(),
            config: ApiConfig {
                bind_addr: "127.0.0.1:0".into(),
                jwt_secret: "test-secret".into(),
                google: GoogleConfig {
                    client_id: String::new(),
                    client_secret: String::new(),
                    redirect_uri: "http://localhost:5173".into(),
                    token_endpoint: "http://127.0.0.1:1/token".into(),
                    userinfo_endpoint: "http://127.0.0.1:1/userinfo".into(),
                },
            },
        };

        Self {
            app: petconnect_api::router(state),
            pool,
            db,
        }
    }

    /// Send a JSON request, returning the status and parsed body.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("build request"),
            None => builder.body(Body::empty()).expect("build request"),
        };

        let response = self.app.clone().oneshot(request).await.expect("request");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    /// Register a user and return the issued token plus the user object.
    pub async fn register(&self, name: &str, email: &str, password: &str, role: &str) -> (String, Value) {
        let (status, body) = self
            .request(
                "POST",
                "/api/auth/register",
                None,
                Some(serde_json::json!({
                    "name": name,
                    "email": email,
                    "password": password,
                    "role": role,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        let token = body["token"].as_str().expect("token").to_string();
        (token, body["user"].clone())
    }

    /// Create a pet as the given shelter, returning the pet object.
    pub async fn create_pet(&self, shelter_token: &str, name: &str) -> Value {
        let (status, body) = self
            .request(
                "POST",
                "/api/pets",
                Some(shelter_token),
                Some(serde_json::json!({
                    "name": name,
                    "species": "dog",
                    "size": "large",
                    "energy": "high",
                    "goodWithKids": true,
                    "traits": ["playful"],
                    "location": "Portland, OR",
                    "images": [],
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create pet failed: {body}");
        body
    }

    /// Stop the ephemeral database.
    pub async fn stop(mut self) {
        self.db.stop().await.expect("db stop");
    }
}
