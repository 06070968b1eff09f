#[cfg(feature = "server")]
pub mod http {
    use axum::{
        extract::{Query, State},
        http::StatusCode,
        response::{IntoResponse, Json},
        routing::{get, post},
        Router,
    };
    use mathema::{ChapterMatch, Engine, MathemaError, Response};
    use serde::{Deserialize, Serialize};
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tower_http::cors::CorsLayer;
    use tracing::{error, info};

    type SharedEngine = Arc<Engine>;

    #[derive(Debug, Deserialize)]
    struct SolveRequest {
        input: String,
    }

    #[derive(Debug, Deserialize)]
    struct ClassifyParams {
        input: String,
    }

    #[derive(Debug, Serialize)]
    struct ClassifyResponse {
        normalized: String,
        matches: Vec<ChapterMatch>,
    }

    #[derive(Debug, Serialize)]
    struct ErrorResponse {
        error: String,
    }

    pub fn router(engine: Engine) -> Router {
        Router::new()
            .route("/health", get(health_check))
            .route("/solve", post(solve))
            .route("/classify", get(classify))
            .layer(CorsLayer::permissive())
            .with_state(Arc::new(engine))
    }

    pub async fn start_server(engine: Engine, host: &str, port: u16) -> anyhow::Result<()> {
        let app = router(engine);

        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        info!("Mathema server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    async fn health_check() -> impl IntoResponse {
        Json(serde_json::json!({
            "status": "ok",
            "service": "mathema",
            "version": env!("CARGO_PKG_VERSION")
        }))
    }

    async fn solve(
        State(engine): State<SharedEngine>,
        Json(payload): Json<SolveRequest>,
    ) -> Result<Json<Response>, (StatusCode, Json<ErrorResponse>)> {
        if payload.input.trim().is_empty() {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Input cannot be empty".to_string(),
                }),
            ));
        }

        let response = engine.analyze(&payload.input).map_err(|e| {
            error!("Solving failed: {}", e);
            (
                status_for(&e),
                Json(ErrorResponse {
                    error: format!("Solving failed: {}", e),
                }),
            )
        })?;

        info!(
            "Solved '{}' with {} solution(s)",
            payload.input,
            response.solutions.len()
        );
        Ok(Json(response))
    }

    async fn classify(
        State(engine): State<SharedEngine>,
        Query(params): Query<ClassifyParams>,
    ) -> Json<ClassifyResponse> {
        Json(ClassifyResponse {
            normalized: engine.normalize(&params.input),
            matches: engine.classify(&params.input),
        })
    }

    fn status_for(error: &MathemaError) -> StatusCode {
        match error {
            MathemaError::Taxonomy(_) => StatusCode::INTERNAL_SERVER_ERROR,
            MathemaError::Unsupported(_) | MathemaError::DivisionByZero(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            // Engine errors come from the shape of the query (no clauses, broken parse tree)
            MathemaError::Parse(_)
            | MathemaError::Engine(_)
            | MathemaError::ResourceLimitExceeded { .. } => StatusCode::BAD_REQUEST,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use axum::body::{to_bytes, Body};
        use axum::http::Request;
        use tower::ServiceExt;

        fn app() -> Router {
            router(Engine::builtin().unwrap())
        }

        async fn body_json(response: axum::response::Response) -> serde_json::Value {
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            serde_json::from_slice(&bytes).unwrap()
        }

        fn solve_request(input: &str) -> Request<Body> {
            Request::builder()
                .method("POST")
                .uri("/solve")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::json!({ "input": input }).to_string()))
                .unwrap()
        }

        #[tokio::test]
        async fn test_health() {
            let response = app()
                .oneshot(Request::get("/health").body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(body_json(response).await["status"], "ok");
        }

        #[tokio::test]
        async fn test_solve_system() {
            let response = app().oneshot(solve_request("x+y=5, x-y=1")).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let json = body_json(response).await;
            assert_eq!(json["solution_texts"][0], "x = 3, y = 2");
            assert_eq!(json["matches"][0]["score"], 1000);
        }

        #[tokio::test]
        async fn test_solve_rejects_empty_input() {
            let response = app().oneshot(solve_request("  ")).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }

        #[tokio::test]
        async fn test_solve_only_separators_is_bad_request() {
            let response = app().oneshot(solve_request(" , ")).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let json = body_json(response).await;
            assert!(json["error"].as_str().unwrap().contains("Empty input"));
        }

        #[tokio::test]
        async fn test_solve_division_by_zero() {
            let response = app().oneshot(solve_request("σφ(x)=0")).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
            let json = body_json(response).await;
            assert!(json["error"].as_str().unwrap().contains("Division by zero"));
        }

        #[tokio::test]
        async fn test_classify_query() {
            let response = app()
                .oneshot(
                    Request::get("/classify?input=x%5E2%3D4")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let json = body_json(response).await;
            assert_eq!(json["normalized"], "x**2=4");
            assert_eq!(json["matches"][0]["section_key"], "polynomial_equations");
        }
    }
}

#[cfg(not(feature = "server"))]
pub mod http {
    pub async fn start_server(
        _engine: mathema::Engine,
        _host: &str,
        _port: u16,
    ) -> anyhow::Result<()> {
        anyhow::bail!("Server feature not enabled. Recompile with --features server")
    }
}
