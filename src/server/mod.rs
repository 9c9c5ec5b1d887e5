use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod schema;

pub use schema::{LibrarySchema, build_schema};

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().finish())
}

#[axum::debug_handler]
async fn graphql_handler(
    State(schema): State<LibrarySchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub fn make_app(schema: LibrarySchema) -> Router {
    Router::new()
        .route("/", get(graphiql).post(graphql_handler))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(schema)
}
