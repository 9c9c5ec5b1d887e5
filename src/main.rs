use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use config::Config;
use datamodel::Library;
use server::{build_schema, make_app};

mod config;
mod datamodel;
mod error;
mod server;


#[tokio::main]
async fn main() -> error::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let schema = build_schema(Library::default());

    if let Some(path) = &config.schema_sdl_path {
        std::fs::write(path, schema.sdl())?;
        tracing::info!(path = %path.display(), "wrote schema SDL");
    }

    let app = make_app(schema);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("GraphQL endpoint: http://{}/", config.bind_address());
    axum::serve(listener, app).await?;

    Ok(())
}
