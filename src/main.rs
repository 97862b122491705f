use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use pagepress::application::services::ScrapeService;
use pagepress::domain::PageGeometry;
use pagepress::infrastructure::http::HttpPageFetcher;
use pagepress::infrastructure::observability::{TracingConfig, init_tracing};
use pagepress::infrastructure::rendering::{PdfRenderer, RegisteredFont};
use pagepress::infrastructure::storage::ArtifactStoreFactory;
use pagepress::infrastructure::text_processing::HtmlTextExtractor;
use pagepress::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let (environment, settings) = Settings::load().context("failed to load settings")?;

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;

    init_tracing(
        &TracingConfig::from_settings(environment.as_str(), &settings.logging),
        addr,
    );

    let font_path = Path::new(&settings.rendering.font_path);
    let font = Arc::new(
        RegisteredFont::load(font_path)
            .with_context(|| format!("cannot register font {}", font_path.display()))?,
    );
    tracing::info!(
        font = font.name(),
        glyphs = font.glyph_count(),
        "Font registered"
    );

    let fetcher = Arc::new(
        HttpPageFetcher::new(
            Duration::from_secs(settings.fetch.timeout_secs),
            settings.fetch.user_agent.clone(),
        )
        .context("failed to build page fetcher")?,
    );
    let extractor = Arc::new(HtmlTextExtractor::new().context("failed to build extractor")?);
    let renderer = Arc::new(PdfRenderer::new(Arc::clone(&font), PageGeometry::default()));
    let store = ArtifactStoreFactory::create(&settings.storage)
        .context("failed to configure artifact store")?;

    tracing::info!(
        provider = ?settings.storage.provider,
        default_container = %settings.storage.default_container,
        "Artifact store configured"
    );

    let scrape_service = Arc::new(ScrapeService::new(
        fetcher,
        extractor,
        renderer,
        store,
        settings.storage.default_container.clone(),
    ));

    let router = create_router(AppState { scrape_service });

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
