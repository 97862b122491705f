mod health;
mod scrape;

pub use health::health_handler;
pub use scrape::{PipelineFailure, ScrapeParams, USAGE_MESSAGE, scrape_handler};
