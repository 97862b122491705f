mod scrape_service;

pub use scrape_service::{ScrapeError, ScrapeService};
