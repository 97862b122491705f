mod page_client;

pub use page_client::{BROWSER_USER_AGENT, HttpPageFetcher};
