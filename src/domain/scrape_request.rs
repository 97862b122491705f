/// Caller-supplied inputs of a scrape. Only `url` is mandatory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    pub url: String,
    pub file_name: Option<String>,
    pub container_name: Option<String>,
}

impl ScrapeRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            file_name: None,
            container_name: None,
        }
    }

    pub fn with_file_name(mut self, file_name: Option<String>) -> Self {
        self.file_name = file_name;
        self
    }

    pub fn with_container_name(mut self, container_name: Option<String>) -> Self {
        self.container_name = container_name.filter(|c| !c.trim().is_empty());
        self
    }
}
