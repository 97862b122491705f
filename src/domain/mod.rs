mod blob_name;
mod document;
mod fragment;
mod page_geometry;
mod scrape_request;
mod upload_target;

pub use blob_name::{BlobName, BlobNameError, DOCUMENT_EXTENSION};
pub use document::{Document, Page, PositionedLine};
pub use fragment::{Fragment, FragmentKind};
pub use page_geometry::{LETTER_HEIGHT_PT, LETTER_WIDTH_PT, PageGeometry};
pub use scrape_request::ScrapeRequest;
pub use upload_target::UploadTarget;
