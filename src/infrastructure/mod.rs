pub mod http;
pub mod observability;
pub mod rendering;
pub mod storage;
pub mod text_processing;
