pub mod dispatch;
pub mod export;
pub mod ingest;
pub mod query;
pub mod size;
