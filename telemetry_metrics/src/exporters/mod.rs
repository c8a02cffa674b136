pub mod json;
pub mod markdown;
pub mod prometheus;
pub mod table;

pub use self::json::JsonExporter;
pub use self::markdown::MarkdownExporter;
pub use self::prometheus::PrometheusExporter;
pub use self::table::TableExporter;
