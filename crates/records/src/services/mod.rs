pub mod athlete_summary;
pub mod gl_points;
pub mod record_aggregator;
pub mod result_resolver;
