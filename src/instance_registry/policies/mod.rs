mod status_aggregation;

pub use status_aggregation::StatusAggregation;
