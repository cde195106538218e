//! Benchmark record data model.
//!
//! Defines the record shape at every pipeline stage plus the trend
//! classification attached during expansion.

pub mod nan_as_null;
pub mod schema;
pub mod trend;

// Re-export main types
pub use schema::{
    AnnotatedRecord, ChartOutput, EnrichedRecord, ExtraFields, ProjectedRecord, RawRecord,
    TimingAggregates, TimingStatistics,
};
pub use trend::{expand_trend, Trend};
