/// Inner joins of dated series and multi-series panels.
pub mod align;
/// Calendar bucket boundaries.
pub mod calendar;
/// Calendar aggregation of dated observations.
pub mod resample;
/// Price points and bucket returns.
pub mod returns;
