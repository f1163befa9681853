pub mod classifier;
pub mod prefix_sum;
pub mod scorer;

pub use classifier::{check_passing, check_passing_default, classify_roster, PassingReport, PassingStatus};
pub use prefix_sum::{compute_prefix_sum, range_sum, record_prefix_sum, ScorePrefixSums};
pub use scorer::{score_summary, ScoreSummary};
