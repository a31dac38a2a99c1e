pub mod cleaning;
pub mod clinical;
pub mod merge;
pub mod patient;
pub mod scale;

pub use cleaning::{dedupe_keep_last, drop_incomplete_rows, require_columns, strip_sentinels};
pub use clinical::clean_clinical;
pub use merge::merge_cohort;
pub use patient::clean_patient;
pub use scale::{min_max_scale, normalize_features, standardize};
