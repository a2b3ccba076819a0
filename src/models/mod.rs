pub mod activity;

pub use activity::{ActivityCatalog, ActivityRecord};
