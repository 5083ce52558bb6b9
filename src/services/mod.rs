pub mod store;
pub mod tracker;

pub use store::{InMemoryUserStore, UserStore};
pub use tracker::{LogFilter, TrackerService};
