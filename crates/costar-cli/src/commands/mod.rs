pub mod completion;
pub mod data;
pub mod query;
pub mod search;
pub mod stats;
