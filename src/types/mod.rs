pub mod item;
pub mod outcome;

pub use item::{FeedItem, ItemId};
pub use outcome::{
    ItemReport, Outcome, RunMetadata, RunResult, SourceOutcome, SourceReport, SummaryResult,
};
