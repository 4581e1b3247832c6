pub mod entry;
pub mod entry_input;
pub mod response;
pub mod stats;

pub use entry::DiaryEntry;
pub use entry_input::{BatchEntryInput, BatchImportInput, CreateEntryInput, UpdateEntryInput};
pub use response::ApiResponse;
pub use stats::DiaryStats;
