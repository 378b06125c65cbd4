pub mod bucket;
pub mod entry;
pub mod issue;
pub mod minutes;
