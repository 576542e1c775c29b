pub mod policy;
pub mod scanner;

pub use scanner::{start, DeadlineScanner, ScannerHandle};
