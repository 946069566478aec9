mod dashboard;
mod report;

pub use dashboard::*;
pub use report::*;
