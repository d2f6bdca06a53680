pub mod analysis_result;
pub mod gate_verdict;
pub mod scan_report;

pub use analysis_result::*;
pub use gate_verdict::*;
pub use scan_report::*;
