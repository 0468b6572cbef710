pub mod commission_record;
pub mod commission_split;

pub use commission_record::{CommissionRecord, CommissionStatus};
pub use commission_split::CommissionSplit;
