pub mod cart_snapshot;
pub mod fee_schedule;
pub mod installment_plan;
pub mod payment_method;

pub use cart_snapshot::{CartLine, CartSnapshot};
pub use fee_schedule::{validate_installment_count, FeeSchedule, MAX_INSTALLMENTS};
pub use installment_plan::{CardCharge, InstallmentPlan};
pub use payment_method::PaymentMethod;
