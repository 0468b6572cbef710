pub mod commission_ledger;
pub mod order_gateway;

pub use commission_ledger::CommissionLedger;
pub use order_gateway::OrderGateway;
