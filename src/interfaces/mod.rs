// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod amount_factory;
mod monetary_amount;
mod query;

pub use amount_factory::MonetaryAmountFactory;
pub use monetary_amount::MonetaryAmount;
pub use query::{BoxError, MonetaryOperator, MonetaryQuery};
