pub mod relay_policy;
pub mod tx_instruction;
pub mod vest_pool;

pub use relay_policy::*;
pub use tx_instruction::*;
pub use vest_pool::*;
