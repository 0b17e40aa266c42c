pub mod create_pool;
pub mod deposit;
pub mod nominate_receiver;
pub mod claim;
pub mod execute_transaction;
pub mod init_relay_policy;
pub mod update_relay_policy;

pub use create_pool::*;
pub use deposit::*;
pub use nominate_receiver::*;
pub use claim::*;
pub use execute_transaction::*;
pub use init_relay_policy::*;
pub use update_relay_policy::*;
