// Ledger module - the lottery state machine

mod state;

pub use state::{
    Account, LedgerError, LotteryLedger, PurchaseInfo, INITIAL_SUPPLY, WEI_PER_TOKEN,
};
