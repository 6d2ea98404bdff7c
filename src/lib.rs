// lottoledger - token sale + raffle over one synchronous ledger

pub mod identity;
pub mod ledger;
pub mod raffle;
pub mod ticket;
