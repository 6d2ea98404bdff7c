// Lottery ledger - token sale, ticket purchases, winner draws

use crate::identity::AccountId;
use crate::raffle::DrawRng;
use crate::ticket::{TicketBook, TicketId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Tokens held by the treasury when the ledger is created
pub const INITIAL_SUPPLY: u64 = 10_000;

/// Canonical price of one token in wei (0.1 native unit).
/// The only simple rate consistent with every observed purchase:
/// 6 tokens cost 0.6e18, so payments of 0.7e18 and 7e18 both clear.
pub const WEI_PER_TOKEN: u128 = 100_000_000_000_000_000;

/// Errors that can occur during ledger operations. The Display strings
/// are a compatibility surface and must not change.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Ownable: caller is not the owner")]
    NotOwner,

    #[error("Not enough tokens")]
    InsufficientSupply,

    #[error("Not enough ethers")]
    InsufficientPayment,

    #[error("You dont have enough tokens")]
    InsufficientTokens,

    #[error("No tickets bought")]
    NoTicketsSold,

    #[error("Balance would overflow")]
    BalanceOverflow,

    #[error("Deserialization failed")]
    DeserializationFailed,
}

/// Purchase metadata, first recorded when an account buys tokens
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseInfo {
    tokens_bought: u64,
    purchase_count: u64,
}

impl PurchaseInfo {
    /// Total tokens bought from the treasury over all purchases
    pub fn tokens_bought(&self) -> u64 {
        self.tokens_bought
    }

    /// Number of successful purchases
    pub fn purchase_count(&self) -> u64 {
        self.purchase_count
    }
}

/// Per-account state tracked by the ledger
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Account {
    token_balance: u64,
    purchase: Option<PurchaseInfo>,
}

impl Account {
    pub fn token_balance(&self) -> u64 {
        self.token_balance
    }

    pub fn has_purchased(&self) -> bool {
        self.purchase.is_some()
    }

    pub fn purchase(&self) -> Option<&PurchaseInfo> {
        self.purchase.as_ref()
    }
}

/// The lottery ledger - a single synchronous state machine over token
/// balances, ticket ownership and winner state.
///
/// Every operation validates all of its preconditions before the first
/// mutation, so a failed call leaves the ledger untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LotteryLedger {
    /// Designated owner, compared by value on gated operations
    owner: AccountId,
    /// Tokens still held by the treasury
    treasury_balance: u64,
    /// Total tokens in existence (treasury + all account balances)
    total_supply: u64,
    /// Price of one token, in wei
    exchange_rate: u128,
    /// Per-account balances and purchase metadata
    accounts: HashMap<AccountId, Account>,
    /// Every sold ticket, in issuance order
    tickets: TicketBook,
    /// Winner of the most recent draw
    winner: Option<AccountId>,
}

impl LotteryLedger {
    /// Create a ledger whose treasury holds the entire initial supply
    pub fn new(owner: AccountId) -> Self {
        Self {
            owner,
            treasury_balance: INITIAL_SUPPLY,
            total_supply: INITIAL_SUPPLY,
            exchange_rate: WEI_PER_TOKEN,
            accounts: HashMap::new(),
            tickets: TicketBook::new(),
            winner: None,
        }
    }

    /// Create a ledger with a non-default token price
    pub fn with_exchange_rate(owner: AccountId, exchange_rate: u128) -> Self {
        let mut ledger = Self::new(owner);
        ledger.exchange_rate = exchange_rate;
        ledger
    }

    /// Get the owner of this ledger
    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    /// Tokens currently held by the treasury
    pub fn treasury_balance(&self) -> u64 {
        self.treasury_balance
    }

    /// Total tokens in existence
    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }

    /// Price of one token, in wei
    pub fn exchange_rate(&self) -> u128 {
        self.exchange_rate
    }

    /// Token balance of an account; unknown accounts read as zero
    pub fn balance_of(&self, account: &AccountId) -> u64 {
        self.accounts
            .get(account)
            .map(|a| a.token_balance)
            .unwrap_or(0)
    }

    /// Purchase metadata handle; None until the first successful purchase
    pub fn users_info(&self, account: &AccountId) -> Option<&PurchaseInfo> {
        self.accounts.get(account).and_then(|a| a.purchase.as_ref())
    }

    /// Check whether an account has ever bought tokens
    pub fn has_purchased(&self, account: &AccountId) -> bool {
        self.users_info(account).is_some()
    }

    /// Ordered ticket ids owned by an account; empty when it owns none
    pub fn view_tickets(&self, account: &AccountId) -> Vec<TicketId> {
        self.tickets.owned_by(account)
    }

    /// Total number of tickets sold
    pub fn ticket_count(&self) -> usize {
        self.tickets.len()
    }

    /// Winner of the most recent draw, if any
    pub fn winner_address(&self) -> Option<&AccountId> {
        self.winner.as_ref()
    }

    fn require_owner(&self, caller: &AccountId) -> Result<(), LedgerError> {
        if caller != &self.owner {
            return Err(LedgerError::NotOwner);
        }
        Ok(())
    }

    /// Mint new tokens into the treasury. Owner only.
    pub fn mint(&mut self, amount: u64, caller: &AccountId) -> Result<(), LedgerError> {
        self.require_owner(caller)?;

        let new_treasury = self
            .treasury_balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;

        self.treasury_balance = new_treasury;
        self.total_supply = new_supply;

        debug!(amount, total_supply = self.total_supply, "minted tokens into treasury");
        Ok(())
    }

    /// Buy tokens from the treasury with attached native value.
    ///
    /// Supply is checked before payment. Overpayment is accepted and kept;
    /// the ledger does not track native balances or issue refunds.
    pub fn buy_tokens(
        &mut self,
        amount: u64,
        payment: u128,
        caller: &AccountId,
    ) -> Result<(), LedgerError> {
        if self.treasury_balance < amount {
            return Err(LedgerError::InsufficientSupply);
        }

        let cost = self
            .exchange_rate
            .checked_mul(u128::from(amount))
            .ok_or(LedgerError::BalanceOverflow)?;
        if payment < cost {
            return Err(LedgerError::InsufficientPayment);
        }

        self.treasury_balance -= amount;

        let account = self.accounts.entry(caller.clone()).or_default();
        account.token_balance += amount;
        match &mut account.purchase {
            Some(info) => {
                info.tokens_bought += amount;
                info.purchase_count += 1;
            }
            None => {
                account.purchase = Some(PurchaseInfo {
                    tokens_bought: amount,
                    purchase_count: 1,
                });
            }
        }

        debug!(amount, buyer = %caller, "sold tokens from treasury");
        Ok(())
    }

    /// Spend tokens on tickets, one token per ticket. Returns the new ids.
    ///
    /// Spent tokens return to the treasury, keeping the supply invariant
    /// (treasury + all balances == total supply) exact.
    pub fn buy_ticket(
        &mut self,
        count: u64,
        caller: &AccountId,
    ) -> Result<Vec<TicketId>, LedgerError> {
        if self.balance_of(caller) < count {
            return Err(LedgerError::InsufficientTokens);
        }

        if let Some(account) = self.accounts.get_mut(caller) {
            account.token_balance -= count;
        }
        self.treasury_balance += count;

        let issued = self.tickets.issue(caller, count);
        debug!(count, buyer = %caller, "issued tickets");
        Ok(issued)
    }

    /// Draw a winner uniformly from all sold tickets. Owner only.
    /// A repeat draw overwrites the previous winner.
    pub fn draw_winner(
        &mut self,
        caller: &AccountId,
        rng: &mut dyn DrawRng,
    ) -> Result<AccountId, LedgerError> {
        self.require_owner(caller)?;

        if self.tickets.is_empty() {
            return Err(LedgerError::NoTicketsSold);
        }

        let index = rng.next_index(self.tickets.len());
        let ticket = self.tickets.get(index).ok_or(LedgerError::NoTicketsSold)?;
        let winner = ticket.owner().clone();
        let ticket_id = ticket.id();

        self.winner = Some(winner.clone());
        debug!(winner = %winner, ticket = %ticket_id, "drew raffle winner");
        Ok(winner)
    }

    /// Serialize the full ledger state to bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        postcard::to_allocvec(self).unwrap_or_default()
    }

    /// Restore a ledger from snapshot bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LedgerError> {
        let mut ledger: LotteryLedger =
            postcard::from_bytes(bytes).map_err(|_| LedgerError::DeserializationFailed)?;
        ledger.tickets.rebuild_index();
        Ok(ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raffle::FixedDraw;

    #[test]
    fn test_new_ledger_holds_initial_supply() {
        let owner = AccountId::from_seed("owner");
        let ledger = LotteryLedger::new(owner);

        assert_eq!(ledger.treasury_balance(), INITIAL_SUPPLY);
        assert_eq!(ledger.total_supply(), INITIAL_SUPPLY);
        assert!(ledger.winner_address().is_none());
    }

    #[test]
    fn test_full_round() {
        let owner = AccountId::from_seed("owner");
        let alice = AccountId::from_seed("alice");
        let mut ledger = LotteryLedger::new(owner.clone());

        ledger.buy_tokens(6, 6 * WEI_PER_TOKEN, &alice).unwrap();
        ledger.buy_ticket(2, &alice).unwrap();
        let winner = ledger.draw_winner(&owner, &mut FixedDraw(0)).unwrap();

        assert_eq!(winner, alice);
        assert_eq!(ledger.balance_of(&alice), 4);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let owner = AccountId::from_seed("owner");
        let alice = AccountId::from_seed("alice");
        let mut ledger = LotteryLedger::new(owner);

        ledger.buy_tokens(6, 6 * WEI_PER_TOKEN, &alice).unwrap();
        ledger.buy_ticket(3, &alice).unwrap();

        let restored = LotteryLedger::from_bytes(&ledger.to_bytes()).unwrap();

        assert_eq!(restored.balance_of(&alice), 3);
        assert_eq!(restored.view_tickets(&alice).len(), 3);
    }
}
