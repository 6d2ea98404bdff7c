// Ticket issuance and the global ticket ledger

use crate::identity::AccountId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Unique identifier for a sold ticket, strictly increasing across the
/// whole ledger
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TicketId(u64);

impl TicketId {
    /// Get the raw ticket number
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A sold ticket and the account that owns it
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ticket {
    id: TicketId,
    owner: AccountId,
}

impl Ticket {
    pub fn id(&self) -> TicketId {
        self.id
    }

    pub fn owner(&self) -> &AccountId {
        &self.owner
    }
}

/// Ordered ledger of every sold ticket
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TicketBook {
    /// All sold tickets in issuance order
    tickets: Vec<Ticket>,
    /// Index: owner -> ticket ids for fast lookup
    #[serde(skip)]
    owner_index: HashMap<AccountId, Vec<TicketId>>,
    /// Next ticket number to issue
    next_id: u64,
}

impl TicketBook {
    /// Create an empty ticket book
    pub fn new() -> Self {
        Self {
            tickets: Vec::new(),
            owner_index: HashMap::new(),
            next_id: 1,
        }
    }

    /// Check if any tickets have been sold
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Get the number of sold tickets
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Get a ticket by its position in issuance order
    pub fn get(&self, index: usize) -> Option<&Ticket> {
        self.tickets.get(index)
    }

    /// Get all sold tickets in issuance order
    pub fn all(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Issue `count` new tickets to `owner`, returning the new ids
    pub fn issue(&mut self, owner: &AccountId, count: u64) -> Vec<TicketId> {
        let mut issued = Vec::with_capacity(count as usize);

        for _ in 0..count {
            let id = TicketId(self.next_id);
            self.next_id += 1;

            self.tickets.push(Ticket {
                id,
                owner: owner.clone(),
            });
            self.owner_index
                .entry(owner.clone())
                .or_insert_with(Vec::new)
                .push(id);
            issued.push(id);
        }

        issued
    }

    /// Ordered ticket ids owned by `account`; empty when it owns none
    pub fn owned_by(&self, account: &AccountId) -> Vec<TicketId> {
        self.owner_index.get(account).cloned().unwrap_or_default()
    }

    /// Rebuild the owner index from the ticket list (after deserialization)
    pub(crate) fn rebuild_index(&mut self) {
        self.owner_index.clear();

        for ticket in &self.tickets {
            self.owner_index
                .entry(ticket.owner.clone())
                .or_insert_with(Vec::new)
                .push(ticket.id);
        }
    }
}

impl Default for TicketBook {
    fn default() -> Self {
        Self::new()
    }
}
