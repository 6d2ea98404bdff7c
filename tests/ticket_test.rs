// Ticket book tests

use lottoledger::identity::AccountId;
use lottoledger::ticket::TicketBook;

// ============================================================================
// CREATION
// ============================================================================

#[test]
fn test_new_book_is_empty() {
    let book = TicketBook::new();

    assert!(book.is_empty());
    assert_eq!(book.len(), 0);
    assert!(book.get(0).is_none());
}

// ============================================================================
// ISSUANCE
// ============================================================================

#[test]
fn test_issue_returns_requested_count() {
    let mut book = TicketBook::new();
    let alice = AccountId::from_seed("alice");

    let ids = book.issue(&alice, 4);

    assert_eq!(ids.len(), 4);
    assert_eq!(book.len(), 4);
}

#[test]
fn test_issue_zero_is_a_noop() {
    let mut book = TicketBook::new();
    let alice = AccountId::from_seed("alice");

    let ids = book.issue(&alice, 0);

    assert!(ids.is_empty());
    assert!(book.is_empty());
}

#[test]
fn test_ids_strictly_increase_across_owners() {
    let mut book = TicketBook::new();
    let alice = AccountId::from_seed("alice");
    let bob = AccountId::from_seed("bob");

    let mut ids = Vec::new();
    ids.extend(book.issue(&alice, 2));
    ids.extend(book.issue(&bob, 3));
    ids.extend(book.issue(&alice, 1));

    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_tickets_kept_in_issuance_order() {
    let mut book = TicketBook::new();
    let alice = AccountId::from_seed("alice");
    let bob = AccountId::from_seed("bob");

    book.issue(&alice, 1);
    book.issue(&bob, 1);

    assert_eq!(book.get(0).unwrap().owner(), &alice);
    assert_eq!(book.get(1).unwrap().owner(), &bob);
    assert_eq!(book.all().len(), 2);
}

// ============================================================================
// OWNERSHIP LOOKUP
// ============================================================================

#[test]
fn test_owned_by_returns_only_own_tickets() {
    let mut book = TicketBook::new();
    let alice = AccountId::from_seed("alice");
    let bob = AccountId::from_seed("bob");

    let alice_ids = book.issue(&alice, 2);
    book.issue(&bob, 2);

    assert_eq!(book.owned_by(&alice), alice_ids);
}

#[test]
fn test_owned_by_stranger_is_empty() {
    let mut book = TicketBook::new();
    book.issue(&AccountId::from_seed("alice"), 2);

    assert!(book.owned_by(&AccountId::from_seed("nobody")).is_empty());
}
