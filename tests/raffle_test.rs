// Draw randomness source tests

use lottoledger::raffle::{DrawRng, FixedDraw, SeededDraw, ThreadRngDraw};

// ============================================================================
// SEEDED SOURCE
// ============================================================================

#[test]
fn test_same_seed_same_sequence() {
    let mut a = SeededDraw::new(1234);
    let mut b = SeededDraw::new(1234);

    let seq_a: Vec<usize> = (0..32).map(|_| a.next_index(10_000)).collect();
    let seq_b: Vec<usize> = (0..32).map(|_| b.next_index(10_000)).collect();

    assert_eq!(seq_a, seq_b);
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = SeededDraw::new(1);
    let mut b = SeededDraw::new(2);

    let seq_a: Vec<usize> = (0..32).map(|_| a.next_index(10_000)).collect();
    let seq_b: Vec<usize> = (0..32).map(|_| b.next_index(10_000)).collect();

    assert_ne!(seq_a, seq_b);
}

#[test]
fn test_seeded_draw_stays_in_bounds() {
    let mut rng = SeededDraw::new(99);

    for bound in 1..=100 {
        assert!(rng.next_index(bound) < bound);
    }
}

// ============================================================================
// THREAD SOURCE
// ============================================================================

#[test]
fn test_thread_draw_stays_in_bounds() {
    let mut rng = ThreadRngDraw;

    for _ in 0..1000 {
        assert!(rng.next_index(7) < 7);
    }
}

#[test]
fn test_bound_of_one_always_picks_zero() {
    let mut rng = ThreadRngDraw;

    for _ in 0..10 {
        assert_eq!(rng.next_index(1), 0);
    }
}

// ============================================================================
// FIXED SOURCE
// ============================================================================

#[test]
fn test_fixed_draw_wraps_modulo_bound() {
    let mut rng = FixedDraw(5);

    assert_eq!(rng.next_index(10), 5);
    assert_eq!(rng.next_index(4), 1);
    assert_eq!(rng.next_index(1), 0);
}
