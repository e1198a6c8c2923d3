use std::hint::black_box;

use blackjack_rs::cards::{Card, Rank, Suit};
use blackjack_rs::deck::Deck;
use blackjack_rs::hand::Hand;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn hand_of(cards: &[Card]) -> Hand {
    let mut h = Hand::new("B");
    for &c in cards {
        h.add(c);
    }
    h
}

fn bench_total(c: &mut Criterion) {
    let hard = hand_of(&[
        Card::new(Rank::King, Suit::Hearts),
        Card::new(Rank::Seven, Suit::Diamonds),
    ]);
    let soft = hand_of(&[
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::Ace, Suit::Clubs),
        Card::new(Rank::Four, Suit::Hearts),
        Card::new(Rank::Two, Suit::Diamonds),
    ]);

    let mut g = c.benchmark_group("hand_total");
    g.bench_with_input(BenchmarkId::new("hard", "K,7"), &hard, |b, input| {
        b.iter(|| black_box(input).total())
    });
    g.bench_with_input(BenchmarkId::new("soft", "A,A,4,2"), &soft, |b, input| {
        b.iter(|| black_box(input).total())
    });
    g.finish();
}

fn bench_shuffle(c: &mut Criterion) {
    c.bench_function("populate_and_shuffle", |b| {
        b.iter(|| {
            let mut deck = Deck::standard();
            deck.shuffle_seeded(black_box(42));
            deck
        })
    });
}

criterion_group!(benches, bench_total, bench_shuffle);
criterion_main!(benches);
