//! Property tests: closed system, reveal rule, and shuffle fairness.

use proptest::prelude::*;

use klondike_engine::cards::shuffle_slice;
use klondike_engine::{
    can_move_to_foundation, can_move_to_tableau, Card, Deck, FoundationIndex, GameRng, GameState, Klondike,
    KlondikeConfig, MoveRequest, MoveSource, MoveTarget, Suit, TableauIndex,
};

/// One step of a random session.
#[derive(Clone, Debug)]
enum Step {
    Draw,
    Recycle,
    /// An arbitrary, usually illegal, request.
    Raw { column: usize, start: Option<usize>, target: usize, to_foundation: bool },
    /// The n-th currently legal move, modulo how many there are.
    Legal(usize),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => Just(Step::Draw),
        1 => Just(Step::Recycle),
        2 => (0usize..7, proptest::option::of(0usize..20), 0usize..7, any::<bool>()).prop_map(
            |(column, start, target, to_foundation)| Step::Raw { column, start, target, to_foundation }
        ),
        6 => any::<usize>().prop_map(Step::Legal),
    ]
}

fn legal_moves(state: &GameState) -> Vec<MoveRequest> {
    let mut sources = vec![MoveSource::Waste];
    for column in TableauIndex::all() {
        let pile = state.tableau(column);
        if let Some(first) = pile.movable_run_start() {
            sources.extend((first..pile.len()).map(|start| MoveSource::Tableau { column, start }));
        }
    }

    let mut moves = Vec::new();
    for source in sources {
        moves.extend(
            FoundationIndex::all()
                .filter(|&f| can_move_to_foundation(state, source, f))
                .map(|f| MoveRequest::new(source, MoveTarget::Foundation(f))),
        );
        moves.extend(
            TableauIndex::all()
                .filter(|&c| can_move_to_tableau(state, source, c))
                .map(|c| MoveRequest::new(source, MoveTarget::Tableau(c))),
        );
    }
    moves
}

fn raw_request(column: usize, start: Option<usize>, target: usize, to_foundation: bool) -> MoveRequest {
    let source = match (TableauIndex::new(column), start) {
        (Some(column), Some(start)) => MoveSource::Tableau { column, start },
        _ => MoveSource::Waste,
    };
    let target = if to_foundation {
        MoveTarget::Foundation(FoundationIndex::new(target % 4).unwrap())
    } else {
        MoveTarget::Tableau(TableauIndex::new(target).unwrap())
    };
    MoveRequest::new(source, target)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any session keeps all 52 cards in play exactly once, keeps every
    /// column's top face-up, and leaves the state alone on rejection.
    #[test]
    fn prop_sessions_preserve_invariants(
        seed in any::<u64>(),
        steps in proptest::collection::vec(step_strategy(), 0..300),
    ) {
        let mut game = Klondike::new(KlondikeConfig::default().with_seed(seed));

        for step in steps {
            let before = game.snapshot();
            let applied = match step {
                Step::Draw => game.request_draw().is_applied(),
                Step::Recycle => game.request_recycle().is_applied(),
                Step::Raw { column, start, target, to_foundation } => {
                    game.request_move(raw_request(column, start, target, to_foundation)).is_applied()
                }
                Step::Legal(n) => {
                    let moves = legal_moves(game.state());
                    if moves.is_empty() {
                        continue;
                    }
                    let outcome = game.request_move(moves[n % moves.len()]);
                    prop_assert!(outcome.is_applied());
                    true
                }
            };

            prop_assert_eq!(game.state().check_invariants(), Ok(()));
            if !applied {
                prop_assert_eq!(&game.snapshot(), &before);
            }
        }
    }

    /// Any number of full draw-and-recycle cycles restores the stock order.
    #[test]
    fn prop_recycle_round_trip(seed in any::<u64>(), cycles in 1usize..4) {
        let mut game = Klondike::new(KlondikeConfig::default().with_seed(seed));
        let original = game.state().stock().to_vec();

        for _ in 1..cycles {
            while game.request_draw().is_applied() {}
            prop_assert!(game.request_recycle().is_applied());
        }
        while game.request_draw().is_applied() {}
        prop_assert!(game.request_recycle().is_applied());

        prop_assert_eq!(game.state().stock().to_vec(), original);
        prop_assert!(game.state().waste().is_empty());
    }
}

// =============================================================================
// Shuffle Fairness
// =============================================================================

fn card_index(card: &Card) -> usize {
    let suit = Suit::ALL.iter().position(|&s| s == card.suit).unwrap_or_default();
    suit * 13 + usize::from(card.rank.value()) - 1
}

fn chi_square(observed: &[u32], expected: f64) -> f64 {
    observed
        .iter()
        .map(|&o| {
            let diff = f64::from(o) - expected;
            diff * diff / expected
        })
        .sum()
}

/// Every card lands in a given position with equal frequency.
#[test]
fn test_shuffle_positions_uniform() {
    const TRIALS: u32 = 10_000;
    let mut rng = GameRng::new(2024);
    let mut counts = vec![[0u32; 52]; 52];

    for _ in 0..TRIALS {
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);
        for (position, card) in deck.cards().iter().enumerate() {
            counts[position][card_index(card)] += 1;
        }
    }

    let expected = f64::from(TRIALS) / 52.0;
    for position in [0, 1, 13, 26, 50, 51] {
        // 51 degrees of freedom; 100 is far beyond the 99.99th percentile
        let chi = chi_square(&counts[position], expected);
        assert!(chi < 100.0, "position {position}: chi-square {chi:.1}");
    }
}

/// All six orderings of three items are equally likely.
#[test]
fn test_shuffle_permutations_uniform() {
    const TRIALS: u32 = 60_000;
    let mut rng = GameRng::new(77);
    let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
    let mut counts = [0u32; 6];

    for _ in 0..TRIALS {
        let mut items = [0, 1, 2];
        shuffle_slice(&mut items, &mut rng);
        let slot = orders.iter().position(|o| *o == items).unwrap();
        counts[slot] += 1;
    }

    // 5 degrees of freedom; 30 is beyond the 99.99th percentile
    let chi = chi_square(&counts, f64::from(TRIALS) / 6.0);
    assert!(chi < 30.0, "chi-square {chi:.1}, counts {counts:?}");
}
