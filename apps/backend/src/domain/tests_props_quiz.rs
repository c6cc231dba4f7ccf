use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::question::{CategoryId, Question};
use crate::domain::quiz::{eligible, select_next, QuizState, RngSource};
use crate::domain::test_prelude;

/// Pool with unique ids `1..=n` and categories drawn from 1..=4.
fn pool_strategy() -> impl Strategy<Value = Vec<Question>> {
    prop::collection::vec(1i64..=4, 0..24).prop_map(|cats| {
        cats.into_iter()
            .enumerate()
            .map(|(i, category)| Question {
                id: i as i64 + 1,
                question: format!("q{i}"),
                answer: format!("a{i}"),
                category,
                difficulty: (i % 5) as i32 + 1,
            })
            .collect()
    })
}

/// Pool plus an exclusion set mixing pool ids with ids that are not in it.
fn quiz_input() -> impl Strategy<Value = (Vec<Question>, HashSet<i64>, Option<CategoryId>, u64)> {
    pool_strategy().prop_flat_map(|pool| {
        let n = pool.len();
        (
            Just(pool),
            prop::collection::vec(any::<bool>(), n),
            prop::collection::hash_set(100i64..110, 0..3),
            prop::option::of(1i64..=5),
            any::<u64>(),
        )
            .prop_map(|(pool, mask, strays, category, seed)| {
                let mut shown: HashSet<i64> = pool
                    .iter()
                    .zip(mask)
                    .filter(|(_, hide)| *hide)
                    .map(|(q, _)| q.id)
                    .collect();
                shown.extend(strays);
                (pool, shown, category, seed)
            })
    })
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// A pick is always an eligible pool member; `None` only when nothing is eligible.
    #[test]
    fn prop_pick_is_eligible((pool, shown, category, seed) in quiz_input()) {
        let mut rng = RngSource::seeded(seed);
        let candidates = eligible(&pool, category, &shown);

        match select_next(&pool, category, &shown, &mut rng) {
            Some(q) => {
                prop_assert!(!shown.contains(&q.id));
                if let Some(c) = category {
                    prop_assert_eq!(q.category, c);
                }
                prop_assert!(candidates.iter().any(|c| c.id == q.id));
            }
            None => prop_assert!(candidates.is_empty()),
        }
    }

    /// Marking every eligible id as shown exhausts the session.
    #[test]
    fn prop_all_eligible_shown_is_none((pool, shown, category, seed) in quiz_input()) {
        let mut all_shown = shown.clone();
        all_shown.extend(eligible(&pool, category, &shown).iter().map(|q| q.id));

        let mut rng = RngSource::seeded(seed);
        prop_assert!(select_next(&pool, category, &all_shown, &mut rng).is_none());
    }

    /// Selection reads its inputs only.
    #[test]
    fn prop_inputs_unchanged((pool, shown, category, seed) in quiz_input()) {
        let pool_before = pool.clone();
        let shown_before = shown.clone();

        let mut rng = RngSource::seeded(seed);
        let _ = select_next(&pool, category, &shown, &mut rng);
        let _ = select_next(&pool, category, &shown, &mut rng);

        prop_assert_eq!(pool, pool_before);
        prop_assert_eq!(shown, shown_before);
    }

    /// Walking a session presents each eligible question exactly once.
    #[test]
    fn prop_session_visits_each_eligible_once((pool, shown, category, seed) in quiz_input()) {
        let mut expected: Vec<i64> = eligible(&pool, category, &shown).iter().map(|q| q.id).collect();
        let mut state = QuizState::new(category).with_shown(shown.iter().copied());
        let mut rng = RngSource::seeded(seed);

        let mut visited = Vec::new();
        while let Some(q) = state.advance(&pool, &mut rng) {
            prop_assert!(visited.len() <= pool.len());
            visited.push(q.id);
        }

        visited.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(visited, expected);
    }
}
