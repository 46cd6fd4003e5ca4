#[cfg(test)]
mod tests {
    use lindex_core::{
        Input, LearnedIndex, LinearModel, QueryOutcome, Report, Segment, SortedArray,
    };
    use proptest::prelude::*;
    use rand::{thread_rng, Rng};
    use rand_distr::{Normal, Uniform};

    type K = i64;

    const SIZE: usize = 100;

    fn build<const N: usize>(keys: [K; N], target_max_error: usize) -> LearnedIndex<K, N> {
        LearnedIndex::build(SortedArray::from_unsorted(keys), target_max_error)
    }

    /// Every key must be found, at a rank holding an equal key
    fn assert_round_trip<const N: usize>(index: &LearnedIndex<K, N>) {
        for (rank, &key) in index.data().iter().enumerate() {
            let position = index.get(key);
            assert!(
                position.and_then(|p| index.data().get(p)) == Some(&key),
                "key {} at rank {} resolved to {:?} (bound {})",
                key,
                rank,
                position,
                index.target_max_error()
            );
        }
    }

    fn assert_misses<const N: usize>(index: &LearnedIndex<K, N>, probes: impl Iterator<Item = K>) {
        let keys = index.data().as_slice();
        for probe in probes {
            if keys.binary_search(&probe).is_err() {
                assert_eq!(index.get(probe), None, "absent key {} was found", probe);
            }
        }
    }

    fn random_keys<D: rand::distributions::Distribution<f64>>(dist: D) -> [K; SIZE] {
        let mut rng = thread_rng();
        let mut keys = [0; SIZE];
        for key in keys.iter_mut() {
            let value: f64 = rng.sample(&dist);
            *key = value.round() as K;
        }
        keys
    }

    #[test]
    fn uniform_keys_round_trip() {
        let dist = Uniform::new(-1_000_000.0, 1_000_000.0);

        for _ in 0..200 {
            let keys = random_keys(dist);
            for target_max_error in [1, 2, 3, 8, 32] {
                let index = build(keys, target_max_error);
                assert_round_trip(&index);

                let mut rng = thread_rng();
                assert_misses(&index, (0..200).map(|_| rng.gen_range(-1_000_000..1_000_000)));
            }
        }
    }

    #[test]
    fn clustered_keys_round_trip() {
        // Narrow normal distribution: plenty of duplicates and a dense middle
        let dist = Normal::new(0.0, 25.0).unwrap();

        for _ in 0..200 {
            let keys = random_keys(dist);
            for target_max_error in [1, 2, 4] {
                let index = build(keys, target_max_error);
                assert_round_trip(&index);
                assert_misses(&index, -150..150);
            }
        }
    }

    #[test]
    fn out_of_range_keys() {
        let keys: [K; SIZE] = std::array::from_fn(|ix| (ix as K - 50) * 7);
        let index = build(keys, 2);

        assert_eq!(index.query(-351), QueryOutcome::OutOfRange);
        assert_eq!(index.query(344), QueryOutcome::OutOfRange);
        assert_eq!(index.query(K::MIN), QueryOutcome::OutOfRange);
        assert_eq!(index.get(-350), Some(0));
        assert_eq!(index.get(343), Some(99));
    }

    #[test]
    fn small_example() {
        let index = build([1, 3, 3, 7, 9, 15, 15, 20, 44, 44], 1);

        let segments = index.segmentation().segments();
        assert_eq!(segments.last().map(|s| s.boundary), Some(44));
        assert_eq!(index.get(7), Some(3));
        assert_eq!(index.query(100), QueryOutcome::OutOfRange);
    }

    #[test]
    fn duplicate_run_starts_constant() {
        let index = build([4, 4, 4, 4, 4, 9, 12, 30, 31, 31], 1);

        let first = &index.segmentation().segments()[0];
        assert_eq!(first.model, LinearModel::constant(0));
        for key in [4, 9, 30, -5, 1_000] {
            assert_eq!(first.model.predict(key), 0);
        }

        // The constant model breaks down two ranks past the run's start
        assert_eq!(first.ranks(), 0..2);
        assert_round_trip(&index);
    }

    #[test]
    fn report_matches_index() {
        let input: Input<K, 10> = "44 3 20 1 15 3 9 44 7 15 1 7 100 15".parse().unwrap();
        let report = Report::generate(input);

        assert_eq!(report.segments.len(), 3);
        assert_eq!(report.queries[0].outcome.position(), Some(3));
        assert_eq!(report.queries[1].outcome, QueryOutcome::OutOfRange);
        assert_eq!(report.queries[2].outcome.position(), Some(5));
    }

    /// Ranks allowed to exceed the bound: rank 1, which the first model is never
    /// checked against, and rank `size - 2` when the bound breaks there and the
    /// tail is pinned to the last rank
    fn is_exempt(segment: &Segment<K>, rank: usize, size: usize) -> bool {
        let pinned_tail = segment.start + 2 == size
            && rank == size - 2
            && segment.model == LinearModel::constant(size - 1);
        let unchecked_second = segment.start == 0 && rank == 1;

        pinned_tail || unchecked_second
    }

    fn sorted_keys() -> impl Strategy<Value = [K; 64]> {
        prop::collection::vec(-500i64..500, 64).prop_map(|mut keys| {
            keys.sort();
            keys.try_into().unwrap()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn global_fit_reports_worst_rank(keys in sorted_keys()) {
            let fit = build(keys, 0).global_fit().unwrap();
            let model = LinearModel::fit(&keys, 0, 1);

            let errors: Vec<u128> = (0..keys.len()).map(|rank| model.error(&keys, rank)).collect();
            let worst = errors.iter().copied().max().unwrap();

            prop_assert_eq!(fit.max_error, worst);
            prop_assert_eq!(errors.iter().position(|&e| e == worst), Some(fit.position));
            prop_assert_eq!(fit.key, keys[fit.position]);
        }

        #[test]
        fn segments_partition_ranks(keys in sorted_keys(), target_max_error in 0usize..10) {
            let index = build(keys, target_max_error);
            let segments = index.segmentation().segments();

            let mut next = 0;
            for segment in segments {
                prop_assert_eq!(segment.start, next);
                prop_assert!(segment.len > 0);
                prop_assert_eq!(segment.boundary, keys[segment.ranks().end - 1]);
                next = segment.ranks().end;
            }
            prop_assert_eq!(next, keys.len());

            for pair in segments.windows(2) {
                prop_assert!(pair[0].boundary <= pair[1].boundary);
            }
        }

        #[test]
        fn ranks_within_bound(keys in sorted_keys(), target_max_error in 0usize..10) {
            let index = build(keys, target_max_error);

            for rank in 0..keys.len() {
                let segment = index.segmentation().covering(rank).unwrap();
                let error = segment.model.error(&keys, rank);
                prop_assert!(
                    error <= target_max_error as u128 || is_exempt(segment, rank, keys.len()),
                    "rank {} off by {}", rank, error
                );
            }
        }

        #[test]
        fn every_key_is_found(keys in sorted_keys(), target_max_error in 1usize..10) {
            let index = build(keys, target_max_error);

            for &key in keys.iter() {
                let position = index.get(key);
                prop_assert!(position.is_some(), "key {} not found", key);
                prop_assert_eq!(keys[position.unwrap()], key);
            }
        }

        #[test]
        fn exact_bound_finds_checked_ranks(keys in sorted_keys()) {
            let index = build(keys, 0);

            for (rank, &key) in keys.iter().enumerate() {
                let segment = index.segmentation().covering(rank).unwrap();
                if is_exempt(segment, rank, keys.len()) {
                    continue;
                }

                prop_assert_eq!(segment.model.error(&keys, rank), 0);
                let position = index.get(key);
                prop_assert!(position.is_some(), "key {} at rank {} not found", key, rank);
                prop_assert_eq!(keys[position.unwrap()], key);
            }
        }

        #[test]
        fn outside_keys_skip_search(keys in sorted_keys(), offset in 1i64..1_000) {
            let index = build(keys, 2);

            prop_assert_eq!(index.query(keys[0] - offset), QueryOutcome::OutOfRange);
            prop_assert_eq!(index.query(keys[63] + offset), QueryOutcome::OutOfRange);
        }
    }
}
