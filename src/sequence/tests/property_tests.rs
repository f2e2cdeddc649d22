//! Generated checks for round trip, ordering, idempotence and progress.

use proptest::{
    collection::vec,
    prelude::{Just, Strategy, any, prop_oneof},
    prop_assert,
    prop_assert_eq,
    sample::select,
    test_runner::{Config as ProptestConfig, RngAlgorithm, TestCaseError, TestRng, TestRunner},
};
use rstest::rstest;

use crate::{
    frame::{Chunker, Frame, FrameSize},
    sequence::{AbsorbStatus, Sequence},
};

fn deterministic_runner(cases: u32) -> TestRunner {
    let config = ProptestConfig {
        cases,
        ..ProptestConfig::default()
    };
    let rng = TestRng::deterministic_rng(RngAlgorithm::ChaCha);
    TestRunner::new_with_rng(config, rng)
}

/// Lengths biased towards frame boundaries for the chosen size.
fn data_strategy(size: FrameSize) -> impl Strategy<Value = Vec<u8>> {
    let capacity = size.payload_capacity();
    let ceiling = (capacity * 8).min(size.max_input_len());
    prop_oneof![
        Just(1_usize),
        Just(capacity),
        Just(capacity + 1),
        Just(capacity * 3),
        1_usize..=ceiling,
    ]
    .prop_flat_map(|len| vec(any::<u8>(), len))
}

fn sized_data_strategy() -> impl Strategy<Value = (FrameSize, Vec<u8>)> {
    select(FrameSize::ALL.to_vec()).prop_flat_map(|size| (Just(size), data_strategy(size)))
}

/// Split the data and produce a shuffled delivery order with repeats.
fn delivery_strategy() -> impl Strategy<Value = (Vec<u8>, Vec<Frame>, Vec<usize>)> {
    sized_data_strategy().prop_flat_map(|(size, data)| {
        let frames = Chunker::new(size)
            .split(&data)
            .expect("generated data fits")
            .into_frames();
        let count = frames.len();
        let order = Just((0..count).collect::<Vec<_>>()).prop_shuffle();
        let repeats = vec(0..count, 0..count * 2);
        (Just(data), Just(frames), order, repeats).prop_map(
            |(data, frames, mut order, repeats)| {
                // Repeats follow one full shuffled pass, so some land after completion.
                order.extend(repeats);
                (data, frames, order)
            },
        )
    })
}

#[rstest]
#[case(128)]
fn split_then_absorb_round_trips(#[case] cases: u32) {
    let mut runner = deterministic_runner(cases);
    runner
        .run(&sized_data_strategy(), |(size, data)| {
            let batch = Chunker::new(size)
                .split(&data)
                .map_err(|err| TestCaseError::fail(format!("split failed: {err}")))?;

            let capacity = size.payload_capacity();
            let lengths: Vec<usize> = batch.frames().iter().map(|f| f.payload().len()).collect();
            if let Some((last, rest)) = lengths.split_last() {
                prop_assert!(rest.iter().all(|len| *len == capacity));
                prop_assert!(*last <= capacity && *last > 0);
                if data.len() % capacity != 0 {
                    prop_assert!(*last < capacity);
                }
            }

            let mut sequence = Sequence::new();
            for frame in batch {
                sequence
                    .absorb(frame)
                    .map_err(|err| TestCaseError::fail(format!("absorb failed: {err}")))?;
            }
            prop_assert_eq!(sequence.reconstruct().ok(), Some(data));
            Ok(())
        })
        .expect("generated buffers should round-trip");
}

#[rstest]
#[case(128)]
fn any_delivery_order_with_duplicates_converges(#[case] cases: u32) {
    let mut runner = deterministic_runner(cases);
    runner
        .run(&delivery_strategy(), |(data, frames, order)| {
            let mut sequence = Sequence::new();
            let mut previous = sequence.progress();
            prop_assert!(previous.abs() < f32::EPSILON);

            for index in order {
                let before = sequence.received();
                let status = sequence
                    .absorb(frames[index].clone())
                    .map_err(|err| TestCaseError::fail(format!("absorb failed: {err}")))?;
                let progress = sequence.progress();

                prop_assert!(progress >= previous, "progress must never decrease");
                match status {
                    AbsorbStatus::Duplicate | AbsorbStatus::AlreadyComplete => {
                        prop_assert_eq!(sequence.received(), before);
                        prop_assert!((progress - previous).abs() < f32::EPSILON);
                    }
                    AbsorbStatus::Incomplete | AbsorbStatus::Complete => {
                        prop_assert_eq!(sequence.received(), before + 1);
                    }
                }
                prop_assert_eq!(
                    sequence.is_complete(),
                    (progress - 1.0).abs() < f32::EPSILON
                );
                previous = progress;
            }

            prop_assert!(sequence.is_complete());
            prop_assert_eq!(sequence.reconstruct().ok(), Some(data));
            Ok(())
        })
        .expect("shuffled deliveries should converge");
}
