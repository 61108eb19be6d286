use branded_region::checked;
use branded_region::{build, run, RegionError};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Append(i32),
    Set(usize, i32),
    Get(usize),
    Pop,
    Swap(usize, usize),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => any::<i32>().prop_map(Operation::Append),
        2 => (0..40usize, any::<i32>()).prop_map(|(i, v)| Operation::Set(i, v)),
        2 => (0..40usize).prop_map(Operation::Get),
        1 => Just(Operation::Pop),
        1 => (0..40usize, 0..40usize).prop_map(|(a, b)| Operation::Swap(a, b)),
    ]
}

proptest! {
    #[test]
    fn test_frozen_sequence_matches_appended_values(values in proptest::collection::vec(any::<u16>(), 0..200)) {
        let seq = run(|mut r| {
            let b = r.create_builder(None);
            for v in &values {
                r.append(&b, *v);
            }
            r.freeze(b)
        });

        prop_assert_eq!(seq.len(), values.len());
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(seq.get(i), Ok(v));
        }
        prop_assert_eq!(
            seq.get(values.len()),
            Err(RegionError::IndexOutOfBounds { index: values.len(), len: values.len() })
        );
    }

    #[test]
    fn test_cell_reads_last_write(initial in any::<i64>(), writes in proptest::collection::vec(any::<i64>(), 0..20)) {
        let (before, after) = run(|mut r| {
            let c = r.create(initial);
            let before = r.read(&c);
            for w in &writes {
                r.write(&c, *w);
            }
            (before, r.read(&c))
        });

        prop_assert_eq!(before, initial);
        prop_assert_eq!(after, writes.last().copied().unwrap_or(initial));
    }

    #[test]
    fn test_builder_matches_vec_model(ops in proptest::collection::vec(operation(), 1..100)) {
        let mut model: Vec<i32> = Vec::new();

        let seq = run(|mut r| {
            let b = r.create_builder(None);
            for op in &ops {
                match *op {
                    Operation::Append(v) => {
                        r.append(&b, v);
                        model.push(v);
                    }
                    Operation::Set(i, v) => {
                        let res = r.set(&b, i, v);
                        if i < model.len() {
                            assert_eq!(res, Ok(()));
                            model[i] = v;
                        } else {
                            assert_eq!(res, Err(RegionError::IndexOutOfBounds { index: i, len: model.len() }));
                        }
                    }
                    Operation::Get(i) => {
                        assert_eq!(r.get(&b, i).ok(), model.get(i));
                    }
                    Operation::Pop => {
                        assert_eq!(r.pop(&b), model.pop());
                    }
                    Operation::Swap(x, y) => {
                        let res = r.swap_elements(&b, x, y);
                        if x < model.len() && y < model.len() {
                            assert_eq!(res, Ok(()));
                            model.swap(x, y);
                        } else {
                            assert!(res.is_err());
                        }
                    }
                }
                assert_eq!(r.builder_len(&b), model.len());
            }
            r.freeze(b)
        });

        prop_assert_eq!(seq, model);
    }

    #[test]
    fn test_build_equals_collect(values in proptest::collection::vec(any::<u8>(), 0..64)) {
        let seq = build(|r, b| r.extend(b, values.iter().copied()));
        prop_assert_eq!(seq, values.iter().copied().collect::<branded_region::FrozenSequence<u8>>());
    }

    #[test]
    fn test_checked_handles_never_cross_regions(value in any::<u32>(), index in 0..8usize) {
        checked::run(|outer| {
            let cell = outer.create(value);
            let builder = outer.create_builder::<u32>(Some(index));
            checked::run(|inner| {
                let expected = inner.brand();
                let found = outer.brand();
                let mismatch = RegionError::BrandMismatch { expected, found };
                assert_eq!(inner.read(cell), Err(mismatch));
                assert_eq!(inner.append(builder, value), Err(mismatch));
                assert_eq!(inner.set(builder, index, value), Err(mismatch));
                assert_eq!(inner.freeze(builder).map(|s| s.len()), Err(mismatch));
            })
            .unwrap();
            assert_eq!(outer.read(cell), Ok(value));
            assert_eq!(outer.len(builder), Ok(0));
        })
        .unwrap();
    }

    #[test]
    fn test_checked_builder_freezes_once(values in proptest::collection::vec(any::<i8>(), 0..32)) {
        let res = checked::run(|r| {
            let b = r.create_builder(None);
            for v in &values {
                r.append(b, *v).unwrap();
            }
            let first = r.freeze(b);
            let second = r.freeze(b);
            (first, second)
        })
        .unwrap();

        prop_assert_eq!(res.0.unwrap(), values);
        prop_assert_eq!(res.1.map(|s| s.len()), Err(RegionError::UseAfterFreeze));
    }
}
