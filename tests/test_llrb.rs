use llrb::LlrbSet;
use rand::Rng;
use std::collections::BTreeSet;

#[test]
fn test_random_insert_contains() {
    let mut rng = rand::thread_rng();
    let mut set = LlrbSet::new();
    let mut expected = Vec::new();
    for _ in 0..100_000 {
        let key = rng.gen::<u32>();

        if set.insert(key) {
            expected.push(key);
        }
    }

    expected.sort();

    assert_eq!(set.len(), expected.len());
    for key in &expected {
        assert!(set.contains(key));
    }

    for key in &expected {
        assert_eq!(set.pop_min(), Some(*key));
    }
    assert!(set.is_empty());
}

#[test]
fn test_random_mixed_operations() {
    let mut rng = rand::thread_rng();
    let mut set = LlrbSet::new();
    let mut expected = BTreeSet::new();

    for _ in 0..100_000 {
        let key = rng.gen_range(0u32, 2000);
        match rng.gen_range(0, 4) {
            0 => assert_eq!(set.insert(key), expected.insert(key)),
            1 => assert_eq!(set.remove(&key), expected.take(&key)),
            2 => assert_eq!(set.pop_min(), {
                let min = expected.iter().next().cloned();
                if let Some(min) = min {
                    expected.remove(&min);
                }
                min
            }),
            _ => assert_eq!(set.pop_max(), {
                let max = expected.iter().next_back().cloned();
                if let Some(max) = max {
                    expected.remove(&max);
                }
                max
            }),
        }

        assert_eq!(set.len(), expected.len());
    }

    for key in expected {
        assert_eq!(set.pop_min(), Some(key));
    }
    assert_eq!(set.pop_min(), None);
}
