// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use rand::Rng;

/// Fisher-Yates shuffle of a slice, in place.
///
/// For `i` from the last index down to 1, a uniform `j` in `[0, i]` is drawn
/// and elements `i` and `j` are swapped.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Return a shuffled copy of `items`, leaving the input untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffle_in_place(&mut shuffled, rng);
    shuffled
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_empty_and_singleton() {
        let mut rng = StdRng::seed_from_u64(0);
        let empty: Vec<u32> = Vec::new();
        assert!(shuffle(&empty, &mut rng).is_empty());
        assert_eq!(shuffle(&[7], &mut rng), vec![7]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let mut rng = StdRng::seed_from_u64(1);
        let items: Vec<u32> = (0..20).collect();
        let shuffled = shuffle(&items, &mut rng);
        assert_eq!(items, (0..20).collect::<Vec<u32>>());
        let mut sorted = shuffled.clone();
        sorted.sort();
        assert_eq!(sorted, items);
    }

    #[test]
    fn test_same_seed_same_permutation() {
        let items: Vec<u32> = (0..10).collect();
        let a = shuffle(&items, &mut StdRng::seed_from_u64(42));
        let b = shuffle(&items, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    /// Every permutation of three elements shows up about equally often.
    #[test]
    fn test_uniformity() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();
        for _ in 0..6000 {
            let permutation = shuffle(&[0u8, 1, 2], &mut rng);
            *counts.entry(permutation).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        for count in counts.values() {
            assert!((800..=1200).contains(count), "skewed count: {count}");
        }
    }
}
