use proptest::prelude::*;
use radix_sorting::cpu_sort::is_sorted;
use radix_sorting::{RadixKey, RadixSorter};

fn radix_sort<K: RadixKey>(bits: u32, input: &[K]) -> Vec<K> {
    let mut data = input.to_vec();
    RadixSorter::<K>::with_radix_bits(bits)
        .unwrap()
        .sort(&mut data)
        .unwrap();
    data
}

fn reference_sort<K: Ord + Clone>(input: &[K]) -> Vec<K> {
    let mut data = input.to_vec();
    data.sort_unstable();
    data
}

fn u32_width() -> impl Strategy<Value = u32> {
    prop::sample::select(vec![1u32, 2, 4, 8, 16])
}

proptest! {
    #[test]
    fn prop_u32_matches_reference(
        bits in u32_width(),
        input in prop::collection::vec(any::<u32>(), 0..2000),
    ) {
        let sorted = radix_sort(bits, &input);
        prop_assert!(is_sorted(&sorted));
        prop_assert_eq!(sorted, reference_sort(&input));
    }

    // Narrow value range forces heavy duplication and skewed buckets.
    #[test]
    fn prop_u32_permutation_with_duplicates(
        input in prop::collection::vec(0u32..16, 0..1000),
    ) {
        let sorted = radix_sort(4, &input);
        let mut counts = [0usize; 16];
        for &x in &input {
            counts[x as usize] += 1;
        }
        for &x in &sorted {
            counts[x as usize] -= 1;
        }
        prop_assert!(counts.iter().all(|&c| c == 0));
        prop_assert!(is_sorted(&sorted));
    }

    #[test]
    fn prop_sorting_is_idempotent(
        bits in u32_width(),
        input in prop::collection::vec(any::<u32>(), 0..500),
    ) {
        let once = radix_sort(bits, &input);
        let twice = radix_sort(bits, &once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_u8_matches_reference(
        bits in prop::sample::select(vec![1u32, 2, 4, 8]),
        input in prop::collection::vec(any::<u8>(), 0..500),
    ) {
        prop_assert_eq!(radix_sort(bits, &input), reference_sort(&input));
    }

    #[test]
    fn prop_u16_matches_reference(
        bits in prop::sample::select(vec![2u32, 4, 8, 16]),
        input in prop::collection::vec(any::<u16>(), 0..500),
    ) {
        prop_assert_eq!(radix_sort(bits, &input), reference_sort(&input));
    }

    #[test]
    fn prop_u64_matches_reference(
        bits in prop::sample::select(vec![4u32, 8, 16]),
        input in prop::collection::vec(any::<u64>(), 0..500),
    ) {
        prop_assert_eq!(radix_sort(bits, &input), reference_sort(&input));
    }
}
