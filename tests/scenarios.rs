use radix_sorting::cpu_radix_sort;
use radix_sorting::{RadixSorter, SortError};

fn radix_sorted(input: &[u32]) -> Vec<u32> {
    let mut data = input.to_vec();
    cpu_radix_sort::sort(&mut data).unwrap();
    data
}

#[test]
fn empty_input() {
    assert_eq!(radix_sorted(&[]), Vec::<u32>::new());
}

#[test]
fn single_element() {
    assert_eq!(radix_sorted(&[42]), vec![42]);
}

#[test]
fn duplicates_and_maximum() {
    assert_eq!(
        radix_sorted(&[5, 3, 3, 1, 0, 4294967295]),
        vec![0, 1, 3, 3, 5, 4294967295]
    );
}

#[test]
fn all_equal() {
    assert_eq!(radix_sorted(&[7, 7, 7, 7]), vec![7, 7, 7, 7]);
}

#[test]
fn descending_run() {
    assert_eq!(radix_sorted(&[100, 90, 80, 70]), vec![70, 80, 90, 100]);
}

#[test]
fn extremes_and_mid_range() {
    let input = [
        u32::MAX,
        0x8000_0000,
        0,
        0x7FFF_FFFF,
        u32::MAX - 1,
        1,
        0x0F00_0000,
        0xF000_0000,
    ];
    let mut expected = input.to_vec();
    expected.sort_unstable();
    for bits in [4, 8] {
        let mut data = input.to_vec();
        RadixSorter::<u32>::with_radix_bits(bits)
            .unwrap()
            .sort(&mut data)
            .unwrap();
        assert_eq!(data, expected, "radix width {}", bits);
    }
}

#[test]
fn invalid_width_is_rejected_up_front() {
    let err = RadixSorter::<u32>::with_radix_bits(3).unwrap_err();
    assert!(matches!(
        err,
        SortError::InvalidRadixWidth {
            radix_bits: 3,
            key_bits: 32
        }
    ));
}

#[test]
fn sorter_shared_across_threads() {
    let sorter = RadixSorter::<u32>::new();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4u32)
            .map(|t| {
                let sorter = &sorter;
                s.spawn(move || {
                    let mut data: Vec<u32> = (0..10_000u32)
                        .map(|i| i.wrapping_mul(2_654_435_761).wrapping_add(t))
                        .collect();
                    let mut expected = data.clone();
                    expected.sort_unstable();
                    sorter.sort(&mut data).unwrap();
                    data == expected
                })
            })
            .collect();
        for h in handles {
            assert!(h.join().unwrap());
        }
    });
}
