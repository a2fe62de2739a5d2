#![no_main]

use classic_sort::{sort, Algorithm, Order};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, values)) = data.split_first() else {
        return;
    };

    let algorithm = Algorithm::ALL[selector as usize % Algorithm::ALL.len()];
    let order = if selector & 0x80 == 0 { Order::Ascending } else { Order::Descending };

    let sorted = sort(values, order, algorithm);

    for window in sorted.windows(2) {
        assert!(!order.is_less(&window[1], &window[0]));
    }

    let mut expected = values.to_vec();
    expected.sort_by(|a, b| order.compare(a, b));
    assert_eq!(sorted, expected);
});
