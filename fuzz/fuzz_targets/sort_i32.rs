#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut v = swish_sort_fuzz::u8_as_i32(data);
    let mut expected = v.clone();
    expected.sort();

    swish_sort::sort(&mut v);
    assert_eq!(v, expected);
});
