#![no_main]

use libfuzzer_sys::fuzz_target;

// The first byte picks the record size, the rest is the buffer, cut down to whole records.
fuzz_target!(|data: &[u8]| {
    let Some((&elem_size, rest)) = data.split_first() else {
        return;
    };
    let elem_size = (elem_size as usize % 32) + 1;

    let mut buf = rest[..rest.len() - (rest.len() % elem_size)].to_vec();

    let mut expected = buf.chunks(elem_size).map(|r| r.to_vec()).collect::<Vec<_>>();
    expected.sort();

    swish_sort::bytes::sort_bytes(&mut buf, elem_size, |a, b| a.cmp(b));

    let got = buf.chunks(elem_size).map(|r| r.to_vec()).collect::<Vec<_>>();
    assert_eq!(got, expected);
});
