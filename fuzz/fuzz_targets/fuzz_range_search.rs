#![no_main]

use arbitrary::Arbitrary;
use ipmt::index::suffix_array::{RangeSearcher, SuffixArrayBuilder};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    text: Vec<u8>,
    pattern: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let text: Vec<u8> = input.text.into_iter().map(|b| b % 127).collect();
    let Ok(built) = SuffixArrayBuilder::new(text.clone()).build() else {
        return;
    };

    let searcher = RangeSearcher::over(&built);
    let expected = (0..text.len())
        .filter(|&i| text[i..].starts_with(&input.pattern))
        .count();
    assert_eq!(searcher.count(&input.pattern), expected);
});
