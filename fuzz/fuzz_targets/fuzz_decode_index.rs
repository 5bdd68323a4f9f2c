#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must decode cleanly or fail with an error, never panic,
    // and anything that decodes must be searchable
    if let Ok(reader) = ipmt::index::suffix_array::SuffixArrayReader::from_bytes(data) {
        let executor = ipmt::query::QueryExecutor::new(&reader);
        let _ = executor.matches(&[b"a".as_slice(), b"\n", b""]);
    }
});
