#![no_main]

use libfuzzer_sys::fuzz_target;
use rockeval::curves::extract_curves;
use rockeval::instrument::{FileType, InstrumentVersion};
use rockeval::normalize::normalize_curves;
use rockeval::parser::parse_str;

fuzz_target!(|data: &[u8]| {
    let content = String::from_utf8_lossy(data);

    // Any input must parse or fail with an error, never panic
    for file_type in [FileType::Metadata, FileType::Data, FileType::Combined] {
        let _ = parse_str(&content, file_type);
    }

    // Combined files carry everything needed to normalize
    if let Ok(parsed) = parse_str(&content, FileType::Combined) {
        for version in [InstrumentVersion::Re6, InstrumentVersion::Re7] {
            if let Ok(raw) = extract_curves(&parsed.data, version) {
                let _ = normalize_curves(&raw, &parsed.metadata, version);
            }
        }
    }
});
