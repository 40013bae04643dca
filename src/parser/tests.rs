use super::*;
use tempfile::tempdir;

const RE6_METADATA: &str = "[Param]
Quant=2.5
Operator=JD

[Standard]
KFid=1.0
IFP 160000 reference

[Curs manu_1]
Base=10.0
";

const RE6_DATA: &str = "[Curves pyro]
0\t100\t15\t0\t0
1\t101\t16\t1\t1
[Curves oxi]
0\t300\t2\t3
";

const RE7_COMBINED: &str = "[Param]
Quant=60.1
[base ligne]
LB_FID=1.5
LB_CO_O=
[Some Table]
not=metadata-looking data
[Curves Pyro]
0\t100\t15\t0\t0\t0
[Curves Oxi]
0\t300\t2\t3\t1
weird=line\tstays\tdata
";

#[test]
fn test_metadata_file() {
    let parsed = parse_str(RE6_METADATA, FileType::Metadata).unwrap();

    assert!(parsed.data.is_empty());
    assert_eq!(parsed.metadata.len(), 3);
    assert_eq!(parsed.metadata.get("Param", "Quant"), Some("2.5"));
    assert_eq!(parsed.metadata.get("Curs manu_1", "Base"), Some("10.0"));

    let standard = parsed.metadata.section("Standard").unwrap();
    assert_eq!(standard.get("KFid"), Some("1.0"));
    assert_eq!(standard.extra(), &["IFP 160000 reference".to_string()]);
    // A free-text line is not also stored as a field
    assert_eq!(standard.len(), 1);
}

#[test]
fn test_data_file_switches_at_first_header() {
    let parsed = parse_str(RE6_DATA, FileType::Data).unwrap();

    assert!(parsed.metadata.is_empty());
    let pyro = parsed.data.section("Curves pyro").unwrap();
    assert_eq!(pyro.len(), 2);
    assert_eq!(pyro[1], vec!["1", "101", "16", "1", "1"]);
    assert_eq!(parsed.data.section("Curves oxi").unwrap()[0].len(), 4);
}

#[test]
fn test_combined_file_switches_at_curves_pyro() {
    let parsed = parse_str(RE7_COMBINED, FileType::Combined).unwrap();

    // Everything before [Curves Pyro] is metadata, even data-looking sections
    assert_eq!(parsed.metadata.get("Some Table", "not"), Some("metadata-looking data"));
    assert_eq!(parsed.metadata.get("base ligne", "LB_CO_O"), Some(""));
    assert!(parsed.metadata.section("Curves Pyro").is_none());

    let names: Vec<_> = parsed.data.sections().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["Curves Pyro", "Curves Oxi"]);

    // No re-entry into metadata mode
    let oxi = parsed.data.section("Curves Oxi").unwrap();
    assert_eq!(oxi.len(), 2);
    assert_eq!(oxi[1], vec!["weird=line", "stays", "data"]);
}

#[test]
fn test_split_on_first_equals_only() {
    let parsed = parse_str("[Method]\nFormula=a=b+c\n", FileType::Metadata).unwrap();
    assert_eq!(parsed.metadata.get("Method", "Formula"), Some("a=b+c"));
}

#[test]
fn test_extra_key_joins_free_text() {
    let parsed = parse_str("[Param]\nExtra=foo\nfree text\n", FileType::Metadata).unwrap();
    let param = parsed.metadata.section("Param").unwrap();

    assert_eq!(param.get("Extra"), None);
    assert_eq!(param.extra(), &["Extra=foo".to_string(), "free text".to_string()]);
}

#[test]
fn test_decode_utf8() {
    let path = Path::new("s.R00");
    assert_eq!(decode("Operator=René".as_bytes(), path), "Operator=René");
    assert_eq!(decode(b"\xEF\xBB\xBF[Param]", path), "[Param]");
    assert!(matches!(decode(b"Quant=1", path), Cow::Borrowed(_)));
}

#[test]
fn test_decode_windows_1252_fallback() {
    let path = Path::new("s.R00");
    assert_eq!(decode(b"Operator=Ren\xe9", path), "Operator=René");
    assert_eq!(decode(b"T=25\xb0C", path), "T=25°C");
}

#[test]
fn test_parse_file_windows_1252() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("s.R00");
    std::fs::write(&path, b"[Param]\r\nOperator=Ren\xe9\r\nQuant=2.5\r\n").unwrap();

    let parsed = parse_file(&path).unwrap();
    assert_eq!(parsed.metadata.get("Param", "Operator"), Some("René"));
    assert_eq!(parsed.metadata.get("Param", "Quant"), Some("2.5"));
}

#[test]
fn test_blank_and_padded_lines() {
    let content = "\r\n  [Param]  \r\n\r\n   Quant=3.0   \r\n\t\n";
    let parsed = parse_str(content, FileType::Metadata).unwrap();
    assert_eq!(parsed.metadata.get("Param", "Quant"), Some("3.0"));
}

#[test]
fn test_empty_sections_are_kept() {
    let parsed = parse_str("[Empty]\n[Param]\nQuant=1\n", FileType::Metadata).unwrap();
    let names: Vec<_> = parsed.metadata.section_names().collect();
    assert_eq!(names, vec!["Empty", "Param"]);
    assert!(parsed.metadata.section("Empty").unwrap().is_empty());
}

#[test]
fn test_rows_are_not_validated() {
    let parsed = parse_str("[Curves pyro]\n1\t2\n1\t2\t3\t4\t5\t6\t7\n", FileType::Data).unwrap();
    let rows = parsed.data.section("Curves pyro").unwrap();
    assert_eq!(rows[0].len(), 2);
    assert_eq!(rows[1].len(), 7);
}

#[test]
fn test_content_before_first_header() {
    let err = parse_str("Quant=2.5\n[Param]\n", FileType::Metadata).unwrap_err();
    match err {
        RockEvalError::Structural { message, .. } => assert!(message.contains("line 1")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_file_uses_extension() -> Result<()> {
    let dir = tempdir().map_err(RockEvalError::Write)?;
    let path = dir.path().join("s1.S00");
    std::fs::write(&path, RE6_DATA).map_err(RockEvalError::Write)?;

    let parsed = parse_file(&path)?;
    assert!(parsed.metadata.is_empty());
    assert_eq!(parsed.data.len(), 2);
    Ok(())
}

#[test]
fn test_parse_file_rejects_unknown_extension() {
    let err = parse_file(Path::new("sample.txt")).unwrap_err();
    assert!(matches!(err, RockEvalError::Configuration(_)));
}

#[test]
fn test_parse_file_missing() {
    let dir = tempdir().unwrap();
    let err = parse_file(&dir.path().join("absent.B00")).unwrap_err();
    assert!(matches!(err, RockEvalError::Io { .. }));
}

#[test]
fn test_parse_sample_merges_re6_files() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("s1.R00"), RE6_METADATA).unwrap();
    std::fs::write(dir.path().join("s1.S00"), RE6_DATA).unwrap();

    let parsed = parse_sample(dir.path(), "s1", InstrumentVersion::Re6).unwrap();
    assert_eq!(parsed.metadata, parse_str(RE6_METADATA, FileType::Metadata).unwrap().metadata);
    assert_eq!(parsed.data, parse_str(RE6_DATA, FileType::Data).unwrap().data);
}

#[test]
fn test_parse_sample_re7_single_file() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("s2.B00"), RE7_COMBINED).unwrap();

    let parsed = parse_sample(dir.path(), "s2", InstrumentVersion::Re7).unwrap();
    assert_eq!(parsed, parse_str(RE7_COMBINED, FileType::Combined).unwrap());
}

#[test]
fn test_parsing_is_deterministic() {
    let first = parse_str(RE7_COMBINED, FileType::Combined).unwrap();
    let second = parse_str(RE7_COMBINED, FileType::Combined).unwrap();
    assert_eq!(first, second);
}
