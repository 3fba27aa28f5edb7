use super::parse;

#[test]
fn parses_a_data_record() {
    let records = parse(":03010000010203F6\n").unwrap();
    assert_eq!(1, records.len());
    assert_eq!((0x0100, vec![0x01, 0x02, 0x03]), records[0]);
}

#[test]
fn zero_length_record_terminates_the_load() {
    let records = parse(":03010000010203F6\n:00000001FF\n:03020000AABBCC00\n").unwrap();
    assert_eq!(1, records.len());
}

#[test]
fn rejects_a_record_without_a_colon() {
    assert!(parse("03010000010203F6\n").is_err());
}

#[test]
fn rejects_a_truncated_record() {
    assert!(parse(":FF010000AABB\n").is_err());
}

#[test]
fn blank_lines_are_skipped() {
    let records = parse(":02000000AABB55\n\n:02000200CCDD55\n").unwrap();
    assert_eq!(2, records.len());
    assert_eq!(0x0002, records[1].0);
}
