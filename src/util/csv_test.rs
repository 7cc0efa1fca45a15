use super::*;

#[test]
fn header_line_is_unquoted_and_semicolon_separated() {
    let csv = build_csv(&["ID", "Linka", "Stav"], &[]);
    assert_eq!(csv, "ID;Linka;Stav");
}

#[test]
fn data_fields_are_quoted() {
    let rows = vec![vec!["1".to_owned(), "Linka 3".to_owned(), "Otevřené".to_owned()]];
    let csv = build_csv(&["ID", "Linka", "Stav"], &rows);
    assert_eq!(csv, "ID;Linka;Stav\n\"1\";\"Linka 3\";\"Otevřené\"");
}

#[test]
fn embedded_quotes_are_doubled() {
    let rows = vec![vec!["popis s \"uvozovkami\"".to_owned()]];
    let csv = build_csv(&["Popis"], &rows);
    assert_eq!(csv, "Popis\n\"popis s \"\"uvozovkami\"\"\"");
}

#[test]
fn empty_fields_stay_as_empty_quoted_cells() {
    let rows = vec![vec![String::new(), "x".to_owned()]];
    let csv = build_csv(&["A", "B"], &rows);
    assert_eq!(csv, "A;B\n\"\";\"x\"");
}

#[test]
fn bom_is_the_utf8_byte_order_mark() {
    assert_eq!(BOM.as_bytes(), [0xEF, 0xBB, 0xBF]);
}
