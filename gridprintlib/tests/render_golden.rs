//! Byte-exact rendering checks against the files in `tests/golden/`.

use gridprintlib::{visual_length, ColumnSpec, GridError, Table, TableRenderer};

fn render(table: &Table) -> String {
    TableRenderer::plain().render(table).unwrap()
}

fn basic_table() -> Table {
    let mut table =
        Table::from_names(["Employee Number", "Name", "Type", "Phone Number"]).unwrap();
    table
        .add_row(["23", "Noel", "Human", "(123) 456-7899"])
        .unwrap();
    table
        .add_row(["83", "David", "Cyborg", "987-654-3211"])
        .unwrap();
    table
        .add_row(["52", "Pranava", "Crusher", "1-800-123-4567"])
        .unwrap();
    table
        .add_row(["1182", "Postnava", "Kitten", "1 (800) 987-6543"])
        .unwrap();
    table
}

#[test]
fn test_basic_table() {
    assert_eq!(
        render(&basic_table()),
        include_str!("golden/basic_table.txt")
    );
}

#[test]
fn test_basic_table_with_header() {
    let mut table = basic_table();
    table.set_header("Employees");
    assert_eq!(
        render(&table),
        include_str!("golden/basic_table_with_header.txt")
    );
}

#[test]
fn test_basic_table_with_row_count() {
    let mut table = basic_table();
    table.show_row_count(true);
    assert_eq!(
        render(&table),
        include_str!("golden/basic_table_with_row_count.txt")
    );
}

#[test]
fn test_table_with_single_column() {
    let mut table = Table::from_names(["Only Column"]).unwrap();
    for cell in ["Some stuff", "More stuff", "hello", "bye", "hi"] {
        table.add_row([cell]).unwrap();
    }
    assert_eq!(
        render(&table),
        include_str!("golden/table_with_single_column.txt")
    );
}

#[test]
fn test_table_with_long_header() {
    // Banner wider than the whole table
    let table = basic_table()
        .with_header("This is a really really really really really pretty long header");
    assert_eq!(
        render(&table),
        include_str!("golden/table_with_long_header.txt")
    );
}

#[test]
fn test_table_with_slightly_long_header() {
    // Banner rule exactly as wide as the table border
    let table =
        basic_table().with_header("This is a really really really really slightly big header");
    assert_eq!(
        render(&table),
        include_str!("golden/table_with_slightly_long_header.txt")
    );
}

#[test]
fn test_table_with_special_characters() {
    let mut table = Table::from_names(["Name", "Chars"]).unwrap();
    table
        .add_row(["no special chars", "just some written stuff"])
        .unwrap();
    table
        .add_row([
            "couple special",
            "Funda\u{0324}\u{0323}o Municipal de Tecnologia da Informa\u{0324}\u{0323}o e Comunica\u{0324}\u{0323}o",
        ])
        .unwrap();
    table
        .add_row(["just 1", "this one a\u{0324}\u{0323}"])
        .unwrap();

    assert_eq!(
        render(&table),
        include_str!("golden/table_with_special_chars.txt")
    );
}

#[test]
fn test_column_limit_with_special_characters() {
    let mut table = Table::new([
        ColumnSpec::new("Name"),
        ColumnSpec::with_max_width("Chars", 10).unwrap(),
    ])
    .unwrap();

    table.add_row(["no special chars", "no special chars"]).unwrap();
    // Mark right on the truncation border
    table
        .add_row(["special char right on border", "01234a\u{0323}56789"])
        .unwrap();
    // Two marks on one base character at the border
    table
        .add_row(["3-len char on border", "0123o\u{0324}\u{0323}456789"])
        .unwrap();
    let clusters = "o\u{0324}\u{0323}".repeat(15);
    table.add_row(["all 3-lens", clusters.as_str()]).unwrap();

    assert_eq!(
        render(&table),
        include_str!("golden/table_with_column_limit_and_special_chars.txt")
    );
}

#[test]
fn test_basic_column_length_limit() {
    let mut table = Table::new([
        ColumnSpec::new("Name"),
        ColumnSpec::with_max_width("Words", 10).unwrap(),
    ])
    .unwrap();
    table.add_row(["A", "Short"]).unwrap();
    table.add_row(["B", "short one"]).unwrap();
    table.add_row(["C", "exactly 10"]).unwrap();
    table.add_row(["D", "one too big"]).unwrap();
    table.add_row(["E", "this one is way too long"]).unwrap();

    assert_eq!(
        render(&table),
        include_str!("golden/table_with_column_limit.txt")
    );
}

#[test]
fn test_long_column_name_rejected() {
    let result = ColumnSpec::with_max_width("A Very Long Description", 10)
        .and_then(|limited| Table::new([ColumnSpec::new("Name"), limited]));
    let err = result.unwrap_err();
    assert!(err.is_config());
}

#[test]
fn test_table_without_columns_rejected() {
    let err = Table::from_names(Vec::<String>::new()).unwrap_err();
    assert!(matches!(err, GridError::NoColumns));
}

#[test]
fn test_unlimited_column_widths_round_trip() {
    let table = basic_table();
    let out = render(&table);
    let header_line = out.lines().nth(1).unwrap();

    // Cells sit between '|' separators with one space of margin each side
    let measured: Vec<usize> = header_line
        .trim_matches('|')
        .split('|')
        .map(|cell| visual_length(cell) - 2)
        .collect();

    let expected: Vec<usize> = table
        .columns()
        .iter()
        .enumerate()
        .map(|(i, column)| {
            table
                .rows()
                .iter()
                .map(|row| visual_length(&row[i]))
                .fold(visual_length(column.name()), usize::max)
        })
        .collect();

    assert_eq!(measured, expected);
}

#[test]
fn test_rows_frame_has_constant_width() {
    let out = render(&basic_table().with_header("Employees").with_row_count(true));
    let lines: Vec<&str> = out.lines().collect();

    // banner (2) + border, names, border, rows, border + count
    assert_eq!(lines.len(), 2 + 4 + 4 + 1);
    let border = lines[2];
    assert_eq!(lines[4], border);
    assert_eq!(lines[9], border);
    for line in &lines[2..10] {
        assert_eq!(visual_length(line), border.len());
    }
    assert_eq!(lines[10], "Count: 4");
}
