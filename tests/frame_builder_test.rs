mod common;

use common::{first_table, fragment};
use html_table_frame::{CellTransform, FrameOptions, Index, Label, TableError, html_table_to_frame};

const SIMPLE: &str = "<table>\
    <tr><th>H1</th><th>H2</th></tr>\
    <tr><td>a</td><td>1</td></tr>\
    <tr><td>b</td><td>2</td></tr>\
</table>";

#[test]
fn test_default_options_keep_every_row() {
    let doc = fragment(SIMPLE);
    let df = html_table_to_frame(&first_table(&doc), &FrameOptions::default()).unwrap();
    assert_eq!(df.shape(), (3, 2));
    assert_eq!(df.get(0, &Label::Position(0)), Some("H1"));
    assert!(df.index().is_positional());
}

#[test]
fn test_header_row_becomes_column_labels() {
    let doc = fragment(SIMPLE);
    let options = FrameOptions::builder().column_label_rows([0]).build().unwrap();
    let df = html_table_to_frame(&first_table(&doc), &options).unwrap();
    assert_eq!(df.columns(), &[Label::name("H1"), Label::name("H2")]);
    assert_eq!(df.shape(), (2, 2));
    assert_eq!(df.column(&Label::name("H2")).unwrap(), vec![Some("1"), Some("2")]);
}

#[test]
fn test_header_row_and_row_labels() {
    let doc = fragment(SIMPLE);
    let options = FrameOptions::builder()
        .column_label_rows([0])
        .row_labels([0])
        .build()
        .unwrap();
    let df = html_table_to_frame(&first_table(&doc), &options).unwrap();
    assert_eq!(df.columns(), &[Label::name("H2")]);
    assert_eq!(
        df.index(),
        &Index::Labels {
            name: Label::name("H1"),
            values: vec!["a".to_string(), "b".to_string()],
        }
    );
    assert_eq!(df.index().position(&["b"]), Some(1));
}

#[test]
fn test_row_labels_without_header_use_positions() {
    let doc = fragment(SIMPLE);
    let options = FrameOptions::builder().row_labels([1]).build().unwrap();
    let df = html_table_to_frame(&first_table(&doc), &options).unwrap();
    assert_eq!(df.columns(), &[Label::Position(0)]);
    assert_eq!(df.index().names(), vec![Label::Position(1)]);
    assert_eq!(df.index().key(0), Some(vec!["H2".to_string()]));
}

#[test]
fn test_multi_level_header_and_index() {
    let doc = fragment(
        "<table>\
           <tr><th>Year</th><th>Quarter</th><th>Sales</th><th>Sales</th></tr>\
           <tr><th></th><th></th><th>EU</th><th>US</th></tr>\
           <tr><td>2024</td><td>Q1</td><td>5</td><td>7</td></tr>\
           <tr><td>2024</td><td>Q2</td><td>6</td><td>8</td></tr>\
         </table>",
    );
    let options = FrameOptions::builder()
        .column_label_rows([0, 1])
        .row_labels([0, 1])
        .build()
        .unwrap();
    let df = html_table_to_frame(&first_table(&doc), &options).unwrap();
    assert_eq!(
        df.columns(),
        &[Label::tuple(["Sales", "EU"]), Label::tuple(["Sales", "US"])]
    );
    assert_eq!(df.index().depth(), 2);
    assert_eq!(
        df.index().names(),
        vec![Label::tuple(["Year", ""]), Label::tuple(["Quarter", ""])]
    );
    assert_eq!(df.index().position(&["2024", "Q2"]), Some(1));
    assert_eq!(df.get(1, &Label::tuple(["Sales", "US"])), Some("8"));
}

#[test]
fn test_thead_tbody_table_with_transform() {
    let doc = fragment(
        "<table>\
           <thead><tr><th> Name </th><th> Score </th></tr></thead>\
           <tbody><tr><td>\n Ann \n</td><td> 9 </td></tr></tbody>\
         </table>",
    );
    let options = FrameOptions::builder()
        .column_label_rows([0])
        .transform(CellTransform::normalize_whitespace())
        .build()
        .unwrap();
    let df = html_table_to_frame(&first_table(&doc), &options).unwrap();
    assert_eq!(df.columns(), &[Label::name("Name"), Label::name("Score")]);
    assert_eq!(df.get(0, &Label::name("Name")), Some("Ann"));
}

#[test]
fn test_empty_table_gives_empty_frame() {
    let doc = fragment("<table></table>");
    let df = html_table_to_frame(&first_table(&doc), &FrameOptions::default()).unwrap();
    assert_eq!(df.n_rows(), 0);
    assert!(df.is_empty());
}

#[test]
fn test_short_row_surfaces_construction_error() {
    let doc = fragment(
        "<table>\
           <tr><th>A</th><th>B</th><th>C</th></tr>\
           <tr><td>1</td><td>2</td><td>3</td></tr>\
           <tr><td>4</td><td>5</td></tr>\
         </table>",
    );
    let options = FrameOptions::builder().column_label_rows([0]).build().unwrap();
    let err = html_table_to_frame(&first_table(&doc), &options).unwrap_err();
    assert!(err.is_construction());
    assert!(matches!(
        err,
        TableError::LengthMismatch {
            row: 1,
            expected: 3,
            found: 2
        }
    ));
}

#[test]
fn test_ragged_rows_without_header_are_padded() {
    let doc = fragment("<table><tr><td>1</td><td>2</td></tr><tr><td>3</td></tr></table>");
    let df = html_table_to_frame(&first_table(&doc), &FrameOptions::default()).unwrap();
    assert_eq!(df.shape(), (2, 2));
    assert_eq!(df.get(1, &Label::Position(1)), None);
}

#[test]
fn test_header_row_past_end_fails() {
    let doc = fragment("<table><tr><td>1</td></tr></table>");
    let options = FrameOptions::builder().column_label_rows([3]).build().unwrap();
    let err = html_table_to_frame(&first_table(&doc), &options).unwrap_err();
    assert!(matches!(err, TableError::HeaderRowOutOfRange { index: 3, rows: 1 }));
}

#[test]
fn test_duplicate_header_label_rejected_as_index() {
    let doc = fragment(
        "<table><tr><th>x</th><th>x</th></tr><tr><td>1</td><td>2</td></tr></table>",
    );
    let options = FrameOptions::builder()
        .column_label_rows([0])
        .row_labels([1])
        .build()
        .unwrap();
    let err = html_table_to_frame(&first_table(&doc), &options).unwrap_err();
    assert!(matches!(err, TableError::DuplicateColumn(_)));
}

#[test]
fn test_spanned_header_with_expansion() {
    let doc = fragment(
        r#"<table>
            <tr><th rowspan="2">Region</th><th colspan="2">Sales</th></tr>
            <tr><th>Q1</th><th>Q2</th></tr>
            <tr><td>North</td><td>10</td><td>12</td></tr>
        </table>"#,
    );
    let options = FrameOptions::builder()
        .expand_spans(true)
        .column_label_rows([0, 1])
        .row_labels([0])
        .build()
        .unwrap();
    let df = html_table_to_frame(&first_table(&doc), &options).unwrap();
    assert_eq!(
        df.columns(),
        &[Label::tuple(["Sales", "Q1"]), Label::tuple(["Sales", "Q2"])]
    );
    assert_eq!(df.index().key(0), Some(vec!["North".to_string()]));
}

#[test]
fn test_frame_json_and_display() {
    let doc = fragment(SIMPLE);
    let options = FrameOptions::builder()
        .column_label_rows([0])
        .row_labels([0])
        .build()
        .unwrap();
    let df = html_table_to_frame(&first_table(&doc), &options).unwrap();
    let json: serde_json::Value = serde_json::from_str(&df.to_json().unwrap()).unwrap();
    assert_eq!(json["columns"], serde_json::json!(["H2"]));
    assert_eq!(json["index"]["values"], serde_json::json!(["a", "b"]));
    assert_eq!(df.to_string(), "H1  H2\na   1\nb   2\n");
}

#[test]
fn test_nested_table_rows_join_outer_grid() {
    let doc = fragment(
        "<table><tr><td>a<table><tr><td>x</td><td>y</td></tr></table></td></tr></table>",
    );
    let df = html_table_to_frame(&first_table(&doc), &FrameOptions::default()).unwrap();
    assert_eq!(df.shape(), (2, 3));
    let rows: Vec<Vec<Option<&str>>> = df
        .rows()
        .iter()
        .map(|row| row.iter().map(Option::as_deref).collect())
        .collect();
    assert_eq!(
        rows,
        vec![
            vec![Some("axy"), Some("x"), Some("y")],
            vec![Some("x"), Some("y"), None],
        ]
    );
}

#[test]
fn test_transform_failure_reaches_frame_caller() {
    let doc = fragment(SIMPLE);
    let options = FrameOptions::builder()
        .transform(CellTransform::new(|text| {
            anyhow::ensure!(text != "b", "rejected cell {text:?}");
            Ok(text.to_string())
        }))
        .column_label_rows([0])
        .build()
        .unwrap();
    let err = html_table_to_frame(&first_table(&doc), &options).unwrap_err();
    assert!(err.is_transform());
    assert!(matches!(err, TableError::Transform { row: 2, column: 0, .. }));
    let source = std::error::Error::source(&err).expect("transform error is kept as source");
    assert!(source.to_string().contains("rejected cell"));
}

#[test]
fn test_long_table_without_spans_keeps_every_row() {
    let html = format!("<table>{}</table>", "<tr><td>x</td></tr>".repeat(1500));
    let doc = fragment(&html);
    let df = html_table_to_frame(&first_table(&doc), &FrameOptions::default()).unwrap();
    assert_eq!(df.shape(), (1500, 1));
}

#[test]
fn test_long_table_with_spans_is_rejected() {
    let html = format!("<table>{}</table>", "<tr><td>x</td></tr>".repeat(1500));
    let doc = fragment(&html);
    let options = FrameOptions::builder().expand_spans(true).build().unwrap();
    let err = html_table_to_frame(&first_table(&doc), &options).unwrap_err();
    assert!(matches!(err, TableError::TableTooLarge(ref msg) if msg.contains("1500 rows")));
    assert!(!err.is_transform());
}

#[test]
fn test_span_cell_limit_is_rejected() {
    // 500 row pairs, each covering 299 slots once overlapping spans are counted
    let pair = r#"<tr><td>a</td><td colspan="99" rowspan="2">b</td></tr><tr><td colspan="100">c</td></tr>"#;
    let html = format!("<table>{}</table>", pair.repeat(500));
    let doc = fragment(&html);
    let options = FrameOptions::builder().expand_spans(true).build().unwrap();
    let err = html_table_to_frame(&first_table(&doc), &options).unwrap_err();
    assert!(matches!(err, TableError::TableTooLarge(ref msg) if msg.contains("cells")));
}
