//! Channel container and tuplization tests

mod test_data_gen;

use pipechan_core::{tuplize, Cell, Channel, Error, Row};
use test_data_gen::grid;

#[test]
fn test_new_channel_is_empty() {
    let chan = Channel::new();
    assert_eq!(chan.width(), 0);
    assert_eq!(chan.length(), 0);
    assert!(chan.is_empty());
}

#[test]
fn test_tuplize_atomic_and_tuple() {
    assert_eq!(tuplize("a"), Row::new(vec![Cell::from("a")]));
    assert_eq!(tuplize(7), Row::new(vec![Cell::Int(7)]));
    assert_eq!(
        tuplize(("a", 1, true)),
        Row::new(vec![Cell::from("a"), Cell::Int(1), Cell::Bool(true)])
    );
}

#[test]
fn test_tuplize_vec_is_one_cell() {
    let row = tuplize(vec![1, 2, 3]);
    assert_eq!(row.len(), 1);
    assert_eq!(
        row[0],
        Cell::List(vec![Cell::Int(1), Cell::Int(2), Cell::Int(3)])
    );
}

#[test]
fn test_tuplize_row_is_identity() {
    let row = Row::new(vec![Cell::from("x"), Cell::Int(2)]);
    assert_eq!(tuplize(row.clone()), row);
}

#[test]
fn test_create_from_tuples() {
    let chan = Channel::create([(1, "a"), (2, "b"), (3, "c")]).unwrap();
    assert_eq!(chan.width(), 2);
    assert_eq!(chan.length(), 3);
    assert_eq!(chan[1][1], Cell::from("b"));
}

#[test]
fn test_create_from_atomic_values() {
    let chan = Channel::create(["a", "b"]).unwrap();
    assert_eq!(chan.width(), 1);
    assert_eq!(chan.to_list().unwrap(), vec![Cell::from("a"), Cell::from("b")]);
}

#[test]
fn test_create_rejects_mixed_widths() {
    let rows = vec![
        Row::new(vec![Cell::Int(1), Cell::Int(2)]),
        Row::new(vec![Cell::Int(3)]),
    ];
    let err = Channel::create(rows).unwrap_err();
    assert!(matches!(err, Error::WidthMismatch { row: 1, width: 2 }));
}

#[test]
fn test_create_empty() {
    let chan = Channel::create(Vec::<Row>::new()).unwrap();
    assert!(chan.is_empty());
    assert_eq!(chan.width(), 0);
}

#[test]
fn test_push_row_checks_width() {
    let mut chan = grid(2, 3);
    let err = chan
        .push_row(Row::new(vec![Cell::Int(1)]))
        .unwrap_err();
    assert!(matches!(err, Error::WidthMismatch { row: 1, width: 3 }));
    assert_eq!(chan, grid(2, 3));
}

#[test]
fn test_to_list_requires_width_one() {
    let err = grid(2, 2).to_list().unwrap_err();
    assert!(matches!(err, Error::InvalidWidth { width: 2 }));
}

#[test]
fn test_clear_resets_width() {
    let mut chan = grid(3, 4);
    chan.clear();
    assert_eq!(chan.width(), 0);
    assert_eq!(chan.length(), 0);
}

#[test]
fn test_display_is_tab_separated() {
    let chan = Channel::create([("a", 1), ("b", 2)]).unwrap();
    assert_eq!(chan.to_string(), "a\t1\nb\t2\n");
}

#[test]
fn test_cell_display() {
    assert_eq!(Cell::Null.to_string(), "");
    assert_eq!(Cell::Float(1.5).to_string(), "1.5");
    assert_eq!(
        Cell::from(vec!["a", "b"]).to_string(),
        "[a, b]"
    );
    assert_eq!(Cell::from(None::<i64>), Cell::Null);
}

#[test]
fn test_serde_json_shape() {
    let chan = Channel::create([("a", 1)]).unwrap();
    let json = serde_json::to_string(&chan).unwrap();
    assert_eq!(json, r#"[["a",1]]"#);
    let back: Channel = serde_json::from_str(&json).unwrap();
    assert_eq!(back, chan);
}

#[test]
fn test_digest_tracks_content() {
    let a = Channel::create([("a", 1)]).unwrap();
    let b = Channel::create([("a", 1)]).unwrap();
    let c = Channel::create([("a", 2)]).unwrap();
    assert_eq!(a.digest().unwrap(), b.digest().unwrap());
    assert_ne!(a.digest().unwrap(), c.digest().unwrap());
    assert_eq!(a.digest().unwrap().to_string().len(), 64);
}

#[test]
fn test_deserialize_rejects_ragged_rows() {
    let err = serde_json::from_str::<Channel>("[[1,2],[3]]").unwrap_err();
    assert!(err.to_string().contains("width is different"));

    let chan: Channel = serde_json::from_str("[[1,2],[3,4]]").unwrap();
    assert_eq!(chan.col_at(1), Channel::create([2, 4]).unwrap());
}
