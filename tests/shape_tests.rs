//! slice / col_at / fold / unfold / collapse tests

mod test_data_gen;

use pipechan_core::path::{common_prefix, dirname};
use pipechan_core::{Cell, Channel, Error};
use test_data_gen::{as_strings, grid};

#[test]
fn test_slice_basic() {
    let chan = grid(2, 4);
    let sliced = chan.slice(1, Some(2));
    assert_eq!(
        as_strings(&sliced),
        vec![vec!["r0c1", "r0c2"], vec!["r1c1", "r1c2"]]
    );
    assert_eq!(chan.width(), 4);
}

#[test]
fn test_slice_to_end_and_clamped() {
    let chan = grid(1, 4);
    assert_eq!(chan.slice(2, None).width(), 2);
    assert_eq!(chan.slice(2, Some(10)).width(), 2);
}

#[test]
fn test_slice_negative_start() {
    let chan = grid(2, 3);
    assert_eq!(chan.slice(-1, Some(1)), chan.col_at(2));
    assert_eq!(chan.slice(-2, None), chan.slice(1, None));
}

#[test]
fn test_slice_out_of_range_is_empty() {
    let chan = grid(2, 3);
    assert!(chan.slice(3, None).is_empty());
    assert!(chan.slice(-4, Some(1)).is_empty());
    assert!(chan.slice(0, Some(0)).is_empty());
    assert!(Channel::new().slice(0, None).is_empty());
}

#[test]
fn test_col_at() {
    let chan = Channel::create([("a", 1), ("b", 2)]).unwrap();
    assert_eq!(chan.col_at(1), Channel::create([1, 2]).unwrap());
}

#[test]
fn test_fold() {
    let chan = Channel::create([("a1", "a2", "a3", "a4"), ("b1", "b2", "b3", "b4")]).unwrap();
    let folded = chan.fold(2).unwrap();
    assert_eq!(
        folded,
        Channel::create([("a1", "a2"), ("a3", "a4"), ("b1", "b2"), ("b3", "b4")]).unwrap()
    );
}

#[test]
fn test_fold_not_divisible() {
    let err = grid(2, 3).fold(2).unwrap_err();
    assert!(matches!(
        err,
        Error::NotDivisible { op: "fold", what: "width", size: 3, factor: 2 }
    ));
    assert!(grid(2, 3).fold(0).is_err());
}

#[test]
fn test_unfold() {
    let chan = Channel::create([1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(
        chan.unfold(3).unwrap(),
        Channel::create([(1, 2, 3), (4, 5, 6)]).unwrap()
    );
}

#[test]
fn test_unfold_not_divisible() {
    let err = grid(5, 1).unfold(2).unwrap_err();
    assert!(matches!(
        err,
        Error::NotDivisible { op: "unfold", what: "length", size: 5, factor: 2 }
    ));
}

#[test]
fn test_fold_unfold_round_trip() {
    let square = grid(3, 4);
    assert_eq!(square.fold(2).unwrap().unfold(2).unwrap(), square);

    let wide = grid(2, 6);
    assert_eq!(wide.fold(2).unwrap().unfold(3).unwrap(), wide);

    let tall = grid(6, 2);
    assert_eq!(tall.unfold(3).unwrap().fold(2).unwrap(), tall);
}

#[test]
fn test_fold_empty_channel() {
    assert!(Channel::new().fold(3).unwrap().is_empty());
    assert!(Channel::new().unfold(3).unwrap().is_empty());
}

#[test]
fn test_dirname() {
    assert_eq!(dirname("/a/b/c"), "/a/b");
    assert_eq!(dirname("/a/b/"), "/a/b");
    assert_eq!(dirname("a"), "");
    assert_eq!(dirname("/"), "/");
    assert_eq!(dirname("/x"), "/");
}

#[test]
fn test_common_prefix() {
    assert_eq!(common_prefix(&["/a/b/x1", "/a/b/x2"]), "/a/b/x");
    assert_eq!(common_prefix(&["/a/b", "/c"]), "/");
    assert_eq!(common_prefix::<&str>(&[]), "");
}

#[test]
fn test_collapse_many_rows() {
    let chan = Channel::create([("/data/run/s1.fq", 1), ("/data/run/s2.fq", 1)]).unwrap();
    let collapsed = chan.collapse(0).unwrap();
    assert_eq!(collapsed, Channel::create([("/data/run", 1)]).unwrap());
    assert_eq!(chan.length(), 2);
}

#[test]
fn test_collapse_single_row() {
    let chan = Channel::create([("x", "/data/run/s1.fq")]).unwrap();
    let collapsed = chan.collapse(1).unwrap();
    assert_eq!(collapsed[0][1], Cell::from("/data/run"));
}

#[test]
fn test_collapse_errors() {
    assert!(matches!(
        Channel::new().collapse(0).unwrap_err(),
        Error::EmptyChannel("collapse")
    ));
    assert!(matches!(
        grid(2, 2).collapse(2).unwrap_err(),
        Error::ColumnOutOfRange { index: 2, width: 2 }
    ));
}
