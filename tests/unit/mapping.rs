//! Tests for slice, complement and union.

use std::collections::{BTreeMap, HashMap};

use dictkit::{complement, slice, slice_or, slice_strict, union, Error, SliceOptions};

use super::common::{assert_keys, map, ordered, xyz};

// ============================================================================
// SLICE
// ============================================================================

#[test]
fn test_slice_present_keys() {
    let out: HashMap<_, _> = slice(&xyz(), ["x", "y"], &SliceOptions::new()).unwrap();
    assert_keys(&out, &["x", "y"]);
    assert_eq!(out["x"], Some(1));
    assert_eq!(out["y"], Some(2));
}

#[test]
fn test_slice_missing_key_gets_none() {
    let source = map(&[("y", 2), ("z", 3)]);
    let out: HashMap<_, _> = slice(&source, ["x", "y"], &SliceOptions::new()).unwrap();
    assert_eq!(out, map(&[("x", None), ("y", Some(2))]));
}

#[test]
fn test_slice_missing_key_gets_default() {
    let source = map(&[("y", "2"), ("z", "3")]);
    let opts = SliceOptions::new().with_default("donut hole");
    let out: HashMap<_, _> = slice(&source, ["x", "y"], &opts).unwrap();
    assert_eq!(out, map(&[("x", Some("donut hole")), ("y", Some("2"))]));
}

#[test]
fn test_slice_strict_missing_key() {
    let source = map(&[("y", 2), ("z", 3)]);
    let result: Result<HashMap<_, _>, _> = slice(&source, ["x", "y"], &SliceOptions::new().strict());
    match result {
        Err(Error::KeyNotFound { key }) => assert_eq!(key, "\"x\""),
        other => panic!("expected KeyNotFound, got {:?}", other),
    }
}

#[test]
fn test_slice_strict_all_present() {
    let out: HashMap<_, _> = slice(&xyz(), ["z", "x"], &SliceOptions::new().strict()).unwrap();
    assert_eq!(out, map(&[("x", Some(1)), ("z", Some(3))]));
}

#[test]
fn test_slice_empty_keys() {
    let out: HashMap<&str, Option<i32>> = slice(&xyz(), [], &SliceOptions::new()).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_slice_btree_into_hash() {
    let source = ordered(&[(1u32, 'a'), (2, 'b'), (3, 'c')]);
    let out: HashMap<_, _> = slice_or(&source, [3, 4], '?');
    assert_eq!(out, map(&[(3, 'c'), (4, '?')]));
}

#[test]
fn test_slice_strict_plain_values() {
    let out: BTreeMap<_, _> = slice_strict(&xyz(), ["y"]).unwrap();
    assert_eq!(out, ordered(&[("y", 2)]));
}

#[test]
fn test_slice_does_not_touch_input() {
    let source = xyz();
    let first: HashMap<_, _> = slice(&source, ["x", "q"], &SliceOptions::new()).unwrap();
    let second: HashMap<_, _> = slice(&source, ["x", "q"], &SliceOptions::new()).unwrap();
    assert_eq!(first, second);
    assert_eq!(source, xyz());
}

#[test]
fn test_slice_owned_string_keys() {
    let source: HashMap<String, usize> = [("alpha".to_string(), 1), ("beta".to_string(), 2)]
        .into_iter()
        .collect();
    let out: HashMap<_, _> = slice_or(&source, ["beta".to_string(), "gamma".to_string()], 0);
    assert_eq!(out.get("beta"), Some(&2));
    assert_eq!(out.get("gamma"), Some(&0));
}

// ============================================================================
// COMPLEMENT
// ============================================================================

#[test]
fn test_complement_basic() {
    let source = map(&[("x", 1), ("y", 2), ("z", 3), ("z1", 4)]);
    let out: HashMap<_, _> = complement(&source, ["x", "y"]);
    assert_eq!(out, map(&[("z", 3), ("z1", 4)]));
}

#[test]
fn test_complement_empty_map() {
    let source: HashMap<&str, i32> = HashMap::new();
    let out: HashMap<_, _> = complement(&source, ["x", "y"]);
    assert!(out.is_empty());
}

#[test]
fn test_complement_unknown_keys_ignored() {
    let out: HashMap<_, _> = complement(&xyz(), ["nope", "also nope"]);
    assert_eq!(out, xyz());
}

#[test]
fn test_complement_everything() {
    let out: BTreeMap<_, _> = complement(&xyz(), ["x", "y", "z"]);
    assert!(out.is_empty());
}

// ============================================================================
// UNION
// ============================================================================

#[test]
fn test_union_second_wins() {
    let merged: HashMap<_, _> = union(&map(&[("x", 1), ("y", 2)]), &map(&[("x", 9)]), false).unwrap();
    assert_eq!(merged, map(&[("x", 9), ("y", 2)]));
}

#[test]
fn test_union_disjoint() {
    let a = map(&[("x", "temp"), ("y", "foo")]);
    let b = map(&[("z", "bar")]);
    let merged: HashMap<_, _> = union(&a, &b, false).unwrap();
    assert_eq!(merged, map(&[("x", "temp"), ("y", "foo"), ("z", "bar")]));
}

#[test]
fn test_union_strict_collision() {
    let a = map(&[("x", "temp"), ("y", "foo")]);
    let b = map(&[("x", "not temp")]);
    let result: Result<HashMap<_, _>, _> = union(&a, &b, true);
    assert!(matches!(result, Err(Error::KeyCollision { ref keys }) if keys.len() == 1));
}

#[test]
fn test_union_strict_lists_all_collisions() {
    let a = ordered(&[(1, ()), (2, ()), (3, ())]);
    let b = ordered(&[(3, ()), (1, ()), (7, ())]);
    let err = union::<_, _, _, _, BTreeMap<_, _>>(&a, &b, true).unwrap_err();
    assert_eq!(err.to_string(), "keys present in both maps: 1, 3");
}

#[test]
fn test_union_strict_disjoint() {
    let a = map(&[("x", 1)]);
    let b = map(&[("y", 2)]);
    let merged: HashMap<_, _> = union(&a, &b, true).unwrap();
    assert_eq!(merged, map(&[("x", 1), ("y", 2)]));
}

#[test]
fn test_union_with_empty() {
    let empty: HashMap<&str, i32> = HashMap::new();
    let left: HashMap<_, _> = union(&empty, &xyz(), true).unwrap();
    let right: HashMap<_, _> = union(&xyz(), &empty, true).unwrap();
    assert_eq!(left, xyz());
    assert_eq!(right, xyz());
}
