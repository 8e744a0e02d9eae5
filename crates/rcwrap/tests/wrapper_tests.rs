//! Behaviour of the individual wrapper types

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use rcwrap::*;

// ═══════════════════════════════════════════════════════════════════
// Text
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_text_shared_until_edited() {
    let a = Text::from("base");
    let mut b = a.clone();
    assert_eq!(a.share_count(), 2);

    b.push('!');
    assert_eq!(a, "base");
    assert_eq!(b, "base!");
    assert_eq!(a.state(), CowState::ImmutableShared);
    assert_eq!(b.state(), CowState::MutableOwned);
}

#[test]
fn test_text_as_dictionary_key() {
    let mut d = Dictionary::new();
    d.set(Text::from("key"), 1);
    assert_eq!(d.get("key").and_then(Object::as_i64), Some(1));
}

// ═══════════════════════════════════════════════════════════════════
// Data
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_data_in_containers() {
    let mut a = Array::new();
    a.append(vec![0xde_u8, 0xad]);
    assert_eq!(a.at(0).and_then(Object::as_bytes), Some(&[0xde_u8, 0xad][..]));
}

// ═══════════════════════════════════════════════════════════════════
// Set
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_set_members_are_distinct_across_number_representations() {
    let mut s = Set::new();
    assert!(s.add(1));
    assert!(!s.add(1.0));
    assert!(s.contains(1));
    assert_eq!(s.count(), 1);
}

#[test]
fn test_set_equality_ignores_order() {
    let a: Set = vec![Object::string("x"), Object::string("y")].into_iter().collect();
    let b: Set = vec![Object::string("y"), Object::string("x")].into_iter().collect();
    assert_eq!(a, b);
}

// ═══════════════════════════════════════════════════════════════════
// Number and Boolean
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_numbers_hash_consistently_with_equality() {
    let mut seen = HashSet::new();
    seen.insert(Object::integer(2));
    assert!(seen.contains(&Object::real(2.0)));
    assert!(!seen.contains(&Object::real(2.5)));
}

#[test]
fn test_booleans_share_singletons() {
    let flags: Vec<Boolean> = (0..4).map(|_| Boolean::new(true)).collect();
    assert!(flags[0].share_count() >= 4);
    assert!(flags.iter().all(|flag| flag.value()));
    assert!(!Boolean::default().value());
}

// ═══════════════════════════════════════════════════════════════════
// Pair and Stack
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_pair_of_containers() {
    let mut list = Array::new();
    list.append(1);
    let pair = Pair::new(Text::from("items"), list.clone());
    assert_eq!(list.share_count(), 2);
    assert_eq!(pair.second().count(), 1);
    assert_eq!(pair.to_string(), "<\"items\", [1]>");

    let mut set = HashSet::new();
    set.insert(pair.clone());
    assert!(set.contains(&pair));
}

#[test]
fn test_stack_copy_on_pop() {
    let mut a = Stack::new();
    a.push("bottom");
    a.push("top");
    let mut b = a.clone();

    let top = b.pop().unwrap();
    assert_eq!(top.as_str(), Some("top"));
    assert_eq!(a.count(), 2);
    assert_eq!(b.count(), 1);
    assert_eq!(a.join(" "), "bottom top");
}

#[test]
fn test_stack_clear_and_empty_errors() {
    let mut s = Stack::with_capacity(4);
    s.push(1);
    s.clear();
    assert!(s.is_empty());
    assert!(matches!(s.pop(), Err(RcWrapError::OutOfRange { .. })));
}

// ═══════════════════════════════════════════════════════════════════
// Object
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_object_round_trips_through_try_from() {
    let text = Text::try_from(Object::string("s")).unwrap();
    assert_eq!(text, "s");

    let err = Number::try_from(Object::string("s")).unwrap_err();
    assert_eq!(err.to_string(), "Type error: expected number, got string");
}

#[test]
fn test_object_debug_rendering() {
    let mut d = Dictionary::new();
    d.set("n", 1);
    let mut a = Array::new();
    a.append(d);
    a.append(Set::new());
    assert_eq!(format!("{:?}", a), r#"[{"n": 1}, set{}]"#);
}

#[test]
fn test_container_hashes_follow_contents() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    let one: Array = vec![Object::integer(1)].into();
    let two: Array = vec![Object::integer(2)].into();
    assert_ne!(hash_of(&one), hash_of(&two));
    assert_eq!(hash_of(&Array::null()), hash_of(&Array::new()));

    let mut forward = Dictionary::new();
    forward.set("x", 1);
    forward.set("y", 2);
    let mut backward = Dictionary::new();
    backward.set("y", 2);
    backward.set("x", 1);
    let mut other = Dictionary::new();
    other.set("x", 2);
    other.set("y", 1);
    assert_eq!(hash_of(&forward), hash_of(&backward));
    assert_ne!(hash_of(&forward), hash_of(&other));

    let a: Set = vec![Object::string("p"), Object::string("q")].into_iter().collect();
    let b: Set = vec![Object::string("q"), Object::string("p")].into_iter().collect();
    assert_eq!(hash_of(&a), hash_of(&b));

    let mut members = Set::new();
    members.add(one.clone());
    members.add(two);
    assert_eq!(members.count(), 2);
    assert!(members.contains(one));
}

// ═══════════════════════════════════════════════════════════════════
// Url
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_url_path_building() {
    let root = Url::from_path("/var/log");
    let mut file = root.join("app");
    file.push("current.log");

    assert_eq!(file.file_system_representation(), "/var/log/app/current.log");
    assert_eq!(file.last_path_component(), "current.log");
    assert_eq!(root.last_path_component(), "log");
    assert_eq!(root.kind(), Kind::Url);
}
