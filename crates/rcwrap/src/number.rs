//! Number wrapper: an immutable integer or real

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::cow::{CowHandle, Wrapper};
use crate::runtime::{Kind, Resource};

/// Stored representation of a number.
#[derive(Debug, Clone, Copy)]
pub enum NumberValue {
    /// Signed 64-bit integer
    Integer(i64),
    /// 64-bit floating point
    Real(f64),
}

const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

impl NumberValue {
    fn as_f64(self) -> f64 {
        match self {
            NumberValue::Integer(n) => n as f64,
            NumberValue::Real(n) => n,
        }
    }

    /// The integer `r` denotes exactly, if any.
    fn exact_integer(r: f64) -> Option<i64> {
        if r.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&r) {
            Some(r as i64)
        } else {
            None
        }
    }

    fn compare_integer_real(i: i64, r: f64) -> Option<Ordering> {
        if r.is_nan() {
            return None;
        }
        if r >= I64_BOUND {
            return Some(Ordering::Less);
        }
        if r < -I64_BOUND {
            return Some(Ordering::Greater);
        }
        let whole = r.trunc();
        match i.cmp(&(whole as i64)) {
            Ordering::Equal => whole.partial_cmp(&r),
            unequal => Some(unequal),
        }
    }

    /// Exact numeric ordering across representations.
    pub fn compare(self, other: Self) -> Option<Ordering> {
        match (self, other) {
            (NumberValue::Integer(a), NumberValue::Integer(b)) => Some(a.cmp(&b)),
            (NumberValue::Integer(i), NumberValue::Real(r)) => Self::compare_integer_real(i, r),
            (NumberValue::Real(r), NumberValue::Integer(i)) => {
                Self::compare_integer_real(i, r).map(Ordering::reverse)
            }
            (NumberValue::Real(a), NumberValue::Real(b)) if a.is_nan() && b.is_nan() => {
                Some(Ordering::Equal)
            }
            (NumberValue::Real(a), NumberValue::Real(b)) => a.partial_cmp(&b),
        }
    }
}

/// Exact numeric equality: `Integer(2) == Real(2.0)` but
/// `Integer(2^53 + 1) != Real(2^53)`; NaN equals NaN.
impl PartialEq for NumberValue {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (NumberValue::Integer(a), NumberValue::Integer(b)) => a == b,
            (NumberValue::Integer(i), NumberValue::Real(r))
            | (NumberValue::Real(r), NumberValue::Integer(i)) => {
                Self::exact_integer(r) == Some(i)
            }
            (NumberValue::Real(a), NumberValue::Real(b)) => a == b || (a.is_nan() && b.is_nan()),
        }
    }
}

impl Resource for NumberValue {
    const KIND: Kind = Kind::Number;

    fn with_capacity(_capacity_hint: usize) -> Self {
        NumberValue::Integer(0)
    }

    fn is_empty_value(&self) -> bool {
        false
    }
}

/// An immutable number.
///
/// The default number is integer zero. Numbers are never edited in place,
/// so copies share one resource for their whole life.
#[derive(Clone)]
pub struct Number {
    cell: CowHandle<NumberValue>,
}

impl Wrapper for Number {
    type Storage = NumberValue;

    fn cell(&self) -> &CowHandle<NumberValue> {
        &self.cell
    }

    fn cell_mut(&mut self) -> &mut CowHandle<NumberValue> {
        &mut self.cell
    }

    fn from_cell(cell: CowHandle<NumberValue>) -> Self {
        Self { cell }
    }
}

impl Number {
    /// Create a number holding `value`.
    pub fn new(value: NumberValue) -> Self {
        Self::from_cell(CowHandle::frozen(value))
    }

    /// Create a null number.
    pub fn null() -> Self {
        Self::from_cell(CowHandle::null())
    }

    /// The stored value, or `None` when null.
    pub fn value(&self) -> Option<NumberValue> {
        self.cell.get().copied()
    }

    /// Whether the number is stored as a real.
    pub fn is_real(&self) -> bool {
        matches!(self.value(), Some(NumberValue::Real(_)))
    }

    /// Value as an integer; reals are truncated toward zero (saturating).
    pub fn as_i64(&self) -> Option<i64> {
        match self.value()? {
            NumberValue::Integer(n) => Some(n),
            NumberValue::Real(n) => Some(n as i64),
        }
    }

    /// Value as a real.
    pub fn as_f64(&self) -> Option<f64> {
        self.value().map(NumberValue::as_f64)
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::new(NumberValue::Integer(0))
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::new(NumberValue::Integer(n))
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::new(NumberValue::Integer(n.into()))
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Self::new(NumberValue::Integer(n.into()))
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Self::new(NumberValue::Real(n))
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Self::new(NumberValue::Real(n.into()))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cell.is_equal(&other.cell)
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.value() {
            None => state.write_u8(0),
            Some(NumberValue::Integer(n)) => n.hash(state),
            // Integral reals hash as the integer they equal.
            Some(NumberValue::Real(r)) => match NumberValue::exact_integer(r) {
                Some(n) => n.hash(state),
                None if r.is_nan() => f64::NAN.to_bits().hash(state),
                None => r.to_bits().hash(state),
            },
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value()?.compare(other.value()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(n: &Number) -> u64 {
        let mut hasher = DefaultHasher::new();
        n.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_integer_and_real_compare_numerically() {
        assert_eq!(Number::from(3), Number::from(3.0));
        assert_eq!(hash_of(&Number::from(3)), hash_of(&Number::from(3.0)));
        assert!(Number::from(2) < Number::from(2.5));
    }

    #[test]
    fn test_mixed_equality_is_exact() {
        let two_53 = 1i64 << 53;
        let above = Number::from(two_53 + 1);
        let real = Number::from(two_53 as f64);
        let exact = Number::from(two_53);

        assert_ne!(above, real);
        assert_eq!(real, exact);
        assert_eq!(hash_of(&real), hash_of(&exact));
        assert!(above > real);
        assert_eq!(real.partial_cmp(&exact), Some(Ordering::Equal));
        assert_ne!(Number::from(i64::MAX), Number::from(I64_BOUND));
        assert_eq!(Number::from(-0.0), Number::from(0));
    }

    #[test]
    fn test_large_integer_keys_stay_distinct() {
        let two_53 = 1i64 << 53;
        let mut d = crate::Dictionary::new();
        d.set(two_53 + 1, "above");
        d.set(two_53, "exact");
        assert_eq!(d.count(), 2);
        assert_eq!(d.get(two_53 as f64).and_then(crate::Object::as_str), Some("exact"));
    }

    #[test]
    fn test_null_is_not_zero() {
        assert_ne!(Number::null(), Number::from(0));
        assert_eq!(Number::null(), Number::null());
        assert_eq!(Number::default(), Number::from(0));
    }

    #[test]
    fn test_copies_share() {
        let a = Number::from(9);
        let b = a.clone();
        assert_eq!(a.share_count(), 2);
        assert_eq!(b.as_i64(), Some(9));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Number::from(2.9).as_i64(), Some(2));
        assert_eq!(Number::from(2).as_f64(), Some(2.0));
        assert!(Number::from(1.0f32).is_real());
        assert_eq!(Number::null().as_i64(), None);
    }
}
