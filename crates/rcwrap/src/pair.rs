//! Two wrappers held together

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::cow::Wrapper;
use crate::object::hash_one;

/// A pair of wrappers.
///
/// Building a pair retains both values; neither is copied.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Pair<T: Wrapper, U: Wrapper> {
    first: T,
    second: U,
}

impl<T: Wrapper, U: Wrapper> Pair<T, U> {
    /// Pair up `first` and `second`.
    pub fn new(first: T, second: U) -> Self {
        Self { first, second }
    }

    /// The first value.
    pub fn first(&self) -> &T {
        &self.first
    }

    /// The second value.
    pub fn second(&self) -> &U {
        &self.second
    }

    /// The first value, mutably.
    pub fn first_mut(&mut self) -> &mut T {
        &mut self.first
    }

    /// The second value, mutably.
    pub fn second_mut(&mut self) -> &mut U {
        &mut self.second
    }

    /// Split into the two values.
    pub fn into_parts(self) -> (T, U) {
        (self.first, self.second)
    }
}

/// Sum of the element hashes.
impl<T: Wrapper + Hash, U: Wrapper + Hash> Hash for Pair<T, U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(hash_one(&self.first).wrapping_add(hash_one(&self.second)));
    }
}

impl<T: Wrapper + fmt::Debug, U: Wrapper + fmt::Debug> fmt::Display for Pair<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:?}, {:?}>", self.first, self.second)
    }
}

impl<T: Wrapper + fmt::Debug, U: Wrapper + fmt::Debug> fmt::Debug for Pair<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<T: Wrapper, U: Wrapper> From<(T, U)> for Pair<T, U> {
    fn from((first, second): (T, U)) -> Self {
        Self::new(first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Number, Text};
    use std::collections::hash_map::DefaultHasher;

    #[test]
    fn test_pair_retains_both() {
        let name = Text::from("x");
        let value = Number::from(1);
        let pair = Pair::new(name.clone(), value.clone());
        assert_eq!(name.share_count(), 2);
        assert_eq!(value.share_count(), 2);
        drop(pair);
        assert_eq!(name.share_count(), 1);
    }

    #[test]
    fn test_hash_is_sum_of_parts() {
        let pair = Pair::new(Text::from("a"), Number::from(2));
        let expected = hash_one(&Text::from("a")).wrapping_add(hash_one(&Number::from(2)));
        let mut hasher = DefaultHasher::new();
        hasher.write_u64(expected);
        assert_eq!(hash_one(&pair), hasher.finish());
    }

    #[test]
    fn test_equality_and_display() {
        let a = Pair::new(Text::from("k"), Number::from(3));
        let b = Pair::from((Text::from("k"), Number::from(3.0)));
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "<\"k\", 3>");
    }
}
