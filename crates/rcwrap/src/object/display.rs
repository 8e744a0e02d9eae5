//! Debug and Display implementations for objects and wrappers

use std::fmt;

use super::Object;
use crate::number::NumberValue;
use crate::{Array, Boolean, Data, Dictionary, Number, Set, Text, Wrapper};

const NULL: &str = "null";

fn write_list<'a, I>(f: &mut fmt::Formatter<'_>, open: &str, items: I, close: &str) -> fmt::Result
where
    I: IntoIterator<Item = &'a Object>,
{
    write!(f, "{}", open)?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{:?}", item)?;
    }
    write!(f, "{}", close)
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Array(v) => write!(f, "{:?}", v),
            Object::Dictionary(v) => write!(f, "{:?}", v),
            Object::String(v) => write!(f, "{:?}", v),
            Object::Data(v) => write!(f, "{:?}", v),
            Object::Set(v) => write!(f, "{:?}", v),
            Object::Number(v) => write!(f, "{:?}", v),
            Object::Boolean(v) => write!(f, "{:?}", v),
        }
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str(NULL);
        }
        write_list(f, "[", self.iter(), "]")
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str(NULL);
        }
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {:?}", key, value)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Debug for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str(NULL);
        }
        write_list(f, "set{", self.iter(), "}")
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str(NULL);
        }
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str(NULL);
        }
        write!(f, "b{:?}", self.bytes())
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            None => f.write_str(NULL),
            Some(NumberValue::Integer(n)) => write!(f, "{}", n),
            Some(NumberValue::Real(n)) => write!(f, "{:?}", n),
        }
    }
}

impl fmt::Debug for Boolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str(NULL);
        }
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_nested() {
        let mut inner = Array::new();
        inner.append(1);
        inner.append("two");

        let mut outer = Dictionary::new();
        outer.set("list", inner);
        outer.set("flag", true);

        assert_eq!(
            format!("{:?}", outer),
            r#"{"list": [1, "two"], "flag": true}"#
        );
    }

    #[test]
    fn test_debug_scalars() {
        assert_eq!(format!("{:?}", Number::from(2.5)), "2.5");
        assert_eq!(format!("{:?}", Data::from(vec![1u8, 2])), "b[1, 2]");
        assert_eq!(format!("{:?}", Array::null()), "null");
        assert_eq!(format!("{}", Text::from("plain")), "plain");
    }
}
