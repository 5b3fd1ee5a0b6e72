mod number;

pub use number::Number;

use ahash::AHashSet;

use crate::Error;

/// An immutable JSON value as seen by the canonicalizer.
///
/// The representation preserves exactly the distinctions the encoder needs:
/// object vs. array for empty containers, and integer-tagged vs. float-tagged
/// numbers. Object members keep whatever order they were built in; the
/// encoder imposes the canonical UTF-16 key order on output, so two objects
/// that differ only in member order canonicalize identically.
///
/// Values are trees: every node is owned by its parent, so cyclic input is
/// unconstructible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(Number),
    String(Box<str>),
    Array(Box<[JsonValue]>),
    Object(Box<[(Box<str>, JsonValue)]>),
}

const _: () = const {
    assert!(std::mem::size_of::<JsonValue>() == 24);
};

impl JsonValue {
    /// Build an object from key-value pairs, rejecting duplicate keys.
    ///
    /// The `Object` variant itself does not prevent equal keys; this
    /// constructor is the checked path and returns [`Error::DuplicateKey`]
    /// on the first repeated key.
    pub fn object<K, I>(members: I) -> Result<JsonValue, Error>
    where
        K: Into<Box<str>>,
        I: IntoIterator<Item = (K, JsonValue)>,
    {
        let mut seen = AHashSet::new();
        let mut collected: Vec<(Box<str>, JsonValue)> = Vec::new();
        for (key, value) in members {
            let key: Box<str> = key.into();
            if !seen.insert(key.clone()) {
                return Err(Error::DuplicateKey { key });
            }
            collected.push((key, value));
        }
        Ok(JsonValue::Object(collected.into_boxed_slice()))
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Number(Number::Integer(value))
    }
}

impl TryFrom<f64> for JsonValue {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Ok(JsonValue::Number(Number::float(value)?))
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.into())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value.into())
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(items: Vec<JsonValue>) -> Self {
        JsonValue::Array(items.into_boxed_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_constructor_rejects_duplicates() {
        let result = JsonValue::object([("a", JsonValue::Null), ("a", JsonValue::Bool(true))]);
        assert!(matches!(result, Err(Error::DuplicateKey { key }) if &*key == "a"));
    }

    #[test]
    fn object_constructor_keeps_insertion_order() {
        let object = JsonValue::object([("b", JsonValue::Null), ("a", JsonValue::Null)])
            .expect("keys are unique");
        let JsonValue::Object(members) = object else {
            panic!("expected an object");
        };
        assert_eq!(&*members[0].0, "b");
        assert_eq!(&*members[1].0, "a");
    }

    #[test]
    fn empty_object_and_empty_array_are_distinct() {
        let object = JsonValue::object::<&str, _>([]).expect("empty");
        let array = JsonValue::from(Vec::new());
        assert_ne!(object, array);
    }
}
