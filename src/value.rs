use std::any::type_name;
use std::borrow::Cow;

/// A raw column value as handed over by a driver, before it is scanned.
///
/// Only text and byte sequences can hold a timestamp; anything else is carried as
/// [`RawValue::Other`] with the name of its runtime type so the scan can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue<'r> {
    /// Raw bytes, taken to be the text encoding of a timestamp.
    Bytes(&'r [u8]),

    /// Text as handed over by the driver.
    Text(&'r str),

    /// Any other representation, named by its runtime type.
    Other(Cow<'r, str>),
}

impl<'r> RawValue<'r> {
    /// An unsupported value of Rust type `T`.
    ///
    /// ```rust
    /// # use sqlite_timestamp::RawValue;
    /// assert_eq!(RawValue::other::<i64>(), RawValue::Other("i64".into()));
    /// ```
    pub fn other<T: ?Sized>() -> Self {
        RawValue::Other(Cow::Borrowed(type_name::<T>()))
    }

    /// The name of the representation this value arrived in.
    pub fn type_name(&self) -> &str {
        match self {
            RawValue::Bytes(_) => "bytes",
            RawValue::Text(_) => "text",
            RawValue::Other(name) => name,
        }
    }
}

impl<'r> From<&'r str> for RawValue<'r> {
    fn from(text: &'r str) -> Self {
        RawValue::Text(text)
    }
}

impl<'r> From<&'r String> for RawValue<'r> {
    fn from(text: &'r String) -> Self {
        RawValue::Text(text)
    }
}

impl<'r> From<&'r [u8]> for RawValue<'r> {
    fn from(bytes: &'r [u8]) -> Self {
        RawValue::Bytes(bytes)
    }
}

impl<'r> From<&'r Vec<u8>> for RawValue<'r> {
    fn from(bytes: &'r Vec<u8>) -> Self {
        RawValue::Bytes(bytes)
    }
}

impl<'r, const N: usize> From<&'r [u8; N]> for RawValue<'r> {
    fn from(bytes: &'r [u8; N]) -> Self {
        RawValue::Bytes(bytes)
    }
}
