use crate::error::{Error, Position, Result};
use std::borrow::Cow;

/// Argument accepted by the checked metrics at the crate root.
///
/// Text operands yield their unicode code points. Every other implementation reports
/// a short label naming its type, which is returned in [`Error::InvalidArgumentType`].
/// No normalization is applied: case and surrounding whitespace are preserved.
///
/// # Example
/// ```
/// use textdistance::Operand;
///
/// assert_eq!(Ok(vec!['a', 'ü']), "aü".code_points());
/// assert_eq!(Err("f64"), 1.5_f64.code_points());
/// ```
pub trait Operand {
    /// code points of a text operand or the type label of anything else
    fn code_points(&self) -> std::result::Result<Vec<char>, &'static str>;
}

impl<T> Operand for &T
where
    T: Operand + ?Sized,
{
    fn code_points(&self) -> std::result::Result<Vec<char>, &'static str> {
        (**self).code_points()
    }
}

impl Operand for str {
    fn code_points(&self) -> std::result::Result<Vec<char>, &'static str> {
        Ok(self.chars().collect())
    }
}

impl Operand for String {
    fn code_points(&self) -> std::result::Result<Vec<char>, &'static str> {
        self.as_str().code_points()
    }
}

impl Operand for Box<str> {
    fn code_points(&self) -> std::result::Result<Vec<char>, &'static str> {
        self.as_ref().code_points()
    }
}

impl Operand for Cow<'_, str> {
    fn code_points(&self) -> std::result::Result<Vec<char>, &'static str> {
        self.as_ref().code_points()
    }
}

impl Operand for [char] {
    fn code_points(&self) -> std::result::Result<Vec<char>, &'static str> {
        Ok(self.to_vec())
    }
}

impl Operand for Vec<char> {
    fn code_points(&self) -> std::result::Result<Vec<char>, &'static str> {
        Ok(self.clone())
    }
}

impl<const N: usize> Operand for [char; N] {
    fn code_points(&self) -> std::result::Result<Vec<char>, &'static str> {
        Ok(self.to_vec())
    }
}

// raw bytes are not text, even when they happen to be valid utf-8
impl Operand for [u8] {
    fn code_points(&self) -> std::result::Result<Vec<char>, &'static str> {
        Err("bytes")
    }
}

impl Operand for Vec<u8> {
    fn code_points(&self) -> std::result::Result<Vec<char>, &'static str> {
        Err("bytes")
    }
}

macro_rules! impl_not_text {
    ($($t:ty),*) => {
        $(
            impl Operand for $t {
                fn code_points(&self) -> std::result::Result<Vec<char>, &'static str> {
                    Err(stringify!($t))
                }
            }
        )*
    }
}

impl_not_text!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool
);

#[cfg(feature = "serde_json")]
impl Operand for serde_json::Value {
    fn code_points(&self) -> std::result::Result<Vec<char>, &'static str> {
        use serde_json::Value;

        match self {
            Value::String(text) => text.code_points(),
            Value::Null => Err("null"),
            Value::Bool(_) => Err("bool"),
            Value::Number(_) => Err("number"),
            Value::Array(_) => Err("array"),
            Value::Object(_) => Err("object"),
        }
    }
}

fn text_of<T>(operand: &T, position: Position) -> Result<Vec<char>>
where
    T: Operand + ?Sized,
{
    operand.code_points().map_err(|found| {
        tracing::debug!(%position, found, "rejecting operand that is not text");
        Error::InvalidArgumentType { position, found }
    })
}

/// checks both operands in order and returns their code points
pub(crate) fn validate<A, B>(a: &A, b: &B) -> Result<(Vec<char>, Vec<char>)>
where
    A: Operand + ?Sized,
    B: Operand + ?Sized,
{
    let s1 = text_of(a, Position::First)?;
    let s2 = text_of(b, Position::Second)?;
    Ok((s1, s2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_operands() {
        let expected = Ok(vec!['i', 'd', 'カ']);
        assert_eq!(expected, "idカ".code_points());
        assert_eq!(expected, String::from("idカ").code_points());
        assert_eq!(expected, Cow::Borrowed("idカ").code_points());
        assert_eq!(expected, Box::<str>::from("idカ").code_points());
        assert_eq!(expected, ['i', 'd', 'カ'].code_points());
        assert_eq!(expected, vec!['i', 'd', 'カ'].code_points());
        assert_eq!(expected, (&&"idカ").code_points());
    }

    #[test]
    fn no_normalization() {
        assert_eq!(Ok(vec![' ', 'A', 'b', ' ']), " Ab ".code_points());
    }

    #[test]
    fn non_text_operands() {
        assert_eq!(Err("i32"), 5_i32.code_points());
        assert_eq!(Err("usize"), 5_usize.code_points());
        assert_eq!(Err("f64"), 0.5_f64.code_points());
        assert_eq!(Err("bool"), true.code_points());
        assert_eq!(Err("bytes"), b"abc".as_slice().code_points());
        assert_eq!(Err("bytes"), b"abc".to_vec().code_points());
    }

    #[test]
    fn validate_reports_first_failing_position() {
        assert_eq!(
            Err(Error::InvalidArgumentType {
                position: Position::Second,
                found: "i32"
            }),
            validate(&"abc", &1)
        );
        assert_eq!(
            Err(Error::InvalidArgumentType {
                position: Position::First,
                found: "i32"
            }),
            validate(&1, &"abc")
        );
        assert_eq!(
            Err(Error::InvalidArgumentType {
                position: Position::First,
                found: "i32"
            }),
            validate(&5, &1)
        );
        assert_eq!(Ok((vec![], vec!['a'])), validate(&"", &"a"));
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_operands() {
        use serde_json::json;

        assert_eq!(Ok(vec!['a', 'b']), json!("ab").code_points());
        assert_eq!(Err("number"), json!(1).code_points());
        assert_eq!(Err("null"), json!(null).code_points());
        assert_eq!(Err("array"), json!(["a"]).code_points());
    }
}
