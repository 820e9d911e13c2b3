use std::{any::Any, cell::RefCell, fmt, rc::Rc};

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Every operation produces a fresh value. The only way to mutate a value in
/// place is through a [`Value::Reference`] box, which is shared between its
/// clones.
#[derive(Clone, Default)]
pub enum Value {
    /// The absence of a value. Produced by declarations, definitions, void
    /// host functions and lookups of unknown variables.
    #[default]
    None,
    /// A 32-bit signed integer.
    Int(i32),
    /// A double precision floating-point number.
    Double(f64),
    /// An assignable box around another value.
    Reference(Rc<RefCell<Self>>),
    /// Opaque host data carried through scripts untouched.
    Native(Rc<dyn Any>),
}

/// The kind tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::None`]
    None,
    /// [`Value::Int`]
    Int,
    /// [`Value::Double`]
    Double,
    /// [`Value::Reference`]
    Reference,
    /// [`Value::Native`]
    Native,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::None => "none",
                        Self::Int => "int",
                        Self::Double => "double",
                        Self::Reference => "reference",
                        Self::Native => "native",
                    })
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::None
    }
}

impl Value {
    /// Wraps `value` in a new assignable box.
    ///
    /// # Example
    /// ```
    /// use bean::interpreter::value::core::Value;
    ///
    /// let boxed = Value::reference(Value::Int(1));
    /// let alias = boxed.clone();
    /// boxed.set(Value::Int(2), 1).unwrap();
    ///
    /// assert_eq!(alias.get(), Value::Int(2));
    /// ```
    #[must_use]
    pub fn reference(value: Self) -> Self {
        Self::Reference(Rc::new(RefCell::new(value)))
    }

    /// Wraps arbitrary host data as an opaque value.
    #[must_use]
    pub fn native<T: Any>(data: T) -> Self {
        Self::Native(Rc::new(data))
    }

    /// Returns the kind tag of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::None => ValueKind::None,
            Self::Int(_) => ValueKind::Int,
            Self::Double(_) => ValueKind::Double,
            Self::Reference(_) => ValueKind::Reference,
            Self::Native(_) => ValueKind::Native,
        }
    }

    /// Returns `true` for [`Value::None`].
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the integer payload, if this is an `Int`.
    #[must_use]
    pub const fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the floating payload, if this is a `Double`.
    #[must_use]
    pub const fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the host data, if this is a `Native` holding a `T`.
    #[must_use]
    pub fn downcast_native<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Native(data) => data.downcast_ref(),
            _ => None,
        }
    }

    /// Reads through any chain of references to the value inside.
    ///
    /// Non-reference values are returned as a copy of themselves.
    #[must_use]
    pub fn get(&self) -> Self {
        match self {
            Self::Reference(inner) => inner.borrow().get(),
            other => other.clone(),
        }
    }

    /// Replaces the content of a reference box.
    ///
    /// The new content is read through first, so a box never holds a
    /// reference and in particular never holds itself.
    ///
    /// # Errors
    /// Returns `RuntimeError::NotAssignable` if this value is not a
    /// reference.
    pub fn set(&self, value: Self, line: usize) -> EvalResult<()> {
        match self {
            Self::Reference(inner) => {
                let value = value.get();
                *inner.borrow_mut() = value;
                Ok(())
            },
            _ => Err(RuntimeError::NotAssignable { line }),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Double(a), Self::Double(b)) => a == b,
            (Self::Reference(a), Self::Reference(b)) => {
                Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow()
            },
            (Self::Native(a), Self::Native(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Self::Double(d) => f.debug_tuple("Double").field(d).finish(),
            Self::Reference(inner) => f.debug_tuple("Reference").field(&*inner.borrow()).finish(),
            Self::Native(_) => f.write_str("Native(..)"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Double(d) => write!(f, "{d}"),
            Self::Reference(inner) => write!(f, "{}", inner.borrow()),
            Self::Native(_) => write!(f, "<native>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_and_payloads() {
        assert_eq!(Value::from(3).kind(), ValueKind::Int);
        assert_eq!(Value::from(2.5).as_double(), Some(2.5));
        assert_eq!(Value::from(()).kind(), ValueKind::None);
        assert_eq!(Value::Int(3).as_double(), None);
        assert_ne!(Value::Int(3), Value::Double(3.0));
    }

    #[test]
    fn references_share_their_box() {
        let boxed = Value::reference(Value::Double(1.5));
        let alias = boxed.clone();

        alias.set(Value::Int(9), 1).unwrap();
        assert_eq!(boxed.get(), Value::Int(9));
        assert_eq!(boxed.to_string(), "9");
        assert_eq!(boxed.kind(), ValueKind::Reference);
    }

    #[test]
    fn boxes_never_hold_references() {
        let boxed = Value::reference(Value::Int(1));
        boxed.set(boxed.clone(), 1).unwrap();
        assert_eq!(boxed.get(), Value::Int(1));

        let other = Value::reference(Value::Double(2.5));
        boxed.set(other, 1).unwrap();
        let Value::Reference(inner) = &boxed else { unreachable!() };
        assert_eq!(*inner.borrow(), Value::Double(2.5));
    }

    #[test]
    fn only_references_are_assignable() {
        let err = Value::Int(1).set(Value::Int(2), 7).unwrap_err();
        assert_eq!(err, RuntimeError::NotAssignable { line: 7 });
    }

    #[test]
    fn native_values_round_trip_host_data() {
        struct Handle(u8);

        let value = Value::native(Handle(42));
        assert_eq!(value.downcast_native::<Handle>().map(|h| h.0), Some(42));
        assert!(value.downcast_native::<i32>().is_none());
        assert_eq!(value, value.clone());
        assert_eq!(value.to_string(), "<native>");
    }
}
