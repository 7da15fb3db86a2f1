//! Values produced by builders.

use std::any::Any;
use std::fmt;

/// Type-erased produced value.
pub type SpecimenValue = Box<dyn Any + Send + Sync>;

/// The outcome of a builder invocation: either a produced value or the
/// "could not create" sentinel.
pub enum Specimen {
    Created(SpecimenValue),
    NoSpecimen,
}

impl Specimen {
    /// Wrap a concrete value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Specimen::Created(Box::new(value))
    }

    pub fn is_no_specimen(&self) -> bool {
        matches!(self, Specimen::NoSpecimen)
    }

    /// Borrow the produced value as `T`. `None` for a sentinel or another type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Specimen::Created(value) => value.downcast_ref::<T>(),
            Specimen::NoSpecimen => None,
        }
    }

    /// Take the produced value as `T`.
    ///
    /// On mismatch the specimen is handed back untouched, so the very same
    /// allocation can be forwarded on.
    pub fn downcast<T: Any>(self) -> Result<Box<T>, Specimen> {
        match self {
            Specimen::Created(value) => value.downcast::<T>().map_err(Specimen::Created),
            Specimen::NoSpecimen => Err(Specimen::NoSpecimen),
        }
    }

    /// Borrow the produced value without committing to a type.
    pub fn as_any(&self) -> Option<&(dyn Any + Send + Sync + 'static)> {
        match self {
            Specimen::Created(value) => Some(value.as_ref()),
            Specimen::NoSpecimen => None,
        }
    }
}

impl fmt::Debug for Specimen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Specimen::Created(_) => f.write_str("Specimen::Created(<value>)"),
            Specimen::NoSpecimen => f.write_str("Specimen::NoSpecimen"),
        }
    }
}
