//! Scope matching to members declared on a given type.

use std::sync::Arc;

use specimen_types::error::ArgumentError;
use specimen_types::request::{Request, TypeKey};

use super::{DynRequestSpecification, ExactTypeSpecification, RequestSpecification};

/// Satisfied by member requests whose declaring type satisfies a nested
/// specification.
///
/// The member request is re-interpreted one level removed: the nested
/// specification sees `Request::Type(declaring_type)`, so any type predicate
/// can be reused to scope customizations ("only properties declared on
/// `Order`"). Requests that are not member descriptors never satisfy it.
#[derive(Clone)]
pub struct DeclaringTypeSpecification {
    specification: DynRequestSpecification,
}

impl DeclaringTypeSpecification {
    /// Match members declared on exactly `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::for_type(TypeKey::of::<T>())
    }

    /// Match members declared on exactly `declaring_type`.
    pub fn for_type(declaring_type: TypeKey) -> Self {
        Self::new(ExactTypeSpecification::new(declaring_type))
    }

    /// Match members whose declaring type satisfies `specification`.
    pub fn new(specification: impl RequestSpecification + 'static) -> Self {
        Self {
            specification: Arc::new(specification),
        }
    }

    /// Build from a specification that may be missing, as happens when
    /// chains are assembled from lookups.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::Null`] when `specification` is `None`.
    pub fn from_shared(
        specification: Option<DynRequestSpecification>,
    ) -> Result<Self, ArgumentError> {
        let specification = specification.ok_or(ArgumentError::Null("specification"))?;
        Ok(Self { specification })
    }

    /// The nested specification the declaring type is matched against.
    pub fn specification(&self) -> &DynRequestSpecification {
        &self.specification
    }
}

impl RequestSpecification for DeclaringTypeSpecification {
    fn is_satisfied_by(&self, request: &Request) -> bool {
        let Some(member) = request.as_member() else {
            return false;
        };

        self.specification
            .is_satisfied_by(&Request::Type(member.declaring_type))
    }
}

impl std::fmt::Debug for DeclaringTypeSpecification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeclaringTypeSpecification")
            .field("specification", &"<specification>")
            .finish()
    }
}
