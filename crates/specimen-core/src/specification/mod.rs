//! Request specifications: pure predicates over [`Request`]s.
//!
//! A specification never fails. A request whose shape it does not recognise
//! simply does not satisfy it, which lets many specifications coexist in one
//! pipeline without knowing about each other.

pub mod composite;
pub mod declaring_type;
pub mod exact_type;

use std::sync::Arc;

use specimen_types::request::Request;

pub use composite::{AndSpecification, InverseSpecification, OrSpecification};
pub use declaring_type::DeclaringTypeSpecification;
pub use exact_type::ExactTypeSpecification;

/// A boolean predicate over generation requests.
pub trait RequestSpecification: Send + Sync {
    fn is_satisfied_by(&self, request: &Request) -> bool;
}

/// Type-erased specification shared across pipeline links.
pub type DynRequestSpecification = Arc<dyn RequestSpecification>;

impl<S: RequestSpecification + ?Sized> RequestSpecification for Arc<S> {
    fn is_satisfied_by(&self, request: &Request) -> bool {
        (**self).is_satisfied_by(request)
    }
}

impl<S: RequestSpecification + ?Sized> RequestSpecification for Box<S> {
    fn is_satisfied_by(&self, request: &Request) -> bool {
        (**self).is_satisfied_by(request)
    }
}

impl<S: RequestSpecification + ?Sized> RequestSpecification for &S {
    fn is_satisfied_by(&self, request: &Request) -> bool {
        (**self).is_satisfied_by(request)
    }
}
