//! Requests issued by the generation engine.
//!
//! A request describes something the engine wants produced. Member requests
//! (fields, properties, parameters) carry reflection-style metadata about the
//! member being populated, including the type that declares it.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a Rust type.
///
/// Equality and hashing use the [`TypeId`] only; the name is kept for
/// diagnostics and log output.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Identity of `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name, as reported by `std::any::type_name`.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeKey").field(&self.name).finish()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Metadata describing a member of a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberInfo {
    /// Member name as declared ("quantity", "new::name", ...).
    pub name: String,
    /// Type that declares the member. For parameters, the type owning the
    /// method or constructor the parameter belongs to.
    pub declaring_type: TypeKey,
    /// Type of the value the member holds.
    pub member_type: TypeKey,
}

impl MemberInfo {
    pub fn new(name: impl Into<String>, declaring_type: TypeKey, member_type: TypeKey) -> Self {
        Self {
            name: name.into(),
            declaring_type,
            member_type,
        }
    }
}

/// A generation request.
///
/// `Field`, `Property` and `Parameter` are member descriptors; every other
/// variant carries no reflection metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Request {
    Field(MemberInfo),
    Property(MemberInfo),
    Parameter(MemberInfo),
    /// A request for an instance of a type.
    Type(TypeKey),
    /// Any other engine-specific request, identified by a tag.
    Named(String),
}

impl Request {
    /// Shorthand for `Request::Type(TypeKey::of::<T>())`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Request::Type(TypeKey::of::<T>())
    }

    /// View this request as a member descriptor, if it is one.
    pub fn as_member(&self) -> Option<&MemberInfo> {
        match self {
            Request::Field(member) | Request::Property(member) | Request::Parameter(member) => {
                Some(member)
            }
            Request::Type(_) | Request::Named(_) => None,
        }
    }

    /// The requested type, for `Request::Type`.
    pub fn as_type(&self) -> Option<&TypeKey> {
        match self {
            Request::Type(key) => Some(key),
            _ => None,
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::Field(m) => write!(f, "field {}::{}", m.declaring_type, m.name),
            Request::Property(m) => write!(f, "property {}::{}", m.declaring_type, m.name),
            Request::Parameter(m) => write!(f, "parameter {}::{}", m.declaring_type, m.name),
            Request::Type(key) => write!(f, "type {key}"),
            Request::Named(tag) => write!(f, "named '{tag}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Order;
    struct Customer;

    fn member() -> MemberInfo {
        MemberInfo::new("customer", TypeKey::of::<Order>(), TypeKey::of::<Customer>())
    }

    #[test]
    fn test_type_key_equality_ignores_name() {
        assert_eq!(TypeKey::of::<Order>(), TypeKey::of::<Order>());
        assert_ne!(TypeKey::of::<Order>(), TypeKey::of::<Customer>());
        assert!(TypeKey::of::<Order>().name().ends_with("Order"));
    }

    #[test]
    fn test_member_variants_expose_member_info() {
        for request in [
            Request::Field(member()),
            Request::Property(member()),
            Request::Parameter(member()),
        ] {
            let info = request.as_member().unwrap();
            assert_eq!(info.declaring_type, TypeKey::of::<Order>());
            assert_eq!(info.name, "customer");
        }
    }

    #[test]
    fn test_non_member_variants_have_no_member_info() {
        assert!(Request::of::<Order>().as_member().is_none());
        assert!(Request::Named("seed".to_string()).as_member().is_none());
    }

    #[test]
    fn test_as_type() {
        assert_eq!(Request::of::<Customer>().as_type(), Some(&TypeKey::of::<Customer>()));
        assert!(Request::Property(member()).as_type().is_none());
    }

    #[test]
    fn test_request_display() {
        let shown = Request::Property(member()).to_string();
        assert!(shown.starts_with("property "));
        assert!(shown.ends_with("Order::customer"));
        assert_eq!(Request::Named("seed".to_string()).to_string(), "named 'seed'");
    }
}
