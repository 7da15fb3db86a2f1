use specimen_types::request::{Request, TypeKey};

use super::RequestSpecification;

/// Satisfied only by a `Request::Type` naming exactly the target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExactTypeSpecification {
    target: TypeKey,
}

impl ExactTypeSpecification {
    pub fn new(target: TypeKey) -> Self {
        Self { target }
    }

    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::new(TypeKey::of::<T>())
    }

    pub fn target(&self) -> TypeKey {
        self.target
    }
}

impl RequestSpecification for ExactTypeSpecification {
    fn is_satisfied_by(&self, request: &Request) -> bool {
        request.as_type() == Some(&self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specimen_types::request::MemberInfo;

    struct Order;
    struct Customer;

    #[test]
    fn test_matches_identical_type() {
        let spec = ExactTypeSpecification::of::<Order>();
        assert!(spec.is_satisfied_by(&Request::of::<Order>()));
    }

    #[test]
    fn test_rejects_other_type() {
        let spec = ExactTypeSpecification::of::<Order>();
        assert!(!spec.is_satisfied_by(&Request::of::<Customer>()));
        assert!(!spec.is_satisfied_by(&Request::of::<&Order>()));
    }

    #[test]
    fn test_rejects_non_type_requests() {
        let spec = ExactTypeSpecification::of::<Order>();
        let member = MemberInfo::new("id", TypeKey::of::<Order>(), TypeKey::of::<Order>());
        assert!(!spec.is_satisfied_by(&Request::Property(member)));
        assert!(!spec.is_satisfied_by(&Request::Named("Order".to_string())));
    }
}
