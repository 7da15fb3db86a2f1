//! Boolean combinators over specifications.

use specimen_types::request::Request;

use super::{DynRequestSpecification, RequestSpecification};

/// Satisfied when every inner specification is. An empty conjunction is true.
#[derive(Clone, Default)]
pub struct AndSpecification {
    specifications: Vec<DynRequestSpecification>,
}

impl AndSpecification {
    pub fn new(specifications: Vec<DynRequestSpecification>) -> Self {
        Self { specifications }
    }

    pub fn specifications(&self) -> &[DynRequestSpecification] {
        &self.specifications
    }
}

impl RequestSpecification for AndSpecification {
    fn is_satisfied_by(&self, request: &Request) -> bool {
        self.specifications
            .iter()
            .all(|spec| spec.is_satisfied_by(request))
    }
}

/// Satisfied when any inner specification is. An empty disjunction is false.
#[derive(Clone, Default)]
pub struct OrSpecification {
    specifications: Vec<DynRequestSpecification>,
}

impl OrSpecification {
    pub fn new(specifications: Vec<DynRequestSpecification>) -> Self {
        Self { specifications }
    }

    pub fn specifications(&self) -> &[DynRequestSpecification] {
        &self.specifications
    }
}

impl RequestSpecification for OrSpecification {
    fn is_satisfied_by(&self, request: &Request) -> bool {
        self.specifications
            .iter()
            .any(|spec| spec.is_satisfied_by(request))
    }
}

/// Negates an inner specification.
#[derive(Clone)]
pub struct InverseSpecification {
    specification: DynRequestSpecification,
}

impl InverseSpecification {
    pub fn new(specification: DynRequestSpecification) -> Self {
        Self { specification }
    }
}

impl RequestSpecification for InverseSpecification {
    fn is_satisfied_by(&self, request: &Request) -> bool {
        !self.specification.is_satisfied_by(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::specification::{DeclaringTypeSpecification, ExactTypeSpecification};
    use specimen_types::request::{MemberInfo, TypeKey};

    struct Order;
    struct Customer;

    fn exact<T: 'static>() -> DynRequestSpecification {
        Arc::new(ExactTypeSpecification::of::<T>())
    }

    #[test]
    fn test_empty_combinators() {
        let request = Request::of::<Order>();
        assert!(AndSpecification::default().is_satisfied_by(&request));
        assert!(!OrSpecification::default().is_satisfied_by(&request));
    }

    #[test]
    fn test_and_requires_all() {
        let spec = AndSpecification::new(vec![exact::<Order>(), exact::<Customer>()]);
        assert!(!spec.is_satisfied_by(&Request::of::<Order>()));

        let spec = AndSpecification::new(vec![exact::<Order>(), exact::<Order>()]);
        assert!(spec.is_satisfied_by(&Request::of::<Order>()));
    }

    #[test]
    fn test_or_requires_any() {
        let spec = OrSpecification::new(vec![exact::<Order>(), exact::<Customer>()]);
        assert!(spec.is_satisfied_by(&Request::of::<Customer>()));
        assert!(!spec.is_satisfied_by(&Request::of::<String>()));
    }

    #[test]
    fn test_inverse_negates() {
        let spec = InverseSpecification::new(exact::<Order>());
        assert!(!spec.is_satisfied_by(&Request::of::<Order>()));
        assert!(spec.is_satisfied_by(&Request::of::<Customer>()));
    }

    #[test]
    fn test_declaring_type_over_disjunction() {
        let spec = DeclaringTypeSpecification::new(OrSpecification::new(vec![
            exact::<Order>(),
            exact::<Customer>(),
        ]));
        let on_customer = MemberInfo::new("name", TypeKey::of::<Customer>(), TypeKey::of::<String>());
        let on_string = MemberInfo::new("len", TypeKey::of::<String>(), TypeKey::of::<usize>());

        assert!(spec.is_satisfied_by(&Request::Property(on_customer)));
        assert!(!spec.is_satisfied_by(&Request::Property(on_string)));
    }
}
