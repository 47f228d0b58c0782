use std::{
    any::{Any, TypeId, type_name},
    collections::HashMap,
};

use tracing::debug;

use super::{errors::QueryError, ordering::Sortable};

/// One storage field backing an exposed property.
///
/// `revert` flips the requested direction, for exposed values that grow as the
/// underlying field shrinks (an age backed by a date of birth).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyTarget<F> {
    pub field: F,
    pub revert: bool,
}

impl<F> PropertyTarget<F> {
    pub fn new(field: F) -> Self {
        Self {
            field,
            revert: false,
        }
    }

    pub fn reverted(field: F) -> Self {
        Self {
            field,
            revert: true,
        }
    }
}

/// Translation table from exposed (DTO) property names to storage fields.
///
/// Lookups ignore ASCII case.
#[derive(Debug, Clone)]
pub struct PropertyMapping<F> {
    default_property: String,
    properties: HashMap<String, Vec<PropertyTarget<F>>>,
}

impl<F> PropertyMapping<F> {
    pub fn new(default_property: &str) -> Self {
        Self {
            default_property: default_property.to_string(),
            properties: HashMap::new(),
        }
    }

    /// Registers an exposed property. Registering the same name twice keeps the last targets.
    pub fn with(mut self, exposed_name: &str, targets: Vec<PropertyTarget<F>>) -> Self {
        self.properties
            .insert(exposed_name.to_ascii_lowercase(), targets);
        self
    }

    pub fn default_property(&self) -> &str {
        &self.default_property
    }

    pub fn contains(&self, exposed_name: &str) -> bool {
        self.properties
            .contains_key(&exposed_name.to_ascii_lowercase())
    }

    pub fn resolve(&self, exposed_name: &str) -> Result<&[PropertyTarget<F>], QueryError> {
        self.properties
            .get(&exposed_name.to_ascii_lowercase())
            .map(Vec::as_slice)
            .ok_or_else(|| QueryError::invalid_sort(exposed_name, "unknown property"))
    }

    /// Checks every comma separated term of an `orderBy` expression.
    ///
    /// A blank expression is valid and falls back to the default property.
    pub fn validate(&self, order_by: &str) -> bool {
        if order_by.trim().is_empty() {
            return true;
        }

        order_by.split(',').all(|clause| {
            let clause = clause.trim();
            let name = clause.strip_prefix('-').unwrap_or(clause).trim();
            !name.is_empty() && self.contains(name)
        })
    }
}

/// Registry of translation tables keyed by `(dto, entity)` type pair.
///
/// Built once at startup and only read afterwards.
#[derive(Default)]
pub struct PropertyMappingService {
    mappings: HashMap<(TypeId, TypeId), Box<dyn Any + Send + Sync>>,
}

impl PropertyMappingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<D, E>(mut self, mapping: PropertyMapping<E::Field>) -> Self
    where
        D: 'static,
        E: Sortable + 'static,
    {
        debug!(
            source = type_name::<D>(),
            destination = type_name::<E>(),
            "registering property mapping"
        );
        self.mappings
            .insert((TypeId::of::<D>(), TypeId::of::<E>()), Box::new(mapping));
        self
    }

    pub fn exists<D, E>(&self) -> bool
    where
        D: 'static,
        E: 'static,
    {
        self.mappings
            .contains_key(&(TypeId::of::<D>(), TypeId::of::<E>()))
    }

    pub fn get<D, E>(&self) -> Result<&PropertyMapping<E::Field>, QueryError>
    where
        D: 'static,
        E: Sortable + 'static,
    {
        self.mappings
            .get(&(TypeId::of::<D>(), TypeId::of::<E>()))
            .and_then(|mapping| mapping.downcast_ref::<PropertyMapping<E::Field>>())
            .ok_or_else(|| QueryError::MappingNotFound {
                source_type: type_name::<D>().to_string(),
                destination_type: type_name::<E>().to_string(),
            })
    }

    /// Returns false for an unknown term and for an unregistered type pair.
    pub fn validate<D, E>(&self, order_by: &str) -> bool
    where
        D: 'static,
        E: Sortable + 'static,
    {
        self.get::<D, E>()
            .map(|mapping| mapping.validate(order_by))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum BookField {
        Title,
        PublishedOn,
    }

    struct Book;
    struct BookDto;
    struct OtherDto;

    impl Sortable for Book {
        type Field = BookField;

        fn compare_by(&self, _other: &Self, _field: BookField) -> Ordering {
            Ordering::Equal
        }
    }

    fn registry() -> PropertyMappingService {
        PropertyMappingService::new().register::<BookDto, Book>(
            PropertyMapping::new("title")
                .with("title", vec![PropertyTarget::new(BookField::Title)])
                .with("age", vec![PropertyTarget::reverted(BookField::PublishedOn)]),
        )
    }

    #[test]
    fn test_exists_is_keyed_by_type_pair() {
        let mappings = registry();
        assert!(mappings.exists::<BookDto, Book>());
        assert!(!mappings.exists::<OtherDto, Book>());
    }

    #[test]
    fn test_validate_accepts_known_fields() {
        let mappings = registry();
        assert!(mappings.validate::<BookDto, Book>("title"));
        assert!(mappings.validate::<BookDto, Book>(" -age , Title "));
        assert!(mappings.validate::<BookDto, Book>("   "));
    }

    #[test]
    fn test_validate_rejects_unknown_or_empty_terms() {
        let mappings = registry();
        assert!(!mappings.validate::<BookDto, Book>("title,isbn"));
        assert!(!mappings.validate::<BookDto, Book>("-"));
        assert!(!mappings.validate::<BookDto, Book>("title,,age"));
        assert!(!mappings.validate::<OtherDto, Book>("title"));
    }

    #[test]
    fn test_resolve_returns_targets() {
        let mappings = registry();
        let mapping = mappings.get::<BookDto, Book>().unwrap();
        assert_eq!(
            mapping.resolve("AGE").unwrap(),
            &[PropertyTarget::reverted(BookField::PublishedOn)]
        );
        assert_eq!(
            mapping.resolve("isbn"),
            Err(QueryError::invalid_sort("isbn", "unknown property"))
        );
    }

    #[test]
    fn test_get_unregistered_pair_fails() {
        let mappings = registry();
        assert!(matches!(
            mappings.get::<OtherDto, Book>(),
            Err(QueryError::MappingNotFound { .. })
        ));
    }
}
