use serde::{Deserialize, Serialize};

use super::{errors::QueryError, property_mapping::PropertyMapping};

/// One clause of an `orderBy` expression, still expressed in exposed names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortTerm {
    pub exposed_name: String,
    pub descending: bool,
}

impl SortTerm {
    /// Parses a clause such as `name` or `-mainCategory`.
    pub fn parse(clause: &str) -> Result<Self, QueryError> {
        let clause = clause.trim();
        let (descending, name) = match clause.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim()),
            None => (false, clause),
        };

        if name.is_empty() {
            return Err(QueryError::invalid_sort(clause, "missing property name"));
        }

        Ok(Self {
            exposed_name: name.to_string(),
            descending,
        })
    }
}

/// A storage field with its final direction, after the `revert` flag has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSortTerm<F> {
    pub field: F,
    pub descending: bool,
}

/// Splits an `orderBy` expression into terms, first term first.
///
/// A blank expression yields no terms; the caller decides the default.
pub fn parse_terms(expression: &str) -> Result<Vec<SortTerm>, QueryError> {
    if expression.trim().is_empty() {
        return Ok(Vec::new());
    }

    expression.split(',').map(SortTerm::parse).collect()
}

/// Parses and translates an `orderBy` expression against a mapping.
///
/// Each exposed name expands into its storage fields in registration order, and
/// every expanded field gets `descending XOR revert`. Fails on the first unknown
/// or malformed term; nothing is partially honored.
pub fn parse_sort_expression<F: Copy>(
    expression: &str,
    mapping: &PropertyMapping<F>,
) -> Result<Vec<ResolvedSortTerm<F>>, QueryError> {
    let mut terms = parse_terms(expression)?;
    if terms.is_empty() {
        terms.push(SortTerm {
            exposed_name: mapping.default_property().to_string(),
            descending: false,
        });
    }

    let mut resolved = Vec::with_capacity(terms.len());
    for term in terms {
        for target in mapping.resolve(&term.exposed_name)? {
            resolved.push(ResolvedSortTerm {
                field: target.field,
                descending: term.descending ^ target.revert,
            });
        }
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::property_mapping::PropertyTarget;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Field {
        FirstName,
        LastName,
        MainCategory,
        DateOfBirth,
    }

    fn mapping() -> PropertyMapping<Field> {
        PropertyMapping::new("name")
            .with(
                "name",
                vec![
                    PropertyTarget::new(Field::FirstName),
                    PropertyTarget::new(Field::LastName),
                ],
            )
            .with("mainCategory", vec![PropertyTarget::new(Field::MainCategory)])
            .with("age", vec![PropertyTarget::reverted(Field::DateOfBirth)])
    }

    fn term(field: Field, descending: bool) -> ResolvedSortTerm<Field> {
        ResolvedSortTerm { field, descending }
    }

    #[test]
    fn test_parse_terms_keeps_order_and_direction() {
        let terms = parse_terms("name, -mainCategory").unwrap();
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].exposed_name, "name");
        assert!(!terms[0].descending);
        assert_eq!(terms[1].exposed_name, "mainCategory");
        assert!(terms[1].descending);
    }

    #[test]
    fn test_descending_category_then_name() {
        let resolved = parse_sort_expression("-mainCategory,name", &mapping()).unwrap();
        assert_eq!(
            resolved,
            vec![
                term(Field::MainCategory, true),
                term(Field::FirstName, false),
                term(Field::LastName, false),
            ]
        );
    }

    #[test]
    fn test_revert_flips_direction() {
        assert_eq!(
            parse_sort_expression("age", &mapping()).unwrap(),
            vec![term(Field::DateOfBirth, true)]
        );
        assert_eq!(
            parse_sort_expression("-age", &mapping()).unwrap(),
            vec![term(Field::DateOfBirth, false)]
        );
    }

    #[test]
    fn test_blank_expression_uses_default_property() {
        assert_eq!(
            parse_sort_expression("  ", &mapping()).unwrap(),
            vec![term(Field::FirstName, false), term(Field::LastName, false)]
        );
    }

    #[test]
    fn test_unknown_property_is_rejected() {
        let err = parse_sort_expression("name,shoeSize", &mapping()).unwrap_err();
        assert_eq!(err, QueryError::invalid_sort("shoeSize", "unknown property"));
    }

    #[test]
    fn test_lone_dash_is_rejected() {
        let err = parse_sort_expression("-", &mapping()).unwrap_err();
        assert_eq!(err, QueryError::invalid_sort("-", "missing property name"));
    }

    #[test]
    fn test_empty_clause_is_rejected() {
        assert!(parse_sort_expression("name,", &mapping()).is_err());
    }
}
