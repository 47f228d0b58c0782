use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_uuid_v7,
    query::{
        ordering::Sortable,
        property_mapping::{PropertyMapping, PropertyTarget},
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Author {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub date_of_death: Option<NaiveDate>,
    pub main_category: String,
}

impl Author {
    pub fn new(
        first_name: String,
        last_name: String,
        date_of_birth: NaiveDate,
        date_of_death: Option<NaiveDate>,
        main_category: String,
    ) -> Self {
        Self {
            id: generate_uuid_v7(),
            first_name,
            last_name,
            date_of_birth,
            date_of_death,
            main_category,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whole years lived until `today`, or until the date of death.
    pub fn age_at(&self, today: NaiveDate) -> i32 {
        let until = self.date_of_death.unwrap_or(today);
        let mut age = until.year() - self.date_of_birth.year();
        if (until.month(), until.day()) < (self.date_of_birth.month(), self.date_of_birth.day()) {
            age -= 1;
        }
        age
    }
}

/// Storage fields an author can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorField {
    Id,
    FirstName,
    LastName,
    DateOfBirth,
    MainCategory,
}

impl Sortable for Author {
    type Field = AuthorField;

    fn compare_by(&self, other: &Self, field: AuthorField) -> Ordering {
        match field {
            AuthorField::Id => self.id.cmp(&other.id),
            AuthorField::FirstName => self.first_name.cmp(&other.first_name),
            AuthorField::LastName => self.last_name.cmp(&other.last_name),
            AuthorField::DateOfBirth => self.date_of_birth.cmp(&other.date_of_birth),
            AuthorField::MainCategory => self.main_category.cmp(&other.main_category),
        }
    }
}

/// Author as exposed over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub main_category: String,
}

impl From<&Author> for AuthorDto {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            name: author.full_name(),
            age: author.age_at(Utc::now().date_naive()),
            main_category: author.main_category.clone(),
        }
    }
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        AuthorDto::from(&author)
    }
}

/// Exposed property authors are ordered by when no `orderBy` is given.
pub const DEFAULT_AUTHOR_ORDER_BY: &str = "name";

/// `AuthorDto` property names translated to `Author` fields.
pub fn author_property_mapping() -> PropertyMapping<AuthorField> {
    PropertyMapping::new(DEFAULT_AUTHOR_ORDER_BY)
        .with("id", vec![PropertyTarget::new(AuthorField::Id)])
        .with(
            "mainCategory",
            vec![PropertyTarget::new(AuthorField::MainCategory)],
        )
        .with(
            "age",
            vec![PropertyTarget::reverted(AuthorField::DateOfBirth)],
        )
        .with(
            "name",
            vec![
                PropertyTarget::new(AuthorField::FirstName),
                PropertyTarget::new(AuthorField::LastName),
            ],
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::{ordering::apply_sort, sort::parse_sort_expression};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn author(first_name: &str, main_category: &str, date_of_birth: NaiveDate) -> Author {
        Author::new(
            first_name.to_string(),
            "Doe".to_string(),
            date_of_birth,
            None,
            main_category.to_string(),
        )
    }

    #[test]
    fn test_age_counts_whole_years() {
        let a = author("Ann", "Rum", date(1990, 6, 15));
        assert_eq!(a.age_at(date(2020, 6, 14)), 29);
        assert_eq!(a.age_at(date(2020, 6, 15)), 30);
    }

    #[test]
    fn test_age_stops_at_date_of_death() {
        let mut a = author("Ann", "Rum", date(1650, 1, 1));
        a.date_of_death = Some(date(1700, 12, 31));
        assert_eq!(a.age_at(date(2024, 1, 1)), 50);
    }

    #[test]
    fn test_category_descending_then_name() {
        let authors = vec![
            author("Z", "B", date(1980, 1, 1)),
            author("A", "B", date(1980, 1, 1)),
            author("M", "A", date(1980, 1, 1)),
        ];
        let terms = parse_sort_expression("-mainCategory,name", &author_property_mapping()).unwrap();
        let sorted = apply_sort(authors, &terms);
        let keys: Vec<(&str, &str)> = sorted
            .iter()
            .map(|a| (a.main_category.as_str(), a.first_name.as_str()))
            .collect();
        assert_eq!(keys, vec![("B", "A"), ("B", "Z"), ("A", "M")]);
    }

    #[test]
    fn test_age_ascending_puts_youngest_first() {
        let authors = vec![
            author("Old", "Rum", date(1950, 1, 1)),
            author("Young", "Rum", date(2000, 1, 1)),
        ];
        let terms = parse_sort_expression("age", &author_property_mapping()).unwrap();
        let sorted = apply_sort(authors, &terms);
        assert_eq!(sorted[0].first_name, "Young");
    }

    #[test]
    fn test_dto_joins_names() {
        let dto = AuthorDto::from(author("Jack", "Singing", date(1980, 1, 1)));
        assert_eq!(dto.name, "Jack Doe");
        assert_eq!(dto.main_category, "Singing");
    }
}
