use std::cmp::Ordering;

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
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub author_id: Uuid,
}

impl Course {
    pub fn new(author_id: Uuid, title: String, description: Option<String>) -> Self {
        Self::with_id(generate_uuid_v7(), author_id, title, description)
    }

    /// Course with a client supplied id, used when an update creates the resource.
    pub fn with_id(id: Uuid, author_id: Uuid, title: String, description: Option<String>) -> Self {
        Self {
            id,
            title,
            description,
            author_id,
        }
    }

    pub fn update(&mut self, title: String, description: Option<String>) {
        self.title = title;
        self.description = description;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    Id,
    Title,
    Description,
}

impl Sortable for Course {
    type Field = CourseField;

    fn compare_by(&self, other: &Self, field: CourseField) -> Ordering {
        match field {
            CourseField::Id => self.id.cmp(&other.id),
            CourseField::Title => self.title.cmp(&other.title),
            CourseField::Description => self.description.cmp(&other.description),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub author_id: Uuid,
}

impl From<Course> for CourseDto {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            author_id: course.author_id,
        }
    }
}

pub fn course_property_mapping() -> PropertyMapping<CourseField> {
    PropertyMapping::new("title")
        .with("id", vec![PropertyTarget::new(CourseField::Id)])
        .with("title", vec![PropertyTarget::new(CourseField::Title)])
        .with(
            "description",
            vec![PropertyTarget::new(CourseField::Description)],
        )
}
