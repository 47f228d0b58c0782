use crate::domain::course::entities::Course;
use crate::entity::courses::Model as CourseModel;

impl From<CourseModel> for Course {
    fn from(model: CourseModel) -> Self {
        Course {
            id: model.id,
            title: model.title,
            description: model.description,
            author_id: model.author_id,
        }
    }
}
