use crate::domain::author::entities::Author;
use crate::entity::authors::Model as AuthorModel;

impl From<AuthorModel> for Author {
    fn from(model: AuthorModel) -> Self {
        Author {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            date_of_birth: model.date_of_birth,
            date_of_death: model.date_of_death,
            main_category: model.main_category,
        }
    }
}
