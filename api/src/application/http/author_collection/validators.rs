use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::http::author::validators::CreateAuthorValidator;

/// A bare JSON array of authors; every element is validated.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(transparent)]
pub struct CreateAuthorCollectionValidator {
    #[validate(length(min = 1, message = "at least one author is required"), nested)]
    pub authors: Vec<CreateAuthorValidator>,
}
