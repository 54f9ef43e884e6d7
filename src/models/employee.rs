use serde::{Deserialize, Serialize};
use validator::Validate;

use super::null_as_default;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct Employee {
    #[serde(rename = "ID", default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub employee_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

impl Employee {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
