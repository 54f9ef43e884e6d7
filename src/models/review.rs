use serde::{Deserialize, Serialize};
use validator::Validate;

use super::null_as_default;

/// A raw customer review as exported by the shop system.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct Review {
    #[serde(default, deserialize_with = "null_as_default")]
    pub hash_tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub transaction_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shop_code: String,
    #[serde(rename = "ID", default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub id: String,
    #[serde(default)]
    pub rating: i32,
    #[serde(default)]
    pub modified_at: i64,
    /// Epoch seconds, UTC.
    #[serde(default)]
    pub created_at: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub employee_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub room_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub feedback: String,
}
