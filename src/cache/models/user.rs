use serde::{Deserialize, Serialize};

/// 会话用户快照，字段与后端 `/users/me` 返回一致
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CachedUser {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl CachedUser {
    pub fn new(id: i64, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            first_name: String::new(),
            last_name: String::new(),
            profile_picture: None,
        }
    }
}
