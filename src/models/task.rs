use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Task {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub completed: bool,
}
