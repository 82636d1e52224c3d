use serde::Deserialize;

// Company block nested inside each user record; only the name ends up in reports.
#[derive(Debug, Deserialize, Clone)]
pub struct Company {
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct User {
    pub id: i64,           // correlation key for tasks
    pub name: String,
    pub email: String,
    pub username: String,  // report file name stem
    pub company: Company,
}
