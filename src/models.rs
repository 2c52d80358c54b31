use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_AGE: i32 = 1;
pub const MAX_AGE: i32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str, age: i32) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person(firstName={}, lastName={}, age={})",
            self.first_name, self.last_name, self.age
        )
    }
}
