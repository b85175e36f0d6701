use thiserror::Error;

#[derive(Error, Debug)]
pub enum HiitError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl HiitError {
    pub fn routine_not_found(id: &str) -> Self {
        Self::NotFound(format!("routine {}", id))
    }

    pub fn item_not_found(routine_id: &str, item_id: &str) -> Self {
        Self::NotFound(format!("item {} in routine {}", item_id, routine_id))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
