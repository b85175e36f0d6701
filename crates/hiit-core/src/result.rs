use crate::error::HiitError;

pub type HiitResult<T> = Result<T, HiitError>;
