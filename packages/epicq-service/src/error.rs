pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<sqlx::Error> for Error {
	fn from(err: sqlx::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

impl From<epicq_storage::Error> for Error {
	fn from(err: epicq_storage::Error) -> Self {
		match err {
			epicq_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			epicq_storage::Error::InvalidArgument(message) => Self::InvalidRequest { message },
			epicq_storage::Error::NotFound(message) => Self::NotFound { message },
		}
	}
}
