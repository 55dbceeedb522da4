pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Transport(#[from] reqwest::Error),
	#[error("API error ({status}): {message}")]
	Api { status: u16, message: String },
	#[error("{0}")]
	Message(String),
}
