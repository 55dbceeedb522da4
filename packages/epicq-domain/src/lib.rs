pub mod history;
pub mod relevance;
pub mod timeago;
