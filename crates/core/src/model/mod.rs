mod record;
mod sentiment;
mod session;

pub use record::{AnalysisRecord, ResultSet, SentimentCounts};
pub use sentiment::Sentiment;
pub use session::SessionToken;
