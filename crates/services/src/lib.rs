#![forbid(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod session;

pub use analysis::AnalysisService;
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::{AnalysisError, AuthError};
pub use gateway::{AnalysisGateway, AuthGateway, CsvUpload};
pub use http::HttpApi;
pub use session::SessionService;
