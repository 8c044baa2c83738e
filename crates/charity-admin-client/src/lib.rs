//! REST client for the charity admin backend
//!
//! [`AdminApi`] owns one [`HttpClient`] and hands out a service per resource.
//! Every authenticated call reads the bearer token from the injected
//! [`CredentialStore`]; a 401 clears the store and notifies the
//! [`SessionListener`].
//!
//! ```rust,no_run
//! use charity_admin_client::{AdminApi, ClientSettings};
//! use charity_admin_types::ProjectFilters;
//!
//! # async fn run() -> charity_admin_client::ApiResult<()> {
//! let api = AdminApi::new(ClientSettings::default())?;
//! api.auth().login("admin@example.org", "secret").await?;
//! let listing = api.projects().list(&ProjectFilters::default()).await?;
//! println!("{} projects", listing.projects.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod credentials;
pub mod error;
pub mod http;
pub mod services;
pub mod session;
pub mod settings;

pub use api::AdminApi;
pub use credentials::{BearerToken, CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use error::{ApiError, ApiResult, CredentialError};
pub use http::{Body, HttpClient, Route};
pub use services::ProjectListing;
pub use session::SessionListener;
pub use settings::{ClientSettings, EndpointContract, SettingsError};
