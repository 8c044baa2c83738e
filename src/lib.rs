//! # Charity Admin
//!
//! Client-side core of the charity organization's admin dashboard.
//!
//! The backend owns every business rule; this workspace owns the presentation
//! layer around it:
//!
//! - [`types`] - the data model as the backend serializes it, plus the filter
//!   dimensions used to narrow each list
//! - [`client`] - settings, credential storage, the HTTP adapter and one service
//!   per resource (projects, volunteers, beneficiaries, gifts, feedback, statistics)
//! - [`ui`] - list and modal view-models: client-side filtering, load-more
//!   pagination and optimistic mutations that revert on failure
//!
//! ## Feature Flags
//!
//! - `client` - the typed REST client
//! - `ui` (default, implies `client`) - the view-models
//!
//! ## Example
//!
//! ```rust,no_run
//! use charity_admin::client::{AdminApi, ClientSettings};
//! use charity_admin::ui::ProjectsPage;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let api = AdminApi::new(ClientSettings::from_env()?)?;
//! api.auth().login("admin@example.org", "secret").await?;
//!
//! let page = ProjectsPage::new(api.clone());
//! page.load().await?;
//! for project in page.list().visible() {
//! 	println!("{} ({})", project.name, project.status);
//! }
//! # Ok(())
//! # }
//! ```

pub use charity_admin_types as types;

#[cfg(feature = "client")]
pub use charity_admin_client as client;

#[cfg(feature = "ui")]
pub use charity_admin_ui as ui;
