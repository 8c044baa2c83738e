//! View-models of the charity admin dashboard
//!
//! Each page owns a [`ListViewState`] fed by a [`ListSource`] over the REST
//! services, plus whatever modals it needs. State lives in `futures-signals`
//! cells so a rendering shell can subscribe to changes; operations are async
//! methods the shell awaits.
//!
//! Mutations are optimistic: the list is patched at once, and the original
//! entry is put back when the backend refuses.

pub mod actions;
pub mod error;
pub mod list;
pub mod messages;
pub mod modal;
pub mod pages;
pub mod pagination;
pub mod session;

pub use actions::ProjectActions;
pub use error::{AmountError, ViewError, ViewResult};
pub use list::{AfterSuccess, Fetched, ListSource, ListViewState, Patch};
pub use messages::Action;
pub use modal::{
	ConfirmModalState, DetailModalState, DonateModalState, QUICK_AMOUNTS, validate_donation,
};
pub use pages::{
	BeneficiariesPage, BeneficiaryRequestsPage, DashboardState, FeedbackPage, GiftDonationsPage,
	LoginState, ProjectCommand, ProjectsPage, ReviewCommand, VolunteerRequestsPage,
	VolunteersPage,
};
pub use pagination::{PAGE_SIZE, Pagination};
pub use session::SessionRedirect;
