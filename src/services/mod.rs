pub mod identity_service;
pub mod identity_service_impl;
pub use identity_service::{IdentityError, IdentityService};
pub use identity_service_impl::ClerkIdentityService;

pub mod artifact_service;
pub mod artifact_service_impl;
pub use artifact_service::{ArtifactError, ArtifactService, OnboardingStatus};
pub use artifact_service_impl::SeaOrmArtifactService;

pub mod improve_service;
pub mod improve_service_impl;
pub use improve_service::{ImproveError, ImproveService};
pub use improve_service_impl::GeminiImproveService;

pub mod system_service;
pub mod system_service_impl;
pub use system_service::{SystemError, SystemService};
pub use system_service_impl::SeaOrmSystemService;
