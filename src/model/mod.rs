//! Value objects shared by the analysis layer
//! - advice.rs: Severity, Advice
//! - advice_list.rs: ordered advice collection with aggregate semantics
//! - package_requirement.rs: a dependency as declared in the manifest
//! - installed_package.rs: a package present in an environment, plus lookup
//! - package_releases.rs: published versions of a package, plus lookup
//! - error.rs: construction and state-precondition errors

pub mod advice;
pub mod advice_list;
pub mod error;
pub mod installed_package;
pub mod package_releases;
pub mod package_requirement;

pub use advice::{Advice, Severity};
pub use advice_list::AdviceList;
pub use error::ModelError;
pub use installed_package::{InstalledPackage, InstalledPackages};
pub use package_releases::{PackageReleases, ReleaseIndex};
pub use package_requirement::PackageRequirement;
