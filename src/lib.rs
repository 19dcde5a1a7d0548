//! tf-import-gen - Terraform import block generator
//!
//! Reads Terraform state JSON (`terraform show -json`) and generates `import`
//! blocks for migrating resources into another Terraform configuration.

pub mod attributes;
pub mod output;
pub mod providers;
pub mod resource;
pub mod terraform;

mod error;

use std::io::Read;

pub use attributes::Attributes;
pub use error::Error;
pub use output::{OutputFormat, render};
pub use providers::{compute_import, compute_resource_id, supports_import};
pub use resource::{ImportRecord, Resource};
pub use terraform::{filter_by_addresses, parse_state};

/// Generate import records for every managed resource in `state` whose address
/// starts with one of `addresses` (all resources when `addresses` is empty).
pub fn generate_imports<R: Read>(state: R, addresses: &[String]) -> Result<Vec<ImportRecord>, Error> {
    let resources = parse_state(state)?;
    let total = resources.len();

    let resources = filter_by_addresses(resources, addresses);
    tracing::info!(
        total,
        matched = resources.len(),
        filters = addresses.len(),
        "filtered resources"
    );

    Ok(resources.iter().map(compute_import).collect())
}
