pub mod aws;
pub mod google;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::attributes::Attributes;
use crate::resource::{ImportRecord, Resource};

/// Computes the import identifier for one resource type.
pub type IdStrategy = Box<dyn Fn(&Attributes) -> String + Send + Sync>;

/// Resource types whose provider rejects `terraform import`.
pub const IMPORT_DENYLIST: &[&str] = &[
    "aws_alb_target_group_attachment",
    "aws_lb_target_group_attachment",
    "aws_lakeformation_data_lake_settings",
    "aws_lakeformation_permissions",
    "aws_iam_policy_attachment",
    "aws_acm_certificate_validation",
    "aws_ami_copy",
];

static STRATEGIES: LazyLock<HashMap<&'static str, IdStrategy>> = LazyLock::new(|| {
    aws::strategies()
        .into_iter()
        .chain(google::strategies())
        .collect()
});

pub fn supports_import(resource_type: &str) -> bool {
    !IMPORT_DENYLIST.contains(&resource_type)
}

/// Identifier `terraform import` expects for `resource`; the `id` attribute
/// for types without a dedicated format.
pub fn compute_resource_id(resource: &Resource) -> String {
    match STRATEGIES.get(resource.resource_type.as_str()) {
        Some(strategy) => strategy(&resource.attributes),
        None => resource.attributes.get_str("id"),
    }
}

pub fn compute_import(resource: &Resource) -> ImportRecord {
    let record = ImportRecord {
        resource_address: resource.address.clone(),
        resource_id: compute_resource_id(resource),
        supports_import: supports_import(&resource.resource_type),
    };
    tracing::trace!(
        address = %record.resource_address,
        resource_type = %resource.resource_type,
        id = %record.resource_id,
        supports_import = record.supports_import,
        "computed import"
    );
    record
}

fn attribute(name: &'static str) -> IdStrategy {
    Box::new(move |attrs: &Attributes| attrs.get_str(name))
}

fn joined(separator: &'static str, names: &'static [&'static str]) -> IdStrategy {
    Box::new(move |attrs: &Attributes| {
        names
            .iter()
            .map(|name| attrs.get_str(name))
            .collect::<Vec<_>>()
            .join(separator)
    })
}

fn custom(f: fn(&Attributes) -> String) -> IdStrategy {
    Box::new(f)
}

#[cfg(test)]
pub(crate) fn test_resource(resource_type: &str, attributes: serde_json::Value) -> Resource {
    Resource {
        address: format!("{resource_type}.test"),
        resource_type: resource_type.to_string(),
        attributes: serde_json::from_value(attributes).unwrap(),
    }
}
