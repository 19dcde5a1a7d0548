//! Terraform state parser.
//!
//! Reads the JSON emitted by `terraform show -json` and flattens the module
//! tree into a list of managed resources with fully qualified addresses.

use std::collections::HashSet;
use std::io::Read;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::Error;
use crate::resource::Resource;

#[derive(Debug, Deserialize)]
struct StateDocument {
    format_version: String,
    #[serde(default)]
    values: Option<StateValues>,
}

#[derive(Debug, Deserialize)]
struct StateValues {
    root_module: StateModule,
}

#[derive(Debug, Deserialize)]
struct StateModule {
    #[serde(default)]
    address: String,
    #[serde(default)]
    resources: Vec<StateResource>,
    #[serde(default)]
    child_modules: Vec<StateModule>,
}

#[derive(Debug, Deserialize)]
struct StateResource {
    address: String,
    mode: ResourceMode,
    #[serde(rename = "type")]
    type_: String,
    #[serde(default)]
    index: Option<Value>,
    #[serde(default)]
    values: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ResourceMode {
    Managed,
    Data,
    #[serde(other)]
    Other,
}

/// Parse a Terraform JSON state document into its managed resources.
///
/// Resources are returned depth-first: the root module's resources in document
/// order, then each child module in turn.
pub fn parse_state<R: Read>(mut reader: R) -> Result<Vec<Resource>, Error> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let value: Value = serde_json::from_slice(&bytes).map_err(Error::Parse)?;
    if !value.is_object() {
        return Err(Error::InvalidState(
            "expected a JSON object at the top level".to_string(),
        ));
    }
    let document: StateDocument = serde_json::from_value(value).map_err(Error::Parse)?;
    check_format_version(&document.format_version)?;

    let resources = match document.values {
        Some(values) => {
            let mut resources = Vec::new();
            collect_module(values.root_module, &mut resources);
            resources
        }
        None => Vec::new(),
    };

    tracing::debug!(
        count = resources.len(),
        format_version = %document.format_version,
        "parsed terraform state"
    );

    Ok(resources)
}

// Only the 0.x and 1.x JSON output formats exist so far.
fn check_format_version(version: &str) -> Result<(), Error> {
    match version.split('.').next() {
        Some("0" | "1") => Ok(()),
        _ => Err(Error::InvalidState(format!(
            "unsupported state format_version {version:?}, expected 0.x or 1.x"
        ))),
    }
}

fn collect_module(module: StateModule, out: &mut Vec<Resource>) {
    for resource in module.resources {
        if resource.mode != ResourceMode::Managed {
            tracing::trace!(address = %resource.address, mode = ?resource.mode, "skipping non-managed resource");
            continue;
        }
        out.push(Resource {
            address: qualified_address(&module.address, &resource),
            resource_type: resource.type_,
            attributes: resource.values.into(),
        });
    }
    for child in module.child_modules {
        collect_module(child, out);
    }
}

fn qualified_address(module_address: &str, resource: &StateResource) -> String {
    let address = indexed_address(resource);
    if module_address.is_empty() || address.starts_with(module_address) {
        return address;
    }
    format!("{module_address}.{address}")
}

fn indexed_address(resource: &StateResource) -> String {
    match &resource.index {
        Some(index) if !resource.address.ends_with(']') => match index {
            Value::Number(n) => format!("{}[{}]", resource.address, n),
            // JSON string quoting matches HCL for index keys
            Value::String(_) => format!("{}[{}]", resource.address, index),
            other => format!("{}[\"{}\"]", resource.address, other),
        },
        _ => resource.address.clone(),
    }
}

/// Keep resources whose address starts with any of `addresses`.
///
/// No filters keeps everything. Output follows document order regardless of
/// filter order and each address appears at most once.
pub fn filter_by_addresses(resources: Vec<Resource>, addresses: &[String]) -> Vec<Resource> {
    if addresses.is_empty() {
        return resources;
    }

    let mut seen = HashSet::new();
    resources
        .into_iter()
        .filter(|resource| {
            addresses
                .iter()
                .any(|prefix| resource.address.starts_with(prefix.as_str()))
        })
        .filter(|resource| seen.insert(resource.address.clone()))
        .collect()
}
