use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;

/// A managed resource read from Terraform state.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub address: String,
    pub resource_type: String,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ImportRecord {
    pub resource_address: String,
    pub resource_id: String,
    pub supports_import: bool,
}

impl fmt::Display for ImportRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.supports_import {
            write!(
                f,
                "import {{\n  to = {}\n  id = \"{}\"\n}}",
                self.resource_address, self.resource_id
            )
        } else {
            write!(
                f,
                "# resource \"{}\" with identifier \"{}\" does not support import operation. Kindly refer resource documentation for more info.",
                self.resource_address, self.resource_id
            )
        }
    }
}
