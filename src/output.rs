use clap::ValueEnum;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::Error;
use crate::resource::ImportRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Terraform `import` blocks
    #[default]
    Hcl,
    Json,
    Table,
}

#[derive(Tabled)]
struct ImportRow<'a> {
    #[tabled(rename = "ADDRESS")]
    address: &'a str,
    #[tabled(rename = "ID")]
    id: &'a str,
    #[tabled(rename = "IMPORTABLE")]
    importable: &'static str,
}

pub fn render(records: &[ImportRecord], format: OutputFormat) -> Result<String, Error> {
    match format {
        OutputFormat::Hcl => Ok(render_hcl(records)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(records).map_err(Error::Render)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Table => Ok(render_table(records)),
    }
}

/// Every block is followed by a blank line.
fn render_hcl(records: &[ImportRecord]) -> String {
    records
        .iter()
        .map(|record| format!("{record}\n\n"))
        .collect()
}

fn render_table(records: &[ImportRecord]) -> String {
    let rows = records.iter().map(|record| ImportRow {
        address: &record.resource_address,
        id: &record.resource_id,
        importable: if record.supports_import { "yes" } else { "no" },
    });
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{table}\n")
}
