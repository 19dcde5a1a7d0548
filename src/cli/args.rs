use std::path::PathBuf;

use clap::Parser;
use tf_import_gen::OutputFormat;

/// Generate terraform import statements to simplify state migrations from one
/// terraform code base to another.
#[derive(Parser, Debug)]
#[command(
    name = "tf-import-gen",
    version,
    after_help = "Examples:\n  \
        terraform show -json | tf-import-gen module.example\n  \
        terraform show -json | tf-import-gen aws_instance.example module.example\n  \
        terraform show -json | tf-import-gen"
)]
pub struct Cli {
    /// Module or resource addresses to filter by, e.g. `module.example` or
    /// `module.example.aws_instance.example`. All resources when omitted.
    #[arg(value_name = "ADDRESS")]
    pub addresses: Vec<String>,

    /// Read state JSON from this file instead of stdin
    #[arg(short, long, env = "TF_IMPORT_GEN_INPUT")]
    pub input: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_enum,
        env = "TF_IMPORT_GEN_FORMAT",
        default_value_t = OutputFormat::Hcl
    )]
    pub format: OutputFormat,
}
