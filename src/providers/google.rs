//! Import identifier formats for the `hashicorp/google` provider.
//!
//! IAM members import as `<resource> <role> <member> [<condition title>]` and
//! IAM bindings as `<resource> <role> [<condition title>]`, space separated.

use super::{IdStrategy, joined};
use crate::attributes::{Attributes, stringify};

const CLOUD_RUN_V1_PREFIX: &str = "v1/";

pub(super) fn strategies() -> Vec<(&'static str, IdStrategy)> {
    vec![
        ("google_project_service", joined("/", &["project", "service"])),
        ("google_project_iam_member", iam_member("project")),
        ("google_project_iam_binding", iam_binding("project")),
        (
            "google_service_account_iam_member",
            iam_member("service_account_id"),
        ),
        (
            "google_service_account_iam_binding",
            iam_binding("service_account_id"),
        ),
        ("google_storage_bucket_iam_member", iam_member("bucket")),
        ("google_storage_bucket_iam_binding", iam_binding("bucket")),
        ("google_privateca_ca_pool_iam_member", iam_member("ca_pool")),
        ("google_privateca_ca_pool_iam_binding", iam_binding("ca_pool")),
        ("google_pubsub_topic_iam_member", iam_member("topic")),
        ("google_pubsub_topic_iam_binding", iam_binding("topic")),
        (
            "google_pubsub_subscription_iam_member",
            iam_member("subscription"),
        ),
        (
            "google_pubsub_subscription_iam_binding",
            iam_binding("subscription"),
        ),
        (
            "google_secret_manager_secret_iam_member",
            iam_member("secret_id"),
        ),
        (
            "google_secret_manager_secret_iam_binding",
            iam_binding("secret_id"),
        ),
        (
            "google_cloud_run_service_iam_member",
            iam(cloud_run_service, true),
        ),
        (
            "google_cloud_run_service_iam_binding",
            iam(cloud_run_service, false),
        ),
    ]
}

fn iam_member(resource_attribute: &'static str) -> IdStrategy {
    iam(move |attrs: &Attributes| attrs.get_str(resource_attribute), true)
}

fn iam_binding(resource_attribute: &'static str) -> IdStrategy {
    iam(move |attrs: &Attributes| attrs.get_str(resource_attribute), false)
}

fn iam<F>(resource: F, with_member: bool) -> IdStrategy
where
    F: Fn(&Attributes) -> String + Send + Sync + 'static,
{
    Box::new(move |attrs: &Attributes| {
        let mut tokens = vec![resource(attrs), attrs.get_str("role")];
        if with_member {
            tokens.push(attrs.get_str("member"));
        }
        if let Some(title) = condition_title(attrs) {
            tokens.push(title);
        }
        tokens.join(" ")
    })
}

fn condition_title(attrs: &Attributes) -> Option<String> {
    attrs
        .get_nested("condition")
        .and_then(|condition| condition.get("title"))
        .map(stringify)
        .filter(|title| !title.is_empty())
}

// The v1 Cloud Run API stores the service as `v1/projects/<p>/locations/<l>/services/<s>`
// but import expects the path without the API version.
fn cloud_run_service(attrs: &Attributes) -> String {
    let service = attrs.get_str("service");
    match service.strip_prefix(CLOUD_RUN_V1_PREFIX) {
        Some(path) => path.to_string(),
        None => service,
    }
}
