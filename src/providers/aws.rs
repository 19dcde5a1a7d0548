//! Import identifier formats for the `hashicorp/aws` provider.

use super::{IdStrategy, attribute, custom, joined};
use crate::attributes::{Attributes, stringify};

pub(super) fn strategies() -> Vec<(&'static str, IdStrategy)> {
    vec![
        ("aws_ecs_cluster", attribute("name")),
        ("aws_s3_bucket_policy", attribute("bucket")),
        ("aws_s3_bucket_versioning", attribute("bucket")),
        ("aws_s3_bucket_public_access_block", attribute("bucket")),
        (
            "aws_s3_bucket_server_side_encryption_configuration",
            attribute("bucket"),
        ),
        ("aws_s3_bucket_lifecycle_configuration", attribute("bucket")),
        ("aws_s3_bucket_ownership_controls", attribute("bucket")),
        (
            "aws_iam_role_policy_attachment",
            joined("/", &["role", "policy_arn"]),
        ),
        (
            "aws_iam_user_policy_attachment",
            joined("/", &["user", "policy_arn"]),
        ),
        (
            "aws_iam_group_policy_attachment",
            joined("/", &["group", "policy_arn"]),
        ),
        (
            "aws_lambda_permission",
            joined("/", &["function_name", "statement_id"]),
        ),
        ("aws_lambda_alias", joined("/", &["function_name", "name"])),
        ("aws_api_gateway_resource", joined("/", &["rest_api_id", "id"])),
        (
            "aws_api_gateway_deployment",
            joined("/", &["rest_api_id", "id"]),
        ),
        (
            "aws_api_gateway_stage",
            joined("/", &["rest_api_id", "stage_name"]),
        ),
        (
            "aws_api_gateway_method_settings",
            joined("/", &["rest_api_id", "stage_name", "method_path"]),
        ),
        (
            "aws_api_gateway_method",
            joined("/", &["rest_api_id", "resource_id", "http_method"]),
        ),
        (
            "aws_api_gateway_integration",
            joined("/", &["rest_api_id", "resource_id", "http_method"]),
        ),
        (
            "aws_api_gateway_method_response",
            joined(
                "/",
                &["rest_api_id", "resource_id", "http_method", "status_code"],
            ),
        ),
        (
            "aws_api_gateway_integration_response",
            joined(
                "/",
                &["rest_api_id", "resource_id", "http_method", "status_code"],
            ),
        ),
        ("aws_apigatewayv2_route", joined("/", &["api_id", "id"])),
        ("aws_apigatewayv2_integration", joined("/", &["api_id", "id"])),
        ("aws_apigatewayv2_stage", joined("/", &["api_id", "name"])),
        ("aws_emr_instance_group", joined("/", &["cluster_id", "id"])),
        (
            "aws_vpc_endpoint_route_table_association",
            joined("/", &["vpc_endpoint_id", "route_table_id"]),
        ),
        (
            "aws_cognito_user_pool_client",
            joined("/", &["user_pool_id", "id"]),
        ),
        (
            "aws_appautoscaling_target",
            joined(
                "/",
                &["service_namespace", "resource_id", "scalable_dimension"],
            ),
        ),
        (
            "aws_appautoscaling_policy",
            joined(
                "/",
                &[
                    "service_namespace",
                    "resource_id",
                    "scalable_dimension",
                    "name",
                ],
            ),
        ),
        ("aws_backup_selection", joined("|", &["plan_id", "id"])),
        ("aws_security_group_rule", custom(security_group_rule)),
        ("aws_route53_record", custom(route53_record)),
        ("aws_ecs_service", custom(ecs_service)),
        ("aws_route", custom(route)),
        ("aws_route_table_association", custom(route_table_association)),
        ("aws_cloudwatch_event_target", custom(cloudwatch_event_target)),
    ]
}

/// `<sg>_<type>_<protocol>_<from>_<to>` followed by the rule source.
fn security_group_rule(attrs: &Attributes) -> String {
    underscore_with_suffix(
        attrs,
        &[
            "security_group_id",
            "type",
            "protocol",
            "from_port",
            "to_port",
        ],
        &[
            "source_security_group_id",
            "cidr_blocks",
            "ipv6_cidr_blocks",
            "prefix_list_ids",
        ],
    )
}

fn route53_record(attrs: &Attributes) -> String {
    underscore_with_suffix(attrs, &["zone_id", "name", "type"], &["set_identifier"])
}

/// Joins `required` with `_`, then appends the first present `optional`
/// attribute. List values contribute every element.
fn underscore_with_suffix(attrs: &Attributes, required: &[&str], optional: &[&str]) -> String {
    let mut tokens: Vec<String> = required.iter().map(|name| attrs.get_str(name)).collect();

    if let Some(name) = first_present(attrs, optional) {
        let items = attrs.get_list(name);
        if items.is_empty() {
            tokens.push(attrs.get_str(name));
        } else {
            tokens.extend(items.iter().map(stringify));
        }
    }

    tokens.join("_")
}

fn first_present<'a>(attrs: &Attributes, names: &[&'a str]) -> Option<&'a str> {
    names.iter().copied().find(|name| attrs.is_present(name))
}

// `cluster` holds the cluster ARN: arn:aws:ecs:<region>:<account>:cluster/<name>
fn ecs_service(attrs: &Attributes) -> String {
    let cluster = attrs.get_str("cluster");
    let cluster_name = cluster.split('/').nth(1).unwrap_or(cluster.as_str());
    format!("{}/{}", cluster_name, attrs.get_str("name"))
}

fn route(attrs: &Attributes) -> String {
    let route_table_id = attrs.get_str("route_table_id");
    let destination = first_present(
        attrs,
        &[
            "destination_cidr_block",
            "destination_ipv6_cidr_block",
            "destination_prefix_list_id",
        ],
    );
    match destination {
        Some(name) => format!("{}_{}", route_table_id, attrs.get_str(name)),
        None => route_table_id,
    }
}

fn route_table_association(attrs: &Attributes) -> String {
    let target = if attrs.is_present("subnet_id") {
        attrs.get_str("subnet_id")
    } else {
        attrs.get_str("gateway_id")
    };
    format!("{}/{}", target, attrs.get_str("route_table_id"))
}

fn cloudwatch_event_target(attrs: &Attributes) -> String {
    let rule = attrs.get_str("rule");
    let target_id = attrs.get_str("target_id");
    match attrs.get_str("event_bus_name").as_str() {
        "" | "default" => format!("{rule}/{target_id}"),
        bus => format!("{bus}/{rule}/{target_id}"),
    }
}
