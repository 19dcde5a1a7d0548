use std::fs::File;
use std::path::PathBuf;

use tf_import_gen::{Error, ImportRecord, OutputFormat, generate_imports, render};

fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
        .join(name)
}

fn open(name: &str) -> File {
    File::open(testdata(name)).unwrap()
}

fn record(address: &str, id: &str) -> ImportRecord {
    ImportRecord {
        resource_address: address.to_string(),
        resource_id: id.to_string(),
        supports_import: true,
    }
}

fn filters(addresses: &[&str]) -> Vec<String> {
    addresses.iter().map(|a| a.to_string()).collect()
}

#[test]
fn test_generates_imports_for_all_resources_without_filters() {
    let cases = [
        (
            "only_root_resources.json",
            vec![
                record("aws_glue_catalog_database.test_db", "id_test_db"),
                record(
                    "aws_iam_instance_profile.test_instance_profile",
                    "id_test_instance_profile",
                ),
            ],
        ),
        (
            "resources_in_child_module.json",
            vec![
                record(
                    "module.test_mwaa.aws_iam_policy.test_mwaa_permissions",
                    "id_test_mwaa_permissions",
                ),
                record(
                    "module.test_mwaa.aws_mwaa_environment.test_airflow_env",
                    "id_test_airflow_env",
                ),
            ],
        ),
        (
            "resources_in_deeply_nested_child_module.json",
            vec![
                record(
                    "module.test_mwaa.module.nested1.module.nested2.aws_iam_policy.test_mwaa_permissions",
                    "id_test_mwaa_permissions",
                ),
                record(
                    "module.test_mwaa.module.nested1.module.nested2.aws_mwaa_environment.test_airflow_env",
                    "id_test_airflow_env",
                ),
            ],
        ),
        (
            "google.json",
            vec![
                record(
                    "google_project_iam_member.service_sa_bindings",
                    "project projects/project/roles/service serviceAccount:service@project.iam.gserviceaccount.com Test title 1 is here.",
                ),
                record(
                    r#"google_privateca_ca_pool_iam_member.client["user.name@email.com"]"#,
                    "projects/project/locations/us-north1/caPools/service roles/privateca.certificateRequester user:user.name@email.com Test title 2 is here.",
                ),
                record("google_project_iam_binding.viewers", "project roles/viewer"),
            ],
        ),
    ];

    for (file, expected) in cases {
        let without_filters = generate_imports(open(file), &[]).unwrap();
        assert_eq!(without_filters, expected, "{file}");

        let empty_filter = generate_imports(open(file), &filters(&[""])).unwrap();
        assert_eq!(empty_filter, expected, "{file}");
    }
}

#[test]
fn test_filter_by_module() {
    let actual = generate_imports(
        open("resources_in_root_and_child_modules.json"),
        &filters(&["module.test_mwaa"]),
    )
    .unwrap();
    assert_eq!(
        actual,
        vec![
            record(
                "module.test_mwaa.aws_iam_policy.test_mwaa_permissions",
                "id_test_mwaa_permissions",
            ),
            record(
                "module.test_mwaa.aws_mwaa_environment.test_airflow_env",
                "id_test_airflow_env",
            ),
        ]
    );
}

#[test]
fn test_filter_by_resource_narrows_to_one() {
    let actual = generate_imports(
        open("resources_in_root_and_child_modules.json"),
        &filters(&["module.test_mwaa.aws_iam_policy.test_mwaa_permissions"]),
    )
    .unwrap();
    assert_eq!(
        actual,
        vec![record(
            "module.test_mwaa.aws_iam_policy.test_mwaa_permissions",
            "id_test_mwaa_permissions",
        )]
    );
}

#[test]
fn test_filter_is_a_prefix_match() {
    // `test_db` is also a prefix of `test_db_2`
    let actual = generate_imports(
        open("resources_in_root_and_child_modules.json"),
        &filters(&["aws_glue_catalog_database.test_db"]),
    )
    .unwrap();
    assert_eq!(
        actual,
        vec![
            record("aws_glue_catalog_database.test_db", "id_test_db"),
            record("aws_glue_catalog_database.test_db_2", "id_test_db_2"),
        ]
    );
}

#[test]
fn test_multiple_filters_keep_document_order() {
    let actual = generate_imports(
        open("resources_in_root_and_child_modules.json"),
        &filters(&["module.test_mwaa", "aws_glue_catalog_database.test_db_2"]),
    )
    .unwrap();
    assert_eq!(
        actual,
        vec![
            record("aws_glue_catalog_database.test_db_2", "id_test_db_2"),
            record(
                "module.test_mwaa.aws_iam_policy.test_mwaa_permissions",
                "id_test_mwaa_permissions",
            ),
            record(
                "module.test_mwaa.aws_mwaa_environment.test_airflow_env",
                "id_test_airflow_env",
            ),
        ]
    );
}

#[test]
fn test_duplicate_filters_do_not_duplicate_imports() {
    let actual = generate_imports(
        open("resources_in_root_and_child_modules.json"),
        &filters(&[
            "aws_glue_catalog_database.test_db_2",
            "aws_glue_catalog_database.test_db_2",
        ]),
    )
    .unwrap();
    assert_eq!(
        actual,
        vec![record("aws_glue_catalog_database.test_db_2", "id_test_db_2")]
    );
}

#[test]
fn test_data_sources_are_excluded() {
    let actual = generate_imports(open("resources_in_root_and_child_modules.json"), &[]).unwrap();
    assert_eq!(actual.len(), 4);
    assert!(
        actual
            .iter()
            .all(|r| !r.resource_address.starts_with("data."))
    );
}

#[test]
fn test_resources_that_do_not_support_import() {
    let actual = generate_imports(open("resources_which_does_not_support_import.json"), &[]).unwrap();
    assert_eq!(
        actual,
        vec![
            ImportRecord {
                resource_address: "aws_alb_target_group_attachment.test_alb_target_group_attachment"
                    .to_string(),
                resource_id: "id_test_alb_target_group_attachment".to_string(),
                supports_import: false,
            },
            ImportRecord {
                resource_address: "aws_lb_target_group_attachment.test_lb_target_group_attachment"
                    .to_string(),
                resource_id: "id_test_lb_target_group_attachment".to_string(),
                supports_import: false,
            },
        ]
    );

    let rendered = render(&actual, OutputFormat::Hcl).unwrap();
    assert_eq!(
        rendered,
        "# resource \"aws_alb_target_group_attachment.test_alb_target_group_attachment\" with identifier \"id_test_alb_target_group_attachment\" does not support import operation. Kindly refer resource documentation for more info.\n\n\
         # resource \"aws_lb_target_group_attachment.test_lb_target_group_attachment\" with identifier \"id_test_lb_target_group_attachment\" does not support import operation. Kindly refer resource documentation for more info.\n\n"
    );
}

#[test]
fn test_composite_ids_in_modules() {
    let actual = generate_imports(open("aws_composite_ids.json"), &[]).unwrap();
    assert_eq!(
        actual,
        vec![
            record(
                "module.network.aws_security_group_rule.https",
                "sg-1_ingress_tcp_80_80_10.0.0.0/16",
            ),
            record("module.network.aws_route.default[0]", "rtb-1_0.0.0.0/0"),
            record("module.service.aws_ecs_service.api", "prod/svc"),
        ]
    );
}

#[test]
fn test_rendered_hcl_for_root_resources() {
    let imports = generate_imports(open("only_root_resources.json"), &[]).unwrap();
    let expected = r#"import {
  to = aws_glue_catalog_database.test_db
  id = "id_test_db"
}

import {
  to = aws_iam_instance_profile.test_instance_profile
  id = "id_test_instance_profile"
}

"#;
    assert_eq!(render(&imports, OutputFormat::Hcl).unwrap(), expected);
}

#[test]
fn test_generation_is_idempotent() {
    let bytes = std::fs::read(testdata("resources_in_root_and_child_modules.json")).unwrap();
    let addresses = filters(&["module.test_mwaa", "aws_glue"]);

    let first = generate_imports(bytes.as_slice(), &addresses).unwrap();
    let second = generate_imports(bytes.as_slice(), &addresses).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        render(&first, OutputFormat::Hcl).unwrap(),
        render(&second, OutputFormat::Hcl).unwrap()
    );
}

#[test]
fn test_invalid_json_is_an_error() {
    let result = generate_imports("{\"values\": ".as_bytes(), &[]);
    assert!(matches!(result, Err(Error::Parse(_))));
}

#[test]
fn test_empty_state_produces_no_imports() {
    let actual = generate_imports(r#"{"format_version": "1.0"}"#.as_bytes(), &[]).unwrap();
    assert!(actual.is_empty());
}
