//! Integration tests for the query engine and table projections

use aksfmt::{
    compile, compile_projection, format_many, format_many_parallel, format_one, AksFormats,
    CompileError, Document, ProjectionSpec,
};
use serde_json::json;

fn clusters() -> Vec<Document> {
    (0..50)
        .map(|i| {
            json!({
                "name": format!("c{}", i),
                "location": "eastus",
                "resourceGroup": "rg",
                "properties": {
                    "kubernetesVersion": "1.15.4",
                    "provisioningState": if i % 2 == 0 { "Succeeded" } else { "Failed" }
                }
            })
        })
        .collect()
}

#[test]
fn test_evaluation_does_not_mutate_input() {
    let formats = AksFormats::new().unwrap();
    let docs = clusters();
    let before = docs.clone();
    let first = formats.list_table(&docs);
    let second = formats.list_table(&docs);
    assert_eq!(docs, before);
    assert_eq!(first, second);
}

#[test]
fn test_batch_preserves_input_order() {
    let formats = AksFormats::new().unwrap();
    let docs = clusters();
    let names: Vec<String> = formats
        .list_table(&docs)
        .iter()
        .map(|r| r.value("name").unwrap().as_str().unwrap().to_string())
        .collect();
    let expected: Vec<String> = (0..50).map(|i| format!("c{}", i)).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_parallel_matches_sequential() {
    let spec = ProjectionSpec::compile("{ n: name, s: properties.provisioningState }").unwrap();
    let docs = clusters();
    assert_eq!(format_many(&spec, &docs), format_many_parallel(&spec, &docs));
}

#[test]
fn test_empty_batch_yields_no_records() {
    let formats = AksFormats::new().unwrap();
    assert!(formats.list_table(&[]).is_empty());
    assert!(format_many_parallel(formats.summary(), &[]).is_empty());
}

#[test]
fn test_record_columns_follow_projection_order() {
    let spec = compile_projection("{ z: a, a: z, m: m }").unwrap();
    let records = format_one(&spec, &json!({"m": 1, "z": 2, "a": 3}));
    let names: Vec<&str> = records[0].fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["z", "a", "m"]);
    assert_eq!(
        serde_json::to_string(&records[0]).unwrap(),
        r#"{"z":3,"a":2,"m":1}"#
    );
}

#[test]
fn test_default_or_law() {
    let expr = compile("a || `fallback`").unwrap();
    for empty in [json!(null), json!([]), json!({}), json!(""), json!(false)] {
        assert_eq!(expr.evaluate(&json!({"a": empty})).unwrap(), json!("fallback"));
    }
    assert_eq!(expr.evaluate(&json!({})).unwrap(), json!("fallback"));
    for kept in [json!("x"), json!(0), json!(true), json!(["x"]), json!({"k": null})] {
        assert_eq!(expr.evaluate(&json!({"a": kept.clone()})).unwrap(), kept);
    }
}

#[test]
fn test_empty_version_shows_unknown() {
    let formats = AksFormats::new().unwrap();
    let records = formats.get_versions_table(&json!({
        "properties": {"controlPlaneProfile": {"kubernetesVersion": "", "upgrades": []}}
    }));
    assert_eq!(records[0].value("masterVersion"), Some(&json!("unknown")));
    assert_eq!(records[0].value("masterUpgrades"), Some(&json!("None available")));
}

#[test]
fn test_sort_join_law() {
    let expr = compile("xs || [`none`] | sort(@) | join(`, `, @)").unwrap();
    assert_eq!(
        expr.evaluate(&json!({"xs": ["1.9.1", "1.10.0", "1.8.6"]})).unwrap(),
        json!("1.10.0, 1.8.6, 1.9.1")
    );
    assert_eq!(expr.evaluate(&json!({"xs": ["only"]})).unwrap(), json!("only"));
    assert_eq!(expr.evaluate(&json!({})).unwrap(), json!("none"));
}

#[test]
fn test_summary_scenario() {
    let formats = AksFormats::new().unwrap();
    let records = formats.show_table(&json!({
        "name": "c1",
        "location": "eastus",
        "resourceGroup": "rg1",
        "properties": {
            "kubernetesVersion": "1.15.4",
            "provisioningState": "Succeeded",
            "fqdn": "c1-dns.hcp.eastus.azmk8s.io"
        }
    }));
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].to_document(),
        json!({
            "name": "c1",
            "location": "eastus",
            "resourceGroup": "rg1",
            "kubernetesVersion": "1.15.4",
            "provisioningState": "Succeeded",
            "fqdn": "c1-dns.hcp.eastus.azmk8s.io"
        })
    );
}

#[test]
fn test_upgrade_versions_scenario() {
    let formats = AksFormats::new().unwrap();
    let records = formats.get_versions_table(&json!({
        "name": "default",
        "resourceGroup": "rg1",
        "properties": {
            "controlPlaneProfile": {"kubernetesVersion": "1.8.1", "upgrades": ["1.9.1", "1.8.6"]},
            "agentPoolProfiles": [{"kubernetesVersion": "1.8.1", "upgrades": []}]
        }
    }));
    let record = &records[0];
    assert_eq!(record.value("masterVersion"), Some(&json!("1.8.1")));
    assert_eq!(record.value("masterUpgrades"), Some(&json!("1.8.6, 1.9.1")));
    assert_eq!(record.value("nodeVersion"), Some(&json!("1.8.1")));
    assert_eq!(record.value("nodeUpgrades"), Some(&json!("None available")));
}

#[test]
fn test_type_mismatch_is_isolated_per_record() {
    let spec = compile_projection("{ n: name, u: ups | join(`,`, @) }").unwrap();
    let docs = vec![
        json!({"name": "ok", "ups": ["a", "b"]}),
        json!({"name": "bad", "ups": [1, 2]}),
        json!({"name": "also-ok", "ups": ["c"]}),
    ];
    let records = format_many(&spec, &docs);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].value("u"), Some(&json!("a,b")));
    assert_eq!(records[1].value("n"), Some(&json!("bad")));
    assert_eq!(records[1].errors().count(), 1);
    assert!(records[1].value("u").is_none());
    assert_eq!(records[2].value("u"), Some(&json!("c")));
}

#[test]
fn test_compile_errors() {
    assert!(matches!(
        compile("sort(@, @)"),
        Err(CompileError::Arity { .. })
    ));
    assert!(matches!(
        compile("reverse(@)"),
        Err(CompileError::UnknownFunction { .. })
    ));
    assert!(matches!(compile("a ||"), Err(CompileError::UnexpectedEnd { .. })));
    assert!(matches!(
        compile_projection("{ a: x, a: y }"),
        Err(CompileError::DuplicateKey { .. })
    ));
    assert!(matches!(
        compile_projection("name"),
        Err(CompileError::NotAProjection { .. })
    ));
}
