//! Architecture contract tests.

mod support;

use support::architecture::{
    broken_inner_doc_lines, lines_containing, non_declaration_lines_in_mod_files, path_exists,
    rust_files,
};

#[test]
fn domain_has_no_framework_or_outer_layer_imports() {
    let hits = lines_containing(
        "src/domain",
        &[
            "crate::adapter",
            "crate::infrastructure",
            "crate::application",
            "crate::port",
            "tokio::",
            "reqwest::",
        ],
    );

    assert!(hits.is_empty(), "found forbidden imports in domain layer: {hits:#?}");
}

#[test]
fn ports_depend_only_on_domain_and_errors() {
    let hits = lines_containing(
        "src/port",
        &["crate::adapter", "crate::infrastructure", "crate::application"],
    );

    assert!(hits.is_empty(), "found outer-layer imports in ports: {hits:#?}");
}

#[test]
fn aggregator_only_sees_ports() {
    let hits = lines_containing(
        "src/application",
        &["crate::adapter", "crate::infrastructure", "reqwest::"],
    );

    assert!(hits.is_empty(), "application layer reaches past its ports: {hits:#?}");
}

#[test]
fn venue_adapters_never_touch_the_http_client() {
    let hits = lines_containing(
        "src/adapter/outbound/venue",
        &["reqwest", "adapter::outbound::http"],
    );

    assert!(
        hits.is_empty(),
        "venue adapters must go through the HttpTransport port: {hits:#?}"
    );
}

#[test]
fn mod_rs_is_declaration_only() {
    let violations = non_declaration_lines_in_mod_files("src");
    assert!(
        violations.is_empty(),
        "found non-declaration content in mod.rs files: {violations:#?}"
    );
}

#[test]
fn every_venue_module_is_a_file_in_the_venue_directory() {
    let venue_files = rust_files("src/adapter/outbound/venue");
    // catalog, client, normalize, mod + 29 venues
    assert_eq!(venue_files.len(), 33, "{venue_files:#?}");
    assert!(path_exists("src/adapter/outbound/venue/catalog.rs"));
}

#[test]
fn crate_docs_are_one_unbroken_inner_doc_block() {
    let broken = broken_inner_doc_lines("src/lib.rs");
    assert!(broken.is_empty(), "lines missing their //! prefix: {broken:#?}");
}

#[test]
fn only_main_uses_anyhow() {
    let hits: Vec<_> = lines_containing("src", &["anyhow"])
        .into_iter()
        .filter(|(path, _, _)| path != "src/main.rs")
        .collect();

    assert!(hits.is_empty(), "anyhow outside the binary boundary: {hits:#?}");
}
