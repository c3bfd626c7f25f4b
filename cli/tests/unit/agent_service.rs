//! Unit tests for the agent application service.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::path::Path;

use agentforge_cli::application::services::agent_service::{
    GeneratedAgent, SaveOutcome, generate_from_template, import_response, list_agents,
    save_agent, suggest_templates, validate_text,
};
use agentforge_cli::domain::agent::GenerationMetadata;
use agentforge_cli::domain::{AgentError, LookupError};
use agentforge_core::ParseError;
use serde_json::{Value, json};

use crate::mocks::{InMemoryAgentStore, VALID_AGENT, builtin_catalog, fixed_now};

fn imported(raw: &str) -> GeneratedAgent {
    import_response(raw, None, &builtin_catalog(), &fixed_now()).expect("import")
}

fn never_asked(_: &Path) -> anyhow::Result<bool> {
    panic!("overwrite confirmation should not be requested")
}

// ── validate_text ─────────────────────────────────────────────────────────────

#[test]
fn test_validate_text_valid_agent() {
    let report = validate_text(VALID_AGENT, &builtin_catalog()).unwrap();
    assert!(report.is_valid(), "{:?}", report.messages());
}

#[test]
fn test_validate_text_accepts_fenced_response() {
    let raw = format!("\n```json\n{VALID_AGENT}\n```\n");
    let report = validate_text(&raw, &builtin_catalog()).unwrap();
    assert!(report.is_valid());
}

#[test]
fn test_validate_text_prose_before_fence_is_parse_error() {
    let raw = format!("Here you go:\n```json\n{VALID_AGENT}\n```");
    let err = validate_text(&raw, &builtin_catalog()).unwrap_err();
    assert!(err.downcast_ref::<ParseError>().is_some());
}

#[test]
fn test_validate_text_unwraps_saved_envelope() {
    let agent: Value = serde_json::from_str(VALID_AGENT).unwrap();
    let envelope = json!({"agent": agent, "metadata": {"source": "import"}});
    let report = validate_text(&envelope.to_string(), &builtin_catalog()).unwrap();
    assert!(report.is_valid());
}

#[test]
fn test_validate_text_reports_unknown_block_and_missing_input() {
    let raw = r#"{
      "name": "x", "description": "y", "systemPrompt": "z",
      "tasks": [
        {"id": "a", "name": "A", "blockName": "TeleportBlock", "inputs": {}},
        {"id": "b", "name": "B", "blockName": "SlackMessageBlock", "inputs": {"channel": "ops-alerts"}}
      ]
    }"#;
    let report = validate_text(raw, &builtin_catalog()).unwrap();
    assert_eq!(
        report.messages(),
        vec![
            "Task 1: Unknown block 'TeleportBlock'".to_string(),
            "Task 2: Missing required input 'text'".to_string(),
        ]
    );
}

#[test]
fn test_validate_text_not_json_is_parse_error() {
    let err = validate_text("definitely not json", &builtin_catalog()).unwrap_err();
    assert!(err.downcast_ref::<ParseError>().is_some());
}

// ── import_response ───────────────────────────────────────────────────────────

#[test]
fn test_import_response_wraps_agent_with_import_metadata() {
    let generated = import_response(
        VALID_AGENT,
        Some("find sales leads on linkedin"),
        &builtin_catalog(),
        &fixed_now(),
    )
    .unwrap();

    assert!(generated.report.is_valid());
    assert_eq!(generated.envelope.agent_name(), Some("Inbox Helper"));
    match generated.envelope.metadata {
        GenerationMetadata::Import {
            generated_at,
            description,
            suggested_templates,
            source,
        } => {
            assert_eq!(generated_at, "2024-03-05T14:07:09+00:00");
            assert_eq!(description.as_deref(), Some("find sales leads on linkedin"));
            assert_eq!(suggested_templates, vec!["sales_outreach".to_string()]);
            assert_eq!(source, "import");
        }
        GenerationMetadata::Template { .. } => panic!("expected import metadata"),
    }
}

#[test]
fn test_import_response_without_description_has_no_suggestions() {
    let generated = imported(VALID_AGENT);
    let GenerationMetadata::Import {
        description,
        suggested_templates,
        ..
    } = generated.envelope.metadata
    else {
        panic!("expected import metadata");
    };
    assert!(description.is_none());
    assert!(suggested_templates.is_empty());
}

#[test]
fn test_import_response_keeps_invalid_agent_with_issues() {
    let generated = imported(r#"{"name": "half"}"#);
    assert!(!generated.report.is_valid());
    assert_eq!(generated.envelope.agent, json!({"name": "half"}));
}

#[test]
fn test_suggest_templates_caps_results() {
    // "research content social sales" touches every built-in template
    let ids = suggest_templates(&builtin_catalog(), "research content social sales");
    assert_eq!(ids.len(), 3);
}

// ── generate_from_template ────────────────────────────────────────────────────

#[test]
fn test_generate_from_template_copies_config() {
    let catalog = builtin_catalog();
    let generated = generate_from_template(&catalog, "research_assistant", &[], &fixed_now())
        .unwrap();

    assert!(generated.report.is_valid());
    let template = catalog.get_template("research_assistant").unwrap();
    assert_eq!(
        generated.envelope.agent,
        Value::Object(template.agent_config.clone())
    );
    assert_eq!(
        generated.envelope.metadata,
        GenerationMetadata::Template {
            generated_at: "2024-03-05T14:07:09+00:00".to_string(),
            template_id: "research_assistant".to_string(),
            template_name: "Research Assistant".to_string(),
        }
    );
}

#[test]
fn test_generate_from_template_applies_overrides() {
    let overrides = vec![
        ("name".to_string(), json!("My Researcher")),
        ("memory".to_string(), json!({"enabled": false})),
    ];
    let generated =
        generate_from_template(&builtin_catalog(), "research_assistant", &overrides, &fixed_now())
            .unwrap();

    assert_eq!(generated.envelope.agent_name(), Some("My Researcher"));
    assert_eq!(generated.envelope.agent["memory"], json!({"enabled": false}));
    assert!(generated.report.is_valid());
}

#[test]
fn test_generate_from_template_override_can_break_schema() {
    let overrides = vec![("tasks".to_string(), json!([]))];
    let generated =
        generate_from_template(&builtin_catalog(), "content_writer", &overrides, &fixed_now())
            .unwrap();
    assert!(!generated.report.is_valid());
}

#[test]
fn test_generate_from_template_unknown_id() {
    let err = generate_from_template(&builtin_catalog(), "nope", &[], &fixed_now()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LookupError>(),
        Some(LookupError::TemplateNotFound(id)) if id == "nope"
    ));
}

// ── save_agent ────────────────────────────────────────────────────────────────

#[test]
fn test_save_agent_uses_derived_filename() {
    let store = InMemoryAgentStore::new();
    let outcome = save_agent(&store, &imported(VALID_AGENT), None, &fixed_now(), never_asked)
        .unwrap();

    let filename = "inbox_helper_20240305_140709.json";
    assert_eq!(
        outcome,
        SaveOutcome::Saved(Path::new("/mem/agents").join(filename))
    );
    let saved: Value = serde_json::from_str(&store.contents(filename).unwrap()).unwrap();
    assert_eq!(saved["agent"]["name"], "Inbox Helper");
    assert_eq!(saved["metadata"]["source"], "import");
}

#[test]
fn test_save_agent_with_memory_derives_filename_from_agent_name() {
    let overrides = vec![
        ("name".to_string(), json!("Lead Finder!")),
        ("memory".to_string(), json!({"enabled": true, "keys": ["leads"]})),
    ];
    let generated =
        generate_from_template(&builtin_catalog(), "research_assistant", &overrides, &fixed_now())
            .unwrap();
    let store = InMemoryAgentStore::new();
    save_agent(&store, &generated, None, &fixed_now(), never_asked).unwrap();

    let saved: Value =
        serde_json::from_str(&store.contents("lead_finder_20240305_140709.json").unwrap()).unwrap();
    assert_eq!(saved["agent"]["memory"], json!({"enabled": true, "keys": ["leads"]}));
}

#[test]
fn test_save_agent_appends_extension_to_requested_name() {
    let store = InMemoryAgentStore::new();
    save_agent(&store, &imported(VALID_AGENT), Some("helper"), &fixed_now(), never_asked)
        .unwrap();
    assert!(store.contents("helper.json").is_some());
}

#[test]
fn test_save_agent_contents_end_with_newline() {
    let store = InMemoryAgentStore::new();
    save_agent(&store, &imported(VALID_AGENT), Some("x.json"), &fixed_now(), never_asked)
        .unwrap();
    assert!(store.contents("x.json").unwrap().ends_with("}\n"));
}

#[test]
fn test_save_agent_rejects_path_traversal() {
    let store = InMemoryAgentStore::new();
    let err = save_agent(
        &store,
        &imported(VALID_AGENT),
        Some("../escape"),
        &fixed_now(),
        never_asked,
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AgentError>(),
        Some(AgentError::InvalidFilename(_))
    ));
    assert!(store.files.borrow().is_empty());
}

#[test]
fn test_save_agent_refuses_invalid_agent() {
    let store = InMemoryAgentStore::new();
    let err = save_agent(
        &store,
        &imported(r#"{"name": "half"}"#),
        None,
        &fixed_now(),
        never_asked,
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AgentError>(),
        Some(AgentError::InvalidAgent(_))
    ));
    assert!(store.files.borrow().is_empty());
}

#[test]
fn test_save_agent_overwrite_declined_keeps_file() {
    let store = InMemoryAgentStore::new();
    store.insert("helper.json", "{}");

    let outcome = save_agent(
        &store,
        &imported(VALID_AGENT),
        Some("helper"),
        &fixed_now(),
        |_| Ok(false),
    )
    .unwrap();

    assert!(matches!(outcome, SaveOutcome::Declined(_)));
    assert_eq!(store.contents("helper.json").unwrap(), "{}");
}

#[test]
fn test_save_agent_overwrite_confirmed_replaces_file() {
    let store = InMemoryAgentStore::new();
    store.insert("helper.json", "{}");
    let mut asked_for = None;

    let outcome = save_agent(
        &store,
        &imported(VALID_AGENT),
        Some("helper"),
        &fixed_now(),
        |path| {
            asked_for = Some(path.to_path_buf());
            Ok(true)
        },
    )
    .unwrap();

    assert!(matches!(outcome, SaveOutcome::Saved(_)));
    assert_eq!(asked_for, Some(Path::new("/mem/agents/helper.json").to_path_buf()));
    assert!(store.contents("helper.json").unwrap().contains("Inbox Helper"));
}

#[test]
fn test_save_agent_confirmation_error_propagates() {
    let store = InMemoryAgentStore::new();
    store.insert("helper.json", "{}");
    let result = save_agent(
        &store,
        &imported(VALID_AGENT),
        Some("helper"),
        &fixed_now(),
        |_| anyhow::bail!("terminal went away"),
    );
    assert!(result.is_err());
    assert_eq!(store.contents("helper.json").unwrap(), "{}");
}

// ── list_agents ───────────────────────────────────────────────────────────────

#[test]
fn test_list_agents_reports_names_and_templates() {
    let store = InMemoryAgentStore::new();
    let catalog = builtin_catalog();
    let from_template =
        generate_from_template(&catalog, "sales_outreach", &[], &fixed_now()).unwrap();
    save_agent(&store, &from_template, Some("b_sales"), &fixed_now(), never_asked).unwrap();
    save_agent(&store, &imported(VALID_AGENT), Some("a_inbox"), &fixed_now(), never_asked)
        .unwrap();

    let agents = list_agents(&store).unwrap();
    assert_eq!(agents.len(), 2);
    assert_eq!(agents[0].filename, "a_inbox.json");
    assert_eq!(agents[0].name.as_deref(), Some("Inbox Helper"));
    assert!(agents[0].template_id.is_none());
    assert_eq!(agents[1].template_id.as_deref(), Some("sales_outreach"));
}
