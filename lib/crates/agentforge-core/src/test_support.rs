//! Shared fixtures for unit tests.

#![allow(clippy::expect_used)]

use serde_json::{Map, Value, json};

use crate::catalog::{AgentTemplate, BlockDescriptor, Catalog, InputSpec};

const BLOCKS_JSON: &str = r#"{
  "blocks": [
    {
      "id": "web_search",
      "name": "WebSearchBlock",
      "description": "Search the web for information",
      "category": "research",
      "inputs": {
        "query": {"type": "string", "required": true},
        "max_results": {"type": "integer", "required": false}
      },
      "outputs": {"results": {"type": "array"}},
      "capabilities": ["search", "research"]
    },
    {
      "id": "email_sender",
      "name": "EmailSenderBlock",
      "description": "Send an email to recipients",
      "category": "communication",
      "inputs": {
        "to": {"type": "string", "required": true},
        "subject": {"type": "string", "required": true},
        "body": {"type": "string", "required": true},
        "cc": {"type": "string"}
      },
      "outputs": {"message_id": {"type": "string"}},
      "capabilities": ["email", "communication"]
    },
    {
      "id": "text_generator",
      "name": "TextGeneratorBlock",
      "description": "Generate text content with an AI model",
      "category": "ai",
      "inputs": {
        "prompt": {"type": "string", "required": true},
        "max_tokens": {"type": "integer"}
      },
      "outputs": {"text": {"type": "string"}},
      "capabilities": ["writing", "content", "generation"]
    },
    {
      "id": "data_store",
      "name": "DataStoreBlock",
      "description": "Persist a value under a key for later tasks",
      "category": "storage",
      "inputs": {
        "key": {"type": "string", "required": true},
        "value": {"type": "any", "required": true}
      },
      "outputs": {"stored": {"type": "boolean"}},
      "capabilities": ["memory", "storage"]
    }
  ]
}"#;

const TEMPLATES_JSON: &str = r#"{
  "templates": [
    {
      "id": "sales_outreach",
      "name": "Sales Outreach Agent",
      "description": "Finds prospects and drafts personalized outreach emails",
      "keywords": ["sales", "outreach", "linkedin", "prospecting", "leads"],
      "agent_config": {
        "name": "Sales Outreach Assistant",
        "description": "Researches prospects and emails them",
        "systemPrompt": "You are a concise, friendly sales assistant.",
        "tasks": [
          {"id": "find", "name": "Find prospects", "blockName": "WebSearchBlock",
           "inputs": {"query": "companies hiring sales engineers"}},
          {"id": "send", "name": "Send email", "blockName": "EmailSenderBlock",
           "inputs": {"to": "{{find.results}}", "subject": "Hello", "body": "Hi there"}}
        ],
        "memory": {"enabled": true, "keys": ["contacted"]}
      }
    },
    {
      "id": "research_assistant",
      "name": "Research Assistant",
      "description": "Researches a topic on the web and writes a summary report",
      "keywords": ["research", "summary", "report"],
      "agent_config": {
        "name": "Research Assistant",
        "description": "Searches and summarizes",
        "systemPrompt": "You research carefully and cite sources.",
        "tasks": [
          {"id": "search", "name": "Search", "blockName": "WebSearchBlock",
           "inputs": {"query": "latest findings"}},
          {"id": "write", "name": "Write", "blockName": "TextGeneratorBlock",
           "inputs": {"prompt": "Summarize {{search.results}}"}}
        ]
      }
    }
  ]
}"#;

/// The four-block, two-template catalog most tests run against.
pub fn fixture_catalog() -> Catalog {
    Catalog::from_json(BLOCKS_JSON, TEMPLATES_JSON).expect("fixture catalog")
}

/// A block with the given `(input, required)` declarations.
pub fn block(id: &str, name: &str, inputs: &[(&str, bool)]) -> BlockDescriptor {
    BlockDescriptor {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} block"),
        category: "test".to_string(),
        inputs: inputs
            .iter()
            .map(|(input, required)| {
                (
                    (*input).to_string(),
                    InputSpec {
                        required: *required,
                        metadata: Map::new(),
                    },
                )
            })
            .collect(),
        outputs: Map::new(),
        capabilities: Vec::new(),
    }
}

pub fn template(id: &str, name: &str, description: &str, keywords: &[&str]) -> AgentTemplate {
    AgentTemplate {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        agent_config: Map::new(),
    }
}

/// A document that is valid against [`fixture_catalog`].
pub fn valid_agent() -> Value {
    json!({
        "name": "Test Agent",
        "description": "A test agent",
        "systemPrompt": "You are a helpful assistant",
        "tasks": [
            {
                "id": "task1",
                "name": "Search",
                "blockName": "WebSearchBlock",
                "inputs": {"query": "test"}
            },
            {
                "id": "task2",
                "name": "Summarize",
                "blockName": "text_generator",
                "inputs": {"prompt": "Summarize {{task1.results}}"}
            }
        ],
        "memory": {"enabled": true, "keys": ["last_query"]}
    })
}
