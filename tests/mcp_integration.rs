//! MCP server integration tests.
//!
//! These tests spawn `memory-bank stdio` as a subprocess and communicate via
//! JSON-RPC 2.0 over stdin/stdout, verifying the MCP handshake, tool listing,
//! tool invocation, resource listing/reading, and error handling.

use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};
use std::time::Duration;

use serde_json::{json, Value};

const TEMPLATE_NAMES: [&str; 7] = [
    "projectbrief.md",
    "productContext.md",
    "activeContext.md",
    "systemPatterns.md",
    "techContext.md",
    "progress.md",
    "roadmap.md",
];

/// A lightweight MCP client that talks to a `memory-bank stdio` subprocess.
struct McpClient {
    child: std::process::Child,
    stdin: std::process::ChildStdin,
    reader: BufReader<std::process::ChildStdout>,
    next_id: u64,
}

impl McpClient {
    fn spawn() -> Self {
        let mut child = Command::new(env!("CARGO_BIN_EXE_memory-bank"))
            .arg("stdio")
            .env("RUST_LOG", "warn")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("failed to spawn memory-bank stdio");

        let stdin = child.stdin.take().expect("no stdin");
        let stdout = child.stdout.take().expect("no stdout");
        let reader = BufReader::new(stdout);

        McpClient { child, stdin, reader, next_id: 1 }
    }

    /// Send a JSON-RPC request and return the parsed response.
    fn request(&mut self, method: &str, params: Value) -> Value {
        let id = self.next_id;
        self.next_id += 1;

        let msg = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        let line = serde_json::to_string(&msg).unwrap();
        writeln!(self.stdin, "{}", line).expect("write to stdin failed");
        self.stdin.flush().expect("flush stdin failed");

        let mut buf = String::new();
        self.reader.read_line(&mut buf).expect("read from stdout failed");
        serde_json::from_str(&buf)
            .unwrap_or_else(|e| panic!("failed to parse response JSON: {}\nraw: {}", e, buf))
    }

    /// Send the initialize handshake and return the result.
    fn initialize(&mut self) -> Value {
        let resp = self.request(
            "initialize",
            json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {
                    "name": "test-client",
                    "version": "0.1.0"
                }
            }),
        );

        let notif = json!({
            "jsonrpc": "2.0",
            "method": "notifications/initialized",
        });
        let line = serde_json::to_string(&notif).unwrap();
        writeln!(self.stdin, "{}", line).expect("write notification failed");
        self.stdin.flush().expect("flush notification failed");

        // let the server process the notification
        std::thread::sleep(Duration::from_millis(50));

        resp
    }

    fn call_tool(&mut self, name: &str, args: Value) -> Value {
        self.request("tools/call", json!({ "name": name, "arguments": args }))
    }

    fn read_resource(&mut self, uri: &str) -> Value {
        self.request("resources/read", json!({ "uri": uri }))
    }

    /// Shut down by closing stdin, which causes the server to exit.
    fn shutdown(mut self) {
        drop(self.stdin);
        let _ = self.child.wait();
    }
}

/// Text of the first content block of a tool result.
fn tool_text(resp: &Value) -> &str {
    let result = resp.get("result").expect("tool call should return result");
    let content = result["content"].as_array().expect("content should be array");
    assert_eq!(content.len(), 1, "expected a single content block");
    assert_eq!(content[0]["type"].as_str().unwrap(), "text");
    content[0]["text"].as_str().unwrap()
}

// ── Handshake ─────────────────────────────────────────────────────────

#[test]
fn test_mcp_initialize_handshake() {
    let mut client = McpClient::spawn();
    let resp = client.initialize();

    let result = resp.get("result").expect("initialize should return result");
    assert_eq!(result["protocolVersion"].as_str().unwrap(), "2024-11-05");

    let info = &result["serverInfo"];
    assert_eq!(info["name"].as_str().unwrap(), "memory-bank-mcp");
    assert!(info["version"].as_str().is_some(), "version should be present");

    let caps = &result["capabilities"];
    assert!(caps.get("tools").is_some(), "tools capability should be present");
    assert!(caps.get("resources").is_some(), "resources capability should be present");

    client.shutdown();
}

// ── Tool Listing ──────────────────────────────────────────────────────

#[test]
fn test_mcp_tools_list() {
    let mut client = McpClient::spawn();
    client.initialize();

    let resp = client.request("tools/list", json!({}));
    let result = resp.get("result").expect("tools/list should return result");
    let tools = result["tools"].as_array().expect("tools should be an array");
    assert_eq!(tools.len(), 3, "expected 3 tools, got {}", tools.len());

    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    for name in
        ["get_memory_bank_structure", "generate_memory_bank_template", "analyze_project_summary"]
    {
        assert!(names.contains(&name), "missing tool: {}", name);
    }

    for tool in tools {
        let name = tool["name"].as_str().unwrap();
        assert!(
            tool.get("description").and_then(|d| d.as_str()).is_some(),
            "tool {} missing description",
            name
        );
        assert!(tool.get("inputSchema").is_some(), "tool {} missing inputSchema", name);
    }

    let template_tool =
        tools.iter().find(|t| t["name"] == "generate_memory_bank_template").unwrap();
    let schema = &template_tool["inputSchema"];
    assert_eq!(schema["type"].as_str().unwrap(), "object");
    assert!(schema["properties"].get("file_name").is_some());

    let analyze_tool = tools.iter().find(|t| t["name"] == "analyze_project_summary").unwrap();
    assert!(analyze_tool["inputSchema"]["properties"].get("project_summary").is_some());

    client.shutdown();
}

// ── Tool Calls ────────────────────────────────────────────────────────

#[test]
fn test_mcp_tool_structure() {
    let mut client = McpClient::spawn();
    client.initialize();

    let first = client.call_tool("get_memory_bank_structure", json!({}));
    let second = client.call_tool("get_memory_bank_structure", json!({}));
    let text = tool_text(&first);
    assert!(text.starts_with("## Memory Bank Structure"));
    assert_eq!(text, tool_text(&second));

    client.shutdown();
}

#[test]
fn test_mcp_tool_template_found() {
    let mut client = McpClient::spawn();
    client.initialize();

    let resp =
        client.call_tool("generate_memory_bank_template", json!({ "file_name": "projectbrief.md" }));
    let text = tool_text(&resp);
    assert!(text.starts_with("# Project Brief: [Project Name]"));
    assert!(text.contains("## Core Requirements"));

    client.shutdown();
}

#[test]
fn test_mcp_tool_template_not_found() {
    let mut client = McpClient::spawn();
    client.initialize();

    let resp = client.call_tool("generate_memory_bank_template", json!({ "file_name": "notes.md" }));
    let result = resp.get("result").expect("unknown template is not a protocol error");
    assert_ne!(result.get("isError"), Some(&json!(true)));

    let text = tool_text(&resp);
    assert!(text.contains("not found"));
    for name in TEMPLATE_NAMES {
        assert!(text.contains(name), "missing {} in: {}", name, text);
    }

    client.shutdown();
}

#[test]
fn test_mcp_tool_template_missing_argument() {
    let mut client = McpClient::spawn();
    client.initialize();

    let resp = client.call_tool("generate_memory_bank_template", json!({}));
    let is_protocol_error = resp.get("error").is_some();
    let is_tool_error = resp["result"]["isError"] == json!(true);
    assert!(is_protocol_error || is_tool_error, "missing file_name should fail: {}", resp);

    client.shutdown();
}

#[test]
fn test_mcp_tool_analyze() {
    let mut client = McpClient::spawn();
    client.initialize();

    let resp = client.call_tool(
        "analyze_project_summary",
        json!({ "project_summary": "Build a chat application" }),
    );
    let text = tool_text(&resp);
    assert!(text.contains("Consider \"Build a chat...\""));
    assert!(text.contains("## Core Memory Bank Files"));

    client.shutdown();
}

#[test]
fn test_mcp_unknown_tool() {
    let mut client = McpClient::spawn();
    client.initialize();

    let resp = client.call_tool("delete_memory_bank", json!({}));
    assert!(resp.get("error").is_some(), "unknown tool should be an error: {}", resp);

    client.shutdown();
}

// ── Resources ─────────────────────────────────────────────────────────

#[test]
fn test_mcp_resources_list() {
    let mut client = McpClient::spawn();
    client.initialize();

    let resp = client.request("resources/list", json!({}));
    let resources = resp["result"]["resources"].as_array().expect("resources should be an array");
    let uris: Vec<&str> = resources.iter().map(|r| r["uri"].as_str().unwrap()).collect();
    assert_eq!(uris, ["guide://setup", "guide://usage", "guide://benefits", "guide://structure"]);
    for r in resources {
        assert_eq!(r["mimeType"].as_str(), Some("text/markdown"));
    }

    client.shutdown();
}

#[test]
fn test_mcp_resource_templates_list() {
    let mut client = McpClient::spawn();
    client.initialize();

    let resp = client.request("resources/templates/list", json!({}));
    let templates =
        resp["result"]["resourceTemplates"].as_array().expect("templates should be an array");
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0]["uriTemplate"].as_str(), Some("guide://{section}"));

    client.shutdown();
}

#[test]
fn test_mcp_read_guide() {
    let mut client = McpClient::spawn();
    client.initialize();

    let resp = client.read_resource("guide://structure");
    let contents = resp["result"]["contents"].as_array().expect("contents should be an array");
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0]["uri"].as_str(), Some("guide://structure"));
    assert_eq!(contents[0]["mimeType"].as_str(), Some("text/markdown"));
    assert!(contents[0]["text"].as_str().unwrap().starts_with("# Guide: structure"));

    client.shutdown();
}

#[test]
fn test_mcp_read_unknown_guide() {
    let mut client = McpClient::spawn();
    client.initialize();

    let resp = client.read_resource("guide://nonexistent");
    let contents = resp["result"]["contents"].as_array().expect("contents should be an array");
    assert_eq!(contents[0]["mimeType"].as_str(), Some("text/plain"));
    let text = contents[0]["text"].as_str().unwrap();
    assert!(text.contains("not found"));
    assert!(text.contains("setup, usage, benefits, structure"));

    client.shutdown();
}

#[test]
fn test_mcp_read_unknown_scheme() {
    let mut client = McpClient::spawn();
    client.initialize();

    let resp = client.read_resource("file:///etc/passwd");
    assert!(resp.get("error").is_some(), "non-guide uri should be an error: {}", resp);

    client.shutdown();
}
