use std::path::PathBuf;

use tower_lsp::lsp_types::Url;

use super::*;

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn workspace_provider() -> DefinitionProvider {
    let index = Arc::new(DebugtalkIndex::new());
    index.set_companion_path(fixtures_root().join("workspace/debugtalk.py"));
    index.rebuild();
    DefinitionProvider::new(index)
}

fn open_yaml_fixture(relative: &str) -> Document {
    let path = fixtures_root().join(relative);
    let text = std::fs::read_to_string(&path).expect("fixture must exist");
    Document::new(Url::from_file_path(&path).unwrap(), "yaml".to_string(), text, 1)
}

/// Position of the first occurrence of `needle` (fixtures are ASCII).
fn position_of(
    source: &str,
    needle: &str,
) -> Position {
    let offset = source.find(needle).expect("needle not found");
    let before = &source[..offset];
    let line = before.bytes().filter(|&b| b == b'\n').count() as u32;
    let character = before.rsplit_once('\n').map(|(_, tail)| tail.len()).unwrap_or(offset) as u32;
    Position {
        line,
        character,
    }
}

#[test]
fn resolves_path_reference_to_target_file() {
    let provider = workspace_provider();
    let doc = open_yaml_fixture("workspace/testcases/demo_testcase.yml");
    let pos = position_of(&doc.text, "../api/login.yml");

    let location = provider.provide(&doc, pos).unwrap();
    let resolved = location.uri.to_file_path().unwrap().canonicalize().unwrap();
    let expected = fixtures_root().join("workspace/api/login.yml").canonicalize().unwrap();
    assert_eq!(resolved, expected);
    assert_eq!(location.range.start, Position::new(0, 0));
    assert_eq!(location.range.end, Position::new(0, 10));
}

#[test]
fn missing_path_reference_resolves_to_none() {
    let provider = workspace_provider();
    let doc = open_yaml_fixture("workspace/testcases/demo_testcase.yml");
    let pos = position_of(&doc.text, "../api/missing.yml");
    assert!(provider.provide(&doc, pos).is_none());
}

#[test]
fn resolves_variable_to_defining_key() {
    let provider = workspace_provider();
    let doc = open_yaml_fixture("workspace/testcases/demo_testcase.yml");
    let pos = position_of(&doc.text, "$username");

    let location = provider.provide(&doc, pos).unwrap();
    assert_eq!(location.uri, doc.uri);
    assert_eq!(location.range.start, position_of(&doc.text, "username: admin"));
    assert_eq!(location.range.end.character, location.range.start.character + "username".len() as u32);
}

#[test]
fn earliest_definition_wins() {
    let provider = workspace_provider();
    let doc = open_yaml_fixture("workspace/testcases/dup_vars.yml");
    let pos = position_of(&doc.text, "$host");

    let location = provider.provide(&doc, pos).unwrap();
    // `host` is defined under `variables` first and `extract` later; the
    // earliest definition in document order is the resolved one.
    assert_eq!(location.range.start, position_of(&doc.text, "host: example.com"));
}

#[test]
fn resolves_function_call_into_companion_script() {
    let provider = workspace_provider();
    let doc = open_yaml_fixture("workspace/testcases/demo_testcase.yml");
    let pos = position_of(&doc.text, "double($token)");

    let location = provider.provide(&doc, pos).unwrap();
    assert!(location.uri.path().ends_with("debugtalk.py"));
    assert_eq!(location.range.start, Position::new(5, 4));
    assert_eq!(location.range.end, Position::new(5, 10));
}

#[test]
fn companion_script_absent_resolves_to_none() {
    let index = Arc::new(DebugtalkIndex::new());
    index.set_companion_path(fixtures_root().join("workspace/nonexistent.py"));
    index.rebuild();
    let provider = DefinitionProvider::new(index);

    let doc = open_yaml_fixture("workspace/testcases/demo_testcase.yml");
    let pos = position_of(&doc.text, "double($token)");
    assert!(provider.provide(&doc, pos).is_none());
}

#[test]
fn companion_script_document_resolves_to_none() {
    let provider = workspace_provider();
    let path = fixtures_root().join("workspace/debugtalk.py");
    let text = std::fs::read_to_string(&path).unwrap();
    let doc = Document::new(Url::from_file_path(&path).unwrap(), "python".to_string(), text, 1);
    assert!(provider.provide(&doc, Position::new(5, 6)).is_none());
}

#[test]
fn env_document_resolves_to_none() {
    let provider = workspace_provider();
    let doc = Document::new(
        Url::parse("file:///workspace/.env").unwrap(),
        "env".to_string(),
        "TOKEN=$token\n".to_string(),
        1,
    );
    assert!(provider.provide(&doc, Position::new(0, 7)).is_none());
}

#[test]
fn unparsable_yaml_resolves_to_none() {
    let provider = workspace_provider();
    let doc = Document::new(
        Url::parse("file:///workspace/broken.yml").unwrap(),
        "yaml".to_string(),
        "variables: {x: 1\nuse: $x\n".to_string(),
        1,
    );
    let pos = position_of(&doc.text, "$x");
    assert!(provider.provide(&doc, pos).is_none());
}

#[test]
fn resolution_is_idempotent() {
    let provider = workspace_provider();
    let doc = open_yaml_fixture("workspace/testcases/demo_testcase.yml");
    let pos = position_of(&doc.text, "$username");

    let first = provider.provide(&doc, pos);
    let second = provider.provide(&doc, pos);
    assert!(first.is_some());
    assert_eq!(first, second);
}
