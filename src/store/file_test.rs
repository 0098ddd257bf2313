use super::*;
use crate::state::test_helpers::dummy_file;
use uuid::Uuid;

fn temp_path() -> PathBuf {
    std::env::temp_dir().join(format!("agentfiles-{}.jsonl", Uuid::new_v4()))
}

struct Cleanup(PathBuf);

impl Drop for Cleanup {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

#[tokio::test]
async fn missing_file_reads_as_empty() {
    let store = FileStore::new(temp_path());
    assert!(store.list().await.unwrap().is_empty());
    assert!(store.find_by_id("1").await.unwrap().is_none());
}

#[tokio::test]
async fn append_then_list_preserves_order() {
    let path = temp_path();
    let _cleanup = Cleanup(path.clone());
    let store = FileStore::new(&path);

    store.append(dummy_file("a", "a.md")).await.unwrap();
    store.append(dummy_file("b", "b.md")).await.unwrap();

    let files = store.list().await.unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].id, "a");
    assert_eq!(files[1].id, "b");
    assert_eq!(store.find_by_id("b").await.unwrap().unwrap().name, "b.md");
}

#[tokio::test]
async fn contents_survive_a_new_handle() {
    let path = temp_path();
    let _cleanup = Cleanup(path.clone());

    FileStore::new(&path).append(dummy_file("keep", "keep.md")).await.unwrap();
    let reopened = FileStore::new(&path);
    assert!(reopened.find_by_id("keep").await.unwrap().is_some());
}

#[tokio::test]
async fn seed_if_missing_writes_once() {
    let path = temp_path();
    let _cleanup = Cleanup(path.clone());
    let store = FileStore::new(&path);

    let seeded = store.seed_if_missing(&[dummy_file("1", "one.md")]).await.unwrap();
    assert!(seeded);
    let again = store.seed_if_missing(&[dummy_file("2", "two.md")]).await.unwrap();
    assert!(!again);

    let ids: Vec<String> = store.list().await.unwrap().into_iter().map(|f| f.id).collect();
    assert_eq!(ids, vec!["1"]);
}

#[tokio::test]
async fn concurrent_appends_produce_whole_lines() {
    let path = temp_path();
    let _cleanup = Cleanup(path.clone());
    let store = std::sync::Arc::new(FileStore::new(&path));

    let mut handles = Vec::new();
    for i in 0..20 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.append(dummy_file(&i.to_string(), "c.md")).await.unwrap();
        }));
    }
    for h in handles {
        h.await.unwrap();
    }
    assert_eq!(store.list().await.unwrap().len(), 20);
}

#[test]
fn parse_lines_skips_blank_lines() {
    let line = serde_json::to_string(&dummy_file("1", "a.md")).unwrap();
    let raw = format!("\n{line}\n   \n{line}\n");
    let files = parse_lines(Path::new("x.jsonl"), &raw).unwrap();
    assert_eq!(files.len(), 2);
}

#[test]
fn parse_lines_reports_malformed_line_number() {
    let line = serde_json::to_string(&dummy_file("1", "a.md")).unwrap();
    let raw = format!("{line}\nnot json\n");
    let err = parse_lines(Path::new("x.jsonl"), &raw).unwrap_err();
    assert!(matches!(err, StoreError::Malformed { line: 2, .. }));
}
