use super::CmdResult;
use crate::error::Result;
use crate::model::{Area, Jot};
use crate::store::RecordStore;

/// Read a record's content, reassembled line by line and rejoined with
/// '\n'. A trailing newline is dropped and CRLF collapses to LF.
pub fn run<S: RecordStore>(store: &S, area: Area, name: &str) -> Result<CmdResult> {
    let raw = store.read(area, name)?;
    let content = raw.lines().collect::<Vec<_>>().join("\n");
    Ok(CmdResult::default().with_jots(vec![Jot::new(name.to_string(), area, content)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JotzError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::MemoryStore;
    use crate::store::RecordStore;

    fn read_content(store: &MemoryStore, name: &str) -> String {
        let result = run(store, Area::Persistent, name).unwrap();
        result.jots[0].content.clone()
    }

    #[test]
    fn read_missing_record_fails() {
        let store = MemoryStore::new();
        let err = run(&store, Area::Persistent, "ghost").unwrap_err();
        assert!(matches!(err, JotzError::NotFound { .. }));
    }

    #[test]
    fn plain_content_round_trips() {
        let fixture =
            StoreFixture::new().with_record(Area::Persistent, "notes", "hello world");
        assert_eq!(read_content(&fixture.store, "notes"), "hello world");
    }

    #[test]
    fn multiline_content_is_rejoined() {
        let fixture =
            StoreFixture::new().with_record(Area::Persistent, "notes", "line1\nline2");
        assert_eq!(read_content(&fixture.store, "notes"), "line1\nline2");
    }

    #[test]
    fn trailing_newline_is_dropped() {
        let fixture = StoreFixture::new().with_record(Area::Persistent, "notes", "a\nb\n");
        assert_eq!(read_content(&fixture.store, "notes"), "a\nb");
    }

    #[test]
    fn crlf_is_normalized() {
        let fixture =
            StoreFixture::new().with_record(Area::Persistent, "notes", "a\r\nb\r\n");
        assert_eq!(read_content(&fixture.store, "notes"), "a\nb");
    }

    #[test]
    fn interior_blank_lines_survive() {
        let fixture = StoreFixture::new().with_record(Area::Persistent, "notes", "a\n\nb");
        assert_eq!(read_content(&fixture.store, "notes"), "a\n\nb");
    }

    #[test]
    fn reading_already_normalized_content_is_stable() {
        let mut fixture = StoreFixture::new().with_record(Area::Persistent, "notes", "a\nb\n");
        let first = read_content(&fixture.store, "notes");
        fixture
            .store
            .write(Area::Persistent, "notes", &first)
            .unwrap();
        assert_eq!(read_content(&fixture.store, "notes"), first);
    }

    #[test]
    fn freshly_created_record_reads_empty() {
        let fixture = StoreFixture::new().with_empty_record(Area::Persistent, "blank");
        assert_eq!(read_content(&fixture.store, "blank"), "");
    }
}
