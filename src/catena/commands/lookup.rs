use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::reference::reference;
use crate::store::CommentaryStore;

pub fn run<S: CommentaryStore>(store: &S, raw: &str) -> Result<CmdResult> {
    let parsed = reference(raw)?;
    let commentaries = store.commentaries(&parsed)?;

    let mut result = CmdResult::default();
    if commentaries.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No commentaries found for {}.",
            parsed.label()
        )));
    }

    Ok(result
        .with_reference(parsed)
        .with_commentaries(commentaries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::CatenaError;
    use crate::reference::ReferenceError;
    use crate::store::memory::fixtures::StoreFixture;

    fn fixture() -> StoreFixture {
        StoreFixture::new()
            .with_commentary("Augustine", 410, "john", (3, 1), (3, 21))
            .with_commentary("Origen", 230, "john", (3, 16), (3, 16))
            .with_commentary("Cyril", 430, "songofsolomon", (1, 1), (1, 2))
    }

    #[test]
    fn finds_commentaries_in_display_order() {
        let result = run(&fixture().store, "Jn 3:16").unwrap();

        let fathers: Vec<_> = result
            .commentaries
            .iter()
            .map(|c| c.father_name.as_str())
            .collect();
        assert_eq!(fathers, vec!["Origen", "Augustine"]);
        assert_eq!(result.reference.unwrap().as_tuple(), ("john", 3_000_016, 3_000_016));
        assert!(result.messages.is_empty());
    }

    #[test]
    fn resolves_multi_word_aliases() {
        let result = run(&fixture().store, "Song of Songs 1:2").unwrap();
        assert_eq!(result.commentaries.len(), 1);
        assert_eq!(result.commentaries[0].father_name, "Cyril");
    }

    #[test]
    fn reports_empty_results() {
        let result = run(&fixture().store, "John 5").unwrap();
        assert!(result.commentaries.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert!(result.messages[0].content.contains("John 5:1-99999"));
    }

    #[test]
    fn propagates_reference_errors() {
        let err = run(&fixture().store, "Jack 3:16").unwrap_err();
        assert!(matches!(
            err,
            CatenaError::Reference(ReferenceError::BookNotFound { ref name }) if name == "Jack"
        ));
        assert!(err.is_user_error());

        let err = run(&fixture().store, "John3:16").unwrap_err();
        assert!(matches!(
            err,
            CatenaError::Reference(ReferenceError::Style { .. })
        ));
    }
}
