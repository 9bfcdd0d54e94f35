use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

/// Lists the whole catalog ordered by title, case-insensitively, then by id.
pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let mut books = store.list_books()?;
    books.sort_by(|a, b| {
        a.title
            .to_lowercase()
            .cmp(&b.title.to_lowercase())
            .then(a.id.cmp(&b.id))
    });

    let mut result = CmdResult::default();
    if books.is_empty() {
        result.add_message(CmdMessage::info("The catalog is empty."));
    }
    Ok(result.with_listed_books(books))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn orders_by_title_ignoring_case() {
        let store = StoreFixture::new()
            .with_book("zebra", "1111111111111", 1)
            .with_book("Apple", "2222222222222", 1)
            .with_book("mango", "3333333333333", 1)
            .store;

        let result = run(&store).unwrap();
        let titles: Vec<_> = result
            .listed_books
            .iter()
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Apple", "mango", "zebra"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn equal_titles_keep_id_order() {
        let store = StoreFixture::new()
            .with_book("Same", "1111111111111", 1)
            .with_book("same", "2222222222222", 1)
            .store;

        let result = run(&store).unwrap();
        assert_eq!(result.listed_books[0].id, 1);
        assert_eq!(result.listed_books[1].id, 2);
    }

    #[test]
    fn empty_catalog_says_so() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages[0].content, "The catalog is empty.");
    }
}
