use crate::app::domain::{ScriptureBook, Story, Testament};

/// Catalog entry that can be matched by the search box.
pub trait Searchable {
    /// Title of a story, name of a book.
    fn title(&self) -> &str;

    fn category(&self) -> &str;
}

impl Searchable for Story {
    fn title(&self) -> &str {
        self.title
    }

    fn category(&self) -> &str {
        self.category
    }
}

impl Searchable for ScriptureBook {
    fn title(&self) -> &str {
        self.name
    }

    fn category(&self) -> &str {
        self.category.label()
    }
}

/// Case-insensitive substring match on title or category.
pub fn matches<T: Searchable + ?Sized>(item: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    item.title().to_lowercase().contains(&needle)
        || item.category().to_lowercase().contains(&needle)
}

/// Items whose title or category contains `query`, in catalog order.
/// An empty query keeps everything.
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    items.iter().filter(|item| matches(*item, query)).collect()
}

pub fn filter_stories<'a>(stories: &'a [Story], query: &str) -> Vec<&'a Story> {
    filter(stories, query)
}

pub fn filter_books<'a>(books: &'a [ScriptureBook], query: &str) -> Vec<&'a ScriptureBook> {
    filter(books, query)
}

/// Split an already filtered book list into one testament's section.
pub fn books_by_testament<'a>(
    books: &[&'a ScriptureBook],
    testament: Testament,
) -> Vec<&'a ScriptureBook> {
    books
        .iter()
        .copied()
        .filter(|b| b.category == testament)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::catalog::{BIBLE_BOOKS, STORIES};

    struct Entry {
        title: &'static str,
        category: &'static str,
    }

    impl Searchable for Entry {
        fn title(&self) -> &str {
            self.title
        }

        fn category(&self) -> &str {
            self.category
        }
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry { title: "Noah and the Ark", category: "Obedience" },
            Entry { title: "David and Goliath", category: "Courage" },
            Entry { title: "Creation", category: "The First Story" },
            Entry { title: "Daniel", category: "courage" },
        ]
    }

    fn titles(found: &[&Entry]) -> Vec<&'static str> {
        found.iter().map(|e| e.title).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let items = entries();
        assert_eq!(
            titles(&filter(&items, "")),
            vec!["Noah and the Ark", "David and Goliath", "Creation", "Daniel"]
        );
        assert_eq!(filter(&BIBLE_BOOKS, "").len(), BIBLE_BOOKS.len());
    }

    #[test]
    fn test_matches_title_or_category_case_insensitively() {
        let items = entries();
        assert_eq!(titles(&filter(&items, "COURAGE")), vec!["David and Goliath", "Daniel"]);
        assert_eq!(titles(&filter(&items, "ark")), vec!["Noah and the Ark"]);
        assert_eq!(titles(&filter(&items, "first")), vec!["Creation"]);
    }

    #[test]
    fn test_result_is_stable_and_partitions_input() {
        let items = entries();
        for query in ["a", "d", "on", "zz", "the"] {
            let found = filter(&items, query);
            for item in &items {
                let included = found.iter().any(|f| std::ptr::eq(*f, item));
                assert_eq!(included, matches(item, query), "query {query:?}");
            }
            // Order preserved: positions strictly increase.
            let positions: Vec<usize> = found
                .iter()
                .map(|f| items.iter().position(|i| std::ptr::eq(i, *f)).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter_stories(&STORIES, "zebra").is_empty());
    }

    #[test]
    fn test_amharic_queries() {
        let found = filter_books(&BIBLE_BOOKS, "ወንጌል");
        let ids: Vec<_> = found.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["mat", "mar", "luk", "joh"]);

        // Category match pulls in the whole testament.
        assert_eq!(filter_books(&BIBLE_BOOKS, "አዲስ").len(), 7);

        let found = filter_stories(&STORIES, "ዳዊት");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "3");
    }

    #[test]
    fn test_books_by_testament() {
        let all = filter_books(&BIBLE_BOOKS, "");
        let old = books_by_testament(&all, Testament::Old);
        let new = books_by_testament(&all, Testament::New);
        assert_eq!(old.len(), 8);
        assert_eq!(new.len(), 7);
        assert_eq!(old[0].id, "gen");
        assert_eq!(new[0].id, "mat");
    }
}
