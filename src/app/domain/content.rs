/// One of the two fixed partitions of scripture books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    pub const ALL: [Testament; 2] = [Testament::Old, Testament::New];

    /// Category label as it appears in the catalog.
    pub fn label(self) -> &'static str {
        match self {
            Testament::Old => "ብሉይ ኪዳን",
            Testament::New => "አዲስ ኪዳን",
        }
    }
}

/// An illustrated story, paged one text block at a time.
#[derive(Debug, PartialEq, Eq)]
pub struct Story {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
    /// Page texts in reading order. Never empty.
    pub content: &'static [&'static str],
    pub image_url: &'static str,
    /// Display colour tag for the card background.
    pub color: &'static str,
    /// Scripture references the story is drawn from.
    pub verses: &'static [&'static str],
}

impl Story {
    pub fn page_count(&self) -> usize {
        self.content.len()
    }

    /// Excerpt of the first page used when sharing, cut at `max_chars` characters.
    pub fn excerpt(&self, max_chars: usize) -> String {
        self.content
            .first()
            .map(|page| page.chars().take(max_chars).collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ScriptureBook {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Testament,
    pub chapters_count: u32,
}

/// A chapter-relative verse, generated on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    pub number: u32,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testament_labels() {
        assert_eq!(Testament::Old.label(), "ብሉይ ኪዳን");
        assert_eq!(Testament::New.label(), "አዲስ ኪዳን");
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        let story = Story {
            id: "x",
            title: "t",
            category: "c",
            summary: "s",
            content: &["በመጀመሪያ እግዚአብሔር"],
            image_url: "",
            color: "bg-blue-50",
            verses: &[],
        };
        assert_eq!(story.excerpt(3), "በመጀ");
        assert_eq!(story.excerpt(100), "በመጀመሪያ እግዚአብሔር");
    }
}
