use crate::app::domain::{ScriptureBook, Story, Testament, Verse};

/// Sample verses generated per chapter.
pub const VERSES_PER_CHAPTER: u32 = 15;

pub static BIBLE_BOOKS: [ScriptureBook; 15] = [
    book("gen", "ኦሪት ዘዘፍጥረት", Testament::Old, 50),
    book("exo", "ኦሪት ዘጸአት", Testament::Old, 40),
    book("lev", "ኦሪት ዘሌዋውያን", Testament::Old, 27),
    book("num", "ኦሪት ዘኍልቍ", Testament::Old, 36),
    book("deu", "ኦሪት ዘዳግም", Testament::Old, 34),
    book("jos", "መጽሐፈ ኢያሱ", Testament::Old, 24),
    book("psa", "መዝሙረ ዳዊት", Testament::Old, 150),
    book("isa", "ትንቢተ ኢሳይያስ", Testament::Old, 66),
    book("mat", "የማቴዎስ ወንጌል", Testament::New, 28),
    book("mar", "የማርቆስ ወንጌል", Testament::New, 16),
    book("luk", "የሉቃስ ወንጌል", Testament::New, 24),
    book("joh", "የዮሐንስ ወንጌል", Testament::New, 21),
    book("act", "የሐዋርያት ሥራ", Testament::New, 28),
    book("rom", "ወደ ሮሜ ሰዎች", Testament::New, 16),
    book("rev", "የዮሐንስ ራእይ", Testament::New, 22),
];

const fn book(
    id: &'static str,
    name: &'static str,
    category: Testament,
    chapters_count: u32,
) -> ScriptureBook {
    ScriptureBook {
        id,
        name,
        category,
        chapters_count,
    }
}

pub static STORIES: [Story; 3] = [
    Story {
        id: "1",
        title: "የዓለም አፈጣጠር",
        category: "የመጀመሪያው ታሪክ",
        summary: "እግዚአብሔር ዓለምን እንዴት እንደፈጠረ የሚናገር ታሪክ።",
        content: &[
            "በመጀመሪያ እግዚአብሔር ሰማይንና ምድርን ፈጠረ።",
            "ምድርም ባዶ ነበረች፥ አንዳችም አልነበረባትም፤ ጨለማም በጥልቁ ላይ ነበረ።",
            "እግዚአብሔርም፦ ብርሃን ይሁን አለ፤ ብርሃንም ሆነ።",
            "እግዚአብሔርም ብርሃኑ መልካም እንደ ሆነ አየ፤ እግዚአብሔርም ብርሃኑንና ጨለማውን ለየ።",
        ],
        image_url: "https://images.unsplash.com/photo-1464822759023-fed622ff2c3b?q=80&w=2070&auto=format&fit=crop",
        color: "bg-blue-50",
        verses: &["ዘፍጥረት 1:1-31"],
    },
    Story {
        id: "2",
        title: "ኖኅና መርከቡ",
        category: "ታዛዥነት",
        summary: "ኖኅ ለእግዚአብሔር በመታዘዝ መርከብ የሠራበት ታሪክ።",
        content: &[
            "እግዚአብሔርም ኖኅን አለው፦ አንተና ቤተ ሰብህ ሁሉ ወደ መርከብ ግቡ።",
            "ኖኅም እግዚአብሔር እንዳዘዘው ሁሉ አደረገ።",
            "ከሰባት ቀን በኋላም የጥፋት ውኃ በምድር ላይ ሆነ።",
        ],
        image_url: "https://images.unsplash.com/photo-1590424765067-167f627fa137?q=80&w=1935&auto=format&fit=crop",
        color: "bg-green-50",
        verses: &["ዘፍጥረት 6-9"],
    },
    Story {
        id: "3",
        title: "ዳዊትና ጎልያድ",
        category: "ድፍረት",
        summary: "ታናሹ ዳዊት ግዙፉን ጎልያድን በእምነት ያሸነፈበት ታሪክ።",
        content: &[
            "ፍልስጥኤማዊውም ተነሥቶ ወደ ዳዊት በቀረበ ጊዜ፥ ዳዊት ፈጥኖ ወደ ሰልፉ ሮጠ።",
            "ዳዊትም እጁን ወደ ኮረጆው ዘርግቶ ከዚያ ድንጋይ ወሰደና ወነጨፈው።",
            "ፍልስጥኤማዊውም በግንባሩ ተመትቶ በምድር ላይ ወደቀ።",
        ],
        image_url: "https://images.unsplash.com/photo-1509021436665-8f07dbf5bf1d?q=80&w=1974&auto=format&fit=crop",
        color: "bg-amber-50",
        verses: &["1 ሳሙኤል 17"],
    },
];

pub fn stories() -> &'static [Story] {
    &STORIES
}

pub fn bible_books() -> &'static [ScriptureBook] {
    &BIBLE_BOOKS
}

/// Lookups for fixtures. The app itself passes catalog references around.
#[cfg(test)]
pub fn story_by_id(id: &str) -> Option<&'static Story> {
    STORIES.iter().find(|s| s.id == id)
}

#[cfg(test)]
pub fn book_by_id(id: &str) -> Option<&'static ScriptureBook> {
    BIBLE_BOOKS.iter().find(|b| b.id == id)
}

/// Sample verses for a chapter. Placeholder text until real scripture is bundled.
pub fn sample_verses(book_name: &str, chapter: u32) -> Vec<Verse> {
    (1..=VERSES_PER_CHAPTER)
        .map(|number| Verse {
            number,
            text: format!(
                "{book_name} ምዕራፍ {chapter} ቁጥር {number} የእግዚአብሔር ቃል ለሕይወታችን ብርሃን ነው። ይህ የናሙና ጥቅስ ነው።"
            ),
        })
        .collect()
}
