use crate::app::domain::Language;

/// Every UI string, one field per key. Both languages fill the same struct,
/// so the key sets cannot drift apart.
#[derive(Debug, PartialEq, Eq)]
pub struct Translation {
    pub welcome: &'static str,
    pub subtitle: &'static str,
    pub search_stories: &'static str,
    pub search_bible: &'static str,
    pub stories: &'static str,
    pub bible: &'static str,
    pub full_bible: &'static str,
    pub old_testament: &'static str,
    pub new_testament: &'static str,
    pub no_results: &'static str,
    pub chapters: &'static str,
    pub select_chapter: &'static str,
    pub back: &'static str,
    pub next: &'static str,
    pub previous: &'static str,
    pub finish: &'static str,
    pub share: &'static str,
    pub settings: &'static str,
    pub home: &'static str,
    pub audio_soon: &'static str,
    pub link_copied: &'static str,
    pub story_finished: &'static str,
    pub loading: &'static str,
    pub night_mode: &'static str,
    pub language: &'static str,
    pub switch_language: &'static str,
    pub read_bible: &'static str,
    /// Badge next to the greeting on the home screen.
    pub daily_word: &'static str,
    /// Verse quoted on the scripture banner.
    pub banner_verse: &'static str,
}

impl Translation {
    pub fn for_language(language: Language) -> &'static Translation {
        match language {
            Language::Am => &AMHARIC,
            Language::En => &ENGLISH,
        }
    }
}

pub static AMHARIC: Translation = Translation {
    welcome: "ሰላም ለእናንተ ይሁን! 👋",
    subtitle: "የእግዚአብሔርን ቃል ለልጆች በሚሆን መልክ እናንብብ።",
    search_stories: "ታሪኮችን ፈልግ...",
    search_bible: "የመጽሐፍ ቅዱስ መጻሕፍትን ፈልግ...",
    stories: "ታሪኮች",
    bible: "መጽሐፍ ቅዱስ",
    full_bible: "ሙሉ መጽሐፍ ቅዱስ",
    old_testament: "ብሉይ ኪዳን",
    new_testament: "አዲስ ኪዳን",
    no_results: "ምንም አልተገኘም",
    chapters: "ምዕራፎች",
    select_chapter: "ምዕራፍ ይምረጡ",
    back: "ወደ ኋላ",
    next: "ቀጣይ",
    previous: "የበፊቱ",
    finish: "ጨርስ",
    share: "አጋራ",
    settings: "መቼት",
    home: "ቤት",
    audio_soon: "ኦዲዮ በቅርቡ ይለቀቃል",
    link_copied: "ሊንኩ ተገልብጧል!",
    story_finished: "ታሪኩን ጨርሰሃል! ጎበዝ!",
    loading: "እየጫነ ነው...",
    night_mode: "የምሽት ሁኔታ",
    language: "ቋንቋ",
    switch_language: "Switch to English",
    read_bible: "መጽሐፍ ቅዱስን አንብብ",
    daily_word: "ዛሬም ቃሉን እናንብብ",
    banner_verse: "\"ሕግህ ለእግሬ መብራት፤ ለመንገዴም ብርሃን ነው፤\" መዝ 119:105",
};

pub static ENGLISH: Translation = Translation {
    welcome: "Peace be with you! 👋",
    subtitle: "Let's read God's word in a way that's easy for kids.",
    search_stories: "Search stories...",
    search_bible: "Search Bible books...",
    stories: "Stories",
    bible: "Bible",
    full_bible: "Full Bible",
    old_testament: "Old Testament",
    new_testament: "New Testament",
    no_results: "No results found",
    chapters: "chapters",
    select_chapter: "Select Chapter",
    back: "Back",
    next: "Next",
    previous: "Previous",
    finish: "Finish",
    share: "Share",
    settings: "Settings",
    home: "Home",
    audio_soon: "Audio coming soon",
    link_copied: "Link copied!",
    story_finished: "You finished the story! Well done!",
    loading: "Loading...",
    night_mode: "Night Mode",
    language: "Language",
    switch_language: "ወደ አማርኛ ቀይር",
    read_bible: "Read Bible",
    daily_word: "Read the Word today",
    banner_verse: "\"Your word is a lamp to my feet and a light to my path.\" Ps 119:105",
};
