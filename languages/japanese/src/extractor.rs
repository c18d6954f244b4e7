//! Entry extraction from jisho.org search-result pages.
//!
//! Each exact-match result block becomes one [`DictionaryEntry`]. Two zones of a block are
//! paired purely by position: furigana slots with headword characters, and meaning-tag
//! blocks with meaning-definition blocks.

use std::sync::LazyLock;

use jisho_types::{DictionaryEntry, Meaning};
use scraper::{ElementRef, Html, Selector};

use crate::reading::reconstruct_reading;

/// Tag texts marking blocks that share the definition layout but define nothing
const NON_DEFINITION_MARKERS: [&str; 2] = ["Other forms", "Notes"];

const TAG_DELIMITER: &str = ", ";

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector `{css}`: {e:?}"))
}

static RESULT_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| selector("div.exact_block > div.concept_light"));
static WRITING: LazyLock<Selector> = LazyLock::new(|| {
    selector("div.concept_light-readings > div.concept_light-representation > span.text")
});
static FURIGANA_SLOT: LazyLock<Selector> = LazyLock::new(|| {
    selector("div.concept_light-readings > div.concept_light-representation > span.furigana > span")
});
static MEANINGS_WRAPPER: LazyLock<Selector> =
    LazyLock::new(|| selector("div.concept_light-meanings > div.meanings-wrapper"));
static MEANING_TAGS: LazyLock<Selector> = LazyLock::new(|| selector("div.meaning-tags"));
static MEANING_DEFINITION: LazyLock<Selector> =
    LazyLock::new(|| selector("div.meaning-definition"));
static MEANING_GLOSS: LazyLock<Selector> = LazyLock::new(|| selector("span.meaning-meaning"));
static ENTRY_TAG: LazyLock<Selector> =
    LazyLock::new(|| selector("div.concept_light-status span.concept_light-tag"));
static MORE_WORDS: LazyLock<Selector> = LazyLock::new(|| selector("a.more"));

/// Result of extracting one search page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub entries: Vec<DictionaryEntry>,
    /// The page links to a further page of words. Informational only.
    pub has_more: bool,
}

/// Extract every exact-match entry of a search page, in page order.
///
/// Malformed or empty markup yields fewer (or no) entries, never an error.
pub fn extract(html: &str) -> Extraction {
    let document = Html::parse_document(html);

    let entries = document
        .select(&RESULT_BLOCK)
        .filter_map(extract_entry)
        .collect();

    Extraction {
        entries,
        has_more: document.select(&MORE_WORDS).next().is_some(),
    }
}

/// Convenience wrapper returning only the entries
pub fn extract_entries(html: &str) -> Vec<DictionaryEntry> {
    extract(html).entries
}

fn extract_entry(block: ElementRef<'_>) -> Option<DictionaryEntry> {
    let writing = block
        .select(&WRITING)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string();

    let slots: Vec<String> = block
        .select(&FURIGANA_SLOT)
        .map(|el| el.text().collect())
        .collect();

    let Some(reading) = reconstruct_reading(&writing, &slots) else {
        tracing::warn!(
            writing = %writing,
            characters = writing.chars().count(),
            slots = slots.len(),
            "furigana slots do not line up with the headword, skipping entry"
        );
        return None;
    };

    let meanings = extract_meanings(block, &writing);

    let tags = block
        .select(&ENTRY_TAG)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect();

    Some(DictionaryEntry {
        writing,
        reading,
        meanings,
        tags,
    })
}

fn extract_meanings(block: ElementRef<'_>, writing: &str) -> Vec<Meaning> {
    let mut tag_texts = Vec::new();
    let mut glosses = Vec::new();

    for wrapper in block.select(&MEANINGS_WRAPPER) {
        tag_texts.extend(wrapper.select(&MEANING_TAGS).map(leading_text));
        glosses.extend(wrapper.select(&MEANING_DEFINITION).map(|definition| {
            definition
                .select(&MEANING_GLOSS)
                .flat_map(|el| el.text())
                .collect::<String>()
        }));
    }

    pair_meanings(tag_texts, glosses).unwrap_or_else(|| {
        tracing::warn!(
            writing = %writing,
            "meaning tags do not line up with definitions, dropping meanings"
        );
        Vec::new()
    })
}

/// Pair the Nth tag text with the Nth gloss, dropping non-definition blocks.
///
/// `None` when the two sequences differ in length.
pub fn pair_meanings(tag_texts: Vec<String>, glosses: Vec<String>) -> Option<Vec<Meaning>> {
    if tag_texts.len() != glosses.len() {
        return None;
    }

    let meanings = tag_texts
        .into_iter()
        .zip(glosses)
        .filter(|(tags, _)| !is_non_definition(tags))
        .map(|(tags, value)| Meaning {
            value,
            tags: split_tags(&tags),
        })
        .collect();

    Some(meanings)
}

fn is_non_definition(tag_text: &str) -> bool {
    NON_DEFINITION_MARKERS
        .iter()
        .any(|marker| tag_text.contains(marker))
}

/// Split a tag line such as `Noun, Suru verb` on `", "` without further trimming
pub fn split_tags(tag_text: &str) -> Vec<String> {
    if tag_text.is_empty() {
        return Vec::new();
    }
    tag_text.split(TAG_DELIMITER).map(String::from).collect()
}

/// The element's first child if it is a text node, else empty
fn leading_text(element: ElementRef<'_>) -> String {
    element
        .children()
        .next()
        .and_then(|node| node.value().as_text().map(|text| String::from(&**text)))
        .unwrap_or_default()
}
