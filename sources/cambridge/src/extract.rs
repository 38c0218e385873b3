//! Markup -> data for Cambridge Dictionary pages.
//!
//! Both functions are pure: they see one document and never touch the network.

use std::sync::LazyLock;

use lexis_core::{IpaEntry, MeaningEntry, PronunciationListing, Region, ScrapeError, WordMeaning};
use scraper::{ElementRef, Html, Selector};

// Pronunciation page
const PRON_BLOCK_SELECTOR_STR: &str = ".pron-block";
const PART_OF_SPEECH_SELECTOR_STR: &str = ".posgram > .ti";
const REGION_ENTRY_SELECTOR_STR: &str = ".region-block .pron-info";
const WRITTEN_IPA_SELECTOR_STR: &str = r#".pron[data-title="Written pronunciation"]"#;
const MPEG_SOURCE_SELECTOR_STR: &str = r#".soundfile audio source[type="audio/mpeg"]"#;

// Dictionary page
const PRIMARY_DICTIONARY_SELECTOR_STR: &str = ".pr.dictionary .di-body";
const CATEGORY_BLOCK_SELECTOR_STR: &str = ".pr.entry-body__el";
const CATEGORY_LABEL_SELECTOR_STR: &str = ".pos-header .posgram";
const DEFINITION_BLOCK_SELECTOR_STR: &str = ".pos-body .pr.dsense .def-block";
const DEFINITION_TEXT_SELECTOR_STR: &str = ".ddef_h .def";
const EXAMPLE_SELECTOR_STR: &str = ".def-body .examp";

const REGION_ATTR: &str = "data-pron-region";

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("Failed to parse static selector - this is a bug")
}

static PRON_BLOCK: LazyLock<Selector> = LazyLock::new(|| selector(PRON_BLOCK_SELECTOR_STR));
static PART_OF_SPEECH: LazyLock<Selector> =
    LazyLock::new(|| selector(PART_OF_SPEECH_SELECTOR_STR));
static REGION_ENTRY: LazyLock<Selector> = LazyLock::new(|| selector(REGION_ENTRY_SELECTOR_STR));
static WRITTEN_IPA: LazyLock<Selector> = LazyLock::new(|| selector(WRITTEN_IPA_SELECTOR_STR));
static MPEG_SOURCE: LazyLock<Selector> = LazyLock::new(|| selector(MPEG_SOURCE_SELECTOR_STR));

static PRIMARY_DICTIONARY: LazyLock<Selector> =
    LazyLock::new(|| selector(PRIMARY_DICTIONARY_SELECTOR_STR));
static CATEGORY_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| selector(CATEGORY_BLOCK_SELECTOR_STR));
static CATEGORY_LABEL: LazyLock<Selector> =
    LazyLock::new(|| selector(CATEGORY_LABEL_SELECTOR_STR));
static DEFINITION_BLOCK: LazyLock<Selector> =
    LazyLock::new(|| selector(DEFINITION_BLOCK_SELECTOR_STR));
static DEFINITION_TEXT: LazyLock<Selector> =
    LazyLock::new(|| selector(DEFINITION_TEXT_SELECTOR_STR));
static EXAMPLE: LazyLock<Selector> = LazyLock::new(|| selector(EXAMPLE_SELECTOR_STR));

/// A region sub-entry that carries both a transcription and a recording
struct RegionIpa {
    region: String,
    ipa: String,
    audio: String,
}

/// Descendant text with whitespace runs collapsed, trimmed
fn normalized_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the region-keyed pronunciation listing of a pronunciation page.
///
/// Every part-of-speech label of a block is paired with every complete
/// region sub-entry of the same block. Audio links are resolved by
/// prefixing `base_url`.
///
/// An empty listing means the page has no pronunciation for the word. A
/// region token outside [`Region`] aborts the whole extraction.
pub fn extract_pronunciations(
    html: &str,
    base_url: &str,
) -> Result<PronunciationListing, ScrapeError> {
    let document = Html::parse_document(html);
    let mut listing = PronunciationListing::new();

    for block in document.select(&PRON_BLOCK) {
        let parts_of_speech = parts_of_speech(block);

        for region_ipa in region_entries(block) {
            let region: Region = region_ipa.region.parse()?;
            let entries = listing.entry(region).or_default();

            for part_of_speech in &parts_of_speech {
                entries.push(IpaEntry {
                    category: part_of_speech.clone(),
                    ipa: region_ipa.ipa.clone(),
                    audio_url: format!("{}{}", base_url, region_ipa.audio),
                });
            }
        }
    }

    tracing::debug!("Extracted pronunciations for {} region(s)", listing.len());
    Ok(listing)
}

/// Labels of a block; a single blank label when it has none
fn parts_of_speech(block: ElementRef<'_>) -> Vec<String> {
    let labels: Vec<String> = block.select(&PART_OF_SPEECH).map(normalized_text).collect();

    if labels.is_empty() {
        return vec![String::new()];
    }
    labels
}

fn region_entries(block: ElementRef<'_>) -> Vec<RegionIpa> {
    block
        .select(&REGION_ENTRY)
        .filter_map(|entry| {
            let region = entry.value().attr(REGION_ATTR).unwrap_or_default();
            let ipa = entry.select(&WRITTEN_IPA).next().map(normalized_text)?;
            let audio = entry
                .select(&MPEG_SOURCE)
                .next()
                .and_then(|source| source.value().attr("src"))?;

            Some(RegionIpa {
                region: region.to_lowercase(),
                ipa,
                audio: audio.to_string(),
            })
        })
        .collect()
}

/// Build the category-grouped meanings of a dictionary page.
///
/// Only the UK dictionary section is read; American and Business English
/// sections on the same page are ignored. Its absence is
/// [`ScrapeError::MalformedDocument`]. Missing labels or definitions inside
/// it degrade to blank strings.
pub fn extract_meanings(html: &str) -> Result<Vec<WordMeaning>, ScrapeError> {
    let document = Html::parse_document(html);

    let dictionary = document.select(&PRIMARY_DICTIONARY).next().ok_or_else(|| {
        ScrapeError::MalformedDocument("No UK dictionary section found".to_string())
    })?;

    let meanings: Vec<WordMeaning> = dictionary.select(&CATEGORY_BLOCK).map(category).collect();

    tracing::debug!("Extracted {} meaning categories", meanings.len());
    Ok(meanings)
}

fn category(block: ElementRef<'_>) -> WordMeaning {
    WordMeaning {
        categories: block
            .select(&CATEGORY_LABEL)
            .next()
            .map(normalized_text)
            .unwrap_or_default(),
        entries: block.select(&DEFINITION_BLOCK).map(meaning).collect(),
    }
}

fn meaning(block: ElementRef<'_>) -> MeaningEntry {
    MeaningEntry {
        meaning: block
            .select(&DEFINITION_TEXT)
            .next()
            .map(normalized_text)
            .unwrap_or_default(),
        examples: block.select(&EXAMPLE).map(normalized_text).collect(),
    }
}
