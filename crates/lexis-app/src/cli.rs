use std::path::PathBuf;

use clap::Parser;
use lexis_core::{DictionaryScraper, DictionaryWord, SourceId};

/// Look a word up in an online dictionary and print it as JSON
#[derive(Debug, Parser)]
#[command(name = "lexis", version)]
pub struct Cli {
    /// Word to look up
    #[arg(required_unless_present = "list_sources")]
    pub word: Option<String>,

    /// Dictionary source to search
    #[arg(short, long, default_value = "CAMBRIDGE")]
    pub source: String,

    /// JSON config file; environment variables are used when absent
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON record
    #[arg(long)]
    pub pretty: bool,

    /// Print the registered sources and exit
    #[arg(long)]
    pub list_sources: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

/// What a CLI invocation produced
#[derive(Debug)]
pub enum Outcome {
    Sources(Vec<SourceId>),
    Found(DictionaryWord),
    NotFound { word: String, source: SourceId },
}

pub async fn run(cli: &Cli, registry: &DictionaryScraper) -> anyhow::Result<Outcome> {
    if cli.list_sources {
        return Ok(Outcome::Sources(registry.sources().to_vec()));
    }

    let word = cli
        .word
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("A word is required"))?;
    let source = SourceId::new(cli.source.to_uppercase());

    tracing::info!("Searching `{}` in {}", word, source);
    match registry.search(word, &source).await? {
        Some(found) => Ok(Outcome::Found(found)),
        None => Ok(Outcome::NotFound {
            word: word.to_string(),
            source,
        }),
    }
}

pub fn render(word: &DictionaryWord, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        word.to_json_pretty()?
    } else {
        word.to_json()?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use lexis_core::{DictionaryEntry, IpaEntry, Region, ScrapeError, Scraper};

    use super::*;

    struct EchoScraper;

    #[async_trait]
    impl Scraper for EchoScraper {
        fn source(&self) -> SourceId {
            SourceId::CAMBRIDGE
        }

        async fn scrape(&self, word: &str) -> Result<Option<DictionaryEntry>, ScrapeError> {
            if self.clean_word(word) != "hello" {
                return Ok(None);
            }
            Ok(Some(DictionaryEntry {
                source_links: vec!["http://example.com/pronunciation/hello".to_string()],
                pronunciations: BTreeMap::from([(
                    Region::Uk,
                    vec![IpaEntry {
                        category: String::new(),
                        ipa: "/heˈləʊ/".to_string(),
                        audio_url: "http://example.com/hello.mp3".to_string(),
                    }],
                )]),
                meanings: vec![],
            }))
        }
    }

    fn registry() -> DictionaryScraper {
        let mut registry = DictionaryScraper::new();
        registry.register(Arc::new(EchoScraper)).unwrap();
        registry
    }

    #[test]
    fn test_cli_requires_word_unless_listing() {
        assert!(Cli::try_parse_from(["lexis"]).is_err());
        assert!(Cli::try_parse_from(["lexis", "--list-sources"]).is_ok());

        let cli = Cli::try_parse_from(["lexis", "hello", "--source", "cambridge"]).unwrap();
        assert_eq!(cli.word.as_deref(), Some("hello"));
        assert_eq!(cli.source, "cambridge");
        assert!(!cli.pretty);
    }

    #[tokio::test]
    async fn test_run_lists_sources() {
        let cli = Cli::try_parse_from(["lexis", "--list-sources"]).unwrap();

        match run(&cli, &registry()).await.unwrap() {
            Outcome::Sources(sources) => assert_eq!(sources, vec![SourceId::CAMBRIDGE]),
            other => panic!("Unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_run_finds_word_case_insensitive_source() {
        let cli = Cli::try_parse_from(["lexis", "Hello", "-s", "cambridge"]).unwrap();

        match run(&cli, &registry()).await.unwrap() {
            Outcome::Found(word) => {
                assert_eq!(word.search_word, "Hello");
                let json = render(&word, false).unwrap();
                assert!(json.starts_with(r#"{"source":"CAMBRIDGE","searchWord":"Hello""#));
            }
            other => panic!("Unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_run_reports_not_found() {
        let cli = Cli::try_parse_from(["lexis", "goodbye"]).unwrap();

        assert!(matches!(
            run(&cli, &registry()).await.unwrap(),
            Outcome::NotFound { ref word, .. } if word == "goodbye"
        ));
    }

    #[tokio::test]
    async fn test_run_unknown_source_is_error() {
        let cli = Cli::try_parse_from(["lexis", "hello", "--source", "oxford"]).unwrap();

        let err = run(&cli, &registry()).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "No scraper has been registered for this source: OXFORD"
        );
    }
}
