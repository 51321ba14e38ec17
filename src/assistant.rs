use crate::config::Config;
use crate::data_models::{AggregatedContext, Answer, CONTEXT_DOCUMENTS};
use crate::error::SearchError;
use crate::fetcher::ContentFetcher;
use crate::search::{DocumentSearch, jurisdiction_query};
use crate::synthesizer::AnswerSynthesizer;

/// Runs search, fetch and synthesis for one question.
pub struct LegalAssistant {
    search: DocumentSearch,
    fetcher: ContentFetcher,
    synthesizer: AnswerSynthesizer,
}

impl LegalAssistant {
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::new();
        Self {
            search: DocumentSearch::new(http.clone(), config),
            fetcher: ContentFetcher::new(http.clone(), config),
            synthesizer: AnswerSynthesizer::new(http, config),
        }
    }

    /// Answers `query`. Only a failed search aborts; every later stage always runs,
    /// even when the earlier ones came back empty.
    pub async fn ask(&self, query: &str) -> Result<Answer, SearchError> {
        let urls = self.search.search(&jurisdiction_query(query)).await?;

        // one at a time, context order follows search order
        let mut context = AggregatedContext::new();
        for url in urls.iter().take(CONTEXT_DOCUMENTS) {
            let excerpt = self.fetcher.fetch(url).await;
            log::info!("fetched {url}: {} chars", excerpt.char_len());
            context.push(&excerpt);
        }

        Ok(self.synthesizer.synthesize(&context, query).await)
    }
}
