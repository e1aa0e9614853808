//! Shared test data for the integration tests.

#![allow(dead_code)]

use msone_dictionary::engine::{DictionaryEngine, EngineOptions};
use msone_dictionary::store::RecordStore;
use msone_dictionary::Record;
use std::sync::Arc;

/// CSV header used by the dataset.
pub const CSV_HEADER: &str = "English Word,Malayalam Word,Base word,Hypothetical Attention Score,column_1,column_2,column_3,column_4,column_5,column_6";

/// A small dataset covering exact, partial, and low-score matches.
pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new("run", "ഓടി", "ഓടുക", 0.6)
            .with_source("Forrest Gump", "E01")
            .with_contexts(Some("Run, Forrest, run!"), Some("ഓടി ഫോറസ്റ്റ്, ഓടി!")),
        Record::new("run", "ഓടുന്നു", "ഓടുക", 0.3)
            .with_source("Forrest Gump", "E02")
            .with_contexts(Some("He can run."), Some("അവൻ ഓടുന്നു.")),
        Record::new("category", "വിഭാഗം", "വിഭാഗം", 0.8)
            .with_source("QI", "S03")
            .with_contexts(Some("Pick a category."), Some("ഒരു വിഭാഗം തിരഞ്ഞെടുക്കൂ.")),
        Record::new("cat", "പൂച്ച", "പൂച്ച", 0.9)
            .with_source("Shrek", "E01")
            .with_contexts(
                Some("The cat sat on the cat mat."),
                Some("പൂച്ചയും പൂച്ചക്കുട്ടിയും."),
            ),
        Record::new("Cat", "പൂച്ച", "പൂച്ച", 0.7).with_source("Shrek", "E02"),
        Record::new("run away", "ഓടിപ്പോകുക", "ഓടിപ്പോകുക", 0.55)
            .with_source("Lion King", "E01")
            .with_contexts(Some("Run away, Simba."), Some("ഓടിപ്പോകൂ, സിംബാ.")),
    ]
}

/// A store over [`sample_records`].
pub fn sample_store() -> RecordStore {
    RecordStore::new(sample_records())
}

/// An engine over [`sample_records`] with default options.
pub fn sample_engine() -> DictionaryEngine {
    DictionaryEngine::new(Arc::new(sample_store()), EngineOptions::default())
}

/// English words of a result list, in order.
pub fn english_words<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Arc<Record>>,
{
    records
        .into_iter()
        .map(|r| r.english_word.clone())
        .collect()
}
