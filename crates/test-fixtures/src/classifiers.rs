//! Scriptable classification capabilities.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tenet_core::errors::ClassificationError;
use tenet_core::models::Vocabulary;
use tenet_core::traits::ICategoryClassifier;

/// Always answers with the same raw response.
pub struct FixedClassifier {
    response: String,
}

impl FixedClassifier {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

impl ICategoryClassifier for FixedClassifier {
    fn classify(&self, _text: &str, _vocabulary: &Vocabulary) -> Result<String, ClassificationError> {
        Ok(self.response.clone())
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

type Scripted = Result<String, ClassificationError>;

/// Answers from a script keyed by (vocabulary name, text), falling back to a
/// per-vocabulary default. Unscripted requests fail as unavailable.
#[derive(Default)]
pub struct ScriptedClassifier {
    exact: HashMap<(String, String), Scripted>,
    by_vocabulary: HashMap<String, Scripted>,
    calls: AtomicUsize,
}

impl ScriptedClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, vocabulary: &str, text: &str, response: &str) -> Self {
        self.exact.insert(
            (vocabulary.to_string(), text.to_string()),
            Ok(response.to_string()),
        );
        self
    }

    pub fn fail(mut self, vocabulary: &str, text: &str, error: ClassificationError) -> Self {
        self.exact
            .insert((vocabulary.to_string(), text.to_string()), Err(error));
        self
    }

    pub fn default_for(mut self, vocabulary: &str, response: &str) -> Self {
        self.by_vocabulary
            .insert(vocabulary.to_string(), Ok(response.to_string()));
        self
    }

    pub fn fail_for(mut self, vocabulary: &str, error: ClassificationError) -> Self {
        self.by_vocabulary.insert(vocabulary.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ICategoryClassifier for ScriptedClassifier {
    fn classify(&self, text: &str, vocabulary: &Vocabulary) -> Result<String, ClassificationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.exact
            .get(&(vocabulary.name.clone(), text.to_string()))
            .or_else(|| self.by_vocabulary.get(&vocabulary.name))
            .cloned()
            .unwrap_or_else(|| {
                Err(ClassificationError::Unavailable {
                    reason: format!("unscripted {} request", vocabulary.name),
                })
            })
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Fails the first `failures` calls per vocabulary, then delegates.
pub struct FlakyClassifier<C> {
    inner: C,
    failures: usize,
    seen: Mutex<HashMap<String, usize>>,
}

impl<C: ICategoryClassifier> FlakyClassifier<C> {
    pub fn new(inner: C, failures: usize) -> Self {
        Self {
            inner,
            failures,
            seen: Mutex::new(HashMap::new()),
        }
    }
}

impl<C: ICategoryClassifier> ICategoryClassifier for FlakyClassifier<C> {
    fn classify(&self, text: &str, vocabulary: &Vocabulary) -> Result<String, ClassificationError> {
        let attempt = {
            let mut seen = self.seen.lock().unwrap();
            let n = seen.entry(vocabulary.name.clone()).or_insert(0);
            *n += 1;
            *n
        };
        if attempt <= self.failures {
            return Err(ClassificationError::Unavailable {
                reason: format!("flaky attempt {attempt}"),
            });
        }
        self.inner.classify(text, vocabulary)
    }

    fn name(&self) -> &str {
        "flaky"
    }
}
