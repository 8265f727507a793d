//! Builders for signals and intake candidates.

use tenet_core::models::{Confidence, Dimension, Signal, SignalCandidate, SignalSource, SignalType};

/// Unit vector in the plane at `degrees` from the x axis.
pub fn unit_2d(degrees: f64) -> Vec<f32> {
    let r = degrees.to_radians();
    vec![r.cos() as f32, r.sin() as f32]
}

/// Signal with a content-derived id, sourced from `<category>/<name>.md`.
pub fn signal(
    name: &str,
    dimension: Dimension,
    category: &str,
    embedding: Vec<f32>,
    order: u64,
) -> Signal {
    SignalBuilder::new(name)
        .dimension(dimension)
        .category(category)
        .embedding(embedding)
        .order(order)
        .build()
}

/// Intake candidate from `file_path` in `category`.
pub fn candidate(
    text: &str,
    file_path: &str,
    category: &str,
    confidence: f64,
    extraction_index: u64,
) -> SignalCandidate {
    SignalCandidate {
        text: text.to_string(),
        source: SignalSource::new(file_path, category, extraction_index as u32),
        signal_type: SignalType::Value,
        confidence: Confidence::new(confidence),
        extraction_index,
    }
}

pub struct SignalBuilder {
    text: String,
    file_path: Option<String>,
    category: String,
    position: u32,
    dimension: Option<Dimension>,
    signal_type: SignalType,
    embedding: Vec<f32>,
    confidence: f64,
    order: u64,
}

impl SignalBuilder {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            file_path: None,
            category: "memory".to_string(),
            position: 0,
            dimension: Some(Dimension::Honesty),
            signal_type: SignalType::Value,
            embedding: vec![1.0, 0.0],
            confidence: 0.9,
            order: 0,
        }
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn file(mut self, file_path: &str) -> Self {
        self.file_path = Some(file_path.to_string());
        self
    }

    pub fn position(mut self, position: u32) -> Self {
        self.position = position;
        self
    }

    pub fn dimension(mut self, dimension: Dimension) -> Self {
        self.dimension = Some(dimension);
        self
    }

    pub fn unclassified(mut self) -> Self {
        self.dimension = None;
        self
    }

    pub fn signal_type(mut self, signal_type: SignalType) -> Self {
        self.signal_type = signal_type;
        self
    }

    pub fn embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = embedding;
        self
    }

    pub fn confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn order(mut self, order: u64) -> Self {
        self.order = order;
        self
    }

    pub fn build(self) -> Signal {
        let file_path = self
            .file_path
            .unwrap_or_else(|| format!("{}/{}.md", self.category, self.text));
        let source = SignalSource::new(file_path, self.category, self.position);
        Signal {
            id: Signal::derive_id(&source, &self.text),
            text: self.text,
            source,
            dimension: self.dimension,
            signal_type: self.signal_type,
            embedding: self.embedding,
            confidence: Confidence::new(self.confidence),
            creation_order: self.order,
        }
    }
}
