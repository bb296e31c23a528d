//! JSON persistence for trained palettes and transition models
//!
//! A stored model is a palette of RGB triples plus a flat list of
//! (source, destination, probability) records with `"r,g,b"` keys.

use crate::algorithm::pipeline::TrainedModel;
use crate::analysis::model::TransitionModel;
use crate::color::{Color, ColorKey, Palette};
use crate::io::error::{AlgorithmError, Result, model_format_error};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One directed transition with its probability
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Source colour key
    pub source: String,
    /// Destination colour key
    pub destination: String,
    /// Probability of the transition
    pub probability: f64,
}

/// Serializable form of a trained model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelDocument {
    /// Palette entries in order
    pub palette: Vec<[u8; 3]>,
    /// Transition records in key order
    pub transitions: Vec<TransitionRecord>,
}

impl ModelDocument {
    /// Capture a trained model
    pub fn from_trained(trained: &TrainedModel) -> Self {
        let palette = trained
            .palette
            .colors()
            .iter()
            .map(|&color| <[u8; 3]>::from(color))
            .collect();

        let transitions = trained
            .model
            .records()
            .map(|(source, destination, probability)| TransitionRecord {
                source: source.to_string(),
                destination: destination.to_string(),
                probability,
            })
            .collect();

        Self {
            palette,
            transitions,
        }
    }

    /// Rebuild and validate the trained model
    ///
    /// # Errors
    ///
    /// Returns a model format error if there are no transitions, a key does
    /// not parse, or a source distribution is not a valid probability
    /// distribution.
    pub fn into_trained(self) -> Result<TrainedModel> {
        if self.transitions.is_empty() {
            return Err(model_format_error(&"model contains no transitions"));
        }

        let records = self
            .transitions
            .iter()
            .map(|record| -> Result<(ColorKey, ColorKey, f64)> {
                let source = parse_key(&record.source)?;
                let destination = parse_key(&record.destination)?;
                Ok((source, destination, record.probability))
            })
            .collect::<Result<Vec<_>>>()?;

        let model = TransitionModel::from_records(records)?;
        let palette = Palette::new(self.palette.into_iter().map(Color::from).collect());

        Ok(TrainedModel { palette, model })
    }
}

fn parse_key(key: &str) -> Result<ColorKey> {
    key.parse().map_err(|e| model_format_error(&e))
}

/// Write a trained model as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if the parent directory or the file cannot be written.
pub fn save_model<P: AsRef<Path>>(trained: &TrainedModel, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(&ModelDocument::from_trained(trained))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    std::fs::write(path, json).map_err(|e| AlgorithmError::FileSystem {
        path: path.to_path_buf(),
        operation: "write model",
        source: e,
    })
}

/// Read and validate a model written by [`save_model`]
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or does
/// not describe a valid model.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<TrainedModel> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| AlgorithmError::FileSystem {
        path: path.to_path_buf(),
        operation: "read model",
        source: e,
    })?;

    let document: ModelDocument = serde_json::from_str(&json)?;
    document.into_trained()
}
