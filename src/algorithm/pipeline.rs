//! Training and synthesis orchestration
//!
//! Stages hand immutable values to one another: quantization produces a
//! `Palette`, learning consumes it and produces a `TransitionModel`, and
//! synthesis consumes that to produce a `PixelGrid`. A `Session` keeps the
//! most recent trained model and replaces it only when a run fully succeeds.

use crate::algorithm::synthesis::{check_dimension, generate};
use crate::analysis::model::TransitionModel;
use crate::analysis::quantization::quantize;
use crate::analysis::transitions::learn;
use crate::color::{Color, Palette};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::spatial::PixelGrid;
use rand::Rng;

/// User supplied training parameters, validated before any stage runs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrainingParameters {
    /// Width every sample image is resized to
    pub width: usize,
    /// Height every sample image is resized to
    pub height: usize,
    /// Requested palette size
    pub color_count: usize,
}

impl TrainingParameters {
    /// Check that every parameter is positive and within limits
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first offending parameter.
    pub fn validate(&self) -> Result<()> {
        check_dimension("width", self.width)?;
        check_dimension("height", self.height)?;
        check_color_count(self.color_count)
    }
}

/// Palette and transition model produced by one training run
#[derive(Clone, Debug, PartialEq)]
pub struct TrainedModel {
    /// Quantized palette
    pub palette: Palette,
    /// Transition model learned over the palette
    pub model: TransitionModel,
}

impl TrainedModel {
    /// Synthesize a new grid from the trained model
    ///
    /// # Errors
    ///
    /// See [`generate`].
    pub fn generate<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<PixelGrid> {
        generate(&self.model, width, height, rng)
    }
}

/// Progress notifications emitted while training
#[derive(Clone, Copy, Debug)]
pub enum TrainingEvent<'a> {
    /// Colour quantization is about to start
    Quantizing,
    /// Quantization finished with this palette
    Quantized(&'a Palette),
    /// Transition learning is about to start
    Learning,
    /// Learning finished with this model
    Learned(&'a TransitionModel),
}

/// Quantize the pooled pixels of `grids` and learn a model over the palette
///
/// # Errors
///
/// Returns:
/// - `NoSourceImages` if `grids` is empty
/// - `InvalidParameter` if `color_count` is zero
/// - A precondition violation if the grids differ in size
pub fn train<R: Rng + ?Sized>(
    grids: &[PixelGrid],
    color_count: usize,
    rng: &mut R,
) -> Result<TrainedModel> {
    train_with(grids, color_count, rng, |_| {})
}

/// [`train`], reporting each stage to `on_event`
///
/// # Errors
///
/// See [`train`].
pub fn train_with<R, F>(
    grids: &[PixelGrid],
    color_count: usize,
    rng: &mut R,
    mut on_event: F,
) -> Result<TrainedModel>
where
    R: Rng + ?Sized,
    F: FnMut(TrainingEvent<'_>),
{
    if grids.is_empty() {
        return Err(AlgorithmError::NoSourceImages);
    }
    check_color_count(color_count)?;

    on_event(TrainingEvent::Quantizing);
    let pixels: Vec<Color> = grids.iter().flat_map(PixelGrid::pixels).collect();
    let palette = quantize(&pixels, color_count, rng)?;
    on_event(TrainingEvent::Quantized(&palette));

    on_event(TrainingEvent::Learning);
    let model = learn(grids, &palette)?;
    on_event(TrainingEvent::Learned(&model));

    Ok(TrainedModel { palette, model })
}

/// Holds the most recently trained model between requests
#[derive(Clone, Debug, Default)]
pub struct Session {
    trained: Option<TrainedModel>,
}

impl Session {
    /// Create a session with no model
    pub const fn new() -> Self {
        Self { trained: None }
    }

    /// Train on `grids` and keep the result
    ///
    /// The previous model is kept if training fails.
    ///
    /// # Errors
    ///
    /// See [`train`].
    pub fn process<R: Rng + ?Sized>(
        &mut self,
        grids: &[PixelGrid],
        color_count: usize,
        rng: &mut R,
    ) -> Result<&TrainedModel> {
        self.process_with(grids, color_count, rng, |_| {})
    }

    /// [`Session::process`], reporting each stage to `on_event`
    ///
    /// # Errors
    ///
    /// See [`train`].
    pub fn process_with<R, F>(
        &mut self,
        grids: &[PixelGrid],
        color_count: usize,
        rng: &mut R,
        on_event: F,
    ) -> Result<&TrainedModel>
    where
        R: Rng + ?Sized,
        F: FnMut(TrainingEvent<'_>),
    {
        let trained = train_with(grids, color_count, rng, on_event)?;
        Ok(&*self.trained.insert(trained))
    }

    /// Adopt an externally built model, such as one loaded from disk
    pub fn install(&mut self, trained: TrainedModel) -> &TrainedModel {
        self.trained.insert(trained)
    }

    /// Currently held model, if any
    pub const fn trained(&self) -> Option<&TrainedModel> {
        self.trained.as_ref()
    }

    /// Synthesize from the held model
    ///
    /// # Errors
    ///
    /// Returns `ModelNotReady` if no model has been trained or installed,
    /// otherwise see [`generate`].
    pub fn generate<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<PixelGrid> {
        self.trained
            .as_ref()
            .ok_or(AlgorithmError::ModelNotReady)?
            .generate(width, height, rng)
    }
}

fn check_color_count(color_count: usize) -> Result<()> {
    if color_count == 0 {
        return Err(invalid_parameter(
            "color count",
            &color_count,
            &"must be positive",
        ));
    }
    Ok(())
}
