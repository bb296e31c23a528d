//! Command-line interface for training on sample images and synthesizing a new one

use crate::algorithm::pipeline::{Session, TrainingEvent, TrainingParameters};
use crate::io::configuration::{
    DEFAULT_COLOR_COUNT, DEFAULT_HEIGHT, DEFAULT_OUTPUT_NAME, DEFAULT_SEED, DEFAULT_WIDTH,
    SUPPORTED_EXTENSIONS,
};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::io::image::{export_grid_as_png, load_pixel_grid};
use crate::io::model::{load_model, save_model};
use crate::io::progress::ProgressManager;
use crate::spatial::PixelGrid;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "markovtile")]
#[command(
    author,
    version,
    about = "Learn colour transitions from sample images and synthesize a new image"
)]
/// Command-line arguments for training and synthesis
pub struct Cli {
    /// Sample image or directory of sample images
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// Width sample images are resized to
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Height sample images are resized to
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Number of palette colours
    #[arg(short, long, default_value_t = DEFAULT_COLOR_COUNT)]
    pub colors: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Path of the generated PNG
    #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME)]
    pub output: PathBuf,

    /// Width of the generated image (defaults to --width)
    #[arg(long)]
    pub output_width: Option<usize>,

    /// Height of the generated image (defaults to --height)
    #[arg(long)]
    pub output_height: Option<usize>,

    /// Write the trained palette and model as JSON
    #[arg(long, value_name = "JSON")]
    pub save_model: Option<PathBuf>,

    /// Skip training and synthesize from a model saved with --save-model
    #[arg(long, value_name = "JSON", conflicts_with = "target")]
    pub load_model: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Training parameters taken from the arguments
    pub const fn training_parameters(&self) -> TrainingParameters {
        TrainingParameters {
            width: self.width,
            height: self.height,
            color_count: self.colors,
        }
    }

    /// Dimensions of the generated image as (width, height)
    pub fn output_dimensions(&self) -> (usize, usize) {
        (
            self.output_width.unwrap_or(self.width),
            self.output_height.unwrap_or(self.height),
        )
    }
}

/// Runs one training and synthesis pass with progress reporting
pub struct RunProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl RunProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Train or load a model, then synthesize and export an image
    ///
    /// # Errors
    ///
    /// Returns an error if parameters are invalid, no samples are found,
    /// no model is available, or any file cannot be read or written.
    pub fn process(&mut self) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let mut session = Session::new();

        if let Some(model_path) = self.cli.load_model.clone() {
            let trained = load_model(&model_path)?;
            self.status(&format!(
                "Loaded model from {} with {} unique colors",
                model_path.display(),
                trained.model.source_count()
            ));
            session.install(trained);
        } else if let Some(target) = self.cli.target.clone() {
            self.train(&target, &mut session, &mut rng)?;
        }

        if let (Some(trained), Some(model_path)) = (session.trained(), &self.cli.save_model) {
            save_model(trained, model_path)?;
            self.status(&format!("Saved model to {}", model_path.display()));
        }

        let (width, height) = self.cli.output_dimensions();
        self.start_stage("Generating new image...");
        let generated = session.generate(width, height, &mut rng)?;
        export_grid_as_png(&generated, &self.cli.output)?;
        self.finish_stage(format!(
            "Image generation complete: {}",
            self.cli.output.display()
        ));

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
            pm.status(&format!("Done after {} stages", pm.completed_stages()));
        }

        Ok(())
    }

    fn train(&mut self, target: &Path, session: &mut Session, rng: &mut StdRng) -> Result<()> {
        let parameters = self.cli.training_parameters();
        parameters.validate()?;

        let files = collect_files(target)?;
        if files.is_empty() {
            return Err(AlgorithmError::NoSourceImages);
        }

        let grids = self.load_grids(&files, parameters)?;

        let quiet = self.cli.quiet;
        let progress = &mut self.progress_manager;
        session.process_with(&grids, parameters.color_count, rng, |event| {
            report_training(progress.as_mut(), event, parameters.color_count, quiet);
        })?;

        Ok(())
    }

    fn load_grids(
        &mut self,
        files: &[PathBuf],
        parameters: TrainingParameters,
    ) -> Result<Vec<PixelGrid>> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_loading(files.len());
        }

        let mut grids = Vec::with_capacity(files.len());
        for file in files {
            if let Some(ref pm) = self.progress_manager {
                pm.loading_image(file);
            }
            grids.push(load_pixel_grid(file, parameters.width, parameters.height)?);
            if let Some(ref pm) = self.progress_manager {
                pm.image_loaded();
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish_loading();
        }

        Ok(grids)
    }

    fn start_stage(&mut self, message: &str) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_stage(message);
        }
    }

    fn finish_stage(&mut self, message: String) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.finish_stage(Some(message));
        }
    }

    fn status(&self, message: &str) {
        if let Some(ref pm) = self.progress_manager {
            pm.status(message);
        }
    }
}

fn report_training(
    progress: Option<&mut ProgressManager>,
    event: TrainingEvent<'_>,
    requested_colors: usize,
    quiet: bool,
) {
    if let TrainingEvent::Quantized(palette) = event {
        // Allow print for user feedback when the palette comes up short
        #[allow(clippy::print_stderr)]
        if palette.len() < requested_colors && !quiet {
            eprintln!(
                "Warning: samples contain only {} distinct colors, fewer than the {} requested",
                palette.len(),
                requested_colors
            );
        }
    }

    let Some(pm) = progress else {
        return;
    };
    match event {
        TrainingEvent::Quantizing => pm.start_stage("Quantizing colors..."),
        TrainingEvent::Quantized(palette) => pm.finish_stage(Some(format!(
            "Color quantization complete: {} palette colors",
            palette.len()
        ))),
        TrainingEvent::Learning => pm.start_stage("Learning Markov chain..."),
        TrainingEvent::Learned(model) => pm.finish_stage(Some(format!(
            "Markov chain learning complete. Model has {} unique colors",
            model.source_count()
        ))),
    }
}

/// Sample files named by `target`, sorted by path
///
/// A file must have a supported image extension. A directory contributes
/// every supported file directly inside it.
///
/// # Errors
///
/// Returns an error if `target` is neither a supported image nor a readable
/// directory.
pub fn collect_files(target: &Path) -> Result<Vec<PathBuf>> {
    if target.is_file() {
        if is_supported_image(target) {
            Ok(vec![target.to_path_buf()])
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"unsupported image format",
            ))
        }
    } else if target.is_dir() {
        let entries = std::fs::read_dir(target).map_err(|e| AlgorithmError::FileSystem {
            path: target.to_path_buf(),
            operation: "read directory",
            source: e,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && is_supported_image(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    } else {
        Err(invalid_parameter(
            "target",
            &target.display(),
            &"must be an image file or directory",
        ))
    }
}

/// Whether `path` has an extension from `SUPPORTED_EXTENSIONS`
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}
