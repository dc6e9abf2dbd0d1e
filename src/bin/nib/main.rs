//! Nib CLI - stroke texture mapping command-line tool.
//!
//! Usage: nib <COMMAND> [OPTIONS] <INPUT> [OUTPUT]
//!
//! Run `nib --help` for available commands. Set `RUST_LOG=debug` for
//! per-layer diagnostics.

use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;

use nib::algo::texture::{
    self, stroke_length, BakeOptions, EvaluateOptions, FitMethod, InfluenceFilter,
    ModifierReport, TextureMode, TextureModifier, TextureOptions,
};
use nib::algo::Progress;
use nib::io;
use nib::nalgebra::Vector2;
use nib::stroke::GreasePencil;

#[derive(Parser)]
#[command(name = "nib")]
#[command(author, version, about = "Stroke texture mapping CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display document information
    Info {
        /// Input document
        input: PathBuf,
    },

    /// Apply texture mapping at one scene frame
    Apply {
        /// Input document
        input: PathBuf,

        /// Output document
        output: PathBuf,

        /// Scene frame to evaluate
        #[arg(short, long, default_value = "1")]
        frame: i32,

        #[command(flatten)]
        texture: TextureArgs,

        /// Use single-threaded execution (for benchmarking)
        #[arg(long)]
        sequential: bool,
    },

    /// Bake texture mapping into every keyframe
    Bake {
        /// Input document
        input: PathBuf,

        /// Output document
        output: PathBuf,

        #[command(flatten)]
        texture: TextureArgs,

        /// Use single-threaded execution (for benchmarking)
        #[arg(long)]
        sequential: bool,
    },
}

#[derive(Args)]
struct TextureArgs {
    /// Modifier name (seeds the jitter)
    #[arg(long, default_value = "TextureMapping")]
    name: String,

    /// Texture spaces to rewrite
    #[arg(short, long, value_enum, default_value = "stroke")]
    mode: ModeArg,

    /// Stroke UV normalization
    #[arg(long, value_enum, default_value = "constant")]
    fit: FitArg,

    /// Stroke UV scale
    #[arg(long, default_value = "1.0")]
    uv_scale: f64,

    /// Stroke UV offset (u, v)
    #[arg(long, num_args = 2, value_names = ["U", "V"], default_values_t = [0.0, 0.0], allow_negative_numbers = true)]
    uv_offset: Vec<f64>,

    /// Rotation added to every point, in radians
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    alignment_rotation: f64,

    /// Fill rotation, in radians
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    fill_rotation: f64,

    /// Fill offset (u, v)
    #[arg(long, num_args = 2, value_names = ["U", "V"], default_values_t = [0.0, 0.0], allow_negative_numbers = true)]
    fill_offset: Vec<f64>,

    /// Fill scale
    #[arg(long, default_value = "1.0")]
    fill_scale: f64,

    /// Random offset strength
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    random_offset: f64,

    /// Random scale strength
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    random_scale: f64,

    /// Random seed
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    seed: i32,

    /// Only affect this layer
    #[arg(long)]
    layer: Option<String>,

    /// Affect every layer except --layer
    #[arg(long)]
    invert_layer: bool,

    /// Only affect this material
    #[arg(long)]
    material: Option<String>,

    /// Affect every material except --material
    #[arg(long)]
    invert_material: bool,

    /// Only affect this material pass (0 = any)
    #[arg(long, default_value = "0")]
    pass_index: u32,

    /// Affect every material pass except --pass-index
    #[arg(long)]
    invert_pass: bool,

    /// Only affect this layer pass (0 = any)
    #[arg(long, default_value = "0")]
    layer_pass: u32,

    /// Affect every layer pass except --layer-pass
    #[arg(long)]
    invert_layer_pass: bool,

    /// Weight points by this vertex group
    #[arg(long)]
    vertex_group: Option<String>,

    /// Invert vertex group weights
    #[arg(long)]
    invert_vertex_group: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Per-point stroke UVs
    Stroke,
    /// Fill UV state
    Fill,
    /// Both
    StrokeAndFill,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FitArg {
    /// Texture size independent of stroke length
    Constant,
    /// Fit the texture to each stroke's length
    Stroke,
}

impl TextureArgs {
    fn into_modifier(self) -> nib::error::Result<TextureModifier> {
        let mode = match self.mode {
            ModeArg::Stroke => TextureMode::Stroke,
            ModeArg::Fill => TextureMode::Fill,
            ModeArg::StrokeAndFill => TextureMode::StrokeAndFill,
        };
        let fit = match self.fit {
            FitArg::Constant => FitMethod::ConstantLength,
            FitArg::Stroke => FitMethod::FitStroke,
        };

        let filter = InfluenceFilter {
            layer: self.layer,
            invert_layer: self.invert_layer,
            material: self.material,
            invert_material: self.invert_material,
            pass_index: self.pass_index,
            invert_pass: self.invert_pass,
            layer_pass: self.layer_pass,
            invert_layer_pass: self.invert_layer_pass,
            vertex_group: self.vertex_group,
            invert_vertex_group: self.invert_vertex_group,
        };

        let options = TextureOptions::default()
            .with_mode(mode)
            .with_fit_method(fit)
            .with_uv_scale(self.uv_scale)
            .with_uv_offset(pair(&self.uv_offset))
            .with_alignment_rotation(self.alignment_rotation)
            .with_fill(self.fill_rotation, pair(&self.fill_offset), self.fill_scale)
            .with_randomness(self.random_offset, self.random_scale)
            .with_seed(self.seed)
            .with_filter(filter);
        options.validate()?;

        Ok(TextureModifier::new(self.name, options))
    }
}

fn pair(values: &[f64]) -> Vector2<f64> {
    match values {
        [u, v, ..] => Vector2::new(*u, *v),
        _ => Vector2::zeros(),
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Info { input } => {
            cmd_info(&input)?;
        }

        Commands::Apply {
            input,
            output,
            frame,
            texture,
            sequential,
        } => {
            cmd_apply(&input, &output, frame, texture.into_modifier()?, sequential)?;
        }

        Commands::Bake {
            input,
            output,
            texture,
            sequential,
        } => {
            cmd_bake(&input, &output, texture.into_modifier()?, sequential)?;
        }
    }

    Ok(())
}

/// Create a progress reporter that displays a progress bar on the terminal.
fn create_progress() -> Progress {
    let max_percent = Arc::new(AtomicUsize::new(0));

    Progress::new(move |current, total, message| {
        if total == 0 {
            return;
        }

        let percent = if current >= total {
            100
        } else {
            (current * 100) / total
        };

        // Frames finish out of order when parallel; only move forward.
        let previous = max_percent.fetch_max(percent, Ordering::Relaxed);
        if percent <= previous && percent != 100 {
            return;
        }

        let bar_width = 30;
        let filled = (percent * bar_width) / 100;
        let bar = "=".repeat(filled);
        let space = " ".repeat(bar_width - filled);

        eprint!("\r[{}{}] {:3}% {}", bar, space, percent, message);
        let _ = std::io::stderr().flush();

        if current >= total {
            eprintln!();
        }
    })
}

fn print_report(report: &ModifierReport) {
    println!(
        "Strokes: {} textured, {} filtered out",
        report.strokes_affected, report.strokes_skipped
    );
    println!(
        "Points: {} textured, {} outside vertex group",
        report.points_changed, report.points_skipped
    );
    if report.fills_changed > 0 {
        println!("Fills: {} textured", report.fills_changed);
    }
}

fn cmd_info(input: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let gp: GreasePencil = io::load(input)?;

    println!("File: {}", input.display());
    println!("Object: {}", gp.name);
    println!("Layers: {}", gp.layers.len());
    println!("Keyframes: {}", gp.num_frames());
    println!("Strokes: {}", gp.num_strokes());
    println!("Points: {}", gp.num_points());
    println!("Materials: {}", gp.materials.len());
    println!("Vertex groups: {}", gp.vertex_groups.len());

    for layer in &gp.layers {
        let strokes: usize = layer.frames.iter().map(|f| f.num_strokes()).sum();
        let length: f64 = layer
            .frames
            .iter()
            .flat_map(|f| &f.strokes)
            .map(|s| stroke_length(&s.points))
            .sum();
        let range = match (layer.frames.first(), layer.frames.last()) {
            (Some(first), Some(last)) => format!("{}..{}", first.frame_number, last.frame_number),
            _ => "empty".to_string(),
        };
        println!(
            "  {} (pass {}): frames {}, {} strokes, total length {:.4}",
            layer.name, layer.pass_index, range, strokes, length
        );
    }

    Ok(())
}

fn cmd_apply(
    input: &PathBuf,
    output: &PathBuf,
    frame: i32,
    modifier: TextureModifier,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut gp: GreasePencil = io::load(input)?;

    println!("Loaded: {} strokes, {} points", gp.num_strokes(), gp.num_points());

    let mode = if sequential { "sequential" } else { "parallel" };
    let options = EvaluateOptions::at_frame(frame).with_parallel(!sequential);

    println!("Applying '{}' at frame {} ({})...", modifier.name, frame, mode);
    let start = Instant::now();
    let report = texture::evaluate(&mut gp, &modifier, &options, &());
    let elapsed = start.elapsed();

    print_report(&report);
    io::save(&gp, output)?;
    println!("Saved: {} ({:.2?})", output.display(), elapsed);

    Ok(())
}

fn cmd_bake(
    input: &PathBuf,
    output: &PathBuf,
    modifier: TextureModifier,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut gp: GreasePencil = io::load(input)?;

    println!(
        "Loaded: {} keyframes, {} strokes, {} points",
        gp.num_frames(),
        gp.num_strokes(),
        gp.num_points()
    );

    let mode = if sequential { "sequential" } else { "parallel" };
    let options = BakeOptions::default().with_parallel(!sequential);
    let progress = create_progress();

    println!("Baking '{}' ({})...", modifier.name, mode);
    let start = Instant::now();
    let report = texture::bake_with_progress(&mut gp, &modifier, &options, &(), &progress);
    let elapsed = start.elapsed();
    info!("bake finished in {:.2?}", elapsed);

    print_report(&report);
    io::save(&gp, output)?;
    println!("Saved: {} ({:.2?})", output.display(), elapsed);

    Ok(())
}
