use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use huestring::clipboard::{copy_or_report, SystemClipboard};
use huestring::config::{AppConfig, DEFAULT_CONFIG_FILE, DEFAULT_CONFIG_YAML};
use huestring::convert::{convert_file, ConvertOptions};
use huestring::discovery::{available_images, display_name};
use huestring::export::{histogram_report, write_output, ExportFormat, ExportKind};
use huestring::interactive::Session;
use hue_palette::{Correction, Symbol};

#[derive(Parser)]
#[command(name = "huestring")]
#[command(version)]
#[command(about = "Convert images into nine-symbol color strings")]
struct Cli {
    /// Config file (default: $HUESTRING_CONFIG or ./huestring.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one image and print the string
    Convert {
        /// Image file to convert
        image: PathBuf,

        /// Grid width in symbols
        #[arg(long)]
        width: Option<u32>,

        /// Grid height in symbols
        #[arg(long)]
        height: Option<u32>,

        /// Symbol to correct (one of 0 1 r o y g b t p)
        #[arg(long, requires = "to")]
        from: Option<Symbol>,

        /// Replacement symbol
        #[arg(long, requires = "from")]
        to: Option<Symbol>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<ExportKind>,

        /// localStorage key for the local-storage format
        #[arg(long)]
        key: Option<String>,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Copy the formatted result to the clipboard
        #[arg(long)]
        copy: bool,

        /// Also write a PNG rendering of the result
        #[arg(long)]
        preview: Option<PathBuf>,

        /// Pixel size of each symbol in the preview
        #[arg(long, default_value_t = 8)]
        scale: u32,

        /// Print per-symbol counts to stderr
        #[arg(long)]
        histogram: bool,

        /// Classify rows in parallel
        #[arg(long)]
        parallel: bool,
    },
    /// List convertible images in a directory
    List {
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Choose an image and correction through prompts
    Interactive {
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Print the symbol table
    Palette,
    /// Write an annotated default config file
    Init {
        /// Destination (default: ./huestring.yaml)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the result
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huestring=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = AppConfig::load(cli.config.as_deref());

    match cli.command {
        Some(Commands::Convert {
            image,
            width,
            height,
            from,
            to,
            format,
            key,
            output,
            copy,
            preview,
            scale,
            histogram,
            parallel,
        }) => {
            let mut options = ConvertOptions::from_config(&config);
            options.width = width.unwrap_or(options.width);
            options.height = height.unwrap_or(options.height);
            options.parallel |= parallel;
            if let (Some(from), Some(to)) = (from, to) {
                options.correction = Correction::new(from, to);
            }

            let format = ExportFormat::from_kind(
                format.unwrap_or(config.export.format),
                key.as_deref().unwrap_or(&config.export.key),
            );

            let outputs = Outputs {
                file: output,
                copy,
                preview,
                scale,
                histogram,
            };
            run_convert_command(&image, &options, &format, &outputs)
        }
        Some(Commands::List { dir }) => run_list_command(&config, &dir),
        Some(Commands::Interactive { dir }) => run_interactive_command(&config, &dir),
        Some(Commands::Palette) => {
            run_palette_command();
            Ok(())
        }
        Some(Commands::Init { path, force }) => run_init_command(path, force),
        None => run_interactive_command(&config, Path::new(".")),
    }
}

/// Where `convert` sends its result besides stdout
struct Outputs {
    file: Option<PathBuf>,
    copy: bool,
    preview: Option<PathBuf>,
    scale: u32,
    histogram: bool,
}

/// Convert a single image non-interactively
fn run_convert_command(
    image: &Path,
    options: &ConvertOptions,
    format: &ExportFormat,
    outputs: &Outputs,
) -> anyhow::Result<()> {
    let conversion = convert_file(image, options)?;
    let rendered = format.render(conversion.as_str());
    write_output(&rendered, outputs.file.as_deref())?;

    let summary = conversion.summary();
    eprintln!("{summary}");
    if summary.length != summary.expected() {
        tracing::warn!(
            length = summary.length,
            expected = summary.expected(),
            "Output length mismatch"
        );
    }

    if outputs.histogram {
        eprintln!("{}", histogram_report(&conversion.grid));
    }

    if outputs.copy {
        eprintln!("{}", copy_or_report(&mut SystemClipboard::new(), &rendered));
    }

    if let Some(path) = outputs.preview.as_deref() {
        huestring::preview::write_preview(&conversion.grid, outputs.scale, path)?;
        eprintln!("Preview written to {}", path.display());
    }

    Ok(())
}

fn run_list_command(config: &AppConfig, dir: &Path) -> anyhow::Result<()> {
    let images = available_images(dir, &config.extensions)?;
    if images.is_empty() {
        return Err(huestring::error::ConvertError::NoImages(dir.to_path_buf()).into());
    }
    for (i, path) in images.iter().enumerate() {
        println!("{}. {}", i + 1, display_name(path));
    }
    Ok(())
}

fn run_interactive_command(config: &AppConfig, dir: &Path) -> anyhow::Result<()> {
    config.validate()?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut clipboard = SystemClipboard::new();
    let mut session =
        Session::new(stdin.lock(), stdout.lock(), config, dir).with_clipboard(&mut clipboard);
    session.run()?;
    Ok(())
}

fn run_palette_command() {
    println!("Symbol  Name     Reference");
    for symbol in Symbol::ALL {
        println!(
            "{:<7} {:<8} {}",
            symbol.as_char(),
            symbol.name(),
            symbol.reference().to_hex()
        );
    }
}

/// Write the bundled default config
fn run_init_command(path: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    if path.exists() && !force {
        eprintln!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
        std::process::exit(1);
    }

    std::fs::write(&path, DEFAULT_CONFIG_YAML)?;
    println!("Wrote {}", path.display());
    Ok(())
}
