use clap::{Parser, Subcommand};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use thumbnail_maker::event::CloudEvent;
use thumbnail_maker::imaging::{RustBackend, TargetSize, identify, make_thumbnail};
use thumbnail_maker::store::LocalStore;
use thumbnail_maker::{config, handler, output};

#[derive(Parser)]
#[command(name = "thumbnail-maker")]
#[command(about = "Derive long-edge thumbnails for stored GIF, JPEG and PNG images")]
#[command(long_about = "\
Derive long-edge thumbnails for stored GIF, JPEG and PNG images

The longer edge of each image is scaled to the target size; the shorter edge
follows proportionally. The thumbnail keeps the source format and is stored
under the same object key in the destination bucket.

Configuration (later wins):
  thumbnail.toml in --config-dir
  THUMBNAIL_SIZE and DESTINATION_BUCKET environment variables

Local object store layout for 'handle':

  <store>/
  ├── uploads/                # source bucket
  │   └── cats/tabby.png      # object key 'cats/tabby.png'
  └── thumbnails/             # destination bucket
      └── cats/tabby.png

Run 'thumbnail-maker gen-config' to generate a documented thumbnail.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing thumbnail.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Process a storage event (JSON file, or '-' for stdin) against a local store
    Handle {
        event: PathBuf,
        /// Root directory of the local object store (buckets are subdirectories)
        #[arg(long, default_value = ".")]
        store: PathBuf,
    },
    /// Make a thumbnail of a single file
    Make {
        input: PathBuf,
        output: PathBuf,
        /// Longer edge in pixels (overrides config)
        #[arg(long, allow_negative_numbers = true)]
        size: Option<i64>,
    },
    /// Print the detected format and dimensions of an image
    Identify { input: PathBuf },
    /// Print a stock thumbnail.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Handle { event, store } => {
            let settings = config::load_config(&cli.config_dir)?.resolve()?;
            let event = CloudEvent::load(&event)?;
            let store = LocalStore::new(store);
            let outcome = handler::handle_event(&store, &RustBackend::new(), &settings, &event)?;
            output::print_handle_outcome(&outcome);
        }
        Command::Make {
            input,
            output: output_path,
            size,
        } => {
            let size = match size {
                Some(size) => TargetSize::new(size)?,
                None => config::load_config(&cli.config_dir)?.resolve()?.target_size,
            };
            let mut reader = BufReader::new(std::fs::File::open(&input)?);
            // Encode fully before creating the output file.
            let mut encoded = Vec::new();
            let info = make_thumbnail(&RustBackend::new(), &mut reader, &mut encoded, size)?;
            let mut writer = BufWriter::new(std::fs::File::create(&output_path)?);
            std::io::Write::write_all(&mut writer, &encoded)?;
            std::io::Write::flush(&mut writer)?;
            output::print_make_output(&info);
        }
        Command::Identify { input } => {
            let bytes = std::fs::read(&input)?;
            let (format, dimensions) = identify(&bytes)?;
            for line in output::format_identify_output(format, dimensions) {
                println!("{line}");
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
