use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::Parser;
use futures_util::stream::{self, StreamExt};
use tokio::runtime::Builder;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use silk2wav::sdk::SkpSilk;
use silk2wav::{convert, ConvertOptions, DEFAULT_SAMPLE_RATE};

#[derive(Parser, Debug)]
#[command(version, about = "Convert SILK v3 voice files to WAV")]
struct Args {
    /// SILK v3 files to convert
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory for the .wav files, defaults to each input's directory
    #[arg(long, short)]
    output_dir: Option<PathBuf>,

    /// Output sample rate in Hz
    #[arg(long, short = 'r', default_value_t = DEFAULT_SAMPLE_RATE)]
    sample_rate: u32,

    /// Files converted concurrently
    #[arg(long, short)]
    jobs: Option<usize>,
}

fn output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = input.file_stem().unwrap_or_else(|| input.as_os_str());
    let mut name = PathBuf::from(stem);
    name.set_extension("wav");

    match output_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

fn convert_file(input: &Path, output: &Path, options: &ConvertOptions) -> anyhow::Result<()> {
    let silk = std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let wav = convert(SkpSilk, &silk, options)
        .with_context(|| format!("converting {}", input.display()))?;
    std::fs::write(output, &wav).with_context(|| format!("writing {}", output.display()))?;

    info!("{} -> {} ({} bytes)", input.display(), output.display(), wav.len());
    Ok(())
}

async fn run(args: Args, options: ConvertOptions) -> usize {
    let jobs = args
        .jobs
        .or_else(|| std::thread::available_parallelism().ok().map(|n| n.get()))
        .unwrap_or(1)
        .max(1);
    let output_dir = args.output_dir;

    let results: Vec<_> = stream::iter(args.inputs)
        .map(|input| {
            let output = output_path(&input, output_dir.as_deref());
            async move {
                tokio::task::spawn_blocking(move || convert_file(&input, &output, &options))
                    .await
                    .map_err(|err| anyhow!("conversion task failed: {}", err))
                    .and_then(|res| res)
            }
        })
        .buffer_unordered(jobs)
        .collect()
        .await;

    let mut failed = 0;
    for res in results {
        if let Err(err) = res {
            error!("{:#}", err);
            failed += 1;
        }
    }
    failed
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let options = ConvertOptions::with_sample_rate(args.sample_rate)?;
    if let Some(dir) = &args.output_dir {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let rt = Builder::new_multi_thread().enable_all().build()?;
    let total = args.inputs.len();
    let failed = rt.block_on(run(args, options));

    if failed > 0 {
        return Err(anyhow!("{} of {} files failed", failed, total));
    }
    Ok(())
}
