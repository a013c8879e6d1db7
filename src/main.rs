use clap::Parser;
use splash_gen::config::{self, Settings};
use splash_gen::events::Reporter;
use splash_gen::{output, pipeline};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "splash-gen")]
#[command(about = "Generate Cordova splash screens from a single image")]
#[command(long_about = "\
Generate Cordova splash screens from a single image

Run from the root of a Cordova project with at least one platform added:

  my-app/
  ├── config.xml                   # <name> picks the iOS project folder
  ├── splash.png                   # Source image, cropped to every size
  ├── splash-android.png           # Optional: used for android instead
  └── platforms/
      ├── ios/                     # → Images.xcassets/LaunchStoryboard.imageset
      ├── android/                 # → app/src/main/res/drawable-*/screen.png
      └── windows/                 # → images/SplashScreen*.png

The source is scaled to cover each target size and centre-cropped, so a
square image of at least 4098×4098 pixels gives the best results.")]
#[command(version)]
struct Cli {
    /// Project manifest
    #[arg(long, default_value = config::DEFAULT_CONFIG)]
    config: PathBuf,

    /// Source splash image
    #[arg(long, default_value = config::DEFAULT_SPLASH)]
    splash: PathBuf,

    /// Project root
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Stop after the first platform that fails
    #[arg(long)]
    fail_fast: bool,

    /// Max parallel workers (default: one per core)
    #[arg(long)]
    jobs: Option<usize>,
}

impl Cli {
    fn settings(self) -> Settings {
        Settings {
            root: self.root,
            config_path: self.config,
            splash_path: self.splash,
            fail_fast: self.fail_fast,
            max_processes: self.jobs,
        }
    }
}

fn main() -> ExitCode {
    let settings = Cli::parse().settings();
    if let Err(e) = settings.validate() {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    init_thread_pool(&settings);

    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            output::print_event(&event);
        }
    });
    let reporter = Reporter::new(Some(tx));
    let result = pipeline::run(&settings, &reporter);
    drop(reporter);
    if printer.join().is_err() {
        eprintln!("error: progress printer panicked");
    }

    match result {
        Ok(outcome) => {
            output::print_summary(&outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            output::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize the rayon thread pool based on settings.
///
/// Caps at the number of available CPU cores: users can constrain down, not up.
fn init_thread_pool(settings: &Settings) {
    let threads = config::effective_threads(settings);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
