use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use playlist_attributes::{
    Catalog, Credentials, ExportConfig, ExportSummary, MissingFeaturesPolicy, PlaylistExporter,
    SpotifyCatalog, config, parse_playlist_id,
};

#[derive(Parser)]
#[command(name = "playlist-attributes")]
#[command(about = "Export Spotify playlist track and artist attributes to a spreadsheet")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum AuthMode {
    /// Authorize as a Spotify user (can read private playlists)
    User,
    /// Authorize as the app only (public playlists)
    App,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a playlist's track attributes to an .xlsx file
    Export {
        /// Playlist ID, spotify:playlist: URI or open.spotify.com URL
        #[arg(env = "PLAYLIST_ID", default_value = config::DEFAULT_PLAYLIST_ID)]
        playlist: String,

        /// Destination spreadsheet
        #[arg(short, long, env = "OUTPUT_PATH", default_value = config::DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Number of playlist tracks to export (1-100)
        #[arg(
            short,
            long,
            default_value_t = config::DEFAULT_TRACK_LIMIT,
            value_parser = clap::value_parser!(u32).range(1..=100)
        )]
        limit: u32,

        /// How to authenticate with Spotify
        #[arg(long, value_enum, default_value = "user")]
        auth: AuthMode,

        /// What to do with tracks that have no audio features
        #[arg(long, value_enum, default_value = "skip")]
        on_missing_features: MissingFeaturesPolicy,
    },

    /// Show setup guide
    Setup,
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    match cli.command {
        Commands::Export {
            playlist,
            output,
            limit,
            auth,
            on_missing_features,
        } => {
            let config = ExportConfig {
                playlist_id: parse_playlist_id(&playlist).context("Invalid playlist")?,
                output_path: output,
                limit,
                missing_features: on_missing_features,
            };
            export(&config, auth).await?;
        }
        Commands::Setup => {
            show_setup_guide();
        }
    }

    Ok(())
}

async fn export(config: &ExportConfig, auth: AuthMode) -> Result<()> {
    println!("{}", "Playlist Attributes Export".cyan().bold());
    println!("{}", "=".repeat(50));

    let credentials = Credentials::from_env().context("Failed to load configuration")?;

    let missing = credentials.missing();
    if !missing.is_empty() {
        println!("{}", "Missing configuration:".red());
        for item in &missing {
            println!("   - {}", item);
        }
        println!(
            "\n{}",
            "Run `playlist-attributes setup` for instructions.".yellow()
        );
        std::process::exit(1);
    }

    let summary = match auth {
        AuthMode::User => {
            let catalog = SpotifyCatalog::authorize_user(&credentials)
                .await
                .context("Failed to connect to Spotify")?;
            run(catalog, config).await?
        }
        AuthMode::App => {
            let catalog = SpotifyCatalog::authorize_app(&credentials)
                .await
                .context("Failed to connect to Spotify")?;
            run(catalog, config).await?
        }
    };

    print_summary(&summary);

    Ok(())
}

async fn run<C: Catalog>(catalog: C, config: &ExportConfig) -> Result<ExportSummary> {
    PlaylistExporter::new(catalog)
        .export(config)
        .await
        .with_context(|| format!("Failed to export playlist {}", config.playlist_id))
}

fn print_summary(summary: &ExportSummary) {
    if !summary.skipped.is_empty() {
        println!(
            "{}",
            format!(
                "Skipped {} of {} tracks without audio features:",
                summary.skipped.len(),
                summary.fetched
            )
            .yellow()
        );
        for track in &summary.skipped {
            println!("   - {} by {} ({})", track.name, track.artists, track.album);
        }
    }

    println!(
        "{}",
        format!("Data has been saved to {}", summary.output_path.display()).green()
    );
}

fn show_setup_guide() {
    println!("{}", "Playlist Attributes Setup Guide".cyan().bold());
    println!("{}", "=".repeat(50));

    println!("\n{}", "1. Spotify API Setup".yellow());
    println!("   - Go to https://developer.spotify.com/dashboard/");
    println!("   - Create a new app");
    println!("   - Copy your Client ID and Client Secret");
    println!("   - Add 'http://127.0.0.1:8080/callback' as a redirect URI");

    println!("\n{}", "2. Configuration".yellow());
    println!("   - Create a .env file with:");
    println!("     SPOTIFY_CLIENT_ID=your_spotify_client_id");
    println!("     SPOTIFY_CLIENT_SECRET=your_spotify_client_secret");
    println!("     SPOTIFY_REDIRECT_URI=http://127.0.0.1:8080/callback");
    println!("   - SPOTIPY_* names are accepted as well");

    println!("\n{}", "3. Usage".yellow());
    println!("   - playlist-attributes export                       (default playlist)");
    println!("   - playlist-attributes export <playlist> -o out.xlsx");
    println!("   - playlist-attributes export <playlist> --auth app (public playlists)");
    println!("   - playlist-attributes export --on-missing-features abort");

    println!("\n{}", "Ready to export!".green());
}
