use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use migration::MigratorTrait;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use artist_ipi::config::Config;
use artist_ipi::db::{self, entities::artist_ipi::Model as IpiRecord};
use artist_ipi::db::{ArtistIpiRepository, ArtistRepository};
use artist_ipi::error::AppError;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Register an artist row for IPI records to reference
    AddArtist {
        #[arg(short, long)]
        name: String,
    },
    /// Store an IPI code for an artist
    Add {
        #[arg(short, long)]
        artist: i32,

        #[arg(short, long)]
        ipi: String,

        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        edits_pending: i32,
    },
    /// Replace the IPI code stored for an artist
    SetIpi {
        #[arg(short, long)]
        artist: i32,

        #[arg(short, long)]
        ipi: String,
    },
    /// Set the pending edit count of an artist's IPI record
    SetEditsPending {
        #[arg(short, long)]
        artist: i32,

        #[arg(short, long, allow_negative_numbers = true)]
        count: i32,
    },
    /// Print the IPI code stored for an artist
    Show {
        #[arg(short, long)]
        artist: i32,
    },
    /// Look up the artist holding an IPI code
    Find {
        #[arg(short, long)]
        ipi: String,
    },
    /// Print every stored IPI code
    List,
    /// Delete the IPI record of an artist
    Remove {
        #[arg(short, long)]
        artist: i32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "artist_ipi=debug,sea_orm=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = connect_config(Config::from_env()?, &args.command);
    tracing::debug!("Configuration loaded");

    let conn = db::connect(&config).await?;
    let records = ArtistIpiRepository::new(conn.clone());

    match args.command {
        Commands::Migrate => {
            migration::Migrator::up(&conn, None).await?;
            tracing::info!("Database migrations completed");
        }
        Commands::AddArtist { name } => {
            let artist = ArtistRepository::new(conn).create(&name).await?;
            println!("{}", artist.id);
        }
        Commands::Add {
            artist,
            ipi,
            edits_pending,
        } => {
            let record = records
                .create_with_edits_pending(artist, &ipi, edits_pending)
                .await?;
            println!("{}", record);
        }
        Commands::SetIpi { artist, ipi } => {
            let record = require_record(&records, artist).await?;
            println!("{}", records.update_ipi(&record, &ipi).await?);
        }
        Commands::SetEditsPending { artist, count } => {
            let record = require_record(&records, artist).await?;
            let record = records.set_edits_pending(&record, count).await?;
            println!("{} {}", record, record.edits_pending);
        }
        Commands::Show { artist } => {
            println!("{}", require_record(&records, artist).await?);
        }
        Commands::Find { ipi } => match records.find_by_ipi(&ipi).await? {
            Some(record) => println!("{}", record.artist_id),
            None => return Err(AppError::NotFound(format!("IPI {}", ipi)).into()),
        },
        Commands::List => {
            for record in records.list().await? {
                println!("{}", record);
            }
        }
        Commands::Remove { artist } => {
            records.delete(artist).await?;
        }
    }

    Ok(())
}

/// `migrate` runs the migrator explicitly; every other command migrates on
/// connect only when `AUTO_MIGRATE` is enabled.
fn connect_config(mut config: Config, command: &Commands) -> Config {
    if matches!(command, Commands::Migrate) {
        config.auto_migrate = false;
    }
    config
}

async fn require_record(
    records: &ArtistIpiRepository,
    artist_id: i32,
) -> artist_ipi::error::Result<IpiRecord> {
    records
        .find_by_artist(artist_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("IPI record for artist {}", artist_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use artist_ipi::test_utils::test_config;

    #[test]
    fn test_negative_count_reaches_validation() {
        let args = Args::try_parse_from([
            "artist-ipi",
            "set-edits-pending",
            "--artist",
            "1",
            "--count",
            "-5",
        ])
        .expect("negative counts should parse");

        match args.command {
            Commands::SetEditsPending { artist, count } => {
                assert_eq!(artist, 1);
                assert_eq!(count, -5);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_negative_edits_pending_on_add_parses() {
        let args = Args::try_parse_from([
            "artist-ipi",
            "add",
            "-a",
            "7",
            "-i",
            "00014107338",
            "-e",
            "-1",
        ])
        .expect("negative edits_pending should parse");

        assert!(matches!(
            args.command,
            Commands::Add { edits_pending: -1, .. }
        ));
    }

    #[test]
    fn test_migrate_skips_migration_on_connect() {
        let config = connect_config(test_config(), &Commands::Migrate);
        assert!(!config.auto_migrate);
    }

    #[test]
    fn test_other_commands_keep_auto_migrate() {
        let config = connect_config(test_config(), &Commands::List);
        assert!(config.auto_migrate);

        let mut disabled = test_config();
        disabled.auto_migrate = false;
        let config = connect_config(disabled, &Commands::Show { artist: 1 });
        assert!(!config.auto_migrate);
    }
}
