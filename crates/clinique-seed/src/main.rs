use clap::{Parser, Subcommand, ValueEnum};
use clinique_core::config::{StoreConfig, DATA_DIR_ENV, DB_NAME_ENV};
use clinique_core::db::{Database, RootEntity};
use clinique_core::models::{
    AuthenticationDevice, Authorization, PersonUnderCare, PhysicalPerson, Professional,
};
use clinique_core::load_all;
use clinique_seed::{purge, seed, DEFAULT_TAG};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "clinique-seed")]
#[command(about = "Load sample MOS data into the La Clinique store")]
struct Cli {
    /// Directory holding the database file (overrides CLINIQUE_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<String>,
    /// Database name (overrides CLINIQUE_DB_NAME)
    #[arg(long, global = true)]
    db_name: Option<String>,
    /// Tag recorded on seeded documents
    #[arg(long, global = true, default_value = DEFAULT_TAG)]
    tag: String,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the tagged sample data
    Seed,
    /// Remove the tagged sample data
    Purge,
    /// Print every document of a collection
    List {
        #[arg(value_enum)]
        collection: CollectionArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CollectionArg {
    PhysicalPersons,
    Professionals,
    PersonsUnderCare,
    Authorizations,
    AuthenticationDevices,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("clinique=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = StoreConfig::from_env_values(
        cli.data_dir.or_else(|| std::env::var(DATA_DIR_ENV).ok()),
        cli.db_name.or_else(|| std::env::var(DB_NAME_ENV).ok()),
    )?;
    let db = Database::open_with_config(&config)?;

    match cli.command.unwrap_or(Commands::Seed) {
        Commands::Seed => {
            let report = seed(&db, &cli.tag)?;
            println!("Sample MOS data inserted with tag '{}'.", report.tag);
            println!("  physical person:       {}", report.physical_person_id);
            println!("  authentication device: {}", report.authentication_device_id);
            println!("  professional:          {}", report.professional_id);
            println!("  person under care:     {}", report.person_under_care_id);
            println!("  authorization:         {}", report.authorization_id);
        }
        Commands::Purge => {
            let removed = purge(&db, &cli.tag)?;
            println!("Removed {removed} documents tagged '{}'.", cli.tag);
        }
        Commands::List { collection } => {
            let documents = match collection {
                CollectionArg::PhysicalPersons => list::<PhysicalPerson>(&db)?,
                CollectionArg::Professionals => list::<Professional>(&db)?,
                CollectionArg::PersonsUnderCare => list::<PersonUnderCare>(&db)?,
                CollectionArg::Authorizations => list::<Authorization>(&db)?,
                CollectionArg::AuthenticationDevices => list::<AuthenticationDevice>(&db)?,
            };
            println!("{}", serde_json::to_string_pretty(&documents)?);
        }
    }

    db.close()?;
    Ok(())
}

fn list<E: RootEntity>(db: &Database) -> anyhow::Result<Vec<serde_json::Value>> {
    let mut documents = Vec::new();
    for dto in load_all::<E>(db)? {
        documents.push(serde_json::Value::Object(dto.to_document()?));
    }
    Ok(documents)
}
