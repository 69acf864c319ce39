//! Account Service - command line management of accounts.

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use account_service_lib::config::AccountServiceConfig;
use account_service_lib::repository::AccountRepository;
use account_service_lib::{service, MigrateAction};
use domain::AccountResponse;

#[derive(Parser, Debug)]
#[command(name = "account-service")]
#[command(about = "Account management")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// Create a standard account
    CreateUser {
        #[command(flatten)]
        account: NewAccountArgs,
        /// Leave unset to store an unusable password
        #[arg(long)]
        password: Option<String>,
    },
    /// Create an account with every privilege flag set
    CreateSuperuser {
        #[command(flatten)]
        account: NewAccountArgs,
        /// Leave unset to store an unusable password
        #[arg(long, env = "ACCOUNT_SUPERUSER_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Replace the password of an account
    ChangePassword {
        #[arg(long)]
        email: String,
        /// Leave unset to store an unusable password
        #[arg(long, env = "ACCOUNT_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Allow an account to log in
    Activate {
        #[arg(long)]
        email: String,
    },
    /// Prevent an account from logging in
    Deactivate {
        #[arg(long)]
        email: String,
    },
    /// Print all accounts as JSON
    List,
}

#[derive(Args, Debug)]
struct NewAccountArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    username: String,
    #[arg(long)]
    email: String,
}

#[derive(Subcommand, Debug)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

fn print_account(account: impl Into<AccountResponse>) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&account.into())?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AccountServiceConfig::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.service.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            account_service_lib::run_migrations(&config, migrate_action).await?;
        }
        Commands::CreateUser { account, password } => {
            let store = account_service_lib::connect_store(&config).await?;
            let account = service::create_user(
                &store,
                &account.first_name,
                &account.last_name,
                &account.username,
                &account.email,
                password.as_deref(),
            )
            .await?;
            print_account(account)?;
        }
        Commands::CreateSuperuser { account, password } => {
            let store = account_service_lib::connect_store(&config).await?;
            let account = service::create_superuser(
                &store,
                &account.first_name,
                &account.last_name,
                &account.username,
                &account.email,
                password.as_deref(),
            )
            .await?;
            print_account(account)?;
        }
        Commands::ChangePassword { email, password } => {
            let store = account_service_lib::connect_store(&config).await?;
            let account = service::change_password(&store, &email, password.as_deref()).await?;
            print_account(account)?;
        }
        Commands::Activate { email } => {
            let store = account_service_lib::connect_store(&config).await?;
            print_account(service::set_active(&store, &email, true).await?)?;
        }
        Commands::Deactivate { email } => {
            let store = account_service_lib::connect_store(&config).await?;
            print_account(service::set_active(&store, &email, false).await?)?;
        }
        Commands::List => {
            let store = account_service_lib::connect_store(&config).await?;
            let accounts: Vec<AccountResponse> =
                store.list().await?.iter().map(AccountResponse::from).collect();
            println!("{}", serde_json::to_string_pretty(&accounts)?);
        }
    }

    Ok(())
}
