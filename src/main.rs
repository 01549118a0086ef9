use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::process::ExitCode;

use castellan::commands::{
    ContractorEditOptions, IssueEditOptions, PropertyEditOptions, TenantEditOptions,
    cmd_config_get, cmd_config_set, cmd_config_show, cmd_contractors_add, cmd_contractors_edit,
    cmd_contractors_ls, cmd_contractors_rm, cmd_issues_add, cmd_issues_edit, cmd_issues_ls,
    cmd_issues_resolve, cmd_issues_rm, cmd_overview, cmd_properties_add, cmd_properties_edit,
    cmd_properties_ls, cmd_properties_rm, cmd_tenants_add, cmd_tenants_edit, cmd_tenants_ls,
    cmd_tenants_rm,
};
use castellan::config::Config;
use castellan::error::Result;
use castellan::remote::ApiClient;
use castellan::resource::{ContractorFields, IssueFields, PropertyFields, TenantFields};

#[derive(Parser)]
#[command(name = "castellan")]
#[command(about = "Property management from the command line")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage tenants
    #[command(visible_alias = "t")]
    Tenants {
        #[command(subcommand)]
        action: TenantAction,
    },

    /// Manage contractors
    #[command(visible_alias = "c")]
    Contractors {
        #[command(subcommand)]
        action: ContractorAction,
    },

    /// Manage properties
    #[command(visible_alias = "p")]
    Properties {
        #[command(subcommand)]
        action: PropertyAction,
    },

    /// Manage maintenance issues
    #[command(visible_alias = "i")]
    Issues {
        #[command(subcommand)]
        action: IssueAction,
    },

    /// Show all four collections at a glance
    Overview,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum TenantAction {
    /// List tenants
    Ls {
        /// Fuzzy filter applied client-side
        #[arg(long)]
        filter: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a tenant
    Add {
        #[arg(long)]
        name: String,

        #[arg(long = "phone")]
        phone_number: String,

        #[arg(long)]
        email: String,

        /// Landlord reference
        #[arg(long = "landlord")]
        landlord_id: String,

        /// Property reference
        #[arg(long = "property")]
        property_id: Option<String>,
    },

    /// Edit a tenant
    Edit {
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long = "phone")]
        phone_number: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long = "landlord")]
        landlord_id: Option<String>,

        /// Property reference; pass an empty string to clear it
        #[arg(long = "property")]
        property_id: Option<String>,
    },

    /// Delete a tenant
    Rm { id: u64 },
}

#[derive(Subcommand)]
enum ContractorAction {
    /// List contractors
    Ls {
        /// Fuzzy filter applied client-side
        #[arg(long)]
        filter: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a contractor
    Add {
        #[arg(long)]
        name: String,

        #[arg(long = "phone")]
        phone_number: String,

        #[arg(long)]
        email: String,

        /// Work the contractor does (e.g. plumbing)
        #[arg(long)]
        work: String,

        /// Landlord reference
        #[arg(long = "landlord")]
        landlord_id: String,
    },

    /// Edit a contractor
    Edit {
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long = "phone")]
        phone_number: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        work: Option<String>,

        #[arg(long = "landlord")]
        landlord_id: Option<String>,
    },

    /// Delete a contractor
    Rm { id: u64 },
}

#[derive(Subcommand)]
enum PropertyAction {
    /// List properties
    Ls {
        /// Fuzzy filter applied client-side
        #[arg(long)]
        filter: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a property
    Add {
        #[arg(long)]
        address: String,

        /// Landlord reference
        #[arg(long = "landlord")]
        landlord_id: String,
    },

    /// Edit a property
    Edit {
        id: u64,

        #[arg(long)]
        address: Option<String>,

        #[arg(long = "landlord")]
        landlord_id: Option<String>,
    },

    /// Delete a property
    Rm { id: u64 },
}

#[derive(Subcommand)]
enum IssueAction {
    /// List issues
    Ls {
        /// Fuzzy filter applied client-side
        #[arg(long)]
        filter: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report a new issue
    Add {
        #[arg(long)]
        description: String,

        #[arg(long)]
        location: String,

        /// Action to take
        #[arg(long)]
        action: String,

        /// Property reference
        #[arg(long = "property")]
        property_id: Option<String>,
    },

    /// Edit an issue
    Edit {
        id: u64,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        action: Option<String>,

        /// Property reference; pass an empty string to clear it
        #[arg(long = "property")]
        property_id: Option<String>,
    },

    /// Mark an issue resolved
    Resolve { id: u64 },

    /// Delete an issue
    Rm { id: u64 },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set a config value (api.base_url, api.token)
    Set { key: String, value: String },

    /// Get a config value
    Get { key: String },
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("CASTELLAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn api_client() -> Result<ApiClient> {
    let config = Config::load()?;
    ApiClient::new(&config)
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Tenants { action } => {
            let client = api_client()?;
            match action {
                TenantAction::Ls { filter, json } => {
                    cmd_tenants_ls(&client, filter.as_deref(), json).await
                }
                TenantAction::Add {
                    name,
                    phone_number,
                    email,
                    landlord_id,
                    property_id,
                } => {
                    cmd_tenants_add(
                        &client,
                        TenantFields {
                            name,
                            phone_number,
                            email,
                            landlord_id,
                            property_id,
                        },
                    )
                    .await
                }
                TenantAction::Edit {
                    id,
                    name,
                    phone_number,
                    email,
                    landlord_id,
                    property_id,
                } => {
                    cmd_tenants_edit(
                        &client,
                        id,
                        TenantEditOptions {
                            name,
                            phone_number,
                            email,
                            landlord_id,
                            property_id,
                        },
                    )
                    .await
                }
                TenantAction::Rm { id } => cmd_tenants_rm(&client, id).await,
            }
        }

        Commands::Contractors { action } => {
            let client = api_client()?;
            match action {
                ContractorAction::Ls { filter, json } => {
                    cmd_contractors_ls(&client, filter.as_deref(), json).await
                }
                ContractorAction::Add {
                    name,
                    phone_number,
                    email,
                    work,
                    landlord_id,
                } => {
                    cmd_contractors_add(
                        &client,
                        ContractorFields {
                            name,
                            phone_number,
                            email,
                            work,
                            landlord_id,
                        },
                    )
                    .await
                }
                ContractorAction::Edit {
                    id,
                    name,
                    phone_number,
                    email,
                    work,
                    landlord_id,
                } => {
                    cmd_contractors_edit(
                        &client,
                        id,
                        ContractorEditOptions {
                            name,
                            phone_number,
                            email,
                            work,
                            landlord_id,
                        },
                    )
                    .await
                }
                ContractorAction::Rm { id } => cmd_contractors_rm(&client, id).await,
            }
        }

        Commands::Properties { action } => {
            let client = api_client()?;
            match action {
                PropertyAction::Ls { filter, json } => {
                    cmd_properties_ls(&client, filter.as_deref(), json).await
                }
                PropertyAction::Add {
                    address,
                    landlord_id,
                } => {
                    cmd_properties_add(
                        &client,
                        PropertyFields {
                            address,
                            landlord_id,
                        },
                    )
                    .await
                }
                PropertyAction::Edit {
                    id,
                    address,
                    landlord_id,
                } => {
                    cmd_properties_edit(
                        &client,
                        id,
                        PropertyEditOptions {
                            address,
                            landlord_id,
                        },
                    )
                    .await
                }
                PropertyAction::Rm { id } => cmd_properties_rm(&client, id).await,
            }
        }

        Commands::Issues { action } => {
            let client = api_client()?;
            match action {
                IssueAction::Ls { filter, json } => {
                    cmd_issues_ls(&client, filter.as_deref(), json).await
                }
                IssueAction::Add {
                    description,
                    location,
                    action,
                    property_id,
                } => {
                    cmd_issues_add(
                        &client,
                        IssueFields {
                            description,
                            location,
                            action,
                            resolved: false,
                            property_id,
                        },
                    )
                    .await
                }
                IssueAction::Edit {
                    id,
                    description,
                    location,
                    action,
                    property_id,
                } => {
                    cmd_issues_edit(
                        &client,
                        id,
                        IssueEditOptions {
                            description,
                            location,
                            action,
                            property_id,
                        },
                    )
                    .await
                }
                IssueAction::Resolve { id } => cmd_issues_resolve(&client, id).await,
                IssueAction::Rm { id } => cmd_issues_rm(&client, id).await,
            }
        }

        Commands::Overview => {
            let client = api_client()?;
            cmd_overview(&client).await
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => cmd_config_show(),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
            ConfigAction::Get { key } => cmd_config_get(&key),
        },

        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "castellan", &mut io::stdout());
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
