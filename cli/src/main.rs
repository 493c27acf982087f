mod prompt;
mod render;

use std::io;

use clap::{Args, Parser, Subcommand};
use inventario::config::{ConfigError, normalize_base_url, parse_variant};
use inventario::filter::AtivoFilter;
use inventario::form::ItemForm;
use inventario::http::HttpInventoryApi;
use inventario::modal::ModalResponse;
use inventario::{
    ApiError, ClientConfig, InventoryApi, InventoryController, LoadOutcome, MutationOutcome, PageVariant, Setor,
};
use tracing_subscriber::EnvFilter;

type Controller = InventoryController<HttpInventoryApi>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("request failed: {}", .0.detail())]
    Api(#[from] ApiError),
    #[error("could not read confirmation: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Outcome(String),
}

#[derive(Parser, Debug)]
#[command(name = "inventario", about = "Inventory management CLI")]
struct Cli {
    #[arg(long, env = "INVENTARIO_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, env = "INVENTARIO_VARIANT", value_parser = parse_variant_arg)]
    variant: Option<PageVariant>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every item.
    List,
    /// Filtered search.
    Search {
        #[arg(long, default_value = "")]
        term: String,
        #[arg(long)]
        ativo: Option<bool>,
        #[arg(long)]
        setor: Option<Setor>,
    },
    Create(CreateArgs),
    Edit(EditArgs),
    Delete {
        id: i64,
        /// Skip the confirmation prompt.
        #[arg(long, default_value_t = false)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
struct CreateArgs {
    #[arg(long)]
    nome: String,
    /// Raw tag value; validated like the form field.
    #[arg(long)]
    etiqueta: String,
    #[arg(long, default_value = "")]
    numero_serie: String,
    #[arg(long, default_value = "")]
    usuario: String,
    #[arg(long, default_value = "")]
    observacoes: String,
    #[arg(long, default_value_t = false)]
    inativo: bool,
    #[arg(long)]
    setor: Option<Setor>,
}

#[derive(Args, Debug)]
struct EditArgs {
    id: i64,
    #[arg(long)]
    nome: Option<String>,
    #[arg(long)]
    etiqueta: Option<String>,
    #[arg(long)]
    numero_serie: Option<String>,
    #[arg(long)]
    usuario: Option<String>,
    #[arg(long)]
    observacoes: Option<String>,
    #[arg(long)]
    ativo: Option<bool>,
    #[arg(long)]
    setor: Option<Setor>,
}

fn parse_variant_arg(raw: &str) -> Result<PageVariant, ConfigError> {
    parse_variant(Some(raw))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = normalize_base_url(&base_url);
    }
    if let Some(variant) = cli.variant {
        config.variant = variant;
    }
    tracing::debug!(base_url = %config.base_url, variant = ?config.variant, "inventario cli starting");

    let api = HttpInventoryApi::new(&config)?;
    let controller = InventoryController::new(api, config.variant);

    match cli.command {
        Command::List => run_list(&controller).await,
        Command::Search { term, ativo, setor } => run_search(&controller, term, ativo, setor).await,
        Command::Create(args) => run_create(&controller, args).await,
        Command::Edit(args) => run_edit(&controller, args).await,
        Command::Delete { id, yes } => run_delete(&controller, id, yes).await,
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

async fn run_list(controller: &Controller) -> Result<(), CliError> {
    let outcome = controller.load_all().await;
    print_table(controller);
    load_result(controller, outcome)
}

async fn run_search(
    controller: &Controller,
    term: String,
    ativo: Option<bool>,
    setor: Option<Setor>,
) -> Result<(), CliError> {
    controller.update_filter(|f| {
        f.term = term;
        f.ativo = match ativo {
            None => AtivoFilter::All,
            Some(true) => AtivoFilter::Active,
            Some(false) => AtivoFilter::Inactive,
        };
        f.setor = setor;
    });
    let outcome = controller.load().await;
    print_table(controller);
    load_result(controller, outcome)
}

async fn run_create(controller: &Controller, args: CreateArgs) -> Result<(), CliError> {
    controller.update_form(|f| {
        *f = ItemForm {
            nome: args.nome,
            etiqueta: args.etiqueta,
            numero_serie: args.numero_serie,
            usuario: args.usuario,
            observacoes: args.observacoes,
            ativo: !args.inativo,
            setor: args.setor.map(|s| s.label().to_owned()).unwrap_or_default(),
        };
    });
    let outcome = controller.submit_create().await;
    let status = controller.with_state(|s| s.status.clone());
    if let Some(line) = render::status(&status) {
        println!("{line}");
    }
    finish_mutation(controller, outcome, status.text)
}

async fn run_edit(controller: &Controller, args: EditArgs) -> Result<(), CliError> {
    let item = controller.api().get(args.id).await?;
    controller.open_edit(&item);
    controller.update_edit(|f| {
        if let Some(nome) = args.nome {
            f.nome = nome;
        }
        if let Some(etiqueta) = args.etiqueta {
            f.etiqueta = etiqueta;
        }
        if let Some(numero_serie) = args.numero_serie {
            f.numero_serie = numero_serie;
        }
        if let Some(usuario) = args.usuario {
            f.usuario = usuario;
        }
        if let Some(observacoes) = args.observacoes {
            f.observacoes = observacoes;
        }
        if let Some(ativo) = args.ativo {
            f.ativo = ativo;
        }
        if let Some(setor) = args.setor {
            f.setor = setor.label().to_owned();
        }
    });
    let outcome = controller.save_edit().await;
    let message = print_modal(controller);
    finish_mutation(controller, outcome, message)
}

async fn run_delete(controller: &Controller, id: i64, yes: bool) -> Result<(), CliError> {
    let item = controller.api().get(id).await?;
    controller.request_delete(&item);
    let question = controller.with_state(|s| s.modal.content().map(|c| c.message.clone())).unwrap_or_default();
    let accepted = yes || prompt::confirm(&question)?;

    let Some(outcome) = controller.respond_modal(ModalResponse::Confirmed(accepted)).await else {
        return Ok(());
    };
    if outcome == MutationOutcome::Cancelled {
        println!("{}", prompt::CANCELLED);
        return Ok(());
    }
    let message = print_modal(controller);
    finish_mutation(controller, outcome, message)
}

// =============================================================================
// OUTPUT
// =============================================================================

fn print_table(controller: &Controller) {
    let (consult, body) = controller.with_state(|s| (s.consult.clone(), s.table.clone()));
    if let Some(line) = render::status(&consult) {
        eprintln!("{line}");
    }
    print!("{}", render::table(&body, controller.variant()));
}

/// Print the modal text and return it.
fn print_modal(controller: &Controller) -> String {
    let content = controller.with_state(|s| s.modal.content().cloned());
    let Some(content) = content else {
        return String::new();
    };
    println!("{}", render::modal(&content));
    content.message
}

fn load_result(controller: &Controller, outcome: LoadOutcome) -> Result<(), CliError> {
    match outcome {
        LoadOutcome::Applied | LoadOutcome::Stale => Ok(()),
        LoadOutcome::Failed => Err(CliError::Outcome(controller.with_state(|s| s.consult.text.clone()))),
    }
}

fn finish_mutation(controller: &Controller, outcome: MutationOutcome, message: String) -> Result<(), CliError> {
    if outcome.is_success() {
        print_table(controller);
        return Ok(());
    }
    Err(CliError::Outcome(message))
}
