//! Storefront command line client.
//!
//! Drives the same hook objects as the browser UI against a live backend:
//! consumer store browsing, owner store CRUD, and owner menu management.

mod dialogs;
mod transport;


use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use storefront::config::trim_base;
use storefront::menu::{DeleteOutcome, MenuDraft, MenuTab, SubmitOutcome, UpdateOutcome, submit_menu};
use storefront::model::{ImageFile, ImageUpload, Menu, SearchFilters, StoreInput};
use storefront::notify::Notifier;
use storefront::state::{OwnerMenus, OwnerStores, StoresState, UserStores};
use storefront::{ApiError, ClientConfig, MenuFormError};

use crate::dialogs::StderrNotifier;
use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Form(#[from] MenuFormError),
    #[error("{0}")]
    Failed(String),
    #[error("menu {menu_id} not found in store {store_id}")]
    MenuNotFound { store_id: i64, menu_id: i64 },
    #[error("could not read {path}: {source}")]
    ReadImage { path: String, source: std::io::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "storefront", about = "Storefront store and menu CLI")]
struct Cli {
    /// Backend origin; overrides `STOREFRONT_API_BASE_URL`.
    #[arg(long, env = "STOREFRONT_API_BASE_URL", default_value = "http://127.0.0.1:8080")]
    api_base_url: String,

    #[arg(long, env = "STOREFRONT_CDN_BASE_URL")]
    cdn_base_url: Option<String>,

    #[arg(long, env = "STOREFRONT_SEARCH_PAGE_SIZE")]
    search_page_size: Option<u32>,

    /// Sent as a bearer token on every request.
    #[arg(long, env = "STOREFRONT_AUTH_TOKEN")]
    auth_token: Option<String>,

    /// Answer yes to every confirmation.
    #[arg(long, short = 'y', global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Consumer-facing store commands.
    Stores(StoresCommand),
    /// Owner store and menu management.
    Owner(OwnerCommand),
}

#[derive(Args, Debug)]
struct StoresCommand {
    #[command(subcommand)]
    command: StoresSubcommand,
}

#[derive(Subcommand, Debug)]
enum StoresSubcommand {
    List,
    Show {
        store_id: i64,
    },
    Search {
        keyword: String,
        #[arg(long = "district")]
        districts: Vec<String>,
        #[arg(long = "cuisine")]
        cuisines: Vec<String>,
    },
    Like {
        store_id: i64,
    },
}

#[derive(Args, Debug)]
struct OwnerCommand {
    #[command(subcommand)]
    command: OwnerSubcommand,
}

#[derive(Subcommand, Debug)]
enum OwnerSubcommand {
    Stores(OwnerStoresCommand),
    Menus(MenusCommand),
}

#[derive(Args, Debug)]
struct OwnerStoresCommand {
    #[command(subcommand)]
    command: OwnerStoresSubcommand,
}

#[derive(Subcommand, Debug)]
enum OwnerStoresSubcommand {
    List,
    Show { store_id: i64 },
    Create(StoreFields),
    Update {
        store_id: i64,
        #[command(flatten)]
        fields: StoreFields,
    },
    Delete { store_id: i64 },
}

#[derive(Args, Debug, Clone)]
struct StoreFields {
    #[arg(long)]
    name: String,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    phone_number: Option<String>,
    /// `HH:MM`
    #[arg(long)]
    open_time: Option<String>,
    /// `HH:MM`
    #[arg(long)]
    close_time: Option<String>,
    #[arg(long)]
    district_category: Option<String>,
    #[arg(long)]
    cuisine_category: Option<String>,
}

impl From<StoreFields> for StoreInput {
    fn from(fields: StoreFields) -> Self {
        Self {
            name: fields.name,
            description: fields.description,
            address: fields.address,
            phone_number: fields.phone_number,
            open_time: fields.open_time,
            close_time: fields.close_time,
            district_category: fields.district_category,
            cuisine_category: fields.cuisine_category,
        }
    }
}

#[derive(Args, Debug)]
struct MenusCommand {
    #[command(subcommand)]
    command: MenusSubcommand,
}

#[derive(Subcommand, Debug)]
enum MenusSubcommand {
    List {
        store_id: i64,
    },
    Create {
        store_id: i64,
        #[command(flatten)]
        fields: MenuFields,
    },
    /// Replace a menu; unspecified fields keep their current values.
    Update {
        store_id: i64,
        menu_id: i64,
        #[command(flatten)]
        fields: MenuEdits,
    },
    Delete {
        store_id: i64,
        menu_id: i64,
    },
}

#[derive(Args, Debug, Clone)]
struct MenuFields {
    #[arg(long)]
    name: String,
    #[arg(long)]
    price: String,
    /// Allergen id; repeat for several.
    #[arg(long = "allergy")]
    allergies: Vec<i64>,
    #[arg(long)]
    image: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct MenuEdits {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    price: Option<String>,
    /// Replaces the allergen set when given; repeat for several.
    #[arg(long = "allergy")]
    allergies: Option<Vec<i64>>,
    #[arg(long)]
    image: Option<PathBuf>,
}

struct CliContext {
    config: ClientConfig,
    transport: Rc<ReqwestTransport>,
    notifier: Rc<StderrNotifier>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = client_config(&cli);
    let ctx = CliContext {
        transport: Rc::new(ReqwestTransport::new(&config, cli.auth_token.clone())),
        notifier: Rc::new(StderrNotifier::new(cli.yes)),
        config,
    };

    match cli.command {
        Command::Stores(stores) => run_stores(&ctx, stores.command).await,
        Command::Owner(owner) => match owner.command {
            OwnerSubcommand::Stores(stores) => run_owner_stores(&ctx, stores.command).await,
            OwnerSubcommand::Menus(menus) => run_menus(&ctx, menus.command).await,
        },
    }
}

/// Environment defaults with command-line values layered on top.
fn client_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    config.api_base_url = trim_base(&cli.api_base_url);
    if let Some(cdn) = &cli.cdn_base_url {
        config.image.cdn_base = trim_base(cdn);
    }
    if let Some(size) = cli.search_page_size {
        config.search_page_size = size;
    }
    config
}

async fn run_stores(ctx: &CliContext, command: StoresSubcommand) -> Result<(), CliError> {
    let stores = UserStores::new(Rc::clone(&ctx.transport), ctx.config.clone());
    match command {
        StoresSubcommand::List => {
            stores.fetch_stores().await;
            let state = stores.snapshot();
            checked(&state)?;
            print_json(&serde_json::to_value(&state.stores)?)
        }
        StoresSubcommand::Show { store_id } => {
            stores.fetch_store_detail(store_id).await;
            let state = stores.snapshot();
            checked(&state)?;
            print_json(&serde_json::to_value(&state.store)?)
        }
        StoresSubcommand::Search { keyword, districts, cuisines } => {
            let filters = SearchFilters { district_categories: districts, cuisine_categories: cuisines };
            let found = stores.search_stores(&keyword, &filters).await?;
            print_json(&serde_json::to_value(&found)?)
        }
        StoresSubcommand::Like { store_id } => {
            let data = stores.toggle_store_like(store_id).await?;
            print_json(&data)
        }
    }
}

async fn run_owner_stores(ctx: &CliContext, command: OwnerStoresSubcommand) -> Result<(), CliError> {
    let stores = OwnerStores::new(Rc::clone(&ctx.transport), ctx.config.clone());
    match command {
        OwnerStoresSubcommand::List => {
            stores.fetch_stores().await;
            let state = stores.snapshot();
            checked(&state)?;
            print_json(&serde_json::to_value(&state.stores)?)
        }
        OwnerStoresSubcommand::Show { store_id } => {
            stores.fetch_store_detail(store_id).await;
            let state = stores.snapshot();
            checked(&state)?;
            print_json(&serde_json::to_value(&state.store)?)
        }
        OwnerStoresSubcommand::Create(fields) => {
            let created = stores.create_store(&StoreInput::from(fields)).await?;
            print_json(&created)
        }
        OwnerStoresSubcommand::Update { store_id, fields } => {
            let updated = stores.update_store(store_id, &StoreInput::from(fields)).await?;
            print_json(&updated)
        }
        OwnerStoresSubcommand::Delete { store_id } => {
            if !ctx.notifier.confirm(&format!("Delete store {store_id}?")) {
                return Ok(());
            }
            stores.delete_store(store_id).await?;
            tracing::info!(store_id, "store deleted");
            Ok(())
        }
    }
}

async fn run_menus(ctx: &CliContext, command: MenusSubcommand) -> Result<(), CliError> {
    let menus = OwnerMenus::new(Rc::clone(&ctx.transport));
    match command {
        MenusSubcommand::List { store_id } => {
            menus.fetch_owner_menus(store_id).await;
            let state = menus.snapshot();
            if let Some(message) = &state.error {
                return Err(CliError::Failed(message.clone()));
            }
            print_json(&serde_json::to_value(&state.menus)?)
        }
        MenusSubcommand::Create { store_id, fields } => {
            let draft = MenuDraft {
                name: fields.name,
                price: fields.price,
                allergy_ids: fields.allergies,
                images: image_items(fields.image.as_deref())?,
            };
            let created = RefCell::new(Value::Null);
            let (created_ref, menus_ref) = (&created, &menus);
            let outcome = submit_menu(&draft, None, &*ctx.notifier, |form| async move {
                let value = menus_ref.create_menu(store_id, form).await?;
                *created_ref.borrow_mut() = value;
                Ok::<(), ApiError>(())
            })
            .await;
            submitted(outcome)?;
            print_json(&created.into_inner())
        }
        MenusSubcommand::Update { store_id, menu_id, fields } => {
            menus.fetch_owner_menus(store_id).await;
            let current = menus
                .snapshot()
                .menus
                .iter()
                .find(|m| m.id == menu_id)
                .cloned()
                .ok_or(CliError::MenuNotFound { store_id, menu_id })?;
            let draft = edited_draft(&current, fields)?;
            let form = draft.to_form(Some(menu_id))?;
            let tab = MenuTab::new(store_id, menus, Rc::clone(&ctx.notifier));
            match tab.update_menu(menu_id, form).await {
                UpdateOutcome::Updated => Ok(()),
                UpdateOutcome::Failed => Err(CliError::Failed("menu update failed".to_owned())),
            }
        }
        MenusSubcommand::Delete { store_id, menu_id } => {
            menus.fetch_owner_menus(store_id).await;
            let target = menus
                .snapshot()
                .menus
                .iter()
                .find(|m| m.id == menu_id)
                .cloned()
                .ok_or(CliError::MenuNotFound { store_id, menu_id })?;
            let tab = MenuTab::new(store_id, menus, Rc::clone(&ctx.notifier));
            match tab.delete_menu(&target).await {
                DeleteOutcome::Deleted | DeleteOutcome::Declined => Ok(()),
                DeleteOutcome::Failed => Err(CliError::Failed("menu delete failed".to_owned())),
            }
        }
    }
}

/// Fetches record failures in hook state instead of returning them.
fn checked(state: &StoresState) -> Result<(), CliError> {
    match &state.error {
        Some(message) => Err(CliError::Failed(message.clone())),
        None => Ok(()),
    }
}

fn submitted(outcome: SubmitOutcome) -> Result<(), CliError> {
    match outcome {
        SubmitOutcome::Submitted => Ok(()),
        SubmitOutcome::Invalid(err) => Err(err.into()),
        SubmitOutcome::Failed => Err(CliError::Failed("menu submit failed".to_owned())),
    }
}

/// Start from the menu as stored and apply the flags that were given.
fn edited_draft(current: &Menu, edits: MenuEdits) -> Result<MenuDraft, CliError> {
    let mut draft = MenuDraft::for_menu(Some(current));
    if let Some(name) = edits.name {
        draft.name = name;
    }
    if let Some(price) = edits.price {
        draft.price = price;
    }
    if let Some(allergies) = edits.allergies {
        draft.allergy_ids = Vec::new();
        for id in allergies {
            if !draft.has_allergy(id) {
                draft.toggle_allergy(id);
            }
        }
    }
    if edits.image.is_some() {
        draft.set_images(image_items(edits.image.as_deref())?);
    }
    Ok(draft)
}

fn image_items(path: Option<&Path>) -> Result<Vec<ImageUpload>, CliError> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let bytes = std::fs::read(path)
        .map_err(|source| CliError::ReadImage { path: path.display().to_string(), source })?;
    let name = path
        .file_name()
        .map_or_else(|| "image".to_owned(), |n| n.to_string_lossy().into_owned());
    let file = ImageFile { content_type: content_type_for(path).to_owned(), name, bytes };
    Ok(vec![ImageUpload::picked(file, path.display().to_string())])
}

fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
