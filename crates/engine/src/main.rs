//! One Piece sheet supplement engine - demo entry point.
//!
//! Loads an actor record (from the JSON file given as the first argument, or
//! a built-in sample), prints the sidebar summary and a coins-to-Belly
//! preview. With `--apply` the conversion is committed.

use std::sync::Arc;

use anyhow::Context;
use onepiece_domain::ActorId;
use serde_json::{json, Value};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use onepiece_engine::infrastructure::memory::InMemoryActorDocuments;
use onepiece_engine::infrastructure::registration::{CapabilityRegistry, HYBRID_POINTS_MIRROR};
use onepiece_engine::infrastructure::settings::ModuleSettings;
use onepiece_engine::use_cases::currency::CoinsToBellyInput;
use onepiece_engine::use_cases::{SheetFlow, UserRole};
use onepiece_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "onepiece_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = ModuleSettings::from_env();
    tracing::info!(namespace = %settings.namespace, "Starting One Piece sheet engine");

    let mut record_path = None;
    let mut apply = false;
    for arg in std::env::args().skip(1) {
        if arg == "--apply" {
            apply = true;
        } else {
            record_path = Some(arg);
        }
    }

    let record = match record_path {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading actor record {}", path))?;
            serde_json::from_str::<Value>(&raw)
                .with_context(|| format!("parsing actor record {}", path))?
        }
        None => sample_record(&settings),
    };

    let mut store = InMemoryActorDocuments::new();
    let mirror = App::hybrid_points_mirror(&settings);
    CapabilityRegistry::global().register_once(HYBRID_POINTS_MIRROR, || {
        store.add_interceptor(mirror)
    });
    let store = Arc::new(store);

    let actor_id = ActorId::new();
    store.insert(actor_id, record);

    let app = App::new(store.clone(), settings);

    let summary = app
        .use_cases
        .summary
        .execute(actor_id, UserRole::Player)
        .await?;
    println!("{}\n", summary);

    let roll_data = app
        .use_cases
        .willpower
        .roll_data
        .execute(actor_id, json!({}))
        .await?;
    println!("Roll data: {}\n", roll_data);

    let mut flow = SheetFlow::new(app.use_cases.currency.coins_to_belly.clone(), actor_id);
    let preview = flow.propose(CoinsToBellyInput::default()).await?;
    println!("{}\n", preview);

    if apply {
        flow.confirm().await?;
        let summary = app
            .use_cases
            .summary
            .execute(actor_id, UserRole::Player)
            .await?;
        println!("Applied.\n{}", summary);
    } else {
        flow.cancel()?;
        println!("Preview only, pass --apply to commit.");
    }

    Ok(())
}

fn sample_record(settings: &ModuleSettings) -> Value {
    let mut flags = serde_json::Map::new();
    flags.insert(
        settings.namespace.clone(),
        json!({"belly": 500, "willpowerBonus": 2, "hybridPoints": 3}),
    );

    json!({
        "name": "Monkey D. Luffy",
        "system": {
            "details": {"level": 9},
            "currency": {"pp": 1, "gp": 2, "ep": 0, "sp": 3, "cp": 4}
        },
        "flags": flags
    })
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
