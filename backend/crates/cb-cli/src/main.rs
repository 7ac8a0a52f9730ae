//! cb - recipe sharing from the command line
//!
//! # Examples
//!
//! ```bash
//! # Create an account on the configured server
//! cb signup --email ada@example.com --name Ada
//!
//! # Add a recipe
//! cb add --title "Flatbread" --ingredient flour --ingredient water --steps "Mix, rest, fry."
//!
//! # Find it again
//! cb list --search flour --pretty
//!
//! # Work offline
//! cb --local list
//! ```

use cb_cli::cli::Cli;
use cb_cli::{
    App, Client, FileSessionStorage, HttpCredentialStore, HttpRecipeStore,
    LOCAL_SESSION_FILE_NAME, LOCAL_STORE_FILE_NAME, LocalStore, SESSION_FILE_NAME,
    StdinConfirmation,
};

use cb_config::Config;
use cb_core::{CredentialStore, RecipeStore, SessionStorage};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load().and_then(|config| config.validate().map(|()| config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let config_dir = match Config::config_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let rules = config.validation_rules();

    let credentials: Arc<dyn CredentialStore>;
    let recipes: Arc<dyn RecipeStore>;
    let storage: Arc<dyn SessionStorage>;

    if cli.local {
        let store = Arc::new(LocalStore::new(config_dir.join(LOCAL_STORE_FILE_NAME)).with_rules(rules));
        storage = Arc::new(FileSessionStorage::new(
            config_dir.join(LOCAL_SESSION_FILE_NAME),
        ));
        credentials = store.clone();
        recipes = store;
    } else {
        // Explicit flag > configured server address
        let server_url = cli.server.unwrap_or_else(|| config.server.base_url());
        let client = Client::new(&server_url);
        storage = Arc::new(FileSessionStorage::new(config_dir.join(SESSION_FILE_NAME)));
        credentials = Arc::new(HttpCredentialStore::new(client.clone()));
        recipes = Arc::new(HttpRecipeStore::new(client, storage.clone()));
    }

    let mut app = App::new(credentials, recipes, storage, rules);

    match app.run(cli.command, &StdinConfirmation).await {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            if e.requires_sign_in() {
                eprintln!();
                eprintln!("Sign in first:");
                eprintln!("  cb signin --email <email>");
            }
            ExitCode::FAILURE
        }
    }
}
