use clap::Parser;
use datahub::cli::{format_entry, format_entry_list, Cli, Commands};
use datahub::error::DataHubError;
use datahub::infrastructure::{Config, FileStore, Workspace};
use datahub::logging;
use datahub::DataHub;

fn main() {
    let cli = Cli::parse();

    let _logger = match logging::init_logging(cli.verbose) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: {}", e);
            None
        }
    };

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            log::debug!("event=command module=cli status=error exit_code={}", e.exit_code());
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn open_hub() -> Result<DataHub<FileStore>, DataHubError> {
    let workspace = Workspace::discover()?;
    let config = workspace.load_config()?;
    let store = workspace.open_store()?;
    DataHub::new(store, config)
}

fn run(cli: Cli) -> Result<(), DataHubError> {
    match cli.command {
        Commands::Init {
            path,
            latency_ms,
            no_ownership_check,
        } => {
            let mut config = Config::new();
            config.latency_ms = latency_ms;
            config.enforce_ownership = !no_ownership_check;

            Workspace::new(path.clone()).initialize(&config)?;
            println!("Initialized datahub store at {}", path.display());
            Ok(())
        }
        Commands::Register { email, password } => {
            let mut hub = open_hub()?;
            hub.register(&email, &password)?;
            println!("Registration successful! Please login.");
            Ok(())
        }
        Commands::Login { email, password } => {
            let mut hub = open_hub()?;
            hub.login(&email, &password)?;
            println!("Signed in as {}", email);
            Ok(())
        }
        Commands::Logout => {
            let mut hub = open_hub()?;
            hub.logout()?;
            println!("Signed out");
            Ok(())
        }
        Commands::ResetPassword {
            email,
            new_password,
        } => {
            let mut hub = open_hub()?;
            hub.reset_password(&email, &new_password)?;
            println!("Password updated! Please login.");
            Ok(())
        }
        Commands::Whoami => {
            let hub = open_hub()?;
            match hub.session().email() {
                Some(email) => println!("{}", email),
                None => println!("Not signed in"),
            }
            Ok(())
        }
        Commands::List => {
            let mut hub = open_hub()?;
            if !hub.session().is_authenticated() {
                return Err(DataHubError::NotAuthenticated);
            }
            let output = format_entry_list(hub.entries()?);
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
            Ok(())
        }
        Commands::Add { title, content } => {
            let mut hub = open_hub()?;
            let entry = hub.create(&title, &content)?;
            println!("Created entry {}", entry.id);
            Ok(())
        }
        Commands::Show { id } => {
            let mut hub = open_hub()?;
            match hub.get(&id)? {
                Some(entry) => print!("{}", format_entry(&entry)),
                None => println!("No entry with id {}", id),
            }
            Ok(())
        }
        Commands::Edit { id, title, content } => {
            let mut hub = open_hub()?;
            let Some(existing) = hub.get(&id)? else {
                println!("No entry with id {}", id);
                return Ok(());
            };

            let title = title.unwrap_or(existing.title);
            let content = content.unwrap_or(existing.content);
            match hub.update(&id, &title, &content)? {
                Some(_) => println!("Updated entry {}", id),
                None => println!("No entry with id {}", id),
            }
            Ok(())
        }
        Commands::Delete { id } => {
            let mut hub = open_hub()?;
            if hub.delete(&id)? {
                println!("Deleted entry {}", id);
            } else {
                println!("No entry with id {}", id);
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let workspace = Workspace::discover()?;
            let mut config = workspace.load_config()?;

            if list {
                println!("latency_ms = {}", config.latency_ms);
                println!("enforce_ownership = {}", config.enforce_ownership);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    config.set(&k, &v)?;
                    workspace.save_config(&config)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", config.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: datahub config [--list | <key> [<value>]]");
                println!("Valid keys: latency_ms, enforce_ownership, created");
                Ok(())
            }
        }
    }
}
