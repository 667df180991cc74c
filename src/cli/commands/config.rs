//! Handle the `config` command: print or sanity-check the resolved
//! connection configuration.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            print_resolved(cfg);
        }

        if *check {
            let warnings = cfg.check();
            if warnings.is_empty() {
                messages::success("Configuration looks complete");
            } else {
                for w in &warnings {
                    messages::warning(w);
                }
            }
        }

        if !print_config && !check {
            messages::info("Nothing to do: pass --print or --check");
        }
    }
    Ok(())
}

fn print_resolved(cfg: &Config) {
    println!("host: {}", cfg.host);
    println!("port: {}", cfg.port);
    println!("user: {}", cfg.user);
    println!(
        "password: {}",
        if cfg.password.is_empty() { "(empty)" } else { "***" }
    );
    println!("database: {}", cfg.database);
}
