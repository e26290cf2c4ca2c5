use scummcfg_core::DomainMap;
use serde::Serialize;

use crate::cli::OutputFormat;

use super::Session;

/// JSON view of all persisted domains
#[derive(Serialize)]
struct Listing<'a> {
    active: &'a str,
    globals: &'a DomainMap,
    games: &'a DomainMap,
}

pub struct Domains;

impl Domains {
    pub fn execute(session: &Session, format: OutputFormat) -> anyhow::Result<()> {
        let manager = &session.manager;

        match format {
            OutputFormat::Json => {
                let listing = Listing {
                    active: manager.active_domain(),
                    globals: manager.global_domains(),
                    games: manager.game_domains(),
                };
                println!("{}", serde_json::to_string_pretty(&listing)?);
            }
            OutputFormat::Text => {
                for (name, domain) in manager.global_domains().iter() {
                    println!("global {name} ({} keys)", domain.len());
                }
                for (name, domain) in manager.game_domains().iter() {
                    let marker = if name == manager.active_domain() {
                        " [active]"
                    } else {
                        ""
                    };
                    println!("game   {name} ({} keys){marker}", domain.len());
                }
            }
        }
        Ok(())
    }
}
