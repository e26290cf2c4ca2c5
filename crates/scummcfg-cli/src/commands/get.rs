use crate::cli::ValueKind;

use super::Session;

pub struct Get;

impl Get {
    pub fn execute(
        session: &Session,
        key: &str,
        domain: Option<&str>,
        kind: ValueKind,
    ) -> anyhow::Result<()> {
        let manager = &session.manager;
        let domain = domain.unwrap_or_default();

        match kind {
            ValueKind::Text => println!("{}", manager.get_in(key, domain)),
            ValueKind::Int => println!("{}", manager.get_int_in(key, domain)?),
            ValueKind::Bool => println!("{}", manager.get_bool_in(key, domain)?),
        }
        Ok(())
    }
}
