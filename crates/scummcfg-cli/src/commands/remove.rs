use super::Session;

pub struct Remove;

impl Remove {
    pub fn execute(session: &mut Session, key: &str, domain: &str) -> anyhow::Result<()> {
        session.manager.remove_key(key, domain)?;
        session.save()
    }
}
