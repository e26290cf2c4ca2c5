use super::Session;

pub struct Dump;

impl Dump {
    pub fn execute(session: &Session, domain: Option<&str>) -> anyhow::Result<()> {
        let Some(name) = domain else {
            print!("{}", session.manager.render());
            return Ok(());
        };

        let Some(found) = session.manager.domain(name) else {
            anyhow::bail!("No domain named '{name}'");
        };
        for (key, value) in found.iter() {
            println!("{key}={value}");
        }
        Ok(())
    }
}
