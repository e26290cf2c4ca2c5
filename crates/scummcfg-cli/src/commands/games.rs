use super::Session;

pub struct RenameGame;

impl RenameGame {
    pub fn execute(session: &mut Session, old: &str, new: &str) -> anyhow::Result<()> {
        if !session.manager.has_game_domain(old) {
            anyhow::bail!("No game domain named '{old}'");
        }
        session.manager.rename_game_domain(old, new)?;
        session.save()
    }
}

pub struct RemoveGame;

impl RemoveGame {
    pub fn execute(session: &mut Session, name: &str) -> anyhow::Result<()> {
        if !session.manager.has_game_domain(name) {
            anyhow::bail!("No game domain named '{name}'");
        }
        session.manager.remove_game_domain(name)?;
        session.save()
    }
}
