use super::{Session, preview};

pub struct Set;

impl Set {
    pub fn execute(
        session: &mut Session,
        key: &str,
        value: &str,
        domain: Option<&str>,
        dry_run: bool,
    ) -> anyhow::Result<()> {
        let before = session.manager.render();
        session
            .manager
            .set_in(key, value, domain.unwrap_or_default());

        if dry_run {
            let label = session.path.display().to_string();
            let diff = preview::generate(&before, &session.manager.render(), &label);
            if diff.is_empty() {
                println!("[DRY RUN] No changes to {label}");
            } else {
                print!("{diff}");
            }
            return Ok(());
        }

        session.save()
    }
}
