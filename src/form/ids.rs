use crate::core::EntityKind;

/// Monotonic identifier source for newly created entities.
///
/// Ids follow the fixture convention `<prefix>_<n>` with one counter shared
/// by all three collections, so two submissions in the same session can
/// never collide. Wall-clock time is never consulted.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Start past the highest numeric suffix already present, so minted ids
    /// never collide with seed data either.
    pub fn primed_past<'a>(existing: impl IntoIterator<Item = &'a str>) -> Self {
        let highest = existing
            .into_iter()
            .filter_map(numeric_suffix)
            .max()
            .unwrap_or(0);
        Self { next: highest + 1 }
    }

    pub fn mint(&mut self, kind: EntityKind) -> String {
        let id = format!("{}_{}", kind.prefix(), self.next);
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn numeric_suffix(id: &str) -> Option<u64> {
    let (_, suffix) = id.rsplit_once('_')?;
    suffix.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minted_ids_are_unique_within_a_session() {
        let mut ids = IdGenerator::new();
        let a = ids.mint(EntityKind::Client);
        let b = ids.mint(EntityKind::Client);
        let c = ids.mint(EntityKind::Registration);

        assert_eq!(a, "cli_1");
        assert_eq!(b, "cli_2");
        assert_eq!(c, "reg_3");
    }

    #[test]
    fn priming_skips_seed_suffixes() {
        let seed = ["cli_1", "por_3", "reg_2", "not-an-id"];
        let mut ids = IdGenerator::primed_past(seed);
        assert_eq!(ids.mint(EntityKind::Portal), "por_4");
    }
}
