use std::collections::HashSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageFallbacks {
    failed: HashSet<u32>,
}

impl ImageFallbacks {
    pub fn has_failed(&self, id: u32) -> bool {
        self.failed.contains(&id)
    }

    /// Records a load error. Returns false when `id` had already failed.
    pub fn mark_failed(&mut self, id: u32) -> bool {
        let inserted = self.failed.insert(id);
        if inserted {
            tracing::debug!("image: {id} failed to load, showing placeholder");
        }
        inserted
    }

    pub fn show_remote(&self, id: u32) -> bool {
        !self.has_failed(id)
    }
}

pub fn placeholder_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn images_start_healthy() {
        let fallbacks = ImageFallbacks::default();
        assert!(fallbacks.show_remote(1));
        assert!(!fallbacks.has_failed(1));
    }

    #[test]
    fn second_error_is_a_no_op() {
        let mut fallbacks = ImageFallbacks::default();
        assert!(fallbacks.mark_failed(2));
        let snapshot = fallbacks.clone();

        assert!(!fallbacks.mark_failed(2));
        assert_eq!(fallbacks, snapshot);
        assert!(fallbacks.has_failed(2));
        assert!(!fallbacks.show_remote(2));
    }

    #[test]
    fn failures_are_tracked_per_item() {
        let mut fallbacks = ImageFallbacks::default();
        fallbacks.mark_failed(3);
        assert!(fallbacks.show_remote(1));
        assert!(!fallbacks.show_remote(3));
    }

    #[test]
    fn placeholder_uses_first_letter() {
        assert_eq!(placeholder_initial("ProjectFlow"), "P");
        assert_eq!(placeholder_initial("  herbivore"), "H");
        assert_eq!(placeholder_initial(""), "");
    }
}
