/// Load state of the embedded scene.
///
/// The viewer reports readiness exactly once; there is no way back to `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Spinner shown, scene invisible.
    #[default]
    Loading,
    /// Scene faded in, branding sweep active.
    Loaded,
}

impl LoadPhase {
    pub fn is_loaded(self) -> bool {
        self == Self::Loaded
    }

    /// Transition to `Loaded`. Returns true only for the first call.
    pub fn mark_loaded(&mut self) -> bool {
        let first = !self.is_loaded();
        *self = Self::Loaded;
        first
    }

    pub fn opacity(self) -> f64 {
        match self {
            Self::Loading => 0.0,
            Self::Loaded => 1.0,
        }
    }

    pub fn shows_spinner(self) -> bool {
        !self.is_loaded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading_with_spinner() {
        let phase = LoadPhase::default();
        assert!(phase.shows_spinner());
        assert_eq!(phase.opacity(), 0.0);
    }

    #[test]
    fn load_is_one_way() {
        let mut phase = LoadPhase::Loading;
        assert!(phase.mark_loaded());
        assert!(!phase.mark_loaded());
        assert_eq!(phase, LoadPhase::Loaded);
        assert!(!phase.shows_spinner());
        assert_eq!(phase.opacity(), 1.0);
    }
}
