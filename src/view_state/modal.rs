//! The active-modal state.
//!
//! One tagged value instead of a bag of dialog-visibility booleans, so
//! impossible combinations (create and delete dialogs open at once) cannot
//! be represented.

/// The modal currently shown for an entity type, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal<T> {
    /// No dialog open.
    #[default]
    None,
    /// Create dialog open.
    Create,
    /// Edit dialog open for the given entity.
    Edit(T),
    /// Delete confirmation open for the given entity.
    Delete(T),
}

impl<T> Modal<T> {
    /// True when any dialog is open.
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::None)
    }

    /// Close whatever is open.
    pub fn close(&mut self) {
        *self = Modal::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_closed() {
        let modal: Modal<u8> = Modal::default();
        assert!(!modal.is_open());
    }

    #[test]
    fn test_states_are_mutually_exclusive() {
        let mut modal = Modal::Edit(7u8);
        assert!(modal.is_open());
        modal = Modal::Delete(7u8);
        assert!(matches!(modal, Modal::Delete(7)));
        modal.close();
        assert_eq!(modal, Modal::None);
    }
}
