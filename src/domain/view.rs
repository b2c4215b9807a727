//! View state value object

use crate::domain::lecture::LectureId;

/// The screens the application can display.
///
/// `Detail` carries the selected lecture id, so a detail view without a
/// selection is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Home,
    Loading,
    Detail(LectureId),
}

impl ViewState {
    /// The selected lecture, if any
    pub fn selected(&self) -> Option<&LectureId> {
        match self {
            Self::Detail(id) => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_home() {
        assert_eq!(ViewState::default(), ViewState::Home);
    }

    #[test]
    fn only_detail_carries_a_selection() {
        assert!(ViewState::Home.selected().is_none());
        assert!(ViewState::Loading.selected().is_none());

        let id = LectureId::from("1");
        assert_eq!(ViewState::Detail(id.clone()).selected(), Some(&id));
    }
}
