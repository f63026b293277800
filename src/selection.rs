use crate::content::{Portfolio, Project, ProjectId};

/// Key that dismisses the detail overlay.
pub const DISMISS_KEY: &str = "Escape";

/// Which project, if any, has its detail overlay open.
///
/// `Visible` can only be entered through [`Selection::select`], which takes a
/// `&Project` borrowed from the dataset, so the selected id always resolves
/// against the portfolio it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Hidden,
    Visible(Selected),
}

/// A project id that came from a dataset record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selected(ProjectId);

impl Selected {
    pub fn id(self) -> ProjectId {
        self.0
    }
}

/// What a click on a project card was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardClick {
    OpenDetail,
    /// The source link inside the card. Following it never opens the overlay.
    FollowSourceLink,
}

// The mutators return whether the state changed, for `maybe_update`.
impl Selection {
    pub fn select(&mut self, project: &Project) -> bool {
        let next = Selection::Visible(Selected(project.id));
        if *self == next {
            return false;
        }
        log::debug!("selecting project {} ({})", project.id, project.title);
        *self = next;
        true
    }

    pub fn deselect(&mut self) -> bool {
        match self {
            Selection::Visible(selected) => {
                log::debug!("closing detail for project {}", selected.id());
                *self = Selection::Hidden;
                true
            }
            Selection::Hidden => false,
        }
    }

    pub fn handle_card_click(&mut self, project: &Project, click: CardClick) -> bool {
        match click {
            CardClick::OpenDetail => self.select(project),
            CardClick::FollowSourceLink => false,
        }
    }

    pub fn handle_key(&mut self, key: &str) -> bool {
        key == DISMISS_KEY && self.deselect()
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Selection::Visible(_))
    }

    pub fn selected_id(&self) -> Option<ProjectId> {
        match self {
            Selection::Visible(selected) => Some(selected.id()),
            Selection::Hidden => None,
        }
    }

    pub fn resolve<'a>(&self, portfolio: &'a Portfolio) -> Option<&'a Project> {
        self.selected_id().and_then(|id| portfolio.project(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::tests::synthetic_portfolio;

    #[test]
    fn test_initial_state_hidden() {
        let selection = Selection::default();
        assert_eq!(selection, Selection::Hidden);
        assert!(!selection.is_visible());
        assert_eq!(selection.selected_id(), None);
    }

    #[test]
    fn test_select_every_project() {
        let portfolio = synthetic_portfolio(&[1, 2, 3]);
        for project in portfolio.projects() {
            let mut selection = Selection::default();
            assert!(selection.select(project));
            assert_eq!(selection.selected_id(), Some(project.id));
            assert_eq!(selection.resolve(&portfolio), Some(project));
        }
    }

    #[test]
    fn test_select_is_idempotent() {
        let portfolio = synthetic_portfolio(&[1, 2]);
        let project = &portfolio.projects()[1];
        let mut selection = Selection::default();
        assert!(selection.select(project));
        assert!(!selection.select(project));
        assert_eq!(selection.selected_id(), Some(ProjectId(2)));
    }

    #[test]
    fn test_select_replaces_previous() {
        let portfolio = synthetic_portfolio(&[1, 2]);
        let (p, q) = (&portfolio.projects()[0], &portfolio.projects()[1]);
        let mut selection = Selection::default();
        selection.select(p);
        assert!(selection.select(q));
        assert_eq!(selection.selected_id(), Some(q.id));
        assert_eq!(selection.resolve(&portfolio).map(|p| &p.title), Some(&q.title));
    }

    #[test]
    fn test_deselect_from_any_state() {
        let portfolio = synthetic_portfolio(&[1]);
        let mut selection = Selection::default();
        assert!(!selection.deselect());
        assert_eq!(selection, Selection::Hidden);

        selection.select(&portfolio.projects()[0]);
        assert!(selection.deselect());
        assert_eq!(selection, Selection::Hidden);
        assert!(!selection.deselect());
        assert_eq!(selection, Selection::Hidden);
        assert_eq!(selection.resolve(&portfolio), None);
    }

    #[test]
    fn test_cycles_indefinitely() {
        let portfolio = synthetic_portfolio(&[1, 2, 3]);
        let mut selection = Selection::default();
        for round in 0..10 {
            let project = &portfolio.projects()[round % 3];
            selection.select(project);
            assert_eq!(selection.selected_id(), Some(project.id));
            selection.deselect();
            assert!(!selection.is_visible());
        }
    }

    #[test]
    fn test_source_link_click_does_not_select() {
        let portfolio = synthetic_portfolio(&[1, 2]);
        let mut selection = Selection::default();
        let changed =
            selection.handle_card_click(&portfolio.projects()[0], CardClick::FollowSourceLink);
        assert!(!changed);
        assert_eq!(selection, Selection::Hidden);

        assert!(selection.handle_card_click(&portfolio.projects()[0], CardClick::OpenDetail));
        let changed =
            selection.handle_card_click(&portfolio.projects()[1], CardClick::FollowSourceLink);
        assert!(!changed);
        assert_eq!(selection.selected_id(), Some(ProjectId(1)));
    }

    #[test]
    fn test_escape_dismisses_other_keys_do_not() {
        let portfolio = synthetic_portfolio(&[1, 2]);
        let mut selection = Selection::default();
        selection.select(&portfolio.projects()[1]);

        for key in ["Enter", "Esc", "escape", " ", "ArrowDown"] {
            assert!(!selection.handle_key(key));
            assert_eq!(selection.selected_id(), Some(ProjectId(2)));
        }

        assert!(selection.handle_key("Escape"));
        assert_eq!(selection, Selection::Hidden);
        assert!(!selection.handle_key("Escape"));
        assert_eq!(selection, Selection::Hidden);
    }

    #[test]
    fn test_visible_always_resolves() {
        let portfolio = synthetic_portfolio(&[3, 5, 8]);
        let mut selection = Selection::default();
        for project in portfolio.projects() {
            selection.select(project);
            assert_eq!(selection.is_visible(), selection.resolve(&portfolio).is_some());
        }
    }
}
