use crate::content::{Portfolio, Project, ProjectId};
use crate::selection::Selection;

/// One block of the page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Education,
    Skills,
    Achievement,
    Resume,
    Featured,
    ProjectsHeader,
    ProjectCard(ProjectId),
    Footer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Composition<'a> {
    pub sections: Vec<Section>,
    /// Rendered above everything else when present.
    pub overlay: Option<&'a Project>,
}

impl Composition<'_> {
    pub fn project_cards(&self) -> impl Iterator<Item = ProjectId> + '_ {
        self.sections.iter().filter_map(|s| match s {
            Section::ProjectCard(id) => Some(*id),
            _ => None,
        })
    }
}

pub fn compose<'a>(portfolio: &'a Portfolio, selection: &Selection) -> Composition<'a> {
    let mut sections = vec![
        Section::Hero,
        Section::Education,
        Section::Skills,
        Section::Achievement,
        Section::Resume,
        Section::Featured,
        Section::ProjectsHeader,
    ];
    sections.extend(
        portfolio
            .projects()
            .iter()
            .map(|p| Section::ProjectCard(p.id)),
    );
    sections.push(Section::Footer);

    Composition {
        sections,
        overlay: selection.resolve(portfolio),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{portfolio, tests::synthetic_portfolio};

    #[test]
    fn test_sections_in_page_order() {
        let portfolio = synthetic_portfolio(&[9, 4]);
        let composition = compose(&portfolio, &Selection::Hidden);
        assert_eq!(
            composition.sections,
            vec![
                Section::Hero,
                Section::Education,
                Section::Skills,
                Section::Achievement,
                Section::Resume,
                Section::Featured,
                Section::ProjectsHeader,
                Section::ProjectCard(ProjectId(9)),
                Section::ProjectCard(ProjectId(4)),
                Section::Footer,
            ]
        );
        assert!(composition.overlay.is_none());
    }

    #[test]
    fn test_one_card_per_project() {
        let portfolio = synthetic_portfolio(&[1, 2, 3, 4, 5]);
        let composition = compose(&portfolio, &Selection::Hidden);
        let cards = composition.project_cards().collect::<Vec<_>>();
        let ids = portfolio.projects().iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(cards, ids);
    }

    #[test]
    fn test_empty_project_list() {
        let portfolio = synthetic_portfolio(&[]);
        let composition = compose(&portfolio, &Selection::Hidden);
        assert_eq!(composition.project_cards().count(), 0);
        assert_eq!(composition.sections.last(), Some(&Section::Footer));
    }

    #[test]
    fn test_compose_is_deterministic() {
        let portfolio = synthetic_portfolio(&[1, 2]);
        let mut selection = Selection::default();
        selection.select(&portfolio.projects()[1]);
        assert_eq!(compose(&portfolio, &selection), compose(&portfolio, &selection));
    }

    #[test]
    fn test_selecting_restaurant_finder_shows_its_overlay() {
        let portfolio = portfolio();
        let mut selection = Selection::default();
        assert!(compose(portfolio, &selection).overlay.is_none());

        let project = portfolio
            .project(ProjectId(2))
            .expect("project 2 should exist");
        selection.select(project);

        let composition = compose(portfolio, &selection);
        let overlay = composition.overlay.expect("overlay should be visible");
        assert_eq!(overlay.title, "Restaurant Finding System");
        assert_eq!(overlay.id, ProjectId(2));
    }

    #[test]
    fn test_deselect_removes_overlay() {
        let portfolio = portfolio();
        let mut selection = Selection::default();
        selection.select(&portfolio.projects()[0]);
        assert_eq!(selection.selected_id(), Some(ProjectId(1)));
        assert!(compose(portfolio, &selection).overlay.is_some());

        selection.deselect();
        let composition = compose(portfolio, &selection);
        assert!(composition.overlay.is_none());
        assert_eq!(composition.project_cards().count(), 3);
    }
}
