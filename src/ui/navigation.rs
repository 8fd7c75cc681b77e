/// Central routing types for the TUI screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiRoute {
    MainMenu,
    Calculator,
    Catalog,
}

impl UiRoute {
    /// Human readable label used by headers and logs.
    pub fn title(self) -> &'static str {
        match self {
            UiRoute::MainMenu => "Main Menu",
            UiRoute::Calculator => "Project Estimate",
            UiRoute::Catalog => "Company Catalog",
        }
    }
}

/// Navigation outcomes from the main menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Estimate,
    Services,
    Technologies,
    CaseStudies,
    Clients,
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_has_a_title() {
        for route in [UiRoute::MainMenu, UiRoute::Calculator, UiRoute::Catalog] {
            assert!(!route.title().is_empty());
        }
        assert_eq!(UiRoute::Calculator.title(), "Project Estimate");
    }
}
