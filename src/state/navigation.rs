//! Navigation-related state types.
//!
//! This module contains the page enum shared by the router, the header and
//! the key handlers.

/// Specifying the different pages.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Page {
    Home,
    About,
    Apply,
}

impl Page {
    /// Pages in header order.
    pub const ALL: [Page; 3] = [Page::Home, Page::About, Page::Apply];

    /// Return the header label.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About us",
            Page::Apply => "Apply",
        }
    }

    /// Return the function key number that jumps to the page.
    ///
    pub fn function_key(&self) -> u8 {
        match self {
            Page::Home => 1,
            Page::About => 2,
            Page::Apply => 3,
        }
    }

    /// Resolve a function key number or a digit shortcut.
    ///
    pub fn from_number(number: u8) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.function_key() == number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_labels() {
        assert_eq!(Page::Home.label(), "Home");
        assert_eq!(Page::About.label(), "About us");
        assert_eq!(Page::Apply.label(), "Apply");
    }

    #[test]
    fn test_page_from_number() {
        assert_eq!(Page::from_number(1), Some(Page::Home));
        assert_eq!(Page::from_number(2), Some(Page::About));
        assert_eq!(Page::from_number(3), Some(Page::Apply));
        assert_eq!(Page::from_number(0), None);
        assert_eq!(Page::from_number(4), None);
    }
}
