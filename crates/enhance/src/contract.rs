//! The markup contract: identifiers and classes the installers look up.
//!
//! Absence of an optional group (links, cards, animated elements) leaves a
//! behavior watching nothing; absence of a required element disables its
//! feature silently. Neither is an error.

pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const NAV_LINK_CLASS: &str = "nav__link";
pub const HEADER_ID: &str = "header";
pub const SCROLL_TOP_ID: &str = "scroll-top";
pub const SECTION_CLASS: &str = "section";
pub const ANIMATION_ATTR: &str = "data-animation";
pub const CARD_CLASS: &str = "card";
pub const FOOTER_TEXT_CLASS: &str = "footer__text";
pub const CONTACT_FORM_CLASS: &str = "contact__form";
pub const FORM_SUCCESS_CLASS: &str = "form__success";
pub const FORM_ERROR_CLASS: &str = "form__error";
pub const FORM_BUTTON_CLASS: &str = "form__button";

// presentation-state classes the behaviors write
pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const VISIBLE_CLASS: &str = "visible";
pub const LOADED_CLASS: &str = "loaded";
