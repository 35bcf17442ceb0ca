// Element hooks the landing markup exposes to the interaction layer.

pub const HERO_BG: &str = ".fv__bg";
pub const HERO_LOGO: &str = "#fvLogo";
pub const CONTACT_BG: &str = ".contact__bg";
pub const CONTACT_SECTION: &str = ".contact";
pub const HEADER: &str = ".header";
pub const HEADER_LOGO: &str = ".header__logo-wrapper";
pub const HEADER_LINKS: &str = ".header__nav-link";

pub const SLIDES: &str = ".concept__slide";
pub const SLIDE_DOTS: &str = ".concept__dot";

pub const MENU_BUTTON: &str = "#menuBtn";
pub const NAV: &str = "#nav";
pub const NAV_OVERLAY: &str = "#navOverlay";
pub const NAV_LIST: &str = ".nav__list";
pub const NAV_LINKS: &str = ".nav__link";

// State classes
pub const ACTIVE: &str = "active";
pub const TEXT_VISIBLE: &str = "is-text-visible";
pub const OPEN: &str = "is-open";
pub const SCROLLED: &str = "is-scrolled";
pub const LOADED: &str = "is-loaded";
