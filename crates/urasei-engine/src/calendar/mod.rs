pub mod solar_terms;
pub mod symbols;

pub use solar_terms::{is_before_spring, opening_term, pillar_month, SolarTerm, SOLAR_TERMS};
pub use symbols::{
    Branch, Element, Polarity, Stem, ALL_BRANCHES, ALL_ELEMENTS, ALL_STEMS,
};
