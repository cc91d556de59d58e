//! Category classification.
//!
//! Maps `(visa_required, e_authorization_required, vaccines_required)` to a
//! [`Color`], or `None` when the facts are insufficient. The rules are checked
//! in a fixed order and the first applicable one wins; facts are not mutually
//! exclusive, so the order is part of the contract.
//!
//! `visa_free_days` is not an input.

use crate::models::{Color, Facts, Tristate};

/// Color for a country that needs an electronic authorization.
fn e_authorization_color(vaccines_required: Tristate) -> Color {
    if vaccines_required.is_true() {
        Color::Yellow
    } else {
        Color::Blue
    }
}

/// Classifies three facts into a category.
///
/// 1. Visa required: `Purple` with mandatory vaccines, else `Red`.
/// 2. Visa not required: with e-authorization, `Yellow` / `Blue` by vaccines;
///    otherwise `Green` unless vaccines are known to be mandatory.
/// 3. E-authorization required (visa unknown, or case 2 fell through):
///    `Yellow` / `Blue` by vaccines.
/// 4. Visa and e-authorization unknown, vaccines not mandatory: `Green`.
/// 5. Anything else: `None`.
pub fn classify(
    visa_required: Tristate,
    e_authorization_required: Tristate,
    vaccines_required: Tristate,
) -> Option<Color> {
    match visa_required {
        Tristate::True => {
            return Some(if vaccines_required.is_true() {
                Color::Purple
            } else {
                Color::Red
            });
        }
        Tristate::False => {
            if e_authorization_required.is_true() {
                return Some(e_authorization_color(vaccines_required));
            }
            if !vaccines_required.is_true() {
                return Some(Color::Green);
            }
        }
        Tristate::Unknown => {}
    }

    if e_authorization_required.is_true() {
        return Some(e_authorization_color(vaccines_required));
    }

    if visa_required == Tristate::Unknown
        && e_authorization_required == Tristate::Unknown
        && vaccines_required.is_false()
    {
        return Some(Color::Green);
    }

    None
}

/// Classifies a fact set. Only the three boolean facts are consulted.
pub fn classify_facts(facts: &Facts) -> Option<Color> {
    classify(
        facts.visa_required,
        facts.e_authorization_required,
        facts.vaccines_required,
    )
}
