#![forbid(unsafe_code)]

//! WASM export of the Estonian numeral speller.
//!
//! Exposes a single function, `to_letters_js(number, question)`, taking the
//! number as a decimal string (so JavaScript `BigInt`s pass through
//! `toString()` losslessly) and a [`Question`]. The call is synchronous; the
//! host only has to instantiate the module before calling it.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::to_letters_js;

mod binding_core;
mod question;

pub use binding_core::to_letters;
pub use question::Question;

#[cfg(test)]
mod tests {
    use super::*;
    use estonian_numbers::InvalidInputError;
    use pretty_assertions::assert_eq;

    #[test]
    fn spells_each_question() {
        assert_eq!(
            to_letters("1212", Question::KuiPalju).unwrap(),
            "üks tuhat kakssada kaksteist"
        );
        assert_eq!(
            to_letters("19", Question::KuiVana).unwrap(),
            "üheksateistkümneaastane"
        );
        assert_eq!(
            to_letters("10453", Question::Mitmes).unwrap(),
            "kümne tuhande neljasaja viiekümne kolmas"
        );
        assert_eq!(
            to_letters("1212", Question::Mitmendal).unwrap(),
            "ühe tuhande kahesaja kaheteistkümnendal"
        );
    }

    #[test]
    fn big_integers_beyond_i128() {
        // 2 * 10^40
        let huge = format!("2{}", "0".repeat(40));
        assert_eq!(
            to_letters(&huge, Question::KuiPalju).unwrap(),
            "kakskümmend miljonit detsiljonit"
        );
    }

    #[test]
    fn bad_input_is_an_error_not_a_panic() {
        assert_eq!(
            to_letters("12a3", Question::KuiPalju),
            Err(InvalidInputError::InvalidCharacter {
                character: 'a',
                position: 2
            })
        );
        assert_eq!(
            to_letters("-1", Question::Mitmes),
            Err(InvalidInputError::NegativeOrdinal {
                mode: estonian_numbers::Mode::Ordinal
            })
        );
    }
}
