//! Unicode superscript and subscript tables
//!
//! Only a subset of characters has a unicode script form. Anything outside
//! these tables is emitted unchanged by the conversion helpers.

use phf::phf_map;

/// Characters with a unicode superscript form
pub static SUPERSCRIPTS: phf::Map<char, char> = phf_map! {
    '0' => '⁰',
    '1' => '¹',
    '2' => '²',
    '3' => '³',
    '4' => '⁴',
    '5' => '⁵',
    '6' => '⁶',
    '7' => '⁷',
    '8' => '⁸',
    '9' => '⁹',
    '+' => '⁺',
    '-' => '⁻',
    '=' => '⁼',
    '(' => '⁽',
    ')' => '⁾',
    'n' => 'ⁿ',
    'i' => 'ⁱ',
    'x' => 'ˣ',
};

/// Characters with a unicode subscript form
pub static SUBSCRIPTS: phf::Map<char, char> = phf_map! {
    '0' => '₀',
    '1' => '₁',
    '2' => '₂',
    '3' => '₃',
    '4' => '₄',
    '5' => '₅',
    '6' => '₆',
    '7' => '₇',
    '8' => '₈',
    '9' => '₉',
    '+' => '₊',
    '-' => '₋',
    '=' => '₌',
    '(' => '₍',
    ')' => '₎',
    'a' => 'ₐ',
    'e' => 'ₑ',
    'h' => 'ₕ',
    'i' => 'ᵢ',
    'j' => 'ⱼ',
    'k' => 'ₖ',
    'l' => 'ₗ',
    'm' => 'ₘ',
    'n' => 'ₙ',
    'o' => 'ₒ',
    'p' => 'ₚ',
    'r' => 'ᵣ',
    's' => 'ₛ',
    't' => 'ₜ',
    'u' => 'ᵤ',
    'v' => 'ᵥ',
    'x' => 'ₓ',
};

/// Map every character through `SUPERSCRIPTS`, passing unknown ones through
pub fn to_superscript(text: &str) -> String {
    convert_with(text, &SUPERSCRIPTS)
}

/// Map every character through `SUBSCRIPTS`, passing unknown ones through
pub fn to_subscript(text: &str) -> String {
    convert_with(text, &SUBSCRIPTS)
}

#[inline]
fn convert_with(text: &str, table: &phf::Map<char, char>) -> String {
    text.chars()
        .map(|c| table.get(&c).copied().unwrap_or(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superscript_digits_and_signs() {
        assert_eq!(to_superscript("2"), "²");
        assert_eq!(to_superscript("n+1"), "ⁿ⁺¹");
        assert_eq!(to_superscript("(10)"), "⁽¹⁰⁾");
    }

    #[test]
    fn test_subscript_letters() {
        assert_eq!(to_subscript("i-1"), "ᵢ₋₁");
        assert_eq!(to_subscript("i=1"), "ᵢ₌₁");
        assert_eq!(to_subscript("max"), "ₘₐₓ");
    }

    #[test]
    fn test_unmapped_characters_pass_through() {
        assert_eq!(to_superscript("y"), "y");
        assert_eq!(to_superscript("∞"), "∞");
        assert_eq!(to_subscript("b"), "b");
        assert_eq!(to_subscript(""), "");
    }
}
