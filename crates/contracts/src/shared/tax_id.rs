//! CPF / CNPJ check-digit validation and formatting
//!
//! Both identifiers are digit runs whose trailing two digits are modulo-11
//! check digits over the preceding ones. Punctuation is ignored on input.
//! Validation never fails loudly: anything malformed is simply `false`.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const CPF_LENGTH: usize = 11;
pub const CNPJ_LENGTH: usize = 14;

const CPF_MASK: &str = "###.###.###-##";
const CNPJ_MASK: &str = "##.###.###/####-##";

const CNPJ_WEIGHTS_1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_2: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Kind of identifier, determined by the number of digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxIdKind {
    /// CPF, 11 digits
    Personal,
    /// CNPJ, 14 digits
    Organization,
}

impl TaxIdKind {
    pub fn expected_length(&self) -> usize {
        match self {
            TaxIdKind::Personal => CPF_LENGTH,
            TaxIdKind::Organization => CNPJ_LENGTH,
        }
    }

    pub fn from_length(len: usize) -> Option<Self> {
        match len {
            CPF_LENGTH => Some(TaxIdKind::Personal),
            CNPJ_LENGTH => Some(TaxIdKind::Organization),
            _ => None,
        }
    }

    /// Short name shown in form labels
    pub fn display_name(&self) -> &'static str {
        match self {
            TaxIdKind::Personal => "CPF",
            TaxIdKind::Organization => "CNPJ",
        }
    }

    /// Check digits of an already cleaned run of this kind
    fn check(&self, digits: &[u32]) -> bool {
        match self {
            TaxIdKind::Personal => check_cpf_digits(digits),
            TaxIdKind::Organization => check_cnpj_digits(digits),
        }
    }
}

/// A validated identifier. Holds only the digits; punctuation is re-applied on display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaxId {
    kind: TaxIdKind,
    digits: String,
}

impl TaxId {
    /// Returns `Some` only if `raw` holds a valid CPF or CNPJ
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = clean(raw);
        let kind = TaxIdKind::from_length(digits.len())?;
        if !kind.check(&to_digits(&digits)) {
            return None;
        }
        Some(Self { kind, digits })
    }

    pub fn kind(&self) -> TaxIdKind {
        self.kind
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn formatted(&self) -> String {
        match self.kind {
            TaxIdKind::Personal => apply_mask(&self.digits, CPF_MASK),
            TaxIdKind::Organization => apply_mask(&self.digits, CNPJ_MASK),
        }
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Strip everything except ASCII digits
pub fn clean(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validate a CPF or CNPJ, selected by the number of digits
pub fn validate(raw: &str) -> bool {
    TaxId::parse(raw).is_some()
}

pub fn validate_cpf(raw: &str) -> bool {
    check_cpf_digits(&to_digits(&clean(raw)))
}

pub fn validate_cnpj(raw: &str) -> bool {
    check_cnpj_digits(&to_digits(&clean(raw)))
}

/// `ddd.ddd.ddd-dd`, as far as the digits go
pub fn format_cpf(raw: &str) -> String {
    apply_mask(&clean(raw), CPF_MASK)
}

/// `dd.ddd.ddd/dddd-dd`, as far as the digits go
pub fn format_cnpj(raw: &str) -> String {
    apply_mask(&clean(raw), CNPJ_MASK)
}

/// Picks the CPF mask for up to 11 digits, the CNPJ mask otherwise.
/// Performs no validation.
pub fn format(raw: &str) -> String {
    let digits = clean(raw);
    if digits.len() <= CPF_LENGTH {
        apply_mask(&digits, CPF_MASK)
    } else {
        apply_mask(&digits, CNPJ_MASK)
    }
}

fn to_digits(cleaned: &str) -> Vec<u32> {
    cleaned.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn all_same(digits: &[u32]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

fn check_cpf_digits(d: &[u32]) -> bool {
    if d.len() != CPF_LENGTH || all_same(d) {
        return false;
    }
    cpf_check_digit(&d[..9]) == d[9] && cpf_check_digit(&d[..10]) == d[10]
}

/// Weights run from `len + 1` down to 2
fn cpf_check_digit(body: &[u32]) -> u32 {
    let top = body.len() as u32 + 1;
    let sum: u32 = body
        .iter()
        .enumerate()
        .map(|(i, d)| d * (top - i as u32))
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        digit => digit,
    }
}

fn check_cnpj_digits(d: &[u32]) -> bool {
    if d.len() != CNPJ_LENGTH || all_same(d) {
        return false;
    }
    cnpj_check_digit(&d[..12], &CNPJ_WEIGHTS_1) == d[12]
        && cnpj_check_digit(&d[..13], &CNPJ_WEIGHTS_2) == d[13]
}

fn cnpj_check_digit(body: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = body.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// `#` consumes a digit, anything else is a literal separator.
/// Separators are only emitted while digits remain; digits past the mask are appended as-is.
fn apply_mask(digits: &str, mask: &str) -> String {
    let mut out = String::with_capacity(mask.len().max(digits.len()));
    let mut rest = digits.chars().peekable();
    for slot in mask.chars() {
        if rest.peek().is_none() {
            break;
        }
        if slot == '#' {
            if let Some(d) = rest.next() {
                out.push(d);
            }
        } else {
            out.push(slot);
        }
    }
    out.extend(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mutations(valid: &str) -> Vec<String> {
        let mut out = Vec::new();
        for (i, original) in valid.char_indices() {
            for replacement in '0'..='9' {
                if replacement != original {
                    let mut s = valid.to_string();
                    s.replace_range(i..i + 1, &replacement.to_string());
                    out.push(s);
                }
            }
        }
        out
    }

    #[test]
    fn test_known_valid_cpf() {
        assert!(validate("52998224725"));
        assert!(validate("529.982.247-25"));
        assert!(validate("111.444.777-35"));
        assert!(validate_cpf("52998224725"));
        assert!(!validate_cnpj("52998224725"));
    }

    #[test]
    fn test_cpf_last_digit_altered() {
        assert!(!validate("52998224724"));
        assert!(!validate("52998224715"));
    }

    #[test]
    fn test_repeated_digits_rejected() {
        for d in '0'..='9' {
            let cpf: String = std::iter::repeat(d).take(CPF_LENGTH).collect();
            let cnpj: String = std::iter::repeat(d).take(CNPJ_LENGTH).collect();
            assert!(!validate(&cpf), "{cpf}");
            assert!(!validate(&cnpj), "{cnpj}");
        }
    }

    #[test]
    fn test_known_valid_cnpj() {
        assert!(validate("11222333000181"));
        assert!(validate("11.222.333/0001-81"));
        assert!(!validate("11222333000182"));
        assert!(!validate("11222333000171"));
    }

    #[test]
    fn test_any_single_digit_change_invalidates() {
        for valid in ["52998224725", "11144477735", "11222333000181"] {
            for mutated in mutations(valid) {
                assert!(!validate(&mutated), "{mutated} should be invalid");
            }
        }
    }

    #[test]
    fn test_wrong_length_is_false() {
        assert!(!validate(""));
        assert!(!validate("abc"));
        assert!(!validate("5299822472"));
        assert!(!validate("529982247250"));
        assert!(!validate_cpf("11222333000181"));
        assert!(!validate_cnpj("1122233300018"));
    }

    #[test]
    fn test_punctuation_does_not_matter() {
        let decorated = [
            ("52998224725", " 529 982 247/25 "),
            ("52998224724", "529.982.247-24"),
            ("11222333000181", "11-222-333-0001.81"),
        ];
        for (bare, fancy) in decorated {
            assert_eq!(validate(bare), validate(fancy));
        }
    }

    #[test]
    fn test_format_full_masks() {
        assert_eq!(format_cpf("52998224725"), "529.982.247-25");
        assert_eq!(format_cnpj("11222333000181"), "11.222.333/0001-81");
        assert_eq!(format("529.982.247-25"), "529.982.247-25");
        assert_eq!(format("11222333000181"), "11.222.333/0001-81");
    }

    #[test]
    fn test_format_partial_input() {
        assert_eq!(format(""), "");
        assert_eq!(format("abc"), "");
        assert_eq!(format("123"), "123");
        assert_eq!(format("1234"), "123.4");
        assert_eq!(format("1234567890"), "123.456.789-0");
        assert_eq!(format("123456789012"), "12.345.678/9012");
        assert_eq!(format("1122233300018199"), "11.222.333/0001-8199");
    }

    #[test]
    fn test_tax_id_parse() {
        let cpf = TaxId::parse("529.982.247-25").unwrap();
        assert_eq!(cpf.kind(), TaxIdKind::Personal);
        assert_eq!(cpf.digits(), "52998224725");
        assert_eq!(cpf.to_string(), "529.982.247-25");

        let cnpj = TaxId::parse("11222333000181").unwrap();
        assert_eq!(cnpj.kind(), TaxIdKind::Organization);
        assert_eq!(cnpj.formatted(), "11.222.333/0001-81");

        assert!(TaxId::parse("00000000000").is_none());
        assert!(TaxId::parse("123").is_none());
    }
}
