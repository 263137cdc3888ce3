// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639 language code normalization.
//!
//! CLDR files and the database are keyed by the shortest available code, so
//! everything user-supplied or scraped passes through [`to_alpha2_code`]
//! first. The table covers the full ISO 639-1 set, including the
//! bibliographic 639-2 variants for languages that have two three-letter
//! codes (`ger`/`deu`, `fre`/`fra`, ...).
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

use std::fmt;

/// Maps an ISO 639-2/639-3 three-letter code to its ISO 639-1 equivalent.
///
/// Returns `None` for codes with no two-letter form (e.g. `kaa`).
fn alpha3_to_alpha2(code: &str) -> Option<&'static str> {
    let alpha2 = match code {
        "aar" => "aa",
        "abk" => "ab",
        "ave" => "ae",
        "afr" => "af",
        "aka" => "ak",
        "amh" => "am",
        "arg" => "an",
        "ara" => "ar",
        "asm" => "as",
        "ava" => "av",
        "aym" => "ay",
        "aze" => "az",
        "bak" => "ba",
        "bel" => "be",
        "bul" => "bg",
        "bih" => "bh",
        "bis" => "bi",
        "bam" => "bm",
        "ben" => "bn",
        "bod" | "tib" => "bo",
        "bre" => "br",
        "bos" => "bs",
        "cat" => "ca",
        "che" => "ce",
        "cha" => "ch",
        "cos" => "co",
        "cre" => "cr",
        "ces" | "cze" => "cs",
        "chu" => "cu",
        "chv" => "cv",
        "cym" | "wel" => "cy",
        "dan" => "da",
        "deu" | "ger" => "de",
        "div" => "dv",
        "dzo" => "dz",
        "ewe" => "ee",
        "ell" | "gre" => "el",
        "eng" => "en",
        "epo" => "eo",
        "spa" => "es",
        "est" => "et",
        "eus" | "baq" => "eu",
        "fas" | "per" => "fa",
        "ful" => "ff",
        "fin" => "fi",
        "fij" => "fj",
        "fao" => "fo",
        "fra" | "fre" => "fr",
        "fry" => "fy",
        "gle" => "ga",
        "gla" => "gd",
        "glg" => "gl",
        "grn" => "gn",
        "guj" => "gu",
        "glv" => "gv",
        "hau" => "ha",
        "heb" => "he",
        "hin" => "hi",
        "hmo" => "ho",
        "hrv" => "hr",
        "hat" => "ht",
        "hun" => "hu",
        "hye" | "arm" => "hy",
        "her" => "hz",
        "ina" => "ia",
        "ind" => "id",
        "ile" => "ie",
        "ibo" => "ig",
        "iii" => "ii",
        "ipk" => "ik",
        "ido" => "io",
        "isl" | "ice" => "is",
        "ita" => "it",
        "iku" => "iu",
        "jpn" => "ja",
        "jav" => "jv",
        "kat" | "geo" => "ka",
        "kon" => "kg",
        "kik" => "ki",
        "kua" => "kj",
        "kaz" => "kk",
        "kal" => "kl",
        "khm" => "km",
        "kan" => "kn",
        "kor" => "ko",
        "kau" => "kr",
        "kas" => "ks",
        "kur" => "ku",
        "kom" => "kv",
        "cor" => "kw",
        "kir" => "ky",
        "lat" => "la",
        "ltz" => "lb",
        "lug" => "lg",
        "lim" => "li",
        "lin" => "ln",
        "lao" => "lo",
        "lit" => "lt",
        "lub" => "lu",
        "lav" => "lv",
        "mlg" => "mg",
        "mah" => "mh",
        "mri" | "mao" => "mi",
        "mkd" | "mac" => "mk",
        "mal" => "ml",
        "mon" => "mn",
        "mar" => "mr",
        "msa" | "may" => "ms",
        "mlt" => "mt",
        "mya" | "bur" => "my",
        "nau" => "na",
        "nob" => "nb",
        "nde" => "nd",
        "nep" => "ne",
        "ndo" => "ng",
        "nld" | "dut" => "nl",
        "nno" => "nn",
        "nor" => "no",
        "nbl" => "nr",
        "nav" => "nv",
        "nya" => "ny",
        "oci" => "oc",
        "oji" => "oj",
        "orm" => "om",
        "ori" => "or",
        "oss" => "os",
        "pan" => "pa",
        "pli" => "pi",
        "pol" => "pl",
        "pus" => "ps",
        "por" => "pt",
        "que" => "qu",
        "roh" => "rm",
        "run" => "rn",
        "ron" | "rum" => "ro",
        "rus" => "ru",
        "kin" => "rw",
        "san" => "sa",
        "srd" => "sc",
        "snd" => "sd",
        "sme" => "se",
        "sag" => "sg",
        "sin" => "si",
        "slk" | "slo" => "sk",
        "slv" => "sl",
        "smo" => "sm",
        "sna" => "sn",
        "som" => "so",
        "sqi" | "alb" => "sq",
        "srp" => "sr",
        "ssw" => "ss",
        "sot" => "st",
        "sun" => "su",
        "swe" => "sv",
        "swa" => "sw",
        "tam" => "ta",
        "tel" => "te",
        "tgk" => "tg",
        "tha" => "th",
        "tir" => "ti",
        "tuk" => "tk",
        "tgl" => "tl",
        "tsn" => "tn",
        "ton" => "to",
        "tur" => "tr",
        "tso" => "ts",
        "tat" => "tt",
        "twi" => "tw",
        "tah" => "ty",
        "uig" => "ug",
        "ukr" => "uk",
        "urd" => "ur",
        "uzb" => "uz",
        "ven" => "ve",
        "vie" => "vi",
        "vol" => "vo",
        "wln" => "wa",
        "wol" => "wo",
        "xho" => "xh",
        "yid" => "yi",
        "yor" => "yo",
        "zha" => "za",
        "zho" | "chi" => "zh",
        "zul" => "zu",
        _ => return None,
    };
    Some(alpha2)
}

/// Normalizes a language code to its two-letter form where one exists.
///
/// Codes without a two-letter equivalent pass through unchanged, as do
/// codes that are already two letters — normalization is idempotent. A
/// locale variant suffix survives normalization of its prefix:
/// `eng_US` becomes `en_US`.
pub fn to_alpha2_code(code: &str) -> String {
    if let Some((base, variant)) = code.split_once('_') {
        return match alpha3_to_alpha2(base) {
            Some(alpha2) => format!("{alpha2}_{variant}"),
            None => code.to_string(),
        };
    }
    alpha3_to_alpha2(code).map_or_else(|| code.to_string(), ToString::to_string)
}

/// A requested locale code together with its normalized form.
///
/// Diagnostics show `requested -> normalized` when the two differ, so the
/// user can see what their input was resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCode {
    pub requested: String,
    pub normalized: String,
}

impl LocaleCode {
    pub fn new(requested: &str) -> Self {
        Self {
            requested: requested.to_string(),
            normalized: to_alpha2_code(requested),
        }
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.requested == self.normalized {
            write!(f, "{}", self.normalized)
        } else {
            write!(f, "{} -> {}", self.requested, self.normalized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_letter_codes_normalize() {
        assert_eq!(to_alpha2_code("eng"), "en");
        assert_eq!(to_alpha2_code("deu"), "de");
        assert_eq!(to_alpha2_code("zho"), "zh");
        assert_eq!(to_alpha2_code("srd"), "sc");
    }

    #[test]
    fn bibliographic_variants_normalize() {
        assert_eq!(to_alpha2_code("ger"), "de");
        assert_eq!(to_alpha2_code("fre"), "fr");
        assert_eq!(to_alpha2_code("chi"), "zh");
    }

    #[test]
    fn codes_without_alpha2_pass_through() {
        assert_eq!(to_alpha2_code("kaa"), "kaa");
        assert_eq!(to_alpha2_code("sme"), "se");
    }

    #[test]
    fn normalization_is_idempotent() {
        for code in ["en", "kaa", "sr", "zh"] {
            assert_eq!(to_alpha2_code(&to_alpha2_code(code)), to_alpha2_code(code));
        }
    }

    #[test]
    fn locale_variants_keep_their_suffix() {
        assert_eq!(to_alpha2_code("eng_US"), "en_US");
        assert_eq!(to_alpha2_code("kaa_UZ"), "kaa_UZ");
    }

    #[test]
    fn display_shows_both_forms_when_they_differ() {
        assert_eq!(LocaleCode::new("eng").to_string(), "eng -> en");
        assert_eq!(LocaleCode::new("en").to_string(), "en");
    }
}
