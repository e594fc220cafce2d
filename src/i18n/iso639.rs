// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language code validation and display names.
//!
//! Content files name their language with a two-letter code. A code that is
//! valid ISO 639-1 but not one of [`Lang`](super::Lang) is reported as an
//! unsupported translation rather than a typo, so the loader uses
//! [`is_valid_iso639_1`] to word its error.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// Validates whether a string is a known ISO 639-1 two-letter language code.
///
/// # Examples
/// ```
/// assert!(dvdisaster_site::i18n::is_valid_iso639_1("ru"));
/// assert!(!dvdisaster_site::i18n::is_valid_iso639_1("xx"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    matches!(
        code,
        "aa" | "ab" | "af" | "ak" | "am" | "an" | "ar" | "as" | "av" | "ay" | "az"
            | "ba" | "be" | "bg" | "bh" | "bi" | "bm" | "bn" | "bo" | "br" | "bs"
            | "ca" | "ce" | "ch" | "co" | "cr" | "cs" | "cu" | "cv" | "cy"
            | "da" | "de" | "dv" | "dz"
            | "ee" | "el" | "en" | "eo" | "es" | "et" | "eu"
            | "fa" | "ff" | "fi" | "fj" | "fo" | "fr" | "fy"
            | "ga" | "gd" | "gl" | "gn" | "gu" | "gv"
            | "ha" | "he" | "hi" | "ho" | "hr" | "ht" | "hu" | "hy" | "hz"
            | "ia" | "id" | "ie" | "ig" | "ii" | "ik" | "io" | "is" | "it" | "iu"
            | "ja" | "jv"
            | "ka" | "kg" | "ki" | "kj" | "kk" | "kl" | "km" | "kn" | "ko" | "kr" | "ks" | "ku" | "kv" | "kw" | "ky"
            | "la" | "lb" | "lg" | "li" | "ln" | "lo" | "lt" | "lu" | "lv"
            | "mg" | "mh" | "mi" | "mk" | "ml" | "mn" | "mr" | "ms" | "mt" | "my"
            | "na" | "nb" | "nd" | "ne" | "ng" | "nl" | "nn" | "no" | "nr" | "nv" | "ny"
            | "oc" | "oj" | "om" | "or" | "os"
            | "pa" | "pi" | "pl" | "ps" | "pt"
            | "qu"
            | "rm" | "rn" | "ro" | "ru" | "rw"
            | "sa" | "sc" | "sd" | "se" | "sg" | "si" | "sk" | "sl" | "sm" | "sn" | "so" | "sq" | "sr" | "ss" | "st" | "su" | "sv" | "sw"
            | "ta" | "te" | "tg" | "th" | "ti" | "tk" | "tl" | "tn" | "to" | "tr" | "ts" | "tt" | "tw" | "ty"
            | "ug" | "uk" | "ur" | "uz"
            | "ve" | "vi" | "vo"
            | "wa" | "wo"
            | "xh"
            | "yi" | "yo"
            | "za" | "zh" | "zu"
    )
}

/// English name of an ISO 639-1 code, for the languages dvdisaster has
/// shipped documentation or GUI translations in.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "cs" => Some("Czech"),
        "de" => Some("German"),
        "en" => Some("English"),
        "es" => Some("Spanish"),
        "fr" => Some("French"),
        "it" => Some("Italian"),
        "pt" => Some("Portuguese"),
        "ru" => Some("Russian"),
        "sv" => Some("Swedish"),
        _ => None,
    }
}

/// Native name of an ISO 639-1 code, as shown in the language switcher.
pub fn native_name(code: &str) -> Option<&'static str> {
    match code {
        "cs" => Some("Česky"),
        "de" => Some("Deutsch"),
        "en" => Some("English"),
        "es" => Some("Español"),
        "fr" => Some("Français"),
        "it" => Some("Italiano"),
        "pt" => Some("Português"),
        "ru" => Some("Русский"),
        "sv" => Some("Svenska"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes_accepted() {
        assert!(is_valid_iso639_1("de"));
        assert!(is_valid_iso639_1("en"));
        assert!(is_valid_iso639_1("ru"));
        assert!(is_valid_iso639_1("cs"));
    }

    #[test]
    fn invalid_codes_rejected() {
        assert!(!is_valid_iso639_1("xx"));
        assert!(!is_valid_iso639_1(""));
        assert!(!is_valid_iso639_1("rus"));
        assert!(!is_valid_iso639_1("RU"));
    }

    #[test]
    fn names_resolve() {
        assert_eq!(language_name("ru"), Some("Russian"));
        assert_eq!(native_name("ru"), Some("Русский"));
        assert_eq!(native_name("de"), Some("Deutsch"));
        assert_eq!(native_name("xx"), None);
    }
}
