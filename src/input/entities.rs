/// Resolves the body of an entity reference (`amp`, `#8217`, `#x2014`).
///
/// XHTML chapters routinely use HTML named entities even though XML only
/// predefines five of them, so the common typographic ones are covered too.
pub fn resolve_entity(entity: &str) -> Option<char> {
    let c = match entity {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{00A0}',
        "mdash" => '\u{2014}',
        "ndash" => '\u{2013}',
        "hellip" => '\u{2026}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201C}',
        "rdquo" => '\u{201D}',
        "laquo" => '\u{00AB}',
        "raquo" => '\u{00BB}',
        "shy" => '\u{00AD}',
        "copy" => '\u{00A9}',
        "aacute" => 'á',
        "eacute" => 'é',
        "iacute" => 'í',
        "oacute" => 'ó',
        "uacute" => 'ú',
        "agrave" => 'à',
        "egrave" => 'è',
        "ograve" => 'ò',
        "ntilde" => 'ñ',
        "ccedil" => 'ç',
        "uuml" => 'ü',
        "ouml" => 'ö',
        "auml" => 'ä',
        "szlig" => 'ß',
        "iexcl" => '¡',
        "iquest" => '¿',
        _ => return resolve_numeric(entity),
    };
    Some(c)
}

fn resolve_numeric(entity: &str) -> Option<char> {
    let digits = entity.strip_prefix('#')?;
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined() {
        assert_eq!(resolve_entity("amp"), Some('&'));
        assert_eq!(resolve_entity("lt"), Some('<'));
        assert_eq!(resolve_entity("apos"), Some('\''));
    }

    #[test]
    fn test_typographic() {
        assert_eq!(resolve_entity("mdash"), Some('\u{2014}'));
        assert_eq!(resolve_entity("rsquo"), Some('\u{2019}'));
        assert_eq!(resolve_entity("nbsp"), Some('\u{00A0}'));
    }

    #[test]
    fn test_numeric() {
        assert_eq!(resolve_entity("#65"), Some('A'));
        assert_eq!(resolve_entity("#8217"), Some('\u{2019}'));
        assert_eq!(resolve_entity("#x41"), Some('A'));
        assert_eq!(resolve_entity("#X2014"), Some('\u{2014}'));
    }

    #[test]
    fn test_unknown_or_invalid() {
        assert_eq!(resolve_entity("bogus"), None);
        assert_eq!(resolve_entity("#"), None);
        assert_eq!(resolve_entity("#xZZ"), None);
        assert_eq!(resolve_entity("#xD800"), None);
    }
}
