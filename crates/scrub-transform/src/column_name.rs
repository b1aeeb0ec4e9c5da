//! Canonical column identifiers.
//!
//! Raw exports arrive with padded, accented, punctuated header names.
//! Canonical form is ASCII lowercase letters, digits, and underscores only,
//! so every downstream stage can refer to columns by one spelling.

/// Folds one character to its closest ASCII equivalent, lowercased.
///
/// Covers the Latin accented letters seen in real exports; anything else
/// is lowercased as-is and left for [`canonical_column_name`] to strip.
fn push_ascii_folded(ch: char, out: &mut String) {
    match ch {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' => out.push('a'),
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => out.push('e'),
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => out.push('i'),
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ø' | 'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' | 'Ø' => out.push('o'),
        'ú' | 'ù' | 'û' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ü' => out.push('u'),
        'ñ' | 'Ñ' => out.push('n'),
        'ç' | 'Ç' => out.push('c'),
        'ý' | 'ÿ' | 'Ý' => out.push('y'),
        'ß' => out.push_str("ss"),
        'æ' | 'Æ' => out.push_str("ae"),
        'œ' | 'Œ' => out.push_str("oe"),
        _ => {
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
        }
    }
}

/// Computes the canonical form of a raw column name.
///
/// Surrounding whitespace is trimmed, accented characters are folded to
/// ASCII, everything is lowercased, whitespace and hyphens become
/// underscores, and any remaining character outside `[a-z0-9_]` is
/// stripped. The function is idempotent: a canonical name maps to itself.
///
/// # Examples
///
/// ```
/// use scrub_transform::canonical_column_name;
///
/// assert_eq!(canonical_column_name("  Fecha Actualización "), "fecha_actualizacion");
/// assert_eq!(canonical_column_name("Precio-Venta"), "precio_venta");
/// assert_eq!(canonical_column_name("sku"), "sku");
/// ```
pub fn canonical_column_name(raw: &str) -> String {
    let mut folded = String::with_capacity(raw.len());
    for ch in raw.trim().chars() {
        push_ascii_folded(ch, &mut folded);
    }

    let mut name = String::with_capacity(folded.len());
    for ch in folded.chars() {
        if ch.is_whitespace() || ch == '-' {
            name.push('_');
        } else if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' {
            name.push(ch);
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(canonical_column_name("  SKU "), "sku");
        assert_eq!(canonical_column_name("Margen"), "margen");
    }

    #[test]
    fn folds_accents_to_ascii() {
        assert_eq!(canonical_column_name("Categoría"), "categoria");
        assert_eq!(canonical_column_name("Fecha Actualización"), "fecha_actualizacion");
        assert_eq!(canonical_column_name("Straße"), "strasse");
    }

    #[test]
    fn maps_whitespace_and_hyphens_to_underscores() {
        assert_eq!(canonical_column_name("Precio Venta"), "precio_venta");
        assert_eq!(canonical_column_name("Precio-Compra"), "precio_compra");
        assert_eq!(canonical_column_name("unit\tcount"), "unit_count");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(canonical_column_name("margen%"), "margen");
        assert_eq!(canonical_column_name("precio (venta)"), "precio_venta");
    }

    #[test]
    fn keeps_digits_and_underscores() {
        assert_eq!(canonical_column_name("price_2024"), "price_2024");
    }

    #[test]
    fn is_idempotent() {
        for raw in ["  Fecha Actualización ", "Precio-Venta", "SKU #", "Ærlig"] {
            let once = canonical_column_name(raw);
            assert_eq!(canonical_column_name(&once), once);
        }
    }
}
