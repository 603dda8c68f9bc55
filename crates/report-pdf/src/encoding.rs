//! WinAnsi (CP-1252) text encoding.
//!
//! The report content is French, so the Latin-1 block plus the 0x80–0x9F
//! punctuation slots (curly quotes, dashes, ellipsis, euro) must be mapped.
//! Unmappable characters encode as `?`.

/// The character a WinAnsi code renders as, used to build font width arrays.
/// Unassigned slots map to space.
pub fn winansi_char(code: u8) -> char {
    match code {
        0x80 => '€',
        0x82 => '‚',
        0x83 => 'ƒ',
        0x84 => '„',
        0x85 => '…',
        0x86 => '†',
        0x87 => '‡',
        0x88 => 'ˆ',
        0x89 => '‰',
        0x8A => 'Š',
        0x8B => '‹',
        0x8C => 'Œ',
        0x8E => 'Ž',
        0x91 => '‘',
        0x92 => '’',
        0x93 => '“',
        0x94 => '”',
        0x95 => '•',
        0x96 => '–',
        0x97 => '—',
        0x98 => '˜',
        0x99 => '™',
        0x9A => 'š',
        0x9B => '›',
        0x9C => 'œ',
        0x9E => 'ž',
        0x9F => 'Ÿ',
        0x81 | 0x8D | 0x8F | 0x90 | 0x9D => ' ',
        other => other as char,
    }
}

/// WinAnsi code for a character, if it has one.
pub fn winansi_byte(ch: char) -> Option<u8> {
    let cp = ch as u32;
    match ch {
        '€' => Some(0x80),
        '‚' => Some(0x82),
        'ƒ' => Some(0x83),
        '„' => Some(0x84),
        '…' => Some(0x85),
        '†' => Some(0x86),
        '‡' => Some(0x87),
        'ˆ' => Some(0x88),
        '‰' => Some(0x89),
        'Š' => Some(0x8A),
        '‹' => Some(0x8B),
        'Œ' => Some(0x8C),
        'Ž' => Some(0x8E),
        '‘' => Some(0x91),
        '’' => Some(0x92),
        '“' => Some(0x93),
        '”' => Some(0x94),
        '•' => Some(0x95),
        '–' => Some(0x96),
        '—' => Some(0x97),
        '˜' => Some(0x98),
        '™' => Some(0x99),
        'š' => Some(0x9A),
        '›' => Some(0x9B),
        'œ' => Some(0x9C),
        'ž' => Some(0x9E),
        'Ÿ' => Some(0x9F),
        _ if cp < 0x80 => Some(cp as u8),
        _ if (0xA0..=0xFF).contains(&cp) => Some(cp as u8),
        _ => None,
    }
}

/// Encode a string to WinAnsi bytes, substituting `?` for unmappable chars.
pub fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| winansi_byte(ch).unwrap_or(b'?'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(encode("Planning 32 semaines"), b"Planning 32 semaines");
    }

    #[test]
    fn test_latin1_accents() {
        assert_eq!(encode("réalisé"), vec![b'r', 0xE9, b'a', b'l', b'i', b's', 0xE9]);
    }

    #[test]
    fn test_punctuation_block() {
        assert_eq!(encode("’"), vec![0x92]);
        assert_eq!(encode("–"), vec![0x96]);
        assert_eq!(encode("…"), vec![0x85]);
        assert_eq!(encode("•"), vec![0x95]);
    }

    #[test]
    fn test_unmappable_becomes_question_mark() {
        assert_eq!(encode("日"), vec![b'?']);
    }

    #[test]
    fn test_round_trip_through_winansi_char() {
        for code in 0x20u8..=0xFF {
            let ch = winansi_char(code);
            if ch != ' ' || code == 0x20 {
                assert_eq!(winansi_byte(ch), Some(code), "code {:#x}", code);
            }
        }
    }
}
