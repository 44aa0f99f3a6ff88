/// Characters `WinAnsiEncoding` places at 0x80..=0x9F. Unused codes are `None`.
const WIN_ANSI_80_9F: [Option<char>; 32] = [
    Some('\u{20AC}'), None, Some('\u{201A}'), Some('\u{0192}'),
    Some('\u{201E}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{02C6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
    Some('\u{0152}'), None, Some('\u{017D}'), None,
    None, Some('\u{2018}'), Some('\u{2019}'), Some('\u{201C}'),
    Some('\u{201D}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    Some('\u{02DC}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203A}'),
    Some('\u{0153}'), None, Some('\u{017E}'), Some('\u{0178}'),
];

fn win_ansi_byte(c: char) -> u8 {
    match c as u32 {
        // C1 controls have no glyph; their byte values are taken by the table above.
        0x80..=0x9F => b'?',
        code @ 0..=0xFF => code as u8,
        _ => WIN_ANSI_80_9F
            .iter()
            .position(|entry| *entry == Some(c))
            .map_or(b'?', |offset| 0x80 + offset as u8),
    }
}

/// Encodes text for a standard Type1 font with `WinAnsiEncoding`.
///
/// Latin-1 and the typographic characters at 0x80..=0x9F (curly quotes,
/// dashes, the euro sign) are kept. Anything else has no glyph in the
/// built-in fonts and becomes `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(win_ansi_byte).collect()
}

/// Decodes `WinAnsiEncoding` bytes. Unused codes become U+FFFD.
pub fn from_win_ansi(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x80..=0x9F => WIN_ANSI_80_9F[usize::from(b - 0x80)].unwrap_or(char::REPLACEMENT_CHARACTER),
            _ => char::from(b),
        })
        .collect()
}

/// Resource name for the n-th registered font (`F1`, `F2`, ...).
pub fn font_resource_name(index: usize) -> String {
    format!("F{}", index + 1)
}
