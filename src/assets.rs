//! Static asset table for balloon and letter artwork.

use crate::config::AssetPaths;

/// The fixed alphabet balloons are drawn from.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Number of distinct balloon artworks; images cycle by balloon index.
pub const BALLOON_VARIANTS: usize = 10;

const LETTER_IMAGES: [(char, &str); 26] = [
    ('A', "Symbol 10001.png"),
    ('B', "Symbol 10002.png"),
    ('C', "Symbol 10003.png"),
    ('D', "Symbol 10004.png"),
    ('E', "Symbol 10005.png"),
    ('F', "Symbol 10006.png"),
    ('G', "Symbol 10007.png"),
    ('H', "Symbol 10008.png"),
    ('I', "Symbol 10009.png"),
    ('J', "Symbol 10010.png"),
    ('K', "Symbol 10011.png"),
    ('L', "Symbol 10012.png"),
    ('M', "Symbol 10013.png"),
    ('N', "Symbol 10014.png"),
    ('O', "Symbol 10015.png"),
    ('P', "Symbol 10016.png"),
    ('Q', "Symbol 10017.png"),
    ('R', "Symbol 10018.png"),
    ('S', "Symbol 10019.png"),
    ('T', "Symbol 10020.png"),
    ('U', "Symbol 10021.png"),
    ('V', "Symbol 10022.png"),
    ('W', "Symbol 10023.png"),
    ('X', "Symbol 10024.png"),
    ('Y', "Symbol 10025.png"),
    ('Z', "Symbol 10026.png"),
];

/// File name of the artwork for `letter`, if the table has one.
pub fn letter_image_file(letter: char) -> Option<&'static str> {
    LETTER_IMAGES
        .iter()
        .find(|(l, _)| *l == letter)
        .map(|(_, file)| *file)
}

/// Full path to the letter artwork. `None` means the letter is drawn as text.
pub fn letter_image_path(paths: &AssetPaths, letter: char) -> Option<String> {
    letter_image_file(letter).map(|file| format!("{}/{}", paths.letters_dir, file))
}

pub fn balloon_image_path(paths: &AssetPaths, index: usize) -> String {
    format!(
        "{}/balloon ({}).png",
        paths.balloons_dir,
        (index % BALLOON_VARIANTS) + 1
    )
}
