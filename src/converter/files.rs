//! Input file naming
//!
//! Courses of one song live in separate files named `<song>_h.bin`,
//! `<song>_n.bin` and `<song>_e.bin`.

use crate::tja::Difficulty;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Difficulty suffixes in output order
const SUFFIXES: [(&str, Difficulty); 3] = [
    ("_h", Difficulty::Hard),
    ("_n", Difficulty::Normal),
    ("_e", Difficulty::Easy),
];

/// Split a file stem into the song part and its difficulty suffix
fn split_stem(stem: &str) -> (&str, Option<(usize, Difficulty)>) {
    for (rank, (suffix, difficulty)) in SUFFIXES.iter().enumerate() {
        if let Some(song) = stem.strip_suffix(suffix) {
            return (song, Some((rank, *difficulty)));
        }
    }
    (stem, None)
}

fn stem_and_extension(path: &Path) -> (String, Option<String>) {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = path.extension().map(|e| e.to_string_lossy().into_owned());
    (stem, ext)
}

fn with_file_name(path: &Path, name: OsString) -> PathBuf {
    let mut out = path.to_path_buf();
    out.set_file_name(name);
    out
}

/// Difficulty named by the file's suffix
pub fn difficulty(path: &Path) -> Difficulty {
    let (stem, _) = stem_and_extension(path);
    split_stem(&stem)
        .1
        .map(|(_, difficulty)| difficulty)
        .unwrap_or(Difficulty::Unspecified)
}

/// Sort key that keeps a song's files together, hardest first
///
/// The suffix is swapped for its rank (`_h` → `_0`, `_n` → `_1`,
/// `_e` → `_2`) before comparing paths as text.
pub fn sort_key(path: &Path) -> String {
    let (stem, ext) = stem_and_extension(path);
    match split_stem(&stem) {
        (song, Some((rank, _))) => {
            let mut name = format!("{}_{}", song, rank);
            if let Some(ext) = ext {
                name.push('.');
                name.push_str(&ext);
            }
            with_file_name(path, name.into()).to_string_lossy().into_owned()
        }
        _ => path.to_string_lossy().into_owned(),
    }
}

/// Path of the TJA document a file's course goes into
///
/// The difficulty suffix is dropped, a `.bin` extension is replaced and any
/// other extension is kept in front of `.tja`.
pub fn output_path(path: &Path) -> PathBuf {
    let (stem, ext) = stem_and_extension(path);
    let (song, _) = split_stem(&stem);
    let mut name = song.to_string();
    if let Some(ext) = ext.filter(|e| e != "bin") {
        name.push('.');
        name.push_str(&ext);
    }
    name.push_str(".tja");
    with_file_name(path, name.into())
}

/// Song title written into the document
pub fn title(output: &Path) -> String {
    output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Sort input files so each song's courses are consecutive
pub fn sort_files(files: &mut [PathBuf]) {
    files.sort_by_key(|path| sort_key(path));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty() {
        assert_eq!(difficulty(Path::new("dir/song_h.bin")), Difficulty::Hard);
        assert_eq!(difficulty(Path::new("song_n.bin")), Difficulty::Normal);
        assert_eq!(difficulty(Path::new("song_e")), Difficulty::Easy);
        assert_eq!(difficulty(Path::new("song_x.bin")), Difficulty::Unspecified);
        assert_eq!(difficulty(Path::new("song.bin")), Difficulty::Unspecified);
    }

    #[test]
    fn test_sort_key() {
        assert_eq!(sort_key(Path::new("dir/song_h.bin")), "dir/song_0.bin");
        assert_eq!(sort_key(Path::new("song_e.bin")), "song_2.bin");
        assert_eq!(sort_key(Path::new("song.bin")), "song.bin");
    }

    #[test]
    fn test_sort_files() {
        let mut files: Vec<PathBuf> = ["b_e.bin", "a_n.bin", "b_h.bin", "a_e.bin", "a_h.bin"]
            .iter()
            .map(|name| PathBuf::from(*name))
            .collect();
        sort_files(&mut files);
        let names: Vec<&str> = files.iter().map(|p| p.to_str().unwrap()).collect();
        assert_eq!(names, ["a_h.bin", "a_n.bin", "a_e.bin", "b_h.bin", "b_e.bin"]);
    }

    #[test]
    fn test_output_path() {
        assert_eq!(output_path(Path::new("dir/song_h.bin")), PathBuf::from("dir/song.tja"));
        assert_eq!(output_path(Path::new("song_n.dat")), PathBuf::from("song.dat.tja"));
        assert_eq!(output_path(Path::new("song")), PathBuf::from("song.tja"));
        assert_eq!(output_path(Path::new("other.bin")), PathBuf::from("other.tja"));
    }

    #[test]
    fn test_title() {
        assert_eq!(title(Path::new("dir/song.tja")), "song");
        assert_eq!(title(Path::new("song.dat.tja")), "song.dat");
    }
}
