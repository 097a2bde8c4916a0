//! Measure density compression
//!
//! A measure always has 48 slots in the binary format. TJA divides a measure
//! evenly between however many characters its line has, so slots can be
//! dropped as long as every dropped slot is empty.

use crate::konga::notes::marker;

/// Drop the trailing slots of every `factor`-sized group while they are all
/// empty
pub fn reduce(notes: &[u8], factor: usize) -> Vec<u8> {
    let mut notes = notes.to_vec();
    if factor < 2 {
        return notes;
    }
    while notes.len() >= factor && notes.len() % factor == 0 {
        let reducible = notes
            .chunks_exact(factor)
            .all(|group| group[1..].iter().all(|&c| c == marker::EMPTY));
        if !reducible {
            break;
        }
        notes = notes.iter().copied().step_by(factor).collect();
    }
    notes
}

/// Shortest TJA line equivalent to a measure's notes
///
/// An empty measure compresses to an empty line.
pub fn compress(notes: &[u8]) -> String {
    let notes = reduce(&reduce(notes, 2), 3);
    if notes == [marker::EMPTY] {
        return String::new();
    }
    String::from_utf8_lossy(&notes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(pairs: &[(usize, u8)]) -> Vec<u8> {
        let mut notes = vec![b'0'; 48];
        for &(slot, c) in pairs {
            notes[slot] = c;
        }
        notes
    }

    #[test]
    fn test_empty_measure() {
        assert_eq!(compress(&[b'0'; 48]), "");
    }

    #[test]
    fn test_single_downbeat() {
        assert_eq!(compress(&slots(&[(0, b'1')])), "1");
    }

    #[test]
    fn test_quarter_notes() {
        let notes = slots(&[(0, b'1'), (12, b'2'), (24, b'1'), (36, b'2')]);
        assert_eq!(compress(&notes), "1212");
    }

    #[test]
    fn test_triplets() {
        let notes = slots(&[(0, b'1'), (16, b'1'), (32, b'1')]);
        assert_eq!(compress(&notes), "111");
    }

    #[test]
    fn test_mixed_subdivision() {
        // Slots 0 and 8 only fit a grid of 6
        let notes = slots(&[(0, b'1'), (8, b'2')]);
        assert_eq!(compress(&notes), "120000");
    }

    #[test]
    fn test_full_measure_unchanged() {
        let notes: Vec<u8> = (0..48).map(|i| if i % 2 == 0 { b'1' } else { b'2' }).collect();
        assert_eq!(compress(&notes).as_bytes(), &notes[..]);
    }

    #[test]
    fn test_last_slot_blocks_reduction() {
        let notes = slots(&[(47, b'8')]);
        assert_eq!(compress(&notes).len(), 48);
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            slots(&[(0, b'1'), (12, b'2')]),
            slots(&[(0, b'5'), (6, b'0'), (18, b'8')]),
            slots(&[(0, b'1'), (8, b'2'), (30, b'4')]),
            slots(&[(47, b'1')]),
        ];
        for notes in inputs {
            let once = compress(&notes);
            assert_eq!(compress(once.as_bytes()), once);
        }
    }

    #[test]
    fn test_no_note_is_lost() {
        let inputs = [
            slots(&[(0, b'1'), (3, b'2'), (17, b'4')]),
            slots(&[(6, b'5'), (42, b'8')]),
            slots(&[(24, b'3')]),
        ];
        for notes in inputs {
            let compressed = compress(&notes);
            let step = 48 / compressed.len();
            for (slot, &c) in notes.iter().enumerate() {
                if c != b'0' {
                    assert_eq!(slot % step, 0);
                    assert_eq!(compressed.as_bytes()[slot / step], c);
                }
            }
        }
    }

    #[test]
    fn test_reduce_boundaries() {
        assert_eq!(reduce(b"", 2), b"");
        assert_eq!(reduce(b"0", 2), b"0");
        assert_eq!(reduce(b"10", 2), b"1");
        assert_eq!(reduce(b"100", 2), b"100");
        assert_eq!(reduce(b"100100", 3), b"11");
        assert_eq!(reduce(b"100110", 3), b"100110");
    }
}
