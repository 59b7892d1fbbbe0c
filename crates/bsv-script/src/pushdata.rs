//! Truncation-tolerant walk over the push-data opcodes of a script.
//!
//! Only direct pushes (`0x01..=0x4b`) and `OP_PUSHDATA1` are decoded; every
//! other byte is stepped over as a bare opcode. A push that claims more
//! bytes than the script has left ends the walk: the pushes seen so far are
//! returned and `truncated` is set. Unlocking scripts in the wild carry
//! non-standard data, so truncation is reported rather than treated as an
//! error.

use tracing::debug;

use crate::opcodes::{OP_DATA_1, OP_DATA_75, OP_PUSHDATA1};

/// Pushes found in a script, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushWalk<'a> {
    /// Data of each complete push.
    pub pushes: Vec<&'a [u8]>,
    /// Set when a push ran past the end of the script.
    pub truncated: bool,
}

/// Collect the data pushes of `script`.
pub fn walk_pushes(script: &[u8]) -> PushWalk<'_> {
    let mut walk = PushWalk::default();
    let mut pos = 0;

    while pos < script.len() {
        let opcode = script[pos];
        pos += 1;

        let len = match opcode {
            OP_DATA_1..=OP_DATA_75 => opcode as usize,
            OP_PUSHDATA1 => match script.get(pos) {
                Some(&n) => {
                    pos += 1;
                    n as usize
                }
                None => {
                    walk.truncated = true;
                    break;
                }
            },
            _ => continue,
        };

        match script.get(pos..pos + len) {
            Some(data) => {
                walk.pushes.push(data);
                pos += len;
            }
            None => {
                walk.truncated = true;
                break;
            }
        }
    }

    if walk.truncated {
        debug!(
            script_len = script.len(),
            offset = pos,
            pushes = walk.pushes.len(),
            "push data truncated, stopping script walk"
        );
    }
    walk
}

/// The last push that is sized like a SEC1 public key (33 or 65 bytes).
///
/// In a P2PKH unlocking script this is the key after the signature. No
/// check is made that the bytes are a valid curve point.
pub fn last_public_key_push(script: &[u8]) -> Option<&[u8]> {
    walk_pushes(script)
        .pushes
        .into_iter()
        .rev()
        .find(|push| push.len() == 33 || push.len() == 65)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(len: u8, fill: u8) -> Vec<u8> {
        let mut out = vec![len];
        out.extend(std::iter::repeat(fill).take(len as usize));
        out
    }

    #[test]
    fn test_signature_then_compressed_key() {
        let mut script = push(72, 0x30);
        script.extend(push(33, 0x02));
        let walk = walk_pushes(&script);
        assert_eq!(walk.pushes.len(), 2);
        assert!(!walk.truncated);
        assert_eq!(last_public_key_push(&script).map(<[u8]>::len), Some(33));
    }

    #[test]
    fn test_uncompressed_key() {
        let mut script = push(71, 0x30);
        script.extend(push(65, 0x04));
        assert_eq!(last_public_key_push(&script).map(<[u8]>::len), Some(65));
    }

    #[test]
    fn test_pushdata1_key() {
        let mut script = vec![OP_PUSHDATA1, 33];
        script.extend([0x03u8; 33]);
        assert_eq!(last_public_key_push(&script), Some(&[0x03u8; 33][..]));
    }

    #[test]
    fn test_last_candidate_wins() {
        let mut script = push(20, 0xaa);
        script.extend(push(33, 0x02));
        script.extend(push(33, 0x03));
        assert_eq!(last_public_key_push(&script).map(|p| p[0]), Some(0x03));
    }

    #[test]
    fn test_no_key_sized_push() {
        let script = push(20, 0xaa);
        assert!(last_public_key_push(&script).is_none());
        assert!(last_public_key_push(&[]).is_none());
    }

    #[test]
    fn test_non_push_opcodes_are_skipped() {
        // OP_DUP OP_HASH160 <20> OP_EQUALVERIFY OP_CHECKSIG
        let script = hex::decode("76a914eb0bd5edba389198e73f8efabddfc61666969ff788ac").unwrap();
        let walk = walk_pushes(&script);
        assert_eq!(walk.pushes.len(), 1);
        assert_eq!(walk.pushes[0].len(), 20);
    }

    // ---- truncation ----

    #[test]
    fn test_pushdata1_without_length_byte() {
        let walk = walk_pushes(&[OP_PUSHDATA1]);
        assert!(walk.pushes.is_empty());
        assert!(walk.truncated);
    }

    #[test]
    fn test_push_longer_than_script() {
        let mut script = push(10, 0x01);
        script.extend([OP_PUSHDATA1, 33]);
        script.extend([0u8; 10]);
        let walk = walk_pushes(&script);
        assert_eq!(walk.pushes.len(), 1, "pushes before the truncation are kept");
        assert!(walk.truncated);
        assert!(last_public_key_push(&script).is_none());
    }

    #[test]
    fn test_direct_push_truncated() {
        let walk = walk_pushes(&[33, 0x02, 0x02]);
        assert!(walk.pushes.is_empty());
        assert!(walk.truncated);
    }
}
