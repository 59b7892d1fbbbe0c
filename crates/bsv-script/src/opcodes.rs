//! Opcode values used when building and recognising P2PKH scripts.

pub const OP_0: u8 = 0x00;
pub const OP_FALSE: u8 = OP_0;

/// Direct pushes: the opcode value is the byte count.
pub const OP_DATA_1: u8 = 0x01;
pub const OP_DATA_20: u8 = 0x14;
pub const OP_DATA_33: u8 = 0x21;
pub const OP_DATA_65: u8 = 0x41;
pub const OP_DATA_75: u8 = 0x4b;

pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;

pub const OP_RETURN: u8 = 0x6a;
pub const OP_DUP: u8 = 0x76;
pub const OP_EQUALVERIFY: u8 = 0x88;
pub const OP_HASH160: u8 = 0xa9;
pub const OP_CHECKSIG: u8 = 0xac;

/// True for opcodes that carry push data after them.
pub fn is_push_opcode(op: u8) -> bool {
    (OP_DATA_1..=OP_PUSHDATA4).contains(&op)
}
