//! Field selectors and their canonical emission order.

use std::fmt;
use std::str::FromStr;

use crate::error::PickError;

/// One field to pull out of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSelector {
    /// Version, 4 bytes little-endian.
    Version,
    /// Transaction id in display (byte-reversed) order.
    TxId,
    /// A whole serialized output.
    Output(usize),
    /// An output's locking script.
    OutputScript(usize),
    /// An output's value, 8 bytes little-endian.
    OutputValue(usize),
    /// A whole serialized input.
    Input(usize),
    /// An input's unlocking script.
    InputScript(usize),
    /// The txid an input spends from, in display order.
    InputPrevTxid(usize),
    /// The output index an input spends, 4 bytes little-endian.
    InputPrevOut(usize),
    /// An input's sequence number, 4 bytes little-endian.
    InputSequence(usize),
    /// Locktime, 4 bytes little-endian.
    Locktime,
}

impl FieldSelector {
    /// Position of this selector's group in the output.
    ///
    /// Transaction-level fields come first, then output groups, then input
    /// groups, with the locktime last as it is on the wire.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Version => 0,
            Self::TxId => 1,
            Self::Output(_) => 2,
            Self::OutputScript(_) => 3,
            Self::OutputValue(_) => 4,
            Self::Input(_) => 5,
            Self::InputScript(_) => 6,
            Self::InputPrevTxid(_) => 7,
            Self::InputPrevOut(_) => 8,
            Self::InputSequence(_) => 9,
            Self::Locktime => 10,
        }
    }

    /// The CLI name of the selector, without the index.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Version => "version",
            Self::TxId => "txid",
            Self::Output(_) => "output",
            Self::OutputScript(_) => "output-script",
            Self::OutputValue(_) => "output-value",
            Self::Input(_) => "input",
            Self::InputScript(_) => "input-script",
            Self::InputPrevTxid(_) => "input-prevtxid",
            Self::InputPrevOut(_) => "input-prevout",
            Self::InputSequence(_) => "input-sequence",
            Self::Locktime => "locktime",
        }
    }

    /// The element index for indexed selectors.
    pub fn index(&self) -> Option<usize> {
        match *self {
            Self::Output(i)
            | Self::OutputScript(i)
            | Self::OutputValue(i)
            | Self::Input(i)
            | Self::InputScript(i)
            | Self::InputPrevTxid(i)
            | Self::InputPrevOut(i)
            | Self::InputSequence(i) => Some(i),
            Self::Version | Self::TxId | Self::Locktime => None,
        }
    }

    /// Sort `selectors` into emission order, keeping the requested order
    /// within each group.
    pub fn canonical_order(selectors: &[FieldSelector]) -> Vec<FieldSelector> {
        let mut ordered = selectors.to_vec();
        ordered.sort_by_key(FieldSelector::rank);
        ordered
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index() {
            Some(i) => write!(f, "{} {}", self.name(), i),
            None => f.write_str(self.name()),
        }
    }
}

/// Parses `"version"`, `"txid"`, `"locktime"`, or `"<name> <index>"`
/// where the separator may also be `=` or `:`.
impl FromStr for FieldSelector {
    type Err = PickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches("--");
        let (name, index) = match s.find(|c: char| c.is_whitespace() || c == '=' || c == ':') {
            Some(pos) => (&s[..pos], Some(s[pos + 1..].trim())),
            None => (s, None),
        };

        let index = index
            .map(|i| {
                i.parse::<usize>()
                    .map_err(|_| PickError::InvalidSelector(format!("bad index in '{}'", s)))
            })
            .transpose()?;

        let indexed = |ctor: fn(usize) -> FieldSelector| {
            index
                .map(ctor)
                .ok_or_else(|| PickError::InvalidSelector(format!("'{}' needs an index", name)))
        };
        let bare = |sel: FieldSelector| match index {
            None => Ok(sel),
            Some(_) => Err(PickError::InvalidSelector(format!("'{}' takes no index", name))),
        };

        match name {
            "version" | "v" => bare(Self::Version),
            "txid" => bare(Self::TxId),
            "locktime" | "l" => bare(Self::Locktime),
            "output" | "o" => indexed(Self::Output),
            "output-script" => indexed(Self::OutputScript),
            "output-value" => indexed(Self::OutputValue),
            "input" | "i" => indexed(Self::Input),
            "input-script" => indexed(Self::InputScript),
            "input-prevtxid" => indexed(Self::InputPrevTxid),
            "input-prevout" => indexed(Self::InputPrevOut),
            "input-sequence" => indexed(Self::InputSequence),
            other => Err(PickError::InvalidSelector(format!("unknown selector '{}'", other))),
        }
    }
}
