//! Terminal rendering of a [`TxBreakdown`].

use std::fmt::Write;

use crate::breakdown::TxBreakdown;

/// ANSI escape sequences used by the renderer.
pub struct Palette;

#[allow(missing_docs)]
impl Palette {
    pub const RESET: &'static str = "\x1b[0m";
    pub const RED: &'static str = "\x1b[31m";
    pub const GREEN: &'static str = "\x1b[32m";
    pub const YELLOW: &'static str = "\x1b[33m";
    pub const BLUE: &'static str = "\x1b[34m";
    pub const MAGENTA: &'static str = "\x1b[35m";
    pub const CYAN: &'static str = "\x1b[36m";
    pub const WHITE: &'static str = "\x1b[37m";
    pub const BOLD: &'static str = "\x1b[1m";
    pub const DIM: &'static str = "\x1b[2m";
}

const RULE: &str = "================================================================================";
const THIN_RULE: &str = "--------------------------------------------------------------------------------";

/// Renders a breakdown as text, optionally with ANSI colors.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// A renderer that emits ANSI colors when `color` is set.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Wrap `text` in `style` and a reset, or return it as is without color.
    pub fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", style, text, Palette::RESET)
        } else {
            text.to_string()
        }
    }

    fn field(&self, out: &mut String, indent: &str, label: &str, style: &str, value: &str) {
        let label = self.paint(Palette::YELLOW, label);
        let _ = writeln!(out, "{}{} {}", indent, label, self.paint(style, value));
    }

    fn script(&self, out: &mut String, len: usize, hex: &str) {
        self.field(out, "  ", "Script Length:", Palette::WHITE, &format!("{} bytes", len));
        if hex.is_empty() {
            self.field(out, "  ", "Script (hex):", Palette::DIM, "(empty)");
        } else {
            self.field(out, "  ", "Script (hex):", Palette::MAGENTA, hex);
        }
    }

    /// The full breakdown, ending with the txid banner.
    pub fn render(&self, b: &TxBreakdown) -> String {
        let heading = format!("{}{}", Palette::BOLD, Palette::CYAN);
        let mut out = String::new();

        let _ = writeln!(out, "{}", self.paint(&heading, RULE));
        let _ = writeln!(out, "{}", self.paint(&heading, "TRANSACTION BREAKDOWN"));
        let _ = writeln!(out, "{}\n", self.paint(&heading, RULE));

        let _ = writeln!(
            out,
            "{} {} {}\n",
            self.paint(Palette::YELLOW, "Version:"),
            self.paint(Palette::WHITE, &b.version.to_string()),
            self.paint(Palette::DIM, &format!("(0x{:08x})", b.version))
        );

        self.field(&mut out, "", "In-counter:", Palette::WHITE, &b.inputs.len().to_string());
        out.push('\n');
        if !b.inputs.is_empty() {
            let title = format!("{}{}", Palette::BOLD, Palette::GREEN);
            let _ = writeln!(out, "{}", self.paint(&title, "INPUTS:"));
            let _ = writeln!(out, "{}", self.paint(Palette::GREEN, THIN_RULE));
            for (i, input) in b.inputs.iter().enumerate() {
                let _ = writeln!(out, "\n{}\n", self.paint(&title, &format!("Input #{}:", i)));
                self.field(&mut out, "  ", "Prev TX ID:", Palette::CYAN, &input.prev_txid);
                let vout = input.prev_vout.to_string();
                self.field(&mut out, "  ", "Prev Vout:", Palette::WHITE, &vout);
                self.script(&mut out, input.script_len, &input.script_hex);
                if let Some(addr) = &input.address {
                    self.field(&mut out, "  ", "Address:", Palette::CYAN, addr);
                }
                let _ = writeln!(
                    out,
                    "  {} {} {}",
                    self.paint(Palette::YELLOW, "Sequence:"),
                    self.paint(Palette::WHITE, &input.sequence.to_string()),
                    self.paint(Palette::DIM, &format!("(0x{:08x})", input.sequence))
                );
            }
            out.push('\n');
        }

        self.field(&mut out, "", "Out-counter:", Palette::WHITE, &b.outputs.len().to_string());
        out.push('\n');
        if !b.outputs.is_empty() {
            let title = format!("{}{}", Palette::BOLD, Palette::BLUE);
            let _ = writeln!(out, "{}", self.paint(&title, "OUTPUTS:"));
            let _ = writeln!(out, "{}", self.paint(Palette::BLUE, THIN_RULE));
            for (i, output) in b.outputs.iter().enumerate() {
                let _ = writeln!(out, "\n{}\n", self.paint(&title, &format!("Output #{}:", i)));
                let _ = writeln!(
                    out,
                    "  {} {} {}",
                    self.paint(Palette::YELLOW, "Value:"),
                    self.paint(Palette::GREEN, &format!("{} satoshis", output.satoshis)),
                    self.paint(Palette::DIM, &format!("({} BSV)", output.bsv()))
                );
                self.script(&mut out, output.script_len, &output.script_hex);
                if let Some(addr) = &output.address {
                    self.field(&mut out, "  ", "Address:", Palette::CYAN, addr);
                }
            }
            out.push('\n');
        }

        let lock = b.lock_time.raw();
        let _ = writeln!(
            out,
            "{} {} {}",
            self.paint(Palette::YELLOW, "nLockTime:"),
            self.paint(Palette::WHITE, &lock.to_string()),
            self.paint(Palette::DIM, &format!("(0x{:08x})", lock))
        );
        let _ = writeln!(
            out,
            "           {}\n",
            self.paint(Palette::DIM, &format!("({})", b.lock_time.describe()))
        );

        let _ = writeln!(out, "{}", self.paint(&heading, RULE));
        let _ = writeln!(
            out,
            "{} {}",
            self.paint(&format!("{}{}", Palette::BOLD, Palette::YELLOW), "Transaction ID:"),
            self.paint(&format!("{}{}", Palette::BOLD, Palette::GREEN), &b.txid)
        );
        let _ = writeln!(out, "{}", self.paint(&heading, RULE));
        out
    }
}
