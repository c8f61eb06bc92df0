use std::collections::BTreeSet;

use super::ty::TypeVar;

/// Spreadsheet-style letter name for a counter value, with `a` as the zero
/// digit: 0 -> "a", 25 -> "z", 26 -> "ba", 27 -> "bb", 676 -> "baa".
pub fn encode_name(n: usize) -> String {
    let mut digits = Vec::new();
    let mut rest = n;
    loop {
        digits.push((b'a' + (rest % 26) as u8) as char);
        rest /= 26;
        if rest == 0 {
            break;
        }
    }
    digits.iter().rev().collect()
}

/// Sequential source of fresh type variable names.
///
/// Names in the reserved set are never handed out, so variables already
/// free in a caller's environment cannot be captured by fresh ones.
#[derive(Debug, Default)]
pub struct NameSupply {
    next: usize,
    reserved: BTreeSet<TypeVar>,
}

impl NameSupply {
    pub fn new() -> Self {
        Self {
            next: 0,
            reserved: BTreeSet::new(),
        }
    }

    /// Restart at `a`, skipping every name in `reserved`.
    pub fn reset(&mut self, reserved: BTreeSet<TypeVar>) {
        self.next = 0;
        self.reserved = reserved;
    }

    pub fn fresh(&mut self) -> TypeVar {
        loop {
            let var = TypeVar(encode_name(self.next));
            self.next += 1;
            if !self.reserved.contains(&var) {
                return var;
            }
        }
    }
}
