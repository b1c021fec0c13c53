//! Final merge of structural and inline instructions.

use std::fmt;

use crate::instruction::RenderingInstruction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    /// Instruction starts or ends before the previous one
    OutOfOrder {
        previous: (usize, usize),
        next: (usize, usize),
    },
    /// Instruction lies outside the document or is reversed
    OutOfBounds {
        from: usize,
        to: usize,
        len: usize,
    },
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssemblyError::OutOfOrder { previous, next } => write!(
                f,
                "instruction {}..{} inserted after {}..{}",
                next.0, next.1, previous.0, previous.1
            ),
            AssemblyError::OutOfBounds { from, to, len } => write!(
                f,
                "instruction {}..{} is outside document of {} byte(s)",
                from, to, len
            ),
        }
    }
}

impl std::error::Error for AssemblyError {}

/// Instructions ordered by `(from, to)`; inserts must not go backwards.
#[derive(Debug, Default)]
pub struct InstructionSet {
    instructions: Vec<RenderingInstruction>,
}

impl InstructionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, instruction: RenderingInstruction) -> Result<(), AssemblyError> {
        if let Some(last) = self.instructions.last()
            && (instruction.from, instruction.to) < (last.from, last.to)
        {
            return Err(AssemblyError::OutOfOrder {
                previous: (last.from, last.to),
                next: (instruction.from, instruction.to),
            });
        }
        self.instructions.push(instruction);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn into_vec(self) -> Vec<RenderingInstruction> {
        self.instructions
    }
}

/// Merges both phases into one ordered list, dropping anything invalid.
pub fn assemble(
    structural: Vec<RenderingInstruction>,
    inline: Vec<RenderingInstruction>,
    doc_len: usize,
) -> Vec<RenderingInstruction> {
    let mut all = structural;
    all.extend(inline);
    all.sort_by_key(|i| (i.from, i.to));

    let mut set = InstructionSet::new();
    for instruction in all {
        if !instruction.in_bounds(doc_len) {
            let err = AssemblyError::OutOfBounds {
                from: instruction.from,
                to: instruction.to,
                len: doc_len,
            };
            log::warn!("Dropping instruction: {}", err);
            continue;
        }
        if let Err(err) = set.insert(instruction) {
            log::warn!("Dropping instruction: {}", err);
        }
    }

    set.into_vec()
}
