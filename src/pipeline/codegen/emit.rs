/// A sink for the two line streams produced during code generation.
///
/// The generator evaluates and emits in one pass; every emitted line goes
/// through this trait, so an implementation may record, inspect or drop
/// them.
pub trait Emitter {
    /// Receives one line of three-address code.
    fn emit_tac(&mut self, line: String);
    /// Receives one line of pseudo-assembly.
    fn emit_asm(&mut self, line: String);
}

impl<E: Emitter + ?Sized> Emitter for &mut E {
    fn emit_tac(&mut self, line: String) {
        (**self).emit_tac(line);
    }

    fn emit_asm(&mut self, line: String) {
        (**self).emit_asm(line);
    }
}

/// Buffers both line streams in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    tac:      Vec<String>,
    assembly: Vec<String>,
}

impl Listing {
    /// The three-address code lines emitted so far.
    #[must_use]
    pub fn tac(&self) -> &[String] {
        &self.tac
    }

    /// The assembly lines emitted so far.
    #[must_use]
    pub fn assembly(&self) -> &[String] {
        &self.assembly
    }
}

impl Emitter for Listing {
    fn emit_tac(&mut self, line: String) {
        log::trace!("tac: {line}");
        self.tac.push(line);
    }

    fn emit_asm(&mut self, line: String) {
        log::trace!("asm: {line}");
        self.assembly.push(line);
    }
}
