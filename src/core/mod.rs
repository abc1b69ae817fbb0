//! Core data types for sequence search.
//!
//! - [`TargetSequence`]: The validated sequence being searched for, with its reverse complement
//! - [`Strand`]: Which strand of a contig the target was found on
//! - [`Contig`]: A single record read from an assembly file
//!
//! ## Reverse complement
//!
//! Complements follow the IUPAC convention:
//!
//! | Base | Complement | Base | Complement |
//! |------|------------|------|------------|
//! | A    | T          | R    | Y          |
//! | C    | G          | K    | M          |
//! | S    | S          | B    | V          |
//! | W    | W          | D    | H          |
//! | N    | N          | -    | -          |

pub mod contig;
pub mod sequence;

pub use contig::Contig;
pub use sequence::{Strand, TargetSequence};
